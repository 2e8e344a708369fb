//! HTTP driver for the REST endpoints.
//!
//! A thin reqwest wrapper speaking the five-endpoint wire contract. Error
//! payloads (`{"error"}` or `{"message","error"}`) are surfaced as
//! [`ApiError::Api`] with the server's message.

use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::domain::{Question, User};

/// Failures while talking to the backend.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a usable response.
    #[error("request to {endpoint} failed: {source}")]
    Transport {
        /// Endpoint path the request targeted.
        endpoint: &'static str,
        /// Underlying client failure.
        #[source]
        source: reqwest::Error,
    },
    /// The server answered with a failure status.
    #[error("{endpoint} returned {status}: {message}")]
    Api {
        /// Endpoint path the request targeted.
        endpoint: &'static str,
        /// HTTP status code.
        status: u16,
        /// Server-supplied failure description.
        message: String,
    },
}

/// Reply to `POST /register`.
#[derive(Debug, Deserialize)]
pub struct RegisterReply {
    /// Outcome notice.
    pub message: String,
    /// Created record; absent when the username was already registered.
    #[serde(default)]
    pub user: Option<User>,
}

/// Reply to `POST /submit-answer`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitReply {
    /// Whether the submitted answer matched.
    pub is_correct: bool,
    /// Outcome message for display.
    pub message: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RegisterBody<'a> {
    username: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    referral_code: Option<&'a str>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SubmitBody<'a> {
    username: &'a str,
    answer: &'a str,
    correct_answer: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ReferralLookupBody<'a> {
    referral_code: &'a str,
}

#[derive(Deserialize)]
struct ErrorReply {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Client for the quiz REST API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    /// `POST /register`.
    pub async fn register(
        &self,
        username: &str,
        referral_code: Option<&str>,
    ) -> Result<RegisterReply, ApiError> {
        const ENDPOINT: &str = "/register";
        let response = self
            .http
            .post(format!("{}{ENDPOINT}", self.base_url))
            .json(&RegisterBody {
                username,
                referral_code,
            })
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                endpoint: ENDPOINT,
                source,
            })?;
        read_reply(ENDPOINT, response).await
    }

    /// `GET /questions`.
    pub async fn questions(&self) -> Result<Vec<Question>, ApiError> {
        const ENDPOINT: &str = "/questions";
        let response = self
            .http
            .get(format!("{}{ENDPOINT}", self.base_url))
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                endpoint: ENDPOINT,
                source,
            })?;
        read_reply(ENDPOINT, response).await
    }

    /// `POST /submit-answer`.
    pub async fn submit_answer(
        &self,
        username: &str,
        answer: &str,
        correct_answer: &str,
    ) -> Result<SubmitReply, ApiError> {
        const ENDPOINT: &str = "/submit-answer";
        let response = self
            .http
            .post(format!("{}{ENDPOINT}", self.base_url))
            .json(&SubmitBody {
                username,
                answer,
                correct_answer,
            })
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                endpoint: ENDPOINT,
                source,
            })?;
        read_reply(ENDPOINT, response).await
    }

    /// `GET /score?username=`.
    pub async fn score(&self, username: &str) -> Result<User, ApiError> {
        const ENDPOINT: &str = "/score";
        let response = self
            .http
            .get(format!("{}{ENDPOINT}", self.base_url))
            .query(&[("username", username)])
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                endpoint: ENDPOINT,
                source,
            })?;
        read_reply(ENDPOINT, response).await
    }

    /// `POST /getUserById`.
    pub async fn user_by_referral_code(&self, code: &str) -> Result<User, ApiError> {
        const ENDPOINT: &str = "/getUserById";
        let response = self
            .http
            .post(format!("{}{ENDPOINT}", self.base_url))
            .json(&ReferralLookupBody {
                referral_code: code,
            })
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                endpoint: ENDPOINT,
                source,
            })?;
        read_reply(ENDPOINT, response).await
    }
}

async fn read_reply<T: DeserializeOwned>(
    endpoint: &'static str,
    response: reqwest::Response,
) -> Result<T, ApiError> {
    let status = response.status();
    if status.is_success() {
        return response
            .json()
            .await
            .map_err(|source| ApiError::Transport { endpoint, source });
    }

    let message = response
        .json::<ErrorReply>()
        .await
        .ok()
        .and_then(|reply| reply.error.or(reply.message))
        .unwrap_or_else(|| "no failure detail provided".to_owned());
    Err(ApiError::Api {
        endpoint,
        status: status.as_u16(),
        message,
    })
}
