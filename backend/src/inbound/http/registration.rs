//! Registration API handlers.
//!
//! ```text
//! POST /register {"username":"alice","referralCode":"f47a"}
//! POST /getUserById {"referralCode":"f47a"}
//! ```

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};

use crate::domain::{ErrorCode, RegistrationOutcome, User, Username};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Request body for `POST /register`.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// Desired unique username.
    #[schema(example = "alice")]
    pub username: String,
    /// Referral code of the user who shared the challenge link, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "f47a")]
    pub referral_code: Option<String>,
}

/// Success body for `POST /register`.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RegisterResponse {
    /// Outcome notice.
    #[schema(example = "User registered successfully!")]
    pub message: String,
    /// The created record; absent when the username was already registered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

/// Failure body for `POST /register`: `{"message": ..., "error": ...}`.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RegisterFailure {
    /// Fixed registration failure notice.
    #[schema(example = "Error registering user")]
    pub message: String,
    /// Underlying failure description.
    pub error: String,
}

/// Register a username, optionally recording who referred it.
///
/// Re-registering an existing username responds `200` with an informational
/// notice and no user payload; a fresh registration responds `201` with the
/// created record.
#[utoipa::path(
    post,
    path = "/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User created", body = RegisterResponse),
        (status = 200, description = "Username already registered", body = RegisterResponse),
        (status = 400, description = "Invalid request", body = crate::inbound::http::error::ErrorBody),
        (status = 500, description = "Registration failed", body = RegisterFailure)
    ),
    tags = ["registration"],
    operation_id = "register"
)]
#[post("/register")]
pub async fn register(
    state: web::Data<HttpState>,
    payload: web::Json<RegisterRequest>,
) -> ApiResult<HttpResponse> {
    let RegisterRequest {
        username,
        referral_code,
    } = payload.into_inner();
    let username =
        Username::new(username).map_err(|err| crate::domain::Error::invalid_request(err.to_string()))?;

    match state.registration.register(username, referral_code).await {
        Ok(RegistrationOutcome::Created(user)) => {
            Ok(HttpResponse::Created().json(RegisterResponse {
                message: "User registered successfully!".to_owned(),
                user: Some(user),
            }))
        }
        Ok(RegistrationOutcome::AlreadyRegistered) => {
            Ok(HttpResponse::Ok().json(RegisterResponse {
                message: "Username already registered.".to_owned(),
                user: None,
            }))
        }
        // Storage faults use the endpoint's own envelope instead of the
        // shared `{"error"}` shape.
        Err(err) if err.code() == ErrorCode::StorageFault => {
            Ok(HttpResponse::InternalServerError().json(RegisterFailure {
                message: "Error registering user".to_owned(),
                error: err.message().to_owned(),
            }))
        }
        Err(err) => Err(err),
    }
}

/// Request body for `POST /getUserById`.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReferralLookupRequest {
    /// Referral code extracted from a challenge link.
    #[schema(example = "f47a")]
    pub referral_code: String,
}

/// Resolve a referral code to the referring user's record.
#[utoipa::path(
    post,
    path = "/getUserById",
    request_body = ReferralLookupRequest,
    responses(
        (status = 200, description = "Referring user", body = User),
        (status = 400, description = "Unknown referral code", body = crate::inbound::http::error::ErrorBody)
    ),
    tags = ["registration"],
    operation_id = "getUserByReferralCode"
)]
#[post("/getUserById")]
pub async fn get_user_by_referral_code(
    state: web::Data<HttpState>,
    payload: web::Json<ReferralLookupRequest>,
) -> ApiResult<web::Json<User>> {
    let user = state
        .registration
        .resolve_by_referral_code(&payload.referral_code)
        .await?;
    Ok(web::Json(user))
}
