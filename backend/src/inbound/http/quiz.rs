//! Answer submission and score handlers.
//!
//! ```text
//! POST /submit-answer {"username":"alice","answer":"Paris","correctAnswer":"Paris"}
//! GET /score?username=alice
//! ```

use actix_web::{get, post, web};
use serde::{Deserialize, Serialize};

use crate::domain::{Error, User, Username};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Request body for `POST /submit-answer`.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAnswerRequest {
    /// Registered username submitting the answer.
    #[schema(example = "alice")]
    pub username: String,
    /// The option the player selected.
    #[schema(example = "Paris")]
    pub answer: String,
    /// The round's correct answer value.
    #[schema(example = "Paris")]
    pub correct_answer: String,
}

/// Success body for `POST /submit-answer`.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAnswerResponse {
    /// Whether the submitted answer matched exactly.
    pub is_correct: bool,
    /// Human-readable outcome message.
    #[schema(example = "🎉 Correct!")]
    pub message: String,
}

/// Check an answer and update the submitting user's counters.
#[utoipa::path(
    post,
    path = "/submit-answer",
    request_body = SubmitAnswerRequest,
    responses(
        (status = 200, description = "Answer evaluated", body = SubmitAnswerResponse),
        (status = 400, description = "User not registered", body = crate::inbound::http::error::ErrorBody)
    ),
    tags = ["quiz"],
    operation_id = "submitAnswer"
)]
#[post("/submit-answer")]
pub async fn submit_answer(
    state: web::Data<HttpState>,
    payload: web::Json<SubmitAnswerRequest>,
) -> ApiResult<web::Json<SubmitAnswerResponse>> {
    let SubmitAnswerRequest {
        username,
        answer,
        correct_answer,
    } = payload.into_inner();
    let username = Username::new(username).map_err(|err| Error::invalid_request(err.to_string()))?;

    let outcome = state
        .quiz
        .submit_answer(&username, &answer, &correct_answer)
        .await?;
    Ok(web::Json(SubmitAnswerResponse {
        is_correct: outcome.is_correct,
        message: outcome.message,
    }))
}

/// Query parameters for `GET /score`.
#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct ScoreQuery {
    /// Registered username to fetch.
    pub username: String,
}

/// Fetch a user's full current record.
#[utoipa::path(
    get,
    path = "/score",
    params(ScoreQuery),
    responses(
        (status = 200, description = "Current user record", body = User),
        (status = 400, description = "User not registered", body = crate::inbound::http::error::ErrorBody)
    ),
    tags = ["quiz"],
    operation_id = "getScore"
)]
#[get("/score")]
pub async fn get_score(
    state: web::Data<HttpState>,
    query: web::Query<ScoreQuery>,
) -> ApiResult<web::Json<User>> {
    let username = Username::new(query.into_inner().username)
        .map_err(|err| Error::invalid_request(err.to_string()))?;
    let user = state.quiz.score(&username).await?;
    Ok(web::Json(user))
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test, web};
    use serde_json::{Value, json};
    use std::sync::Arc;

    use super::*;
    use crate::inbound::http::registration::register;
    use crate::outbound::persistence::{MemoryQuestionStore, MemoryUserStore};

    fn test_app() -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let state = HttpState::new(
            Arc::new(MemoryUserStore::new()),
            Arc::new(MemoryQuestionStore::new(Vec::new())),
        );
        App::new()
            .app_data(web::Data::new(state))
            .service(register)
            .service(submit_answer)
            .service(get_score)
    }

    async fn register_alice(
        app: &impl actix_web::dev::Service<
            actix_http::Request,
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
        >,
    ) {
        let response = actix_test::call_service(
            app,
            actix_test::TestRequest::post()
                .uri("/register")
                .set_json(json!({"username": "alice"}))
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    #[actix_web::test]
    async fn correct_submission_updates_the_score() {
        let app = actix_test::init_service(test_app()).await;
        register_alice(&app).await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/submit-answer")
                .set_json(json!({
                    "username": "alice",
                    "answer": "Paris",
                    "correctAnswer": "Paris"
                }))
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body.get("isCorrect"), Some(&json!(true)));
        assert_eq!(body.get("message"), Some(&json!("🎉 Correct!")));

        let score = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/score?username=alice")
                .to_request(),
        )
        .await;
        assert_eq!(score.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(score).await;
        assert_eq!(body.get("correct"), Some(&json!(1)));
        assert_eq!(body.get("incorrect"), Some(&json!(0)));
    }

    #[actix_web::test]
    async fn unregistered_submission_is_rejected() {
        let app = actix_test::init_service(test_app()).await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/submit-answer")
                .set_json(json!({
                    "username": "bob",
                    "answer": "Paris",
                    "correctAnswer": "Paris"
                }))
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(
            body.get("error").and_then(Value::as_str),
            Some("User not registered")
        );
    }

    #[actix_web::test]
    async fn score_for_unknown_user_is_rejected() {
        let app = actix_test::init_service(test_app()).await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/score?username=ghost")
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
