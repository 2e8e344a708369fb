//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] generates the OpenAPI specification for the REST API. The
//! generated document backs Swagger UI in debug builds and is exported via
//! `cargo run --bin openapi-dump` for external tooling.

use utoipa::OpenApi;

use crate::domain::{Question, User};
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::quiz::{SubmitAnswerRequest, SubmitAnswerResponse};
use crate::inbound::http::registration::{
    ReferralLookupRequest, RegisterFailure, RegisterRequest, RegisterResponse,
};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Globetrotter Challenge API",
        description = "Trivia quiz backend: registration, questions, answers, scores, referrals."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::registration::register,
        crate::inbound::http::registration::get_user_by_referral_code,
        crate::inbound::http::questions::list_questions,
        crate::inbound::http::quiz::submit_answer,
        crate::inbound::http::quiz::get_score,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        User,
        Question,
        ErrorBody,
        RegisterRequest,
        RegisterResponse,
        RegisterFailure,
        ReferralLookupRequest,
        SubmitAnswerRequest,
        SubmitAnswerResponse,
    )),
    tags(
        (name = "registration", description = "User registration and referral resolution"),
        (name = "questions", description = "Read-only question collection"),
        (name = "quiz", description = "Answer submission and scores"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
