//! Question listing handler.

use actix_web::{get, web};

use crate::domain::{Error, Question};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Return the full question collection.
///
/// Unfiltered, unpaginated, in storage order. Clients run question selection
/// locally against this dataset.
#[utoipa::path(
    get,
    path = "/questions",
    responses(
        (status = 200, description = "All questions", body = [Question]),
        (status = 500, description = "Storage failure", body = crate::inbound::http::error::ErrorBody)
    ),
    tags = ["questions"],
    operation_id = "listQuestions"
)]
#[get("/questions")]
pub async fn list_questions(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Question>>> {
    let questions = state
        .questions
        .list_all()
        .await
        .map_err(|err| Error::storage(err.to_string()))?;
    Ok(web::Json(questions))
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test, web};
    use serde_json::Value;
    use std::sync::Arc;

    use super::*;
    use crate::outbound::persistence::{MemoryQuestionStore, MemoryUserStore};
    use crate::outbound::seed;

    #[actix_web::test]
    async fn questions_are_served_in_storage_order() {
        let dataset = seed::default_dataset();
        let state = HttpState::new(
            Arc::new(MemoryUserStore::new()),
            Arc::new(MemoryQuestionStore::new(dataset.clone())),
        );
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(list_questions),
        )
        .await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/questions").to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let body: Value = actix_test::read_body_json(response).await;
        let cities: Vec<&str> = body
            .as_array()
            .expect("question array")
            .iter()
            .map(|q| q.get("city").and_then(Value::as_str).expect("city field"))
            .collect();
        let expected: Vec<&str> = dataset.iter().map(|q| q.city.as_str()).collect();
        assert_eq!(cities, expected);
    }
}
