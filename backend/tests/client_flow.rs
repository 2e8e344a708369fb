//! Client-side selection against the served dataset.
//!
//! The selection logic is a pure function, so the flow a browser client
//! runs — fetch the dataset, pick rounds locally, submit the result — can
//! be exercised end to end without a real network.

mod support;

use std::collections::HashSet;

use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde_json::{Value, json};

use backend::domain::{Question, pick_next_question};
use backend::server::build_app;
use support::{ready_health_state, sample_dataset, seeded_state};

#[actix_web::test]
async fn fetched_dataset_drives_local_rounds_until_exhaustion_and_reset() {
    let app = actix_test::init_service(build_app(
        seeded_state(sample_dataset()),
        ready_health_state(),
    ))
    .await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/questions").to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = actix_test::read_body(response).await;
    let dataset: Vec<Question> = serde_json::from_slice(&body).expect("question payload");
    assert_eq!(dataset.len(), 5);

    let mut rng = SmallRng::seed_from_u64(3);
    let mut used = HashSet::new();

    // One full pass: every city exactly once, always four options.
    let mut cities = HashSet::new();
    for _ in 0..dataset.len() {
        let round = pick_next_question(&dataset, &mut used, &mut rng).expect("round available");
        assert_eq!(round.options.len(), 4);
        assert!(cities.insert(round.correct_answer.clone()));
    }
    assert_eq!(cities.len(), dataset.len());

    // The set is exhausted: the next pick resets and serves from the full
    // dataset again.
    let reset_round =
        pick_next_question(&dataset, &mut used, &mut rng).expect("round after reset");
    assert!(dataset.iter().any(|q| q.city == reset_round.correct_answer));
    assert_eq!(used.len(), 1);
}

#[actix_web::test]
async fn a_locally_picked_round_submits_cleanly() {
    let app = actix_test::init_service(build_app(
        seeded_state(sample_dataset()),
        ready_health_state(),
    ))
    .await;

    let register = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/register")
            .set_json(json!({ "username": "carol" }))
            .to_request(),
    )
    .await;
    assert_eq!(register.status(), StatusCode::CREATED);

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/questions").to_request(),
    )
    .await;
    let body = actix_test::read_body(response).await;
    let dataset: Vec<Question> = serde_json::from_slice(&body).expect("question payload");

    let mut rng = SmallRng::seed_from_u64(9);
    let mut used = HashSet::new();
    let round = pick_next_question(&dataset, &mut used, &mut rng).expect("round available");

    let submit = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/submit-answer")
            .set_json(json!({
                "username": "carol",
                "answer": round.correct_answer,
                "correctAnswer": round.correct_answer
            }))
            .to_request(),
    )
    .await;
    assert_eq!(submit.status(), StatusCode::OK);
    let outcome: Value = actix_test::read_body_json(submit).await;
    assert_eq!(outcome.get("isCorrect"), Some(&json!(true)));
}
