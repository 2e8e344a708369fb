//! Shared helpers for HTTP integration tests.

use std::sync::Arc;

use actix_web::web;

use backend::domain::Question;
use backend::inbound::http::health::HealthState;
use backend::inbound::http::state::HttpState;
use backend::outbound::persistence::{MemoryQuestionStore, MemoryUserStore};

/// Five-city dataset exercising full four-option rounds.
pub fn sample_dataset() -> Vec<Question> {
    ["Paris", "Tokyo", "Cairo", "Sydney", "Rome"]
        .into_iter()
        .map(|city| Question {
            city: city.to_owned(),
            country: "Testland".to_owned(),
            clues: vec![format!("A clue about {city}")],
            fun_fact: vec![format!("A fact about {city}")],
            trivia: vec![format!("Trivia about {city}")],
        })
        .collect()
}

/// HTTP state over fresh in-memory stores seeded with `dataset`.
pub fn seeded_state(dataset: Vec<Question>) -> HttpState {
    HttpState::new(
        Arc::new(MemoryUserStore::new()),
        Arc::new(MemoryQuestionStore::new(dataset)),
    )
}

/// Health state already marked ready, as after a successful startup.
pub fn ready_health_state() -> web::Data<HealthState> {
    let health = web::Data::new(HealthState::new());
    health.mark_ready();
    health
}
