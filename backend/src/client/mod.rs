//! Client presentation layer: pure state machine plus HTTP driver.
//!
//! The quiz flow lives in [`state`] as a transport-free transition core;
//! [`api`] speaks the REST wire contract. The `quiz-cli` binary wires both
//! to a terminal.

pub mod api;
pub mod state;

pub use api::{ApiClient, ApiError};
pub use state::{GameState, Phase};
