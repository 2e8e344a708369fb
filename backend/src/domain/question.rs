//! Trivia question record.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One trivia item from the read-only question collection.
///
/// ## Invariants
/// - `city` is unique across the collection; it doubles as the correct
///   answer value and the key that excludes a question from its own
///   distractors. The seed loader enforces uniqueness at startup.
///
/// The `fun_fact` list is carried in the record and on the wire but unused
/// by the current flows. Clients display only the first clue; trivia is
/// displayed in full.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Question {
    /// Canonical correct-answer value and unique key.
    #[schema(example = "Paris")]
    pub city: String,
    /// Country the city belongs to; descriptive only.
    #[schema(example = "France")]
    pub country: String,
    /// Ordered clues; only the first is shown.
    pub clues: Vec<String>,
    /// Fun facts, currently unused by the quiz flows.
    pub fun_fact: Vec<String>,
    /// Trivia statements displayed alongside the clue.
    pub trivia: Vec<String>,
}
