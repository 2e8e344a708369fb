//! Pure question-selection logic.
//!
//! Selection is deliberately independent of transport and storage so the
//! same function can run on either side of the wire and be unit-tested
//! directly against a dataset slice.

use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::domain::Question;

/// Number of answer options in a full round.
pub const OPTION_COUNT: usize = 4;

/// A playable round: the question payload plus its derived option set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizRound {
    /// Ordered clues; presentation shows only the first.
    pub clues: Vec<String>,
    /// Trivia statements shown in full.
    pub trivia: Vec<String>,
    /// Shuffled answer options, the correct city among them exactly once.
    pub options: Vec<String>,
    /// The correct answer value, compared by exact equality.
    pub correct_answer: String,
}

/// Pick the next question and build its option set.
///
/// Entries whose `city` is in `used` are skipped. When every entry has been
/// used the set is cleared and the full dataset becomes eligible again, so
/// progress never stalls; repetition after exhaustion is allowed. The picked
/// city is inserted into `used`.
///
/// Distractors are the first [`OPTION_COUNT`]` - 1` other cities in dataset
/// order (a deliberate, non-uniform policy), and the combined options are
/// then shuffled uniformly. Datasets with fewer than [`OPTION_COUNT`]
/// entries yield fewer options.
///
/// Returns `None` only for an empty dataset.
pub fn pick_next_question<R: Rng>(
    dataset: &[Question],
    used: &mut HashSet<String>,
    rng: &mut R,
) -> Option<QuizRound> {
    if dataset.is_empty() {
        return None;
    }

    let mut eligible: Vec<&Question> = dataset
        .iter()
        .filter(|q| !used.contains(&q.city))
        .collect();
    if eligible.is_empty() {
        used.clear();
        eligible = dataset.iter().collect();
    }

    let picked = eligible[rng.gen_range(0..eligible.len())];
    used.insert(picked.city.clone());

    let mut options: Vec<String> = Vec::with_capacity(OPTION_COUNT);
    options.push(picked.city.clone());
    options.extend(
        dataset
            .iter()
            .filter(|q| q.city != picked.city)
            .take(OPTION_COUNT - 1)
            .map(|q| q.city.clone()),
    );
    options.shuffle(rng);

    Some(QuizRound {
        clues: picked.clues.clone(),
        trivia: picked.trivia.clone(),
        options,
        correct_answer: picked.city.clone(),
    })
}
