//! Question dataset seeding.
//!
//! The question collection is read-only at runtime, so it is populated from
//! a JSON seed: either a file named in the configuration or the built-in
//! default dataset. Loading validates the invariants the rest of the system
//! relies on (unique cities, at least one clue per question).

use std::collections::HashSet;
use std::path::Path;

use crate::domain::Question;

/// Built-in dataset used when no seed file is configured.
const DEFAULT_DATASET: &str = include_str!("../../data/questions.json");

/// Failures while loading or validating a question dataset.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    /// The seed file could not be read.
    #[error("failed to read question seed file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: String,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The seed content is not a valid question array.
    #[error("question seed {path} is not valid JSON: {source}")]
    Parse {
        /// Path (or `<embedded>`) that failed to parse.
        path: String,
        /// Underlying parse failure.
        #[source]
        source: serde_json::Error,
    },
    /// Two questions share a city; the city is the answer key.
    #[error("duplicate city {city:?} in question dataset")]
    DuplicateCity {
        /// The offending city value.
        city: String,
    },
    /// A question has no clues to display.
    #[error("question for {city:?} has no clues")]
    MissingClues {
        /// The city whose question is clueless.
        city: String,
    },
}

/// Load and validate a dataset from a JSON file.
pub fn load_from_file(path: &Path) -> Result<Vec<Question>, SeedError> {
    let display = path.display().to_string();
    let raw = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: display.clone(),
        source,
    })?;
    let questions: Vec<Question> =
        serde_json::from_str(&raw).map_err(|source| SeedError::Parse {
            path: display,
            source,
        })?;
    validate(&questions)?;
    Ok(questions)
}

/// The embedded default dataset.
///
/// # Panics
/// Panics if the compiled-in dataset is malformed; that is a build defect
/// caught by the tests, not a runtime condition.
pub fn default_dataset() -> Vec<Question> {
    let questions: Vec<Question> = serde_json::from_str(DEFAULT_DATASET)
        .unwrap_or_else(|error| panic!("embedded question dataset failed to parse: {error}"));
    validate(&questions)
        .unwrap_or_else(|error| panic!("embedded question dataset is invalid: {error}"));
    questions
}

/// Check dataset invariants: unique cities, non-empty clue lists.
fn validate(questions: &[Question]) -> Result<(), SeedError> {
    let mut cities = HashSet::new();
    for question in questions {
        if !cities.insert(question.city.as_str()) {
            return Err(SeedError::DuplicateCity {
                city: question.city.clone(),
            });
        }
        if question.clues.is_empty() {
            return Err(SeedError::MissingClues {
                city: question.city.clone(),
            });
        }
    }
    Ok(())
}
