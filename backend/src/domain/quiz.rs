//! Quiz session service: answer validation and score lookup.

use std::sync::Arc;

use tracing::debug;

use crate::domain::ports::{UserStore, UserStoreError};
use crate::domain::{Error, User, Username};

/// Message returned with a correct answer.
pub const CORRECT_MESSAGE: &str = "🎉 Correct!";
/// Message returned with an incorrect answer.
pub const INCORRECT_MESSAGE: &str = "😢 Incorrect!";

/// Result of an answer submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOutcome {
    /// Whether the submitted answer matched exactly.
    pub is_correct: bool,
    /// Human-readable outcome message.
    pub message: String,
}

/// Validates submitted answers and maintains per-user counters.
#[derive(Clone)]
pub struct QuizService {
    users: Arc<dyn UserStore>,
}

impl QuizService {
    /// Create a service over the given user store.
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    /// Check `answer` against `correct_answer` and update the user's
    /// counters.
    ///
    /// Correctness is exact, case-sensitive equality. Exactly one counter is
    /// incremented by one; there is no partial credit and nothing prevents
    /// re-submission for the same question.
    pub async fn submit_answer(
        &self,
        username: &Username,
        answer: &str,
        correct_answer: &str,
    ) -> Result<AnswerOutcome, Error> {
        let mut user = self
            .users
            .find_by_username(username)
            .await
            .map_err(map_store_error)?
            .ok_or_else(Error::user_not_found)?;

        let is_correct = answer == correct_answer;
        user.record_outcome(is_correct);
        self.users.save(&user).await.map_err(map_store_error)?;

        debug!(
            username = %username,
            is_correct,
            correct = user.correct(),
            incorrect = user.incorrect(),
            "answer recorded"
        );

        Ok(AnswerOutcome {
            is_correct,
            message: if is_correct {
                CORRECT_MESSAGE.to_owned()
            } else {
                INCORRECT_MESSAGE.to_owned()
            },
        })
    }

    /// Fetch the user's full current record.
    pub async fn score(&self, username: &Username) -> Result<User, Error> {
        self.users
            .find_by_username(username)
            .await
            .map_err(map_store_error)?
            .ok_or_else(Error::user_not_found)
    }
}

fn map_store_error(error: UserStoreError) -> Error {
    Error::storage(error.to_string())
}
