//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they depend only
//! on domain services and ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{QuestionStore, UserStore};
use crate::domain::{QuizService, RegistrationService};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Registration and referral resolution.
    pub registration: RegistrationService,
    /// Answer checking and score lookup.
    pub quiz: QuizService,
    /// Read-only question collection.
    pub questions: Arc<dyn QuestionStore>,
}

impl HttpState {
    /// Construct state over the two persistence ports.
    ///
    /// # Examples
    /// ```no_run
    /// use std::sync::Arc;
    ///
    /// use backend::inbound::http::state::HttpState;
    /// use backend::outbound::persistence::{MemoryQuestionStore, MemoryUserStore};
    /// use backend::outbound::seed;
    ///
    /// let state = HttpState::new(
    ///     Arc::new(MemoryUserStore::new()),
    ///     Arc::new(MemoryQuestionStore::new(seed::default_dataset())),
    /// );
    /// let _quiz = state.quiz.clone();
    /// ```
    pub fn new(users: Arc<dyn UserStore>, questions: Arc<dyn QuestionStore>) -> Self {
        Self {
            registration: RegistrationService::new(users.clone()),
            quiz: QuizService::new(users),
            questions,
        }
    }
}
