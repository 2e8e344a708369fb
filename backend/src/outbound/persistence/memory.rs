//! In-memory store adapters.
//!
//! The default adapters when no document store is configured, and the test
//! double for every service and HTTP test. State lives for the process
//! lifetime only; the store is still the sole source of truth while it runs.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::ports::{QuestionStore, QuestionStoreError, UserStore, UserStoreError};
use crate::domain::{Question, User, Username};

/// Process-local user store keyed by username.
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    users: RwLock<HashMap<String, User>>,
}

impl MemoryUserStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn insert(&self, user: &User) -> Result<(), UserStoreError> {
        self.users
            .write()
            .await
            .insert(user.username().as_ref().to_owned(), user.clone());
        Ok(())
    }

    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<User>, UserStoreError> {
        Ok(self.users.read().await.get(username.as_ref()).cloned())
    }

    async fn find_by_referral_code(&self, code: &str) -> Result<Option<User>, UserStoreError> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|user| user.referral_code().as_ref() == code)
            .cloned())
    }

    async fn save(&self, user: &User) -> Result<(), UserStoreError> {
        self.insert(user).await
    }
}

/// Fixed question collection held in memory, seeded at construction.
#[derive(Debug, Clone)]
pub struct MemoryQuestionStore {
    questions: Vec<Question>,
}

impl MemoryQuestionStore {
    /// Create a store over an already validated dataset.
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }
}

#[async_trait]
impl QuestionStore for MemoryQuestionStore {
    async fn list_all(&self) -> Result<Vec<Question>, QuestionStoreError> {
        Ok(self.questions.clone())
    }
}
