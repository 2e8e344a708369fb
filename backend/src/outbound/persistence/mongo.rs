//! MongoDB-backed store adapters.
//!
//! Thin adapters only: they translate between BSON documents and domain
//! types and map driver errors to the port error enums. No business logic
//! resides here. Field names in the collections are the camelCase wire
//! names (`referralCode`, `referredBy`), matching the records the original
//! deployment stored.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::doc;
use mongodb::{Client, Collection, Database};
use tracing::info;

use crate::domain::ports::{QuestionStore, QuestionStoreError, UserStore, UserStoreError};
use crate::domain::{Question, User, Username};

/// Collection name for user records.
const USERS_COLLECTION: &str = "users";
/// Collection name for the question dataset.
const QUESTIONS_COLLECTION: &str = "questions";

/// Connect to the configured deployment and select the database.
pub async fn connect(uri: &str, db_name: &str) -> Result<Database, UserStoreError> {
    let client = Client::with_uri_str(uri)
        .await
        .map_err(|error| UserStoreError::connection(error.to_string()))?;
    info!(db = db_name, "connected to MongoDB");
    Ok(client.database(db_name))
}

/// Document-store adapter for the [`UserStore`] port.
#[derive(Clone)]
pub struct MongoUserStore {
    users: Collection<User>,
}

impl MongoUserStore {
    /// Create an adapter over the `users` collection of `db`.
    pub fn new(db: &Database) -> Self {
        Self {
            users: db.collection(USERS_COLLECTION),
        }
    }
}

fn map_user_error(error: mongodb::error::Error) -> UserStoreError {
    if is_connection_error(&error) {
        UserStoreError::connection(error.to_string())
    } else {
        UserStoreError::query(error.to_string())
    }
}

fn map_question_error(error: mongodb::error::Error) -> QuestionStoreError {
    if is_connection_error(&error) {
        QuestionStoreError::connection(error.to_string())
    } else {
        QuestionStoreError::query(error.to_string())
    }
}

fn is_connection_error(error: &mongodb::error::Error) -> bool {
    use mongodb::error::ErrorKind;

    matches!(
        *error.kind,
        ErrorKind::ServerSelection { .. } | ErrorKind::Io(_)
    )
}

#[async_trait]
impl UserStore for MongoUserStore {
    async fn insert(&self, user: &User) -> Result<(), UserStoreError> {
        self.users
            .insert_one(user)
            .await
            .map(drop)
            .map_err(map_user_error)
    }

    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<User>, UserStoreError> {
        self.users
            .find_one(doc! { "username": username.as_ref() })
            .await
            .map_err(map_user_error)
    }

    async fn find_by_referral_code(&self, code: &str) -> Result<Option<User>, UserStoreError> {
        self.users
            .find_one(doc! { "referralCode": code })
            .await
            .map_err(map_user_error)
    }

    async fn save(&self, user: &User) -> Result<(), UserStoreError> {
        self.users
            .replace_one(doc! { "username": user.username().as_ref() }, user)
            .await
            .map(drop)
            .map_err(map_user_error)
    }
}

/// Document-store adapter for the [`QuestionStore`] port.
#[derive(Clone)]
pub struct MongoQuestionStore {
    questions: Collection<Question>,
}

impl MongoQuestionStore {
    /// Create an adapter over the `questions` collection of `db`.
    pub fn new(db: &Database) -> Self {
        Self {
            questions: db.collection(QUESTIONS_COLLECTION),
        }
    }

    /// Seed the collection from `dataset` when it is currently empty.
    ///
    /// Startup convenience so a fresh deployment serves questions without a
    /// separate import step; an already populated collection is left
    /// untouched.
    pub async fn seed_if_empty(&self, dataset: &[Question]) -> Result<(), QuestionStoreError> {
        if dataset.is_empty() {
            return Ok(());
        }
        let existing = self
            .questions
            .count_documents(doc! {})
            .await
            .map_err(map_question_error)?;
        if existing > 0 {
            return Ok(());
        }
        self.questions
            .insert_many(dataset)
            .await
            .map(drop)
            .map_err(map_question_error)?;
        info!(count = dataset.len(), "seeded question collection");
        Ok(())
    }
}

#[async_trait]
impl QuestionStore for MongoQuestionStore {
    async fn list_all(&self) -> Result<Vec<Question>, QuestionStoreError> {
        let cursor = self
            .questions
            .find(doc! {})
            .await
            .map_err(map_question_error)?;
        cursor.try_collect().await.map_err(map_question_error)
    }
}
