//! Port abstraction for the read-only question collection.

use async_trait::async_trait;

use crate::domain::Question;

/// Persistence errors raised by question store adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuestionStoreError {
    /// Store connection could not be established.
    #[error("question store connection failed: {message}")]
    Connection {
        /// Adapter-supplied failure detail.
        message: String,
    },
    /// Query failed during execution.
    #[error("question store query failed: {message}")]
    Query {
        /// Adapter-supplied failure detail.
        message: String,
    },
}

impl QuestionStoreError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Read-only port for the question collection.
///
/// No write operations are exposed to clients; the collection is seeded out
/// of band (startup seed file or pre-populated document store).
#[async_trait]
pub trait QuestionStore: Send + Sync {
    /// Return the full collection, unfiltered and unpaginated, in storage
    /// order.
    async fn list_all(&self) -> Result<Vec<Question>, QuestionStoreError>;
}
