//! Port abstraction for user persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{User, Username};

/// Persistence errors raised by user store adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserStoreError {
    /// Store connection could not be established.
    #[error("user store connection failed: {message}")]
    Connection {
        /// Adapter-supplied failure detail.
        message: String,
    },
    /// Query or mutation failed during execution.
    #[error("user store query failed: {message}")]
    Query {
        /// Adapter-supplied failure detail.
        message: String,
    },
}

impl UserStoreError {
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

/// Persistence port for user records.
///
/// The store is the sole source of truth for user state; services hold no
/// process-local user map.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a newly registered user.
    async fn insert(&self, user: &User) -> Result<(), UserStoreError>;

    /// Fetch a user by username.
    async fn find_by_username(&self, username: &Username)
    -> Result<Option<User>, UserStoreError>;

    /// Fetch a user by referral code.
    ///
    /// Takes the raw string because inbound codes are stored and looked up
    /// without validation against the code format.
    async fn find_by_referral_code(&self, code: &str) -> Result<Option<User>, UserStoreError>;

    /// Persist the full record, replacing the stored one.
    ///
    /// Counter updates are read-modify-write through this method; two
    /// concurrent submissions for the same username can interleave and lose
    /// an increment. Accepted at this system's scale.
    async fn save(&self, user: &User) -> Result<(), UserStoreError>;
}
