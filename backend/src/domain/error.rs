//! Domain-level error types.
//!
//! These errors are transport agnostic. Inbound adapters map them to HTTP
//! responses; see `inbound::http::error` for the wire shapes.

use serde::{Deserialize, Serialize};

/// Stable machine-readable error code describing the failure category.
///
/// "Already registered" is deliberately absent: it is an informational
/// registration outcome, not an error (see
/// [`RegistrationOutcome`](crate::domain::RegistrationOutcome)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The request is malformed or fails validation.
    InvalidRequest,
    /// The username does not reference a registered user.
    UserNotFound,
    /// The referral code does not resolve to a registered user.
    InvalidReferralCode,
    /// A persistence operation failed.
    StorageFault,
}

/// Domain error carrying a stable code and a human-readable message.
///
/// # Examples
/// ```
/// use backend::domain::{Error, ErrorCode};
///
/// let err = Error::user_not_found();
/// assert_eq!(err.code(), ErrorCode::UserNotFound);
/// assert_eq!(err.message(), "User not registered");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    code: ErrorCode,
    message: String,
}

impl Error {
    /// Create a new error with an explicit code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message returned to adapters.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Convenience constructor for [`ErrorCode::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Convenience constructor for [`ErrorCode::UserNotFound`].
    ///
    /// Carries the exact message the wire contract uses.
    pub fn user_not_found() -> Self {
        Self::new(ErrorCode::UserNotFound, "User not registered")
    }

    /// Convenience constructor for [`ErrorCode::InvalidReferralCode`].
    pub fn invalid_referral_code() -> Self {
        Self::new(ErrorCode::InvalidReferralCode, "Incorrect referral code")
    }

    /// Convenience constructor for [`ErrorCode::StorageFault`].
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageFault, message)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}
