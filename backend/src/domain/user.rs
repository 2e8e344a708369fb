//! User data model.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Validation errors returned by the user newtype constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    /// Username is empty once trimmed of whitespace.
    EmptyUsername,
    /// Username exceeds [`USERNAME_MAX`] characters.
    UsernameTooLong {
        /// Maximum accepted length.
        max: usize,
    },
    /// Referral code is not [`REFERRAL_CODE_LEN`] lowercase hex characters.
    MalformedReferralCode,
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyUsername => write!(f, "username must not be empty"),
            Self::UsernameTooLong { max } => {
                write!(f, "username must be at most {max} characters")
            }
            Self::MalformedReferralCode => write!(
                f,
                "referral code must be {REFERRAL_CODE_LEN} lowercase hex characters",
            ),
        }
    }
}

impl std::error::Error for UserValidationError {}

/// Maximum accepted username length in characters.
pub const USERNAME_MAX: usize = 64;

/// Unique player handle chosen at registration, immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    /// Validate and construct a [`Username`].
    pub fn new(username: impl Into<String>) -> Result<Self, UserValidationError> {
        let username = username.into();
        if username.trim().is_empty() {
            return Err(UserValidationError::EmptyUsername);
        }
        if username.chars().count() > USERNAME_MAX {
            return Err(UserValidationError::UsernameTooLong { max: USERNAME_MAX });
        }
        Ok(Self(username))
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<Username> for String {
    fn from(value: Username) -> Self {
        value.0
    }
}

impl TryFrom<String> for Username {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Length of a referral code in characters.
pub const REFERRAL_CODE_LEN: usize = 4;

/// Short unique code identifying a user as a referrer.
///
/// Codes are the first [`REFERRAL_CODE_LEN`] characters of a hyphen-free
/// random UUID, so the value space is lowercase hex. Uniqueness against
/// existing codes is enforced by the registration service, not here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ReferralCode(String);

impl ReferralCode {
    /// Derive a fresh code from a random UUID.
    pub fn generate() -> Self {
        let simple = Uuid::new_v4().simple().to_string();
        Self(simple.chars().take(REFERRAL_CODE_LEN).collect())
    }

    /// Validate and construct a [`ReferralCode`] from stored input.
    pub fn new(code: impl Into<String>) -> Result<Self, UserValidationError> {
        let code = code.into();
        let well_formed = code.chars().count() == REFERRAL_CODE_LEN
            && code.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase());
        if well_formed {
            Ok(Self(code))
        } else {
            Err(UserValidationError::MalformedReferralCode)
        }
    }
}

impl AsRef<str> for ReferralCode {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for ReferralCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<ReferralCode> for String {
    fn from(value: ReferralCode) -> Self {
        value.0
    }
}

impl TryFrom<String> for ReferralCode {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Application user record.
///
/// ## Invariants
/// - `username` is unique per record and immutable after creation.
/// - `referral_code` is unique across all records.
/// - Counters only ever grow, by exactly one per recorded answer.
///
/// `referred_by` holds the raw referral code supplied at registration; it is
/// stored without being validated against an existing user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[schema(value_type = String, example = "alice")]
    username: Username,
    #[schema(value_type = String, example = "f47a")]
    referral_code: ReferralCode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, example = "b21c")]
    referred_by: Option<String>,
    #[schema(example = 3)]
    correct: u32,
    #[schema(example = 1)]
    incorrect: u32,
    #[schema(value_type = String, example = "2026-02-14T09:30:00Z")]
    created_at: DateTime<Utc>,
}

impl User {
    /// Build the record persisted by a successful registration.
    pub fn register(
        username: Username,
        referral_code: ReferralCode,
        referred_by: Option<String>,
    ) -> Self {
        Self {
            username,
            referral_code,
            referred_by,
            correct: 0,
            incorrect: 0,
            created_at: Utc::now(),
        }
    }

    /// Unique player handle.
    pub fn username(&self) -> &Username {
        &self.username
    }

    /// This user's own referral code.
    pub fn referral_code(&self) -> &ReferralCode {
        &self.referral_code
    }

    /// Referral code supplied at registration, if any.
    pub fn referred_by(&self) -> Option<&str> {
        self.referred_by.as_deref()
    }

    /// Count of correctly answered questions.
    pub fn correct(&self) -> u32 {
        self.correct
    }

    /// Count of incorrectly answered questions.
    pub fn incorrect(&self) -> u32 {
        self.incorrect
    }

    /// Registration timestamp.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Record one answer outcome, bumping exactly one counter by one.
    pub fn record_outcome(&mut self, is_correct: bool) {
        if is_correct {
            self.correct += 1;
        } else {
            self.incorrect += 1;
        }
    }
}

#[cfg(test)]
mod tests;
