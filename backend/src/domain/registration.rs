//! Registration service: user creation and referral resolution.

use std::sync::Arc;

use tracing::debug;

use crate::domain::ports::{UserStore, UserStoreError};
use crate::domain::{Error, ReferralCode, User, Username};

/// Attempts made to draw an unused referral code before giving up.
const REFERRAL_CODE_ATTEMPTS: usize = 8;

/// Outcome of a registration call.
///
/// Re-registering an existing username is idempotent and informational, not
/// an error, so it is part of the success type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationOutcome {
    /// A new user record was created.
    Created(User),
    /// The username was already registered; no record was touched.
    AlreadyRegistered,
}

/// Creates users, issues referral codes, resolves inbound codes.
#[derive(Clone)]
pub struct RegistrationService {
    users: Arc<dyn UserStore>,
}

impl RegistrationService {
    /// Create a service over the given user store.
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    /// Register `username`, optionally recording the referral code that
    /// brought them here.
    ///
    /// Exactly one user document is created per [`RegistrationOutcome::Created`].
    /// A supplied referral code is stored verbatim on the new record and
    /// acknowledged without further effect; it is not validated against an
    /// existing user at write time.
    pub async fn register(
        &self,
        username: Username,
        referred_by: Option<String>,
    ) -> Result<RegistrationOutcome, Error> {
        if self
            .users
            .find_by_username(&username)
            .await
            .map_err(map_store_error)?
            .is_some()
        {
            return Ok(RegistrationOutcome::AlreadyRegistered);
        }

        let referral_code = self.issue_referral_code().await?;
        let user = User::register(username, referral_code, referred_by.clone());
        self.users.insert(&user).await.map_err(map_store_error)?;

        if let Some(code) = referred_by {
            self.acknowledge_referrer(&code).await?;
        }

        Ok(RegistrationOutcome::Created(user))
    }

    /// Resolve a referral code to its owner's record.
    pub async fn resolve_by_referral_code(&self, code: &str) -> Result<User, Error> {
        self.users
            .find_by_referral_code(code)
            .await
            .map_err(map_store_error)?
            .ok_or_else(Error::invalid_referral_code)
    }

    /// Draw referral codes until one is unused by any existing record.
    ///
    /// The code space is small (four hex characters), so collisions are
    /// possible; a bounded retry keeps issuance unique without a store-side
    /// constraint.
    async fn issue_referral_code(&self) -> Result<ReferralCode, Error> {
        for _ in 0..REFERRAL_CODE_ATTEMPTS {
            let code = ReferralCode::generate();
            let taken = self
                .users
                .find_by_referral_code(code.as_ref())
                .await
                .map_err(map_store_error)?
                .is_some();
            if !taken {
                return Ok(code);
            }
        }
        Err(Error::storage(
            "could not issue an unused referral code; code space exhausted",
        ))
    }

    /// Acknowledge the referring user without changing their record.
    ///
    /// Reward accrual is intentionally a no-op; the referral lineage already
    /// lives on the new user's `referredBy` field.
    async fn acknowledge_referrer(&self, code: &str) -> Result<(), Error> {
        match self
            .users
            .find_by_referral_code(code)
            .await
            .map_err(map_store_error)?
        {
            Some(referrer) => {
                debug!(referrer = %referrer.username(), code, "referral acknowledged");
            }
            None => {
                debug!(code, "referral code did not match a registered user");
            }
        }
        Ok(())
    }
}

fn map_store_error(error: UserStoreError) -> Error {
    Error::storage(error.to_string())
}

#[cfg(test)]
mod tests;
