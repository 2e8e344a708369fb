//! Tests for the registration service.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use rstest::{fixture, rstest};

use super::*;
use crate::domain::ErrorCode;
use crate::outbound::persistence::MemoryUserStore;

/// Store double that fails every operation with a query error.
struct FailingUserStore;

#[async_trait]
impl UserStore for FailingUserStore {
    async fn insert(&self, _user: &User) -> Result<(), UserStoreError> {
        Err(UserStoreError::query("boom"))
    }

    async fn find_by_username(
        &self,
        _username: &Username,
    ) -> Result<Option<User>, UserStoreError> {
        Err(UserStoreError::query("boom"))
    }

    async fn find_by_referral_code(&self, _code: &str) -> Result<Option<User>, UserStoreError> {
        Err(UserStoreError::query("boom"))
    }

    async fn save(&self, _user: &User) -> Result<(), UserStoreError> {
        Err(UserStoreError::query("boom"))
    }
}

#[fixture]
fn store() -> Arc<MemoryUserStore> {
    Arc::new(MemoryUserStore::new())
}

fn username(raw: &str) -> Username {
    Username::new(raw).expect("valid username")
}

#[rstest]
#[tokio::test]
async fn registering_creates_a_user_with_zeroed_counters(store: Arc<MemoryUserStore>) {
    let service = RegistrationService::new(store.clone());

    let outcome = service
        .register(username("alice"), None)
        .await
        .expect("registration succeeds");

    let RegistrationOutcome::Created(user) = outcome else {
        panic!("expected a created user");
    };
    assert_eq!(user.username().as_ref(), "alice");
    assert_eq!(user.correct(), 0);
    assert_eq!(user.incorrect(), 0);

    let stored = store
        .find_by_username(&username("alice"))
        .await
        .expect("lookup succeeds")
        .expect("record persisted");
    assert_eq!(stored, user);
}

#[rstest]
#[tokio::test]
async fn registering_twice_is_idempotent(store: Arc<MemoryUserStore>) {
    let service = RegistrationService::new(store.clone());

    let first = service
        .register(username("alice"), None)
        .await
        .expect("first registration succeeds");
    assert!(matches!(first, RegistrationOutcome::Created(_)));

    let second = service
        .register(username("alice"), None)
        .await
        .expect("second registration succeeds");
    assert_eq!(second, RegistrationOutcome::AlreadyRegistered);
}

#[rstest]
#[tokio::test]
async fn issued_referral_codes_are_unique(store: Arc<MemoryUserStore>) {
    let service = RegistrationService::new(store);

    let mut codes = HashSet::new();
    for i in 0..50 {
        let outcome = service
            .register(username(&format!("user{i}")), None)
            .await
            .expect("registration succeeds");
        let RegistrationOutcome::Created(user) = outcome else {
            panic!("expected a created user");
        };
        assert!(
            codes.insert(user.referral_code().as_ref().to_owned()),
            "duplicate referral code {}",
            user.referral_code()
        );
    }
}

#[rstest]
#[tokio::test]
async fn referred_by_is_stored_verbatim_without_validation(store: Arc<MemoryUserStore>) {
    let service = RegistrationService::new(store.clone());

    // The supplied code matches no registered user; registration still succeeds.
    let outcome = service
        .register(username("bob"), Some("zzzz".to_owned()))
        .await
        .expect("registration succeeds");

    let RegistrationOutcome::Created(user) = outcome else {
        panic!("expected a created user");
    };
    assert_eq!(user.referred_by(), Some("zzzz"));
}

#[rstest]
#[tokio::test]
async fn referral_acknowledgment_leaves_the_referrer_unchanged(store: Arc<MemoryUserStore>) {
    let service = RegistrationService::new(store.clone());

    let RegistrationOutcome::Created(referrer) = service
        .register(username("alice"), None)
        .await
        .expect("registration succeeds")
    else {
        panic!("expected a created user");
    };

    service
        .register(
            username("bob"),
            Some(referrer.referral_code().as_ref().to_owned()),
        )
        .await
        .expect("referred registration succeeds");

    let after = store
        .find_by_username(&username("alice"))
        .await
        .expect("lookup succeeds")
        .expect("referrer still present");
    assert_eq!(after, referrer);
}

#[rstest]
#[tokio::test]
async fn resolve_by_referral_code_returns_the_owner(store: Arc<MemoryUserStore>) {
    let service = RegistrationService::new(store);

    let RegistrationOutcome::Created(alice) = service
        .register(username("alice"), None)
        .await
        .expect("registration succeeds")
    else {
        panic!("expected a created user");
    };

    let resolved = service
        .resolve_by_referral_code(alice.referral_code().as_ref())
        .await
        .expect("resolution succeeds");
    assert_eq!(resolved.username().as_ref(), "alice");
    assert_eq!(resolved.correct(), alice.correct());
    assert_eq!(resolved.incorrect(), alice.incorrect());
}

#[rstest]
#[tokio::test]
async fn resolve_by_unknown_code_is_an_invalid_referral_error(store: Arc<MemoryUserStore>) {
    let service = RegistrationService::new(store);

    let error = service
        .resolve_by_referral_code("beef")
        .await
        .expect_err("unknown code fails");
    assert_eq!(error.code(), ErrorCode::InvalidReferralCode);
}

#[rstest]
#[tokio::test]
async fn storage_faults_surface_as_storage_errors() {
    let service = RegistrationService::new(Arc::new(FailingUserStore));

    let error = service
        .register(username("alice"), None)
        .await
        .expect_err("failing store surfaces");
    assert_eq!(error.code(), ErrorCode::StorageFault);

    let error = service
        .resolve_by_referral_code("f47a")
        .await
        .expect_err("failing store surfaces");
    assert_eq!(error.code(), ErrorCode::StorageFault);
}
