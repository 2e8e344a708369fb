//! Tests for the domain user model.

use super::*;
use rstest::{fixture, rstest};
use serde_json::json;

#[fixture]
fn alice() -> User {
    User::register(
        Username::new("alice").expect("valid username"),
        ReferralCode::new("f47a").expect("valid code"),
        None,
    )
}

#[rstest]
fn username_rejects_empty_and_whitespace() {
    assert!(matches!(
        Username::new(""),
        Err(UserValidationError::EmptyUsername)
    ));
    assert!(matches!(
        Username::new("   "),
        Err(UserValidationError::EmptyUsername)
    ));
}

#[rstest]
fn username_rejects_over_length() {
    let long = "a".repeat(USERNAME_MAX + 1);
    assert!(matches!(
        Username::new(long),
        Err(UserValidationError::UsernameTooLong { max }) if max == USERNAME_MAX
    ));
}

#[rstest]
fn username_accepts_boundary_length() {
    let name = "a".repeat(USERNAME_MAX);
    let username = Username::new(name.clone()).expect("boundary length accepted");
    assert_eq!(username.as_ref(), name);
}

#[rstest]
fn generated_referral_codes_match_the_format() {
    for _ in 0..64 {
        let code = ReferralCode::generate();
        assert_eq!(code.as_ref().len(), REFERRAL_CODE_LEN);
        assert!(
            code.as_ref()
                .chars()
                .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()),
            "unexpected character in {code}",
        );
        // The format validator must accept its own output.
        ReferralCode::new(code.as_ref()).expect("generated code is well formed");
    }
}

#[rstest]
#[case("")]
#[case("abc")]
#[case("abcde")]
#[case("ABCD")]
#[case("wxyz")]
fn malformed_referral_codes_are_rejected(#[case] raw: &str) {
    assert!(matches!(
        ReferralCode::new(raw),
        Err(UserValidationError::MalformedReferralCode)
    ));
}

#[rstest]
fn registration_starts_counters_at_zero(alice: User) {
    assert_eq!(alice.correct(), 0);
    assert_eq!(alice.incorrect(), 0);
    assert!(alice.referred_by().is_none());
}

#[rstest]
fn record_outcome_bumps_exactly_one_counter(mut alice: User) {
    alice.record_outcome(true);
    assert_eq!((alice.correct(), alice.incorrect()), (1, 0));

    alice.record_outcome(false);
    alice.record_outcome(false);
    assert_eq!((alice.correct(), alice.incorrect()), (1, 2));
}

#[rstest]
fn user_serializes_to_camel_case(alice: User) {
    let value = serde_json::to_value(&alice).expect("serialize");
    assert_eq!(value.get("username"), Some(&json!("alice")));
    assert_eq!(value.get("referralCode"), Some(&json!("f47a")));
    assert_eq!(value.get("correct"), Some(&json!(0)));
    assert_eq!(value.get("incorrect"), Some(&json!(0)));
    assert!(value.get("createdAt").is_some());
    // referredBy is omitted entirely when absent.
    assert!(value.get("referredBy").is_none());
    assert!(value.get("referral_code").is_none());
}

#[rstest]
fn user_round_trips_through_json() {
    let user = User::register(
        Username::new("bob").expect("valid username"),
        ReferralCode::new("0c2e").expect("valid code"),
        Some("f47a".to_owned()),
    );
    let value = serde_json::to_value(&user).expect("serialize");
    assert_eq!(value.get("referredBy"), Some(&json!("f47a")));

    let back: User = serde_json::from_value(value).expect("deserialize");
    assert_eq!(back, user);
}

#[rstest]
fn user_deserialization_validates_fields() {
    let malformed = json!({
        "username": "",
        "referralCode": "f47a",
        "correct": 0,
        "incorrect": 0,
        "createdAt": "2026-02-14T09:30:00Z"
    });
    assert!(serde_json::from_value::<User>(malformed).is_err());
}
