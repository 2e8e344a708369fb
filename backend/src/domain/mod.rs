//! Domain entities, services, and ports.
//!
//! Purpose: define the strongly typed core of the quiz — users, questions,
//! registration, answer checking, and pure question selection — independent
//! of transport and storage. Inbound adapters map [`Error`] to wire shapes;
//! outbound adapters implement the [`ports`].

pub mod error;
pub mod ports;
pub mod question;
pub mod quiz;
pub mod registration;
pub mod round;
pub mod user;

pub use self::error::{Error, ErrorCode};
pub use self::question::Question;
pub use self::quiz::{AnswerOutcome, CORRECT_MESSAGE, INCORRECT_MESSAGE, QuizService};
pub use self::registration::{RegistrationOutcome, RegistrationService};
pub use self::round::{OPTION_COUNT, QuizRound, pick_next_question};
pub use self::user::{
    REFERRAL_CODE_LEN, ReferralCode, USERNAME_MAX, User, UserValidationError, Username,
};
