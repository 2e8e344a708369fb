//! Domain ports for the hexagonal boundary.

mod question_store;
mod user_store;

pub use question_store::{QuestionStore, QuestionStoreError};
pub use user_store::{UserStore, UserStoreError};
