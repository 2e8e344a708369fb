//! Store adapters implementing the domain persistence ports.
//!
//! Two families:
//!
//! - **In-memory** ([`MemoryUserStore`], [`MemoryQuestionStore`]): the
//!   default when no document store is configured, and the double used by
//!   every test. No I/O, never fails.
//! - **MongoDB** ([`MongoUserStore`], [`MongoQuestionStore`]): document
//!   store matching the system's deployment model. Thin translation layer;
//!   driver errors map onto the port error enums.

mod memory;
mod mongo;

pub use memory::{MemoryQuestionStore, MemoryUserStore};
pub use mongo::{MongoQuestionStore, MongoUserStore, connect};
