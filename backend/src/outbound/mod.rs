//! Outbound adapters: persistence and dataset seeding.

pub mod persistence;
pub mod seed;
