//! SeaORM entity models for the stored collections.

pub mod log_entry;
pub mod streak;
pub mod submission;
