//! Database connection management and repositories.

mod connections;
pub mod memory;

#[cfg(feature = "postgres")]
mod postgres_base;
#[cfg(feature = "postgres")]
pub mod postgres_repo;

#[cfg(feature = "postgres")]
pub mod entity;

pub use connections::{DatabaseConfig, DatabaseConnections};
pub use memory::{InMemoryLogRepository, InMemoryStreakRepository, InMemorySubmissionRepository};

#[cfg(feature = "postgres")]
pub use postgres_repo::{
    PostgresLogRepository, PostgresStreakRepository, PostgresSubmissionRepository,
};

#[cfg(feature = "postgres")]
#[cfg(test)]
mod tests;
