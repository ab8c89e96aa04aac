//! # Raga Infrastructure
//!
//! Concrete implementations of the ports defined in `raga-core`: the
//! WordPress content client, database repositories, object storage, and
//! rate limiting.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - In-memory backends only
//! - `postgres` - PostgreSQL repositories via SeaORM
//! - `rate-limit` - Rate limiting via governor

pub mod database;
pub mod storage;
pub mod wp;

#[cfg(feature = "rate-limit")]
pub mod rate_limit;

// Re-exports - In-Memory
pub use database::{
    DatabaseConfig, DatabaseConnections, InMemoryLogRepository, InMemoryStreakRepository,
    InMemorySubmissionRepository,
};
pub use storage::{FsObjectStore, InMemoryObjectStore};
pub use wp::{FetchOptions, Fetcher, WpClient, WpContentSource};

#[cfg(feature = "rate-limit")]
pub use rate_limit::{InMemoryRateLimiter, RateLimitConfig};

// Re-exports - Postgres
#[cfg(feature = "postgres")]
pub use database::{
    PostgresLogRepository, PostgresStreakRepository, PostgresSubmissionRepository,
};
