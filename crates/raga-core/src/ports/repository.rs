use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::{LogEntry, Streak, Submission};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Save an entity (create or update).
    async fn save(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Submission repository - append-mostly, read back newest first.
#[async_trait]
pub trait SubmissionRepository: BaseRepository<Submission, Uuid> {
    /// All submissions, most recent first.
    async fn list_recent(&self, limit: u64) -> Result<Vec<Submission>, RepoError>;

    async fn count(&self) -> Result<u64, RepoError>;
}

/// Streak repository, keyed by the identity-provider subject.
#[async_trait]
pub trait StreakRepository: Send + Sync {
    async fn find_by_user(&self, user_id: &str) -> Result<Option<Streak>, RepoError>;

    /// Apply one read on `today` and persist the resulting streak.
    async fn record_read(&self, user_id: &str, today: NaiveDate) -> Result<Streak, RepoError>;

    async fn list_all(&self) -> Result<Vec<Streak>, RepoError>;
}

/// Operational log stream consumed by the dev dashboard.
#[async_trait]
pub trait LogRepository: Send + Sync {
    async fn append(&self, entry: LogEntry) -> Result<(), RepoError>;

    /// Most recent entries first.
    async fn tail(&self, limit: u64) -> Result<Vec<LogEntry>, RepoError>;
}
