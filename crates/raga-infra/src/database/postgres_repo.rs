//! PostgreSQL repository implementations.

use async_trait::async_trait;
use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, DbConn, EntityTrait, PaginatorTrait, QueryOrder, QuerySelect,
};

use raga_core::domain::{LogEntry, Streak, Submission};
use raga_core::error::RepoError;
use raga_core::ports::{LogRepository, StreakRepository, SubmissionRepository};

use super::entity::log_entry::{self, Entity as LogEntity};
use super::entity::streak::{self, Entity as StreakEntity};
use super::entity::submission::{self, Entity as SubmissionEntity};
use super::postgres_base::PostgresBaseRepository;

/// PostgreSQL submission repository.
pub type PostgresSubmissionRepository = PostgresBaseRepository<SubmissionEntity>;

#[async_trait]
impl SubmissionRepository for PostgresSubmissionRepository {
    async fn list_recent(&self, limit: u64) -> Result<Vec<Submission>, RepoError> {
        let result = SubmissionEntity::find()
            .order_by_desc(submission::Column::SubmittedAt)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn count(&self) -> Result<u64, RepoError> {
        SubmissionEntity::find()
            .count(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))
    }
}

/// PostgreSQL streak repository.
pub struct PostgresStreakRepository {
    db: DbConn,
}

impl PostgresStreakRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl StreakRepository for PostgresStreakRepository {
    async fn find_by_user(&self, user_id: &str) -> Result<Option<Streak>, RepoError> {
        let result = StreakEntity::find_by_id(user_id.to_string())
            .one(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.map(Into::into))
    }

    async fn record_read(&self, user_id: &str, today: NaiveDate) -> Result<Streak, RepoError> {
        let existing = self.find_by_user(user_id).await?;

        let updated = match &existing {
            Some(streak) => streak.record_read(today),
            None => Streak::started(user_id.to_string(), today),
        };

        let active: streak::ActiveModel = updated.clone().into();
        let result = if existing.is_some() {
            active.update(&self.db).await
        } else {
            active.insert(&self.db).await
        };
        result.map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(updated)
    }

    async fn list_all(&self) -> Result<Vec<Streak>, RepoError> {
        let result = StreakEntity::find()
            .order_by_desc(streak::Column::Count)
            .all(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}

/// PostgreSQL log repository.
pub struct PostgresLogRepository {
    db: DbConn,
}

impl PostgresLogRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl LogRepository for PostgresLogRepository {
    async fn append(&self, entry: LogEntry) -> Result<(), RepoError> {
        let active: log_entry::ActiveModel = entry.into();
        active
            .insert(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;
        Ok(())
    }

    async fn tail(&self, limit: u64) -> Result<Vec<LogEntry>, RepoError> {
        let result = LogEntity::find()
            .order_by_desc(log_entry::Column::LoggedAt)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}
