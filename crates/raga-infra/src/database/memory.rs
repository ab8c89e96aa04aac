//! In-memory repositories - used when the document database is not
//! configured. Data is lost on process restart.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::RwLock;
use uuid::Uuid;

use raga_core::domain::{LogEntry, Streak, Submission};
use raga_core::error::RepoError;
use raga_core::ports::{
    BaseRepository, LogRepository, StreakRepository, SubmissionRepository,
};

/// In-memory submission store backed by a HashMap behind an async RwLock.
#[derive(Default)]
pub struct InMemorySubmissionRepository {
    store: RwLock<HashMap<Uuid, Submission>>,
}

impl InMemorySubmissionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BaseRepository<Submission, Uuid> for InMemorySubmissionRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Submission>, RepoError> {
        Ok(self.store.read().await.get(&id).cloned())
    }

    async fn save(&self, entity: Submission) -> Result<Submission, RepoError> {
        self.store.write().await.insert(entity.id, entity.clone());
        Ok(entity)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        match self.store.write().await.remove(&id) {
            Some(_) => Ok(()),
            None => Err(RepoError::NotFound),
        }
    }
}

#[async_trait]
impl SubmissionRepository for InMemorySubmissionRepository {
    async fn list_recent(&self, limit: u64) -> Result<Vec<Submission>, RepoError> {
        let mut all: Vec<Submission> = self.store.read().await.values().cloned().collect();
        all.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
        all.truncate(limit as usize);
        Ok(all)
    }

    async fn count(&self) -> Result<u64, RepoError> {
        Ok(self.store.read().await.len() as u64)
    }
}

/// In-memory streak store.
#[derive(Default)]
pub struct InMemoryStreakRepository {
    store: RwLock<HashMap<String, Streak>>,
}

impl InMemoryStreakRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StreakRepository for InMemoryStreakRepository {
    async fn find_by_user(&self, user_id: &str) -> Result<Option<Streak>, RepoError> {
        Ok(self.store.read().await.get(user_id).cloned())
    }

    async fn record_read(&self, user_id: &str, today: NaiveDate) -> Result<Streak, RepoError> {
        let mut store = self.store.write().await;
        let updated = match store.get(user_id) {
            Some(streak) => streak.record_read(today),
            None => Streak::started(user_id.to_string(), today),
        };
        store.insert(user_id.to_string(), updated.clone());
        Ok(updated)
    }

    async fn list_all(&self) -> Result<Vec<Streak>, RepoError> {
        let mut all: Vec<Streak> = self.store.read().await.values().cloned().collect();
        all.sort_by(|a, b| b.count.cmp(&a.count));
        Ok(all)
    }
}

/// In-memory log ring - keeps the newest entries up to a fixed capacity.
pub struct InMemoryLogRepository {
    entries: RwLock<Vec<LogEntry>>,
    capacity: usize,
}

impl InMemoryLogRepository {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
            capacity,
        }
    }
}

impl Default for InMemoryLogRepository {
    fn default() -> Self {
        Self::new(1000)
    }
}

#[async_trait]
impl LogRepository for InMemoryLogRepository {
    async fn append(&self, entry: LogEntry) -> Result<(), RepoError> {
        let mut entries = self.entries.write().await;
        entries.push(entry);
        if entries.len() > self.capacity {
            let overflow = entries.len() - self.capacity;
            entries.drain(..overflow);
        }
        Ok(())
    }

    async fn tail(&self, limit: u64) -> Result<Vec<LogEntry>, RepoError> {
        let entries = self.entries.read().await;
        Ok(entries.iter().rev().take(limit as usize).cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use raga_core::domain::{NewSubmission, SubmissionKind};

    fn submission(name: &str) -> Submission {
        NewSubmission {
            kind: SubmissionKind::Artist,
            artist_name: name.to_string(),
            email: format!("{name}@example.com"),
            genre: "khayal".to_string(),
            bio: "bio".to_string(),
            portfolio_url: None,
            track_url: "https://example.com/track".to_string(),
        }
        .into_submission(None)
    }

    #[tokio::test]
    async fn submissions_round_trip() {
        let repo = InMemorySubmissionRepository::new();
        let saved = repo.save(submission("ravi")).await.unwrap();
        let found = repo.find_by_id(saved.id).await.unwrap().unwrap();
        assert_eq!(found.artist_name, "ravi");
        assert_eq!(repo.count().await.unwrap(), 1);

        repo.delete(saved.id).await.unwrap();
        assert!(repo.find_by_id(saved.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn list_recent_is_newest_first() {
        let repo = InMemorySubmissionRepository::new();
        let older = submission("older");
        let mut newer = submission("newer");
        newer.submitted_at = older.submitted_at + chrono::Duration::seconds(5);
        repo.save(older).await.unwrap();
        repo.save(newer).await.unwrap();

        let listed = repo.list_recent(10).await.unwrap();
        assert_eq!(listed[0].artist_name, "newer");
    }

    #[tokio::test]
    async fn streaks_advance_through_the_repo() {
        let repo = InMemoryStreakRepository::new();
        let day1: NaiveDate = "2026-08-01".parse().unwrap();
        let day2: NaiveDate = "2026-08-02".parse().unwrap();

        assert_eq!(repo.record_read("u1", day1).await.unwrap().count, 1);
        assert_eq!(repo.record_read("u1", day2).await.unwrap().count, 2);
        assert_eq!(repo.find_by_user("u1").await.unwrap().unwrap().count, 2);
    }

    #[tokio::test]
    async fn log_ring_drops_oldest() {
        let repo = InMemoryLogRepository::new(2);
        for i in 0..3 {
            repo.append(LogEntry::new("WARN", "test", format!("m{i}")))
                .await
                .unwrap();
        }
        let tail = repo.tail(10).await.unwrap();
        assert_eq!(tail.len(), 2);
        assert_eq!(tail[0].message, "m2");
    }
}
