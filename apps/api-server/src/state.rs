//! Application state - shared across all handlers.
//!
//! Every collaborator is constructed here and injected as a trait object,
//! so nothing in the handler layer touches ambient singletons.

use std::sync::Arc;

use raga_core::ports::{
    ContentSource, LogRepository, ObjectStore, RateLimiter, StreakRepository,
    SubmissionRepository,
};
use raga_infra::database::{
    InMemoryLogRepository, InMemoryStreakRepository, InMemorySubmissionRepository,
};
use raga_infra::rate_limit::InMemoryRateLimiter;
use raga_infra::storage::{FsObjectStore, InMemoryObjectStore};
use raga_infra::wp::{WpClient, WpContentSource};

#[cfg(feature = "postgres")]
use raga_infra::database::{
    DatabaseConnections, PostgresLogRepository, PostgresStreakRepository,
    PostgresSubmissionRepository,
};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub content: Arc<dyn ContentSource>,
    pub submissions: Arc<dyn SubmissionRepository>,
    pub streaks: Arc<dyn StreakRepository>,
    pub logs: Arc<dyn LogRepository>,
    pub store: Arc<dyn ObjectStore>,
    pub limiter: Arc<dyn RateLimiter>,
    pub admin_token: Option<String>,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Self {
        let content: Arc<dyn ContentSource> = Arc::new(WpContentSource::new(WpClient::new(
            config.content_api_base.clone(),
        )));

        let store: Arc<dyn ObjectStore> = match &config.storage_root {
            Some(root) => {
                tracing::info!(root = %root.display(), "Using filesystem object store");
                Arc::new(FsObjectStore::new(root.clone()))
            }
            None => {
                tracing::warn!("STORAGE_ROOT not set. Objects are kept in memory only.");
                Arc::new(InMemoryObjectStore::new())
            }
        };

        let limiter: Arc<dyn RateLimiter> = Arc::new(InMemoryRateLimiter::from_env());

        #[cfg(feature = "postgres")]
        let (submissions, streaks, logs): (
            Arc<dyn SubmissionRepository>,
            Arc<dyn StreakRepository>,
            Arc<dyn LogRepository>,
        ) = {
            match &config.database {
                Some(db_config) => match DatabaseConnections::init(db_config).await {
                    Ok(connections) => (
                        Arc::new(PostgresSubmissionRepository::new(connections.main.clone())),
                        Arc::new(PostgresStreakRepository::new(connections.main.clone())),
                        Arc::new(PostgresLogRepository::new(connections.main)),
                    ),
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to database: {}. Using in-memory fallback.",
                            e
                        );
                        Self::memory_repos()
                    }
                },
                None => {
                    tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                    Self::memory_repos()
                }
            }
        };

        #[cfg(not(feature = "postgres"))]
        let (submissions, streaks, logs) = {
            tracing::info!("Running without postgres feature - using in-memory repositories");
            Self::memory_repos()
        };

        tracing::info!("Application state initialized");

        Self {
            content,
            submissions,
            streaks,
            logs,
            store,
            limiter,
            admin_token: config.admin_token.clone(),
        }
    }

    fn memory_repos() -> (
        Arc<dyn SubmissionRepository>,
        Arc<dyn StreakRepository>,
        Arc<dyn LogRepository>,
    ) {
        (
            Arc::new(InMemorySubmissionRepository::new()),
            Arc::new(InMemoryStreakRepository::new()),
            Arc::new(InMemoryLogRepository::default()),
        )
    }
}
