use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One operational log record, as surfaced in the dev dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: Uuid,
    pub level: String,
    pub target: String,
    pub message: String,
    pub logged_at: DateTime<Utc>,
}

impl LogEntry {
    pub fn new(level: impl Into<String>, target: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            level: level.into(),
            target: target.into(),
            message: message.into(),
            logged_at: Utc::now(),
        }
    }
}
