//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};

/// Contributor submission form, as posted by the site.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRequest {
    #[serde(default = "default_kind")]
    pub kind: String,
    pub artist_name: String,
    pub email: String,
    pub genre: String,
    pub bio: String,
    #[serde(default)]
    pub portfolio_url: Option<String>,
    pub track_url: String,
    /// Optional press photo, inlined as base64.
    #[serde(default)]
    pub photo: Option<PhotoUpload>,
}

fn default_kind() -> String {
    "artist".to_string()
}

/// Press photo payload attached to a submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoUpload {
    pub file_name: String,
    pub content_type: String,
    /// Base64-encoded file body.
    pub data: String,
}

/// Outcome of a submission attempt. Validation failures arrive here as a
/// structured result, never as a transport error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionOutcome {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl SubmissionOutcome {
    pub fn accepted(id: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(format!("Submission {} received", id.into())),
            errors: Vec::new(),
        }
    }

    pub fn rejected(errors: Vec<String>) -> Self {
        Self {
            success: false,
            message: Some("Submission failed validation".to_string()),
            errors,
        }
    }
}

/// One submission as returned to the admin dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionView {
    pub id: String,
    pub kind: String,
    pub artist_name: String,
    pub email: String,
    pub genre: String,
    pub bio: String,
    pub portfolio_url: Option<String>,
    pub track_url: String,
    pub photo_key: Option<String>,
    pub submitted_at: String,
}

/// Reading-streak state for one user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakResponse {
    pub user_id: String,
    pub count: u32,
    pub last_read_date: String,
}

/// Collection summary row in the admin dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionInfo {
    pub name: String,
    pub rows: u64,
}
