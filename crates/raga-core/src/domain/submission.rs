use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Upper bound on press photo uploads.
pub const MAX_PHOTO_BYTES: usize = 5 * 1024 * 1024;

/// Accepted press photo content types.
pub const ALLOWED_PHOTO_TYPES: &[&str] = &["image/jpeg", "image/png", "image/webp"];

/// Which submission pipeline a record came through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionKind {
    Artist,
    Music,
}

impl SubmissionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Artist => "artist",
            Self::Music => "music",
        }
    }
}

/// Submission entity - one contributor record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    pub id: Uuid,
    pub kind: SubmissionKind,
    pub artist_name: String,
    pub email: String,
    pub genre: String,
    pub bio: String,
    pub portfolio_url: Option<String>,
    pub track_url: String,
    /// Object-store key of the uploaded press photo, if any.
    pub photo_key: Option<String>,
    pub submitted_at: DateTime<Utc>,
}

/// Validated input for creating a submission.
#[derive(Debug, Clone)]
pub struct NewSubmission {
    pub kind: SubmissionKind,
    pub artist_name: String,
    pub email: String,
    pub genre: String,
    pub bio: String,
    pub portfolio_url: Option<String>,
    pub track_url: String,
}

impl NewSubmission {
    /// Check the form against the submission schema. Returns every
    /// violation rather than stopping at the first.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        for (field, value) in [
            ("artistName", &self.artist_name),
            ("email", &self.email),
            ("genre", &self.genre),
            ("bio", &self.bio),
            ("trackUrl", &self.track_url),
        ] {
            if value.trim().is_empty() {
                errors.push(format!("{field} is required"));
            }
        }

        if !self.email.trim().is_empty() && !is_valid_email(&self.email) {
            errors.push("email is not a valid address".to_string());
        }

        if !self.track_url.trim().is_empty() && !is_valid_url(&self.track_url) {
            errors.push("trackUrl must be an http(s) URL".to_string());
        }

        if let Some(url) = &self.portfolio_url {
            if !url.trim().is_empty() && !is_valid_url(url) {
                errors.push("portfolioUrl must be an http(s) URL".to_string());
            }
        }

        errors
    }

    /// Promote validated input to a stored entity.
    pub fn into_submission(self, photo_key: Option<String>) -> Submission {
        Submission {
            id: Uuid::new_v4(),
            kind: self.kind,
            artist_name: self.artist_name,
            email: self.email,
            genre: self.genre,
            bio: self.bio,
            portfolio_url: self.portfolio_url,
            track_url: self.track_url,
            photo_key,
            submitted_at: Utc::now(),
        }
    }
}

/// Check a press photo against the size and type limits.
pub fn validate_photo(content_type: &str, len: usize) -> Vec<String> {
    let mut errors = Vec::new();
    if len > MAX_PHOTO_BYTES {
        errors.push(format!("photo exceeds the {} byte limit", MAX_PHOTO_BYTES));
    }
    if !ALLOWED_PHOTO_TYPES.contains(&content_type) {
        errors.push(format!("photo content type {content_type} is not accepted"));
    }
    errors
}

fn is_valid_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
        }
        None => false,
    }
}

fn is_valid_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> NewSubmission {
        NewSubmission {
            kind: SubmissionKind::Artist,
            artist_name: "Ravi".to_string(),
            email: "ravi@example.com".to_string(),
            genre: "Hindustani classical".to_string(),
            bio: "Sitarist from Pune".to_string(),
            portfolio_url: Some("https://ravi.example.com".to_string()),
            track_url: "https://soundcloud.example.com/ravi/alap".to_string(),
        }
    }

    #[test]
    fn valid_submission_passes() {
        assert!(valid().validate().is_empty());
    }

    #[test]
    fn missing_required_fields_are_all_reported() {
        let form = NewSubmission {
            artist_name: String::new(),
            email: String::new(),
            ..valid()
        };
        let errors = form.validate();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("artistName"));
        assert!(errors[1].contains("email"));
    }

    #[test]
    fn malformed_email_rejected() {
        for bad in ["no-at-sign", "@example.com", "a@nodot"] {
            let form = NewSubmission {
                email: bad.to_string(),
                ..valid()
            };
            assert!(!form.validate().is_empty(), "accepted {bad}");
        }
    }

    #[test]
    fn non_http_url_rejected() {
        let form = NewSubmission {
            track_url: "ftp://example.com/track".to_string(),
            ..valid()
        };
        assert!(form.validate().iter().any(|e| e.contains("trackUrl")));
    }

    #[test]
    fn photo_limits() {
        assert!(validate_photo("image/jpeg", 1024).is_empty());
        assert!(!validate_photo("image/gif", 1024).is_empty());
        assert!(!validate_photo("image/png", MAX_PHOTO_BYTES + 1).is_empty());
    }
}
