//! Domain entities - the core business objects.

mod content;
mod log_entry;
mod streak;
mod submission;

pub use content::{
    Author, ContentId, ContentItem, ContentKind, DEFAULT_EVENT_CATEGORY, DEFAULT_POST_CATEGORY,
    STAFF_AUTHOR_NAME, STAFF_AVATAR_URL,
};
pub use log_entry::LogEntry;
pub use streak::Streak;
pub use submission::{
    ALLOWED_PHOTO_TYPES, MAX_PHOTO_BYTES, NewSubmission, Submission, SubmissionKind,
    validate_photo,
};
