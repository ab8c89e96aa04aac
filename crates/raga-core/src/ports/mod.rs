//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod content_source;
mod object_store;
mod rate_limit;
mod repository;

pub use content_source::{ContentPage, ContentQuery, ContentSource, TaxonomyTerm};
pub use object_store::{ObjectInfo, ObjectStore, StoreError, StoredObject};
pub use rate_limit::{RateLimitError, RateLimitResult, RateLimiter};
pub use repository::{BaseRepository, LogRepository, StreakRepository, SubmissionRepository};
