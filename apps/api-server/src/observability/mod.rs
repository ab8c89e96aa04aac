//! Observability module - tracing, request IDs, and the log mirror.

mod log_mirror;
mod request_id;

pub use log_mirror::{LogMirrorHandle, LogMirrorLayer};
pub use request_id::RequestIdMiddleware;
