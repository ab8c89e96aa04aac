//! WordPress-compatible content source: fetch adapter, raw record shapes,
//! normalizer, and the static fallback set.

mod client;
pub mod fallback;
pub mod normalize;
mod source;
pub mod types;

pub use client::{FetchOptions, Fetcher, WpClient};
pub use source::WpContentSource;
