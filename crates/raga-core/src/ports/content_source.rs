use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{ContentId, ContentItem, ContentKind};

/// Query filters for a content listing, merged over the kind's defaults
/// with caller values winning on key collision. A BTreeMap keeps the
/// rendered query string deterministic.
#[derive(Debug, Clone, Default)]
pub struct ContentQuery {
    filters: BTreeMap<String, String>,
}

impl ContentQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.insert(key.into(), value.into());
        self
    }

    pub fn per_page(self, n: u32) -> Self {
        self.set("per_page", n.to_string())
    }

    pub fn category(self, id: u64) -> Self {
        self.set("categories", id.to_string())
    }

    pub fn tag(self, id: u64) -> Self {
        self.set("tags", id.to_string())
    }

    pub fn search(self, term: impl Into<String>) -> Self {
        self.set("search", term)
    }

    pub fn slug(self, slug: impl Into<String>) -> Self {
        self.set("slug", slug)
    }

    /// Defaults first, then caller filters on top.
    pub fn merged_over(&self, defaults: &[(&str, &str)]) -> BTreeMap<String, String> {
        let mut merged: BTreeMap<String, String> = defaults
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        for (k, v) in &self.filters {
            merged.insert(k.clone(), v.clone());
        }
        merged
    }
}

/// A page of normalized content plus the delivery status.
///
/// `degraded` is true when the upstream source was unreachable or returned
/// an unusable payload and the static fallback list was substituted, so
/// callers can label stale placeholder content instead of presenting it
/// as live.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentPage {
    pub items: Vec<ContentItem>,
    pub degraded: bool,
}

impl ContentPage {
    pub fn live(items: Vec<ContentItem>) -> Self {
        Self {
            items,
            degraded: false,
        }
    }

    pub fn fallback(items: Vec<ContentItem>) -> Self {
        Self {
            items,
            degraded: true,
        }
    }
}

/// A taxonomy term (category or tag) passed through from upstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxonomyTerm {
    pub id: u64,
    pub name: String,
    pub slug: String,
}

/// Content source port - the normalized view over the remote CMS.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// List content of one kind. Never fails: upstream trouble yields the
    /// fallback list with `degraded` set.
    async fn list(&self, kind: ContentKind, query: ContentQuery) -> ContentPage;

    /// Resolve a single item by slug, full body included. `None` means
    /// not found anywhere, including the fallback list.
    async fn find_by_slug(&self, kind: ContentKind, slug: &str) -> Option<ContentItem>;

    /// Resolve a single item by upstream id.
    async fn find_by_id(&self, kind: ContentKind, id: &ContentId) -> Option<ContentItem>;

    /// Category terms; empty on upstream failure.
    async fn categories(&self) -> Vec<TaxonomyTerm>;

    /// Tag terms; empty on upstream failure.
    async fn tags(&self) -> Vec<TaxonomyTerm>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caller_filters_win_over_defaults() {
        let query = ContentQuery::new().per_page(3).search("sitar");
        let merged = query.merged_over(&[("per_page", "10"), ("_embed", "true")]);
        assert_eq!(merged.get("per_page").map(String::as_str), Some("3"));
        assert_eq!(merged.get("_embed").map(String::as_str), Some("true"));
        assert_eq!(merged.get("search").map(String::as_str), Some("sitar"));
    }
}
