//! Content listing operations over the fetch adapter.
//!
//! Listings never fail: when the upstream source is unreachable or the
//! payload is not the expected sequence, the static fallback set is
//! substituted and the page is marked degraded.

use async_trait::async_trait;
use serde_json::Value;
use url::form_urlencoded;

use raga_core::domain::{ContentId, ContentItem, ContentKind};
use raga_core::ports::{ContentPage, ContentQuery, ContentSource, TaxonomyTerm};

use super::client::{FetchOptions, Fetcher};
use super::types::RawContent;
use super::{fallback, normalize};

const POSTS_PATH: &str = "/wp/v2/posts";
const CATEGORIES_PATH: &str = "/wp/v2/categories";
const TAGS_PATH: &str = "/wp/v2/tags";
const EVENTS_PATH: &str = "/tribe/events/v1/events";

/// Posts pull their relations inline so one request carries author, media,
/// and taxonomy; events only filter to published records.
const POST_DEFAULTS: &[(&str, &str)] = &[("_embed", "true")];
const EVENT_DEFAULTS: &[(&str, &str)] = &[("status", "publish")];

/// The normalized content source backed by the remote CMS.
pub struct WpContentSource<F> {
    fetcher: F,
}

impl<F: Fetcher> WpContentSource<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    fn listing_path(kind: ContentKind, query: &ContentQuery) -> String {
        let (path, defaults) = match kind {
            ContentKind::Post => (POSTS_PATH, POST_DEFAULTS),
            ContentKind::Event => (EVENTS_PATH, EVENT_DEFAULTS),
        };

        let merged = query.merged_over(defaults);
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in &merged {
            serializer.append_pair(key, value);
        }
        format!("{}?{}", path, serializer.finish())
    }

    /// Fetch one page of raw records. `None` covers both fetch failure and
    /// a payload that is not the expected sequence shape.
    async fn raw_list(&self, kind: ContentKind, query: &ContentQuery) -> Option<Vec<Value>> {
        let path = Self::listing_path(kind, query);
        let value = self.fetcher.fetch_json(&path, &FetchOptions::default()).await?;

        match kind {
            // The posts endpoint returns a bare array.
            ContentKind::Post => value.as_array().cloned(),
            // The events endpoint wraps its records in an envelope.
            ContentKind::Event => value.get("events")?.as_array().cloned(),
        }
    }

    fn decode(records: Vec<Value>, include_body: bool) -> Vec<ContentItem> {
        records
            .into_iter()
            .filter_map(|record| match serde_json::from_value::<RawContent>(record) {
                Ok(raw) => Some(normalize::normalize(raw, include_body)),
                Err(e) => {
                    tracing::debug!(error = %e, "skipping undecodable upstream record");
                    None
                }
            })
            .collect()
    }

    fn decode_one(record: Value, include_body: bool) -> Option<ContentItem> {
        Self::decode(vec![record], include_body).into_iter().next()
    }
}

#[async_trait]
impl<F: Fetcher> ContentSource for WpContentSource<F> {
    async fn list(&self, kind: ContentKind, query: ContentQuery) -> ContentPage {
        match self.raw_list(kind, &query).await {
            Some(records) => ContentPage::live(Self::decode(records, false)),
            None => {
                tracing::debug!(?kind, "substituting fallback content for listing");
                ContentPage::fallback(fallback::fallback_items())
            }
        }
    }

    async fn find_by_slug(&self, kind: ContentKind, slug: &str) -> Option<ContentItem> {
        let live = match kind {
            ContentKind::Post => {
                let query = ContentQuery::new().slug(slug).per_page(1);
                self.raw_list(kind, &query)
                    .await
                    .and_then(|records| records.into_iter().next())
                    .and_then(|record| Self::decode_one(record, true))
            }
            ContentKind::Event => {
                let path = format!("{EVENTS_PATH}/by-slug/{slug}");
                self.fetcher
                    .fetch_json(&path, &FetchOptions::default())
                    .await
                    .and_then(|record| Self::decode_one(record, true))
            }
        };

        live.or_else(|| fallback::find_by_slug(slug))
    }

    async fn find_by_id(&self, kind: ContentKind, id: &ContentId) -> Option<ContentItem> {
        let live = match kind {
            ContentKind::Post => {
                let query = ContentQuery::new().set("include", id.as_key()).per_page(1);
                self.raw_list(kind, &query)
                    .await
                    .and_then(|records| records.into_iter().next())
                    .and_then(|record| Self::decode_one(record, true))
            }
            ContentKind::Event => {
                let path = format!("{}/{}", EVENTS_PATH, id.as_key());
                self.fetcher
                    .fetch_json(&path, &FetchOptions::default())
                    .await
                    .and_then(|record| Self::decode_one(record, true))
            }
        };

        live.or_else(|| fallback::find_by_id(id))
    }

    async fn categories(&self) -> Vec<TaxonomyTerm> {
        self.taxonomy(CATEGORIES_PATH).await
    }

    async fn tags(&self) -> Vec<TaxonomyTerm> {
        self.taxonomy(TAGS_PATH).await
    }
}

impl<F: Fetcher> WpContentSource<F> {
    async fn taxonomy(&self, path: &str) -> Vec<TaxonomyTerm> {
        let path = format!("{path}?per_page=100");
        let Some(value) = self.fetcher.fetch_json(&path, &FetchOptions::default()).await else {
            return Vec::new();
        };
        let Some(records) = value.as_array() else {
            return Vec::new();
        };
        records
            .iter()
            .filter_map(|record| serde_json::from_value(record.clone()).ok())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// Stub upstream: a closure from path to response.
    struct StubFetcher<F>(F);

    #[async_trait]
    impl<F> Fetcher for StubFetcher<F>
    where
        F: Fn(&str) -> Option<Value> + Send + Sync,
    {
        async fn fetch_json(&self, path: &str, _options: &FetchOptions) -> Option<Value> {
            (self.0)(path)
        }
    }

    fn null_source() -> WpContentSource<StubFetcher<impl Fn(&str) -> Option<Value> + Send + Sync>>
    {
        WpContentSource::new(StubFetcher(|_: &str| None))
    }

    #[tokio::test]
    async fn dead_upstream_yields_full_fallback_list() {
        let source = null_source();
        let page = source.list(ContentKind::Post, ContentQuery::new()).await;
        assert!(page.degraded);
        assert_eq!(page.items.len(), fallback::fallback_items().len());
        assert!(!page.items.is_empty());
    }

    #[tokio::test]
    async fn non_sequence_payload_triggers_fallback() {
        let source = WpContentSource::new(StubFetcher(|_: &str| Some(json!({ "error": "gone" }))));
        let page = source.list(ContentKind::Post, ContentQuery::new()).await;
        assert!(page.degraded);
        assert!(!page.items.is_empty());
    }

    #[tokio::test]
    async fn live_posts_are_normalized_in_order() {
        let source = WpContentSource::new(StubFetcher(|path: &str| {
            assert!(path.starts_with("/wp/v2/posts?"));
            assert!(path.contains("_embed=true"));
            Some(json!([
                { "id": 1, "slug": "first", "title": { "rendered": "First" } },
                { "id": 2, "slug": "second", "title": { "rendered": "Second" } }
            ]))
        }));
        let page = source.list(ContentKind::Post, ContentQuery::new()).await;
        assert!(!page.degraded);
        let slugs: Vec<_> = page.items.iter().map(|item| item.slug.as_str()).collect();
        assert_eq!(slugs, vec!["first", "second"]);
    }

    #[tokio::test]
    async fn events_envelope_is_unwrapped() {
        let source = WpContentSource::new(StubFetcher(|path: &str| {
            assert!(path.starts_with("/tribe/events/v1/events?"));
            assert!(path.contains("status=publish"));
            Some(json!({
                "events": [
                    { "id": 42, "slug": "baithak", "title": "Baithak", "start_date": "2025-03-01T18:00:00Z" }
                ]
            }))
        }));
        let page = source.list(ContentKind::Event, ContentQuery::new()).await;
        assert!(!page.degraded);
        assert_eq!(page.items.len(), 1);
        assert!(page.items[0].is_event);
    }

    #[tokio::test]
    async fn caller_filters_override_defaults_in_path() {
        let source = WpContentSource::new(StubFetcher(|path: &str| {
            assert!(path.contains("_embed=false"));
            assert!(path.contains("search=marwa"));
            Some(json!([]))
        }));
        let query = ContentQuery::new().set("_embed", "false").search("marwa");
        let page = source.list(ContentKind::Post, query).await;
        assert!(!page.degraded);
        assert!(page.items.is_empty());
    }

    #[tokio::test]
    async fn slug_lookup_falls_back_to_static_scan() {
        let source = WpContentSource::new(StubFetcher(|_: &str| Some(json!([]))));
        let item = source
            .find_by_slug(ContentKind::Post, "long-shadow-of-the-gharana")
            .await
            .unwrap();
        assert_eq!(item.slug, "long-shadow-of-the-gharana");

        let missing = source.find_by_slug(ContentKind::Post, "nope").await;
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn event_slug_lookup_uses_by_slug_endpoint() {
        let source = WpContentSource::new(StubFetcher(|path: &str| {
            assert_eq!(path, "/tribe/events/v1/events/by-slug/baithak");
            Some(json!({
                "id": 42, "slug": "baithak", "title": "Baithak",
                "start_date": "2025-03-01T18:00:00Z",
                "description": "<p>Full programme</p>"
            }))
        }));
        let item = source.find_by_slug(ContentKind::Event, "baithak").await.unwrap();
        assert_eq!(item.full_content.as_deref(), Some("<p>Full programme</p>"));
    }

    #[tokio::test]
    async fn taxonomy_failure_is_an_empty_list() {
        let source = null_source();
        assert!(source.categories().await.is_empty());
        assert!(source.tags().await.is_empty());
    }

    #[tokio::test]
    async fn taxonomy_terms_decode() {
        let source = WpContentSource::new(StubFetcher(|path: &str| {
            assert!(path.starts_with("/wp/v2/categories?"));
            Some(json!([
                { "id": 3, "name": "Reviews", "slug": "reviews", "count": 12 }
            ]))
        }));
        let terms = source.categories().await;
        assert_eq!(terms.len(), 1);
        assert_eq!(terms[0].name, "Reviews");
    }
}
