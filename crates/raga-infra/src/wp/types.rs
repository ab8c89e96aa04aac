//! Raw upstream record shapes.
//!
//! The remote API serves two families of records: standard WordPress posts
//! and The Events Calendar events. Fallback records are already in the
//! internal shape. The union is discriminated structurally at decode time:
//! a normalized item deserializes as `Normalized`, a record carrying
//! `start_date` as `Event`, and anything else with an id as `Post`.

use std::collections::BTreeMap;

use serde::Deserialize;

use raga_core::domain::{ContentId, ContentItem};

/// A WordPress "rendered" wrapper, e.g. `{"rendered": "<p>...</p>"}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Rendered {
    #[serde(default)]
    pub rendered: String,
}

/// Author relation embedded under `_embedded.author`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmbeddedAuthor {
    #[serde(default)]
    pub name: Option<String>,
    /// Size-keyed avatar URLs ("24", "48", "96").
    #[serde(default)]
    pub avatar_urls: BTreeMap<String, String>,
}

/// Featured media relation embedded under `_embedded.wp:featuredmedia`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmbeddedMedia {
    #[serde(default)]
    pub source_url: Option<String>,
    #[serde(default)]
    pub alt_text: Option<String>,
}

/// One taxonomy term inside `_embedded.wp:term`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmbeddedTerm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub taxonomy: String,
}

/// Embedded relations requested via `_embed=true`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Embedded {
    #[serde(default)]
    pub author: Vec<EmbeddedAuthor>,
    #[serde(default, rename = "wp:featuredmedia")]
    pub featured_media: Vec<EmbeddedMedia>,
    /// Taxonomy groups in endpoint order: categories first, tags second.
    #[serde(default, rename = "wp:term")]
    pub terms: Vec<Vec<EmbeddedTerm>>,
}

/// A standard post as served by `/wp/v2/posts`.
///
/// Only `id` is required. A record with no embedded relations and no
/// explicit fields still normalizes to a fully-populated item through the
/// defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPost {
    pub id: ContentId,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub title: Rendered,
    #[serde(default)]
    pub excerpt: Rendered,
    #[serde(default)]
    pub content: Rendered,
    /// Publish time in GMT, no timezone suffix upstream.
    #[serde(default)]
    pub date_gmt: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default, rename = "_embedded")]
    pub embedded: Option<Embedded>,
}

/// Event image block.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventImage {
    #[serde(default)]
    pub url: Option<String>,
}

/// Category or tag attached directly to an event record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventTerm {
    #[serde(default)]
    pub name: String,
}

/// Organizer relation on an event; `organizer` is the display name.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventOrganizer {
    #[serde(default)]
    pub organizer: Option<String>,
}

/// A calendar event as served by `/tribe/events/v1/events`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawEvent {
    pub id: ContentId,
    /// Start timestamp; its presence is what makes a record an event.
    pub start_date: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<EventImage>,
    #[serde(default)]
    pub categories: Vec<EventTerm>,
    #[serde(default)]
    pub tags: Vec<EventTerm>,
    #[serde(default)]
    pub organizer: Vec<EventOrganizer>,
}

/// The discriminated upstream union. Variant order matters: serde tries
/// top-down, so already-normalized records are recognized before the raw
/// shapes, and `Post` is the lenient fallthrough.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawContent {
    Normalized(ContentItem),
    Event(RawEvent),
    Post(RawPost),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn start_date_marks_an_event() {
        let value = json!({
            "id": 42,
            "slug": "spring-baithak",
            "title": "Spring Baithak",
            "start_date": "2025-03-01T18:00:00Z"
        });
        match serde_json::from_value::<RawContent>(value).unwrap() {
            RawContent::Event(event) => assert_eq!(event.start_date, "2025-03-01T18:00:00Z"),
            other => panic!("expected event, got {other:?}"),
        }
    }

    #[test]
    fn bare_id_record_is_a_post() {
        let value = json!({ "id": 7 });
        match serde_json::from_value::<RawContent>(value).unwrap() {
            RawContent::Post(post) => {
                assert_eq!(post.id, ContentId::Int(7));
                assert!(post.slug.is_empty());
            }
            other => panic!("expected post, got {other:?}"),
        }
    }

    #[test]
    fn normalized_record_is_recognized() {
        let value = json!({
            "id": "fallback-1",
            "title": "A",
            "slug": "a",
            "category": "Uncategorized",
            "imageUrl": "https://example.com/a.jpg",
            "author": { "name": "RagaMagazine Staff", "avatarUrl": "https://example.com/s.png" },
            "date": "2025-01-01T00:00:00Z",
            "excerpt": "",
            "tags": [],
            "views": 0,
            "isEvent": false
        });
        assert!(matches!(
            serde_json::from_value::<RawContent>(value).unwrap(),
            RawContent::Normalized(_)
        ));
    }

    #[test]
    fn rendered_title_does_not_look_normalized() {
        let value = json!({
            "id": 7,
            "title": { "rendered": "A &amp; B" },
            "slug": "a-b"
        });
        assert!(matches!(
            serde_json::from_value::<RawContent>(value).unwrap(),
            RawContent::Post(_)
        ));
    }
}
