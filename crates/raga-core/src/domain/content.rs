use serde::{Deserialize, Serialize};

/// Default category label for posts with no resolvable category term.
pub const DEFAULT_POST_CATEGORY: &str = "Uncategorized";
/// Default category label for calendar events.
pub const DEFAULT_EVENT_CATEGORY: &str = "Event";
/// Byline used when upstream carries no author relation.
pub const STAFF_AUTHOR_NAME: &str = "RagaMagazine Staff";
/// Avatar served for the staff byline and for organizers without one.
pub const STAFF_AVATAR_URL: &str = "https://secure.gravatar.com/avatar/?s=96&d=mm&r=g";

/// Upstream identifiers are numeric for WordPress posts and may be strings
/// for fallback records, so the id is kept as-is rather than coerced.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContentId {
    Int(i64),
    Str(String),
}

impl ContentId {
    /// Stable textual form, used for placeholder hashing and routing.
    pub fn as_key(&self) -> String {
        match self {
            ContentId::Int(n) => n.to_string(),
            ContentId::Str(s) => s.clone(),
        }
    }
}

impl From<i64> for ContentId {
    fn from(n: i64) -> Self {
        ContentId::Int(n)
    }
}

impl From<&str> for ContentId {
    fn from(s: &str) -> Self {
        ContentId::Str(s.to_string())
    }
}

/// Resolved byline on a normalized item. Never empty - absence upstream
/// resolves to the staff identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub name: String,
    pub avatar_url: String,
}

impl Author {
    pub fn staff() -> Self {
        Self {
            name: STAFF_AUTHOR_NAME.to_string(),
            avatar_url: STAFF_AVATAR_URL.to_string(),
        }
    }
}

/// The two upstream record families the normalizer unifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Post,
    Event,
}

impl ContentKind {
    pub fn default_category(&self) -> &'static str {
        match self {
            ContentKind::Post => DEFAULT_POST_CATEGORY,
            ContentKind::Event => DEFAULT_EVENT_CATEGORY,
        }
    }
}

/// One normalized editorial record.
///
/// Constructed fresh on every fetch and never mutated afterwards. Every
/// field is populated: upstream gaps resolve to the declared defaults, so
/// consumers never see a partially-present item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    pub id: ContentId,
    pub title: String,
    pub slug: String,
    pub category: String,
    pub image_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_hint: Option<String>,
    pub author: Author,
    /// ISO-8601 publish time for posts, event start time for events.
    pub date: String,
    pub excerpt: String,
    /// Full HTML body; only populated for single-item lookups.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_content: Option<String>,
    pub tags: Vec<String>,
    /// No view-tracking pipeline exists upstream; always zero.
    pub views: u64,
    pub is_event: bool,
}

impl ContentItem {
    pub fn kind(&self) -> ContentKind {
        if self.is_event {
            ContentKind::Event
        } else {
            ContentKind::Post
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_id_untagged_roundtrip() {
        let int: ContentId = serde_json::from_str("7").unwrap();
        assert_eq!(int, ContentId::Int(7));
        let s: ContentId = serde_json::from_str("\"fallback-1\"").unwrap();
        assert_eq!(s, ContentId::Str("fallback-1".to_string()));
        assert_eq!(serde_json::to_string(&int).unwrap(), "7");
    }

    #[test]
    fn staff_author_is_populated() {
        let author = Author::staff();
        assert_eq!(author.name, STAFF_AUTHOR_NAME);
        assert!(!author.avatar_url.is_empty());
    }

    #[test]
    fn item_serializes_camel_case() {
        let item = ContentItem {
            id: ContentId::Int(7),
            title: "A & B".to_string(),
            slug: "a-b".to_string(),
            category: DEFAULT_POST_CATEGORY.to_string(),
            image_url: "https://example.com/a.jpg".to_string(),
            image_hint: None,
            author: Author::staff(),
            date: "2025-03-01T18:00:00Z".to_string(),
            excerpt: "X".to_string(),
            full_content: None,
            tags: vec![],
            views: 0,
            is_event: false,
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["imageUrl"], "https://example.com/a.jpg");
        assert_eq!(json["isEvent"], false);
        assert!(json.get("fullContent").is_none());
    }
}
