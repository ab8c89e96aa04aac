//! Content normalizer - maps raw upstream records into `ContentItem`s.
//!
//! Normalization is a pure function of the record: same payload in, same
//! item out. Every gap upstream resolves to a declared default, so the
//! result is always fully populated.

use once_cell::sync::Lazy;
use regex::Regex;

use raga_core::domain::{Author, ContentId, ContentItem, ContentKind};

use super::types::{RawContent, RawEvent, RawPost};

/// Placeholder images keyed by a deterministic hash of the record id, with
/// the hint used for downstream image selection.
pub const PLACEHOLDER_CATALOG: &[(&str, &str)] = &[
    (
        "https://images.ragamagazine.example/placeholders/sitar.jpg",
        "sitar closeup",
    ),
    (
        "https://images.ragamagazine.example/placeholders/tabla.jpg",
        "tabla pair",
    ),
    (
        "https://images.ragamagazine.example/placeholders/concert-hall.jpg",
        "concert hall",
    ),
    (
        "https://images.ragamagazine.example/placeholders/vinyl.jpg",
        "vinyl record",
    ),
    (
        "https://images.ragamagazine.example/placeholders/stage-lights.jpg",
        "stage lights",
    ),
    (
        "https://images.ragamagazine.example/placeholders/festival-crowd.jpg",
        "festival crowd",
    ),
];

/// Served when even the placeholder catalog cannot be consulted.
pub const DEFAULT_IMAGE_URL: &str =
    "https://images.ragamagazine.example/placeholders/raga-default.jpg";

static TAG_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new("<[^>]*>").expect("valid tag pattern"));

/// Decode HTML entities in a single left-to-right pass.
///
/// One pass means entities are decoded exactly once: `&amp;amp;` becomes
/// `&amp;`, not `&`. Unknown or malformed entities are copied through.
pub fn decode_entities(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];

        // An entity is at most ~10 chars between '&' and ';'. Scanning
        // bytes keeps this safe on multibyte text.
        let semi = rest.bytes().take(12).position(|b| b == b';');
        match semi {
            Some(end) => {
                let body = &rest[1..end];
                match decode_entity(body) {
                    Some(decoded) => {
                        out.push_str(&decoded);
                        rest = &rest[end + 1..];
                    }
                    None => {
                        out.push('&');
                        rest = &rest[1..];
                    }
                }
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn decode_entity(body: &str) -> Option<String> {
    let named = match body {
        "amp" => "&",
        "lt" => "<",
        "gt" => ">",
        "quot" => "\"",
        "apos" => "'",
        "nbsp" => " ",
        "hellip" => "\u{2026}",
        "ndash" => "\u{2013}",
        "mdash" => "\u{2014}",
        "lsquo" => "\u{2018}",
        "rsquo" => "\u{2019}",
        "ldquo" => "\u{201C}",
        "rdquo" => "\u{201D}",
        _ => "",
    };
    if !named.is_empty() {
        return Some(named.to_string());
    }

    let code = if let Some(hex) = body.strip_prefix("#x").or_else(|| body.strip_prefix("#X")) {
        u32::from_str_radix(hex, 16).ok()?
    } else if let Some(dec) = body.strip_prefix('#') {
        dec.parse::<u32>().ok()?
    } else {
        return None;
    };

    char::from_u32(code).map(String::from)
}

/// Strip markup with a conservative non-greedy pass: anything between `<`
/// and the next `>` is dropped, a `<` with no closing `>` is kept.
pub fn strip_tags(input: &str) -> String {
    TAG_PATTERN.replace_all(input, "").to_string()
}

/// Title treatment: entities decoded once, surrounding whitespace dropped.
fn clean_title(raw: &str) -> String {
    decode_entities(raw).trim().to_string()
}

/// Excerpt treatment: decode, then strip markup, then tidy whitespace.
fn clean_excerpt(raw: &str) -> String {
    strip_tags(&decode_entities(raw)).trim().to_string()
}

fn fnv1a(key: &str) -> u64 {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in key.as_bytes() {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    hash
}

/// Deterministic placeholder for a record id: repeated calls with the same
/// id always land on the same catalog entry.
pub fn placeholder_for(id: &ContentId) -> (&'static str, &'static str) {
    if PLACEHOLDER_CATALOG.is_empty() {
        return (DEFAULT_IMAGE_URL, "");
    }
    let index = (fnv1a(&id.as_key()) % PLACEHOLDER_CATALOG.len() as u64) as usize;
    PLACEHOLDER_CATALOG[index]
}

/// Convert one upstream record into exactly one `ContentItem`.
/// Already-normalized records pass through unchanged.
pub fn normalize(raw: RawContent, include_body: bool) -> ContentItem {
    match raw {
        RawContent::Normalized(item) => item,
        RawContent::Event(event) => transform_event(event, include_body),
        RawContent::Post(post) => transform_post(post, include_body),
    }
}

/// Normalize a standard post.
pub fn transform_post(post: RawPost, include_body: bool) -> ContentItem {
    let embedded = post.embedded.unwrap_or_default();

    let category = embedded
        .terms
        .iter()
        .flatten()
        .find(|term| term.taxonomy == "category" && !term.name.is_empty())
        .map(|term| decode_entities(&term.name))
        .unwrap_or_else(|| ContentKind::Post.default_category().to_string());

    let author = embedded
        .author
        .iter()
        .find_map(|author| {
            let name = author.name.as_deref()?.trim();
            if name.is_empty() {
                return None;
            }
            Some(Author {
                name: name.to_string(),
                avatar_url: author
                    .avatar_urls
                    .iter()
                    .next_back()
                    .map(|(_, url)| url.clone())
                    .unwrap_or_else(|| Author::staff().avatar_url),
            })
        })
        .unwrap_or_else(Author::staff);

    // Second taxonomy group carries the tags.
    let tags = embedded
        .terms
        .get(1)
        .map(|group| {
            group
                .iter()
                .filter(|term| !term.name.is_empty())
                .map(|term| decode_entities(&term.name))
                .collect()
        })
        .unwrap_or_default();

    let (image_url, image_hint) = match embedded
        .featured_media
        .iter()
        .find_map(|media| media.source_url.clone())
    {
        Some(url) => {
            let hint = embedded
                .featured_media
                .iter()
                .find_map(|media| media.alt_text.clone())
                .filter(|alt| !alt.is_empty());
            (url, hint)
        }
        None => {
            let (url, hint) = placeholder_for(&post.id);
            (url.to_string(), Some(hint.to_string()))
        }
    };

    let date = post
        .date_gmt
        .filter(|d| !d.is_empty())
        .or(post.date)
        .unwrap_or_default();

    ContentItem {
        id: post.id,
        title: clean_title(&post.title.rendered),
        slug: post.slug,
        category,
        image_url,
        image_hint,
        author,
        date,
        excerpt: clean_excerpt(&post.excerpt.rendered),
        full_content: include_body.then_some(post.content.rendered).filter(|c| !c.is_empty()),
        tags,
        views: 0,
        is_event: false,
    }
}

/// Normalize a calendar event.
pub fn transform_event(event: RawEvent, include_body: bool) -> ContentItem {
    let category = event
        .categories
        .iter()
        .find(|term| !term.name.is_empty())
        .map(|term| decode_entities(&term.name))
        .unwrap_or_else(|| ContentKind::Event.default_category().to_string());

    let author = event
        .organizer
        .iter()
        .find_map(|organizer| {
            let name = organizer.organizer.as_deref()?.trim();
            if name.is_empty() {
                return None;
            }
            Some(Author {
                name: decode_entities(name),
                avatar_url: Author::staff().avatar_url,
            })
        })
        .unwrap_or_else(Author::staff);

    let tags = event
        .tags
        .iter()
        .filter(|term| !term.name.is_empty())
        .map(|term| decode_entities(&term.name))
        .collect();

    let (image_url, image_hint) = match event.image.and_then(|image| image.url) {
        Some(url) => (url, None),
        None => {
            let (url, hint) = placeholder_for(&event.id);
            (url.to_string(), Some(hint.to_string()))
        }
    };

    let body = event.description.clone().filter(|d| !d.is_empty());
    let excerpt_source = event
        .excerpt
        .filter(|e| !e.is_empty())
        .or(event.description)
        .unwrap_or_default();

    ContentItem {
        id: event.id,
        title: clean_title(&event.title),
        slug: event.slug,
        category,
        image_url,
        image_hint,
        author,
        // Event start time, passed through unmodified.
        date: event.start_date,
        excerpt: clean_excerpt(&excerpt_source),
        full_content: if include_body { body } else { None },
        tags,
        views: 0,
        is_event: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use raga_core::domain::{DEFAULT_EVENT_CATEGORY, DEFAULT_POST_CATEGORY, STAFF_AUTHOR_NAME};
    use serde_json::json;

    fn post_from(value: serde_json::Value) -> RawPost {
        serde_json::from_value(value).unwrap()
    }

    fn event_from(value: serde_json::Value) -> RawEvent {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn entities_decode_exactly_once() {
        assert_eq!(decode_entities("A &amp; B"), "A & B");
        assert_eq!(decode_entities("A &amp;amp; B"), "A &amp; B");
        assert_eq!(decode_entities("&#8217;tis"), "\u{2019}tis");
        assert_eq!(decode_entities("&#x1F3B6;"), "\u{1F3B6}");
        assert_eq!(decode_entities("fish &chips"), "fish &chips");
    }

    #[test]
    fn strip_tags_is_conservative() {
        assert_eq!(strip_tags("<p>Hello <b>world</b></p>"), "Hello world");
        assert_eq!(strip_tags("3 < 5"), "3 < 5");
        assert_eq!(strip_tags("a <em>b</em> < c"), "a b < c");
    }

    #[test]
    fn bare_post_gets_every_default() {
        let item = transform_post(post_from(json!({ "id": 7 })), false);
        assert_eq!(item.category, DEFAULT_POST_CATEGORY);
        assert_eq!(item.author.name, STAFF_AUTHOR_NAME);
        assert!(!item.author.avatar_url.is_empty());
        assert!(!item.image_url.is_empty());
        assert_eq!(item.views, 0);
        assert!(!item.is_event);
        assert!(item.tags.is_empty());
    }

    #[test]
    fn sparse_record_normalizes_with_defaults() {
        let item = transform_post(
            post_from(json!({
                "id": 7,
                "title": { "rendered": "A &amp; B" },
                "excerpt": { "rendered": "<p>X</p>" },
                "slug": "a-b"
            })),
            false,
        );
        assert_eq!(item.id, ContentId::Int(7));
        assert_eq!(item.title, "A & B");
        assert_eq!(item.excerpt, "X");
        assert_eq!(item.slug, "a-b");
        assert_eq!(item.category, DEFAULT_POST_CATEGORY);
        assert_eq!(item.views, 0);
        assert!(!item.is_event);
    }

    #[test]
    fn embedded_relations_resolve() {
        let item = transform_post(
            post_from(json!({
                "id": 11,
                "slug": "gharana-notes",
                "title": { "rendered": "Gharana Notes" },
                "excerpt": { "rendered": "<p>On lineage.</p>" },
                "date_gmt": "2025-02-10T09:00:00",
                "_embedded": {
                    "author": [{ "name": "Meera Iyer", "avatar_urls": { "48": "https://a/48.png", "96": "https://a/96.png" } }],
                    "wp:featuredmedia": [{ "source_url": "https://img/cover.jpg", "alt_text": "tanpura" }],
                    "wp:term": [
                        [{ "name": "Arts &amp; Culture", "taxonomy": "category" }],
                        [{ "name": "khayal", "taxonomy": "post_tag" }, { "name": "dhrupad", "taxonomy": "post_tag" }]
                    ]
                }
            })),
            false,
        );
        assert_eq!(item.author.name, "Meera Iyer");
        assert_eq!(item.author.avatar_url, "https://a/96.png");
        assert_eq!(item.category, "Arts & Culture");
        assert_eq!(item.tags, vec!["khayal", "dhrupad"]);
        assert_eq!(item.image_url, "https://img/cover.jpg");
        assert_eq!(item.image_hint.as_deref(), Some("tanpura"));
        assert_eq!(item.date, "2025-02-10T09:00:00");
    }

    #[test]
    fn event_defaults_and_date_passthrough() {
        let item = transform_event(
            event_from(json!({
                "id": 42,
                "slug": "spring-baithak",
                "title": "Spring Baithak",
                "start_date": "2025-03-01T18:00:00Z"
            })),
            false,
        );
        assert_eq!(item.category, DEFAULT_EVENT_CATEGORY);
        assert_eq!(item.date, "2025-03-01T18:00:00Z");
        assert!(item.is_event);
        assert_eq!(item.author.name, STAFF_AUTHOR_NAME);
    }

    #[test]
    fn event_organizer_becomes_author() {
        let item = transform_event(
            event_from(json!({
                "id": 42,
                "start_date": "2025-03-01T18:00:00Z",
                "organizer": [{ "organizer": "Raga Collective" }],
                "categories": [{ "name": "Concert" }],
                "tags": [{ "name": "live" }]
            })),
            false,
        );
        assert_eq!(item.author.name, "Raga Collective");
        assert_eq!(item.category, "Concert");
        assert_eq!(item.tags, vec!["live"]);
    }

    #[test]
    fn placeholder_is_deterministic_per_id() {
        let id = ContentId::Int(7);
        let first = placeholder_for(&id);
        for _ in 0..10 {
            assert_eq!(placeholder_for(&id), first);
        }
        let item_a = transform_post(post_from(json!({ "id": 7 })), false);
        let item_b = transform_post(post_from(json!({ "id": 7 })), false);
        assert_eq!(item_a.image_url, item_b.image_url);
    }

    #[test]
    fn normalized_records_pass_through_unchanged() {
        let item = transform_post(post_from(json!({ "id": 9, "slug": "x" })), false);
        let raw = RawContent::Normalized(item.clone());
        assert_eq!(normalize(raw, true), item);
    }

    #[test]
    fn full_content_only_when_requested() {
        let value = json!({
            "id": 5,
            "content": { "rendered": "<p>Body</p>" }
        });
        let with = transform_post(post_from(value.clone()), true);
        let without = transform_post(post_from(value), false);
        assert_eq!(with.full_content.as_deref(), Some("<p>Body</p>"));
        assert!(without.full_content.is_none());
    }
}
