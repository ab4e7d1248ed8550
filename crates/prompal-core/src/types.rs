//! Core types for prompal-core.
//!
//! The [`Prompt`] is the only entity the search engine reads. It is owned by
//! the prompt store; every search call works on a borrowed snapshot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A reusable text snippet managed by the prompt store.
///
/// Only `id` and `content` are mandatory. An absent `tags` list is treated
/// exactly like an empty one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prompt {
    /// Unique identifier within a corpus.
    pub id: String,
    /// Optional display title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// The snippet body.
    pub content: String,
    /// Free-form labels, queried with `#tag`. Older stores wrote these as a
    /// single `"a, b"` string, which is accepted as well.
    #[serde(
        default,
        deserialize_with = "tag_list",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub tags: Vec<String>,
    /// Short alias for `/key` lookups. Expected unique, not enforced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quick_access_key: Option<String>,
    #[serde(alias = "created_at")]
    pub created_at: DateTime<Utc>,
    #[serde(alias = "updated_at")]
    pub updated_at: DateTime<Utc>,
}

impl Prompt {
    /// Title if present, otherwise the first line of the content.
    pub fn display_title(&self) -> &str {
        match self.title.as_deref() {
            Some(title) if !title.trim().is_empty() => title,
            _ => self.content.lines().next().unwrap_or_default(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TagList {
    List(Vec<String>),
    Joined(String),
}

fn tag_list<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    Ok(match Option::<TagList>::deserialize(deserializer)? {
        Some(TagList::List(tags)) => tags,
        Some(TagList::Joined(joined)) => crate::tags::parse_tag_list(&joined),
        None => Vec::new(),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
