//! Test builders: ergonomic constructors for `Prompt` and `Corpus`.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use chrono::{DateTime, Utc};
use prompal_core::{Corpus, Prompt};

/// 2024-01-01T00:00:00Z, the timestamp every built prompt carries unless
/// overridden.
pub fn fixed_ts() -> DateTime<Utc> {
    DateTime::from_timestamp(1_704_067_200, 0).expect("valid fixed timestamp")
}

// ---------------------------------------------------------------------------
// PromptBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`Prompt`] test fixtures.
///
/// # Example
///
/// ```rust
/// let prompt = PromptBuilder::new("1", "Review this code")
///     .title("TypeScript Review Guidelines")
///     .tags(["review", "typescript"])
///     .key("rvw")
///     .build();
/// ```
pub struct PromptBuilder {
    id: String,
    title: Option<String>,
    content: String,
    tags: Vec<String>,
    quick_access_key: Option<String>,
    ts: DateTime<Utc>,
}

impl PromptBuilder {
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: None,
            content: content.into(),
            tags: Vec::new(),
            quick_access_key: None,
            ts: fixed_ts(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.quick_access_key = Some(key.into());
        self
    }

    pub fn ts(mut self, ts: DateTime<Utc>) -> Self {
        self.ts = ts;
        self
    }

    pub fn build(self) -> Prompt {
        Prompt {
            id: self.id,
            title: self.title,
            content: self.content,
            tags: self.tags,
            quick_access_key: self.quick_access_key,
            created_at: self.ts,
            updated_at: self.ts,
        }
    }
}

/// Shorthand: a prompt with only tags set.
pub fn tagged(id: &str, tags: &[&str]) -> Prompt {
    PromptBuilder::new(id, format!("content of {id}"))
        .tags(tags.iter().copied())
        .build()
}

/// Shorthand: a prompt with only a quick access key set.
pub fn keyed(id: &str, key: &str) -> Prompt {
    PromptBuilder::new(id, format!("content of {id}")).key(key).build()
}

/// Wrap prompts in a [`Corpus`], panicking on duplicate ids.
pub fn corpus_of(prompts: Vec<Prompt>) -> Corpus {
    Corpus::new(prompts).expect("test corpus ids must be unique")
}
