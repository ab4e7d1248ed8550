//! Inline completion: the greyed-out tail shown after the cursor.
//!
//! Unlike the dropdown, completion is prefix-only: `#re` completes to
//! `#react` but `#act` completes to nothing. The first vocabulary entry (in
//! sorted order) that extends the typed prefix wins.

use crate::config::CompletionOptions;
use crate::search::split_trailing_term;
use crate::search::vocabulary::Vocabulary;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CompletionKind {
    QuickAccess,
    Tag,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineCompletion {
    /// Text to append after the cursor. Empty when nothing applies.
    pub completion: String,
    /// The input with the completion appended.
    pub full_text: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<CompletionKind>,
}

impl InlineCompletion {
    /// No completion; the input is passed through untouched.
    pub fn none(raw: &str) -> Self {
        Self {
            completion: String::new(),
            full_text: raw.to_string(),
            kind: None,
        }
    }

    pub fn is_some(&self) -> bool {
        self.kind.is_some()
    }
}

/// Compute the inline completion for the trailing token of `raw`.
pub fn complete(vocab: &Vocabulary, raw: &str, opts: &CompletionOptions) -> InlineCompletion {
    if opts.disabled || raw.trim().is_empty() {
        return InlineCompletion::none(raw);
    }

    let (before, current) = split_trailing_term(raw);
    let (kind, prefix, entries) = if let Some(prefix) = current.strip_prefix('#') {
        (CompletionKind::Tag, prefix, vocab.tags())
    } else if let Some(prefix) = current.strip_prefix('/') {
        (CompletionKind::QuickAccess, prefix, vocab.quick_access_keys())
    } else {
        return InlineCompletion::none(raw);
    };

    let Some(entry) = first_extension(entries, prefix) else {
        return InlineCompletion::none(raw);
    };

    let completion: String = entry.chars().skip(prefix.chars().count()).collect();
    InlineCompletion {
        full_text: format!("{before}{current}{completion}"),
        completion,
        kind: Some(kind),
    }
}

fn first_extension<'a>(entries: &'a [String], prefix: &str) -> Option<&'a str> {
    if prefix.is_empty() {
        return entries.first().map(String::as_str);
    }
    let prefix_lower = prefix.to_lowercase();
    entries
        .iter()
        .map(String::as_str)
        .find(|entry| {
            let lower = entry.to_lowercase();
            lower.starts_with(&prefix_lower) && lower != prefix_lower
        })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
