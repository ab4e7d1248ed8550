//! Query parser: turns the raw search box text into a [`ParsedQuery`].
//!
//! Three kinds of token are recognised:
//!
//! | Syntax | Meaning |
//! |--------|---------|
//! | `/key` | quick access key, at most one (the first) |
//! | `#tag` | tag filter, any number, duplicates kept |
//! | other  | free text term |
//!
//! Parsing never fails. Markers with nothing after them (`/`, `#`) are plain
//! text terms.

use regex::Regex;
use serde::Serialize;
use std::ops::Range;
use std::sync::LazyLock;

/// Characters allowed after `#`: ASCII word characters plus `-`, Hiragana
/// (U+3040–U+309F), Katakana (U+30A0–U+30FF) and the CJK Unified Ideographs
/// block up to U+9FAF.
pub const TAG_CHAR_CLASS: &str =
    r"[A-Za-z0-9_\-\x{3040}-\x{309F}\x{30A0}-\x{30FF}\x{4E00}-\x{9FAF}]";

static TAG_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("#({TAG_CHAR_CLASS}+)")).expect("built-in tag pattern must compile")
});

/// Structured form of a search query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quick_access_key: Option<String>,
    pub tags: Vec<String>,
    pub text_terms: Vec<String>,
    pub original_query: String,
}

impl ParsedQuery {
    /// True when no criterion was specified at all.
    pub fn is_empty(&self) -> bool {
        self.quick_access_key.is_none() && self.tags.is_empty() && self.text_terms.is_empty()
    }
}

/// Byte spans of an accepted `/key` token within the searched text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickAccessMatch {
    /// The whole `/key` token, slash included.
    pub token: Range<usize>,
    /// Just the key.
    pub key: Range<usize>,
}

/// Parse a raw query string.
pub fn parse_query(raw: &str) -> ParsedQuery {
    let mut remaining = raw.trim().to_string();

    let quick_access_key = find_quick_access(&remaining).map(|m| {
        let key = remaining[m.key].to_string();
        remaining.replace_range(m.token, "");
        key
    });

    let tags: Vec<String> = TAG_PATTERN
        .captures_iter(&remaining)
        .map(|caps| caps[1].to_string())
        .collect();
    let remaining = TAG_PATTERN.replace_all(&remaining, "");

    let text_terms = remaining.split_whitespace().map(str::to_string).collect();

    ParsedQuery {
        quick_access_key,
        tags,
        text_terms,
        original_query: raw.to_string(),
    }
}

/// Locate the first `/key` token in `text`.
///
/// Scanning goes left to right over every `/`. A candidate is the longest run
/// of ASCII alphanumerics right after the slash; it is accepted when that run
/// is non-empty and is not followed by `_` (which would continue the word).
/// The first accepted candidate wins and later slashes are never looked at.
pub fn find_quick_access(text: &str) -> Option<QuickAccessMatch> {
    let bytes = text.as_bytes();
    for (slash, _) in text.match_indices('/') {
        let start = slash + 1;
        let end = bytes[start..]
            .iter()
            .position(|b| !b.is_ascii_alphanumeric())
            .map_or(bytes.len(), |offset| start + offset);
        if end == start || bytes.get(end) == Some(&b'_') {
            continue;
        }
        return Some(QuickAccessMatch {
            token: slash..end,
            key: start..end,
        });
    }
    None
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
