//! Suggestion generator: the dropdown under the search box.
//!
//! Only the token after the last whitespace is looked at. When it starts with
//! `#` the tag vocabulary is offered, when it starts with `/` the quick
//! access keys are. Entries are filtered by case-insensitive substring, so
//! `#act` offers `#react`. Each category contributes at most
//! `ceil(max_suggestions / 3)` entries.

use crate::config::SuggestionOptions;
use crate::search::split_trailing_term;
use crate::search::vocabulary::Vocabulary;
use serde::Serialize;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SuggestionKind {
    Tag,
    QuickAccess,
    /// Free text candidates. Reserved: nothing produces them yet.
    Text,
}

impl SuggestionKind {
    /// Lower sorts first.
    pub fn priority(self) -> u8 {
        match self {
            SuggestionKind::QuickAccess => 1,
            SuggestionKind::Tag => 2,
            SuggestionKind::Text => 3,
        }
    }
}

/// Char offsets into [`Suggestion::text`] of the part that matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatchRange {
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: SuggestionKind,
    /// Display form, marker included (`#react`).
    pub text: String,
    /// The whole input after accepting this suggestion.
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_range: Option<MatchRange>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestions {
    pub suggestions: Vec<Suggestion>,
    pub is_visible: bool,
}

impl Suggestions {
    fn new(suggestions: Vec<Suggestion>) -> Self {
        let is_visible = !suggestions.is_empty();
        Self { suggestions, is_visible }
    }

    pub fn len(&self) -> usize {
        self.suggestions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suggestions.is_empty()
    }
}

/// Generate dropdown suggestions for the trailing token of `raw`.
pub fn suggest(vocab: &Vocabulary, raw: &str, opts: &SuggestionOptions) -> Suggestions {
    if opts.disabled || raw.trim().is_empty() {
        return Suggestions::default();
    }

    let (before, current) = split_trailing_term(raw);
    let per_category = opts.max_suggestions.div_ceil(3);
    let mut out = Vec::new();

    if opts.include_tags {
        if let Some(needle) = current.strip_prefix('#') {
            collect(&mut out, SuggestionKind::Tag, vocab.tags(), needle, before, per_category);
        }
    }
    if opts.include_quick_access {
        if let Some(needle) = current.strip_prefix('/') {
            collect(
                &mut out,
                SuggestionKind::QuickAccess,
                vocab.quick_access_keys(),
                needle,
                before,
                per_category,
            );
        }
    }

    let mut seen = HashSet::new();
    out.retain(|s: &Suggestion| seen.insert((s.kind, s.text.clone())));
    out.sort_by(|a, b| {
        a.kind
            .priority()
            .cmp(&b.kind.priority())
            .then_with(|| {
                let a_start = a.match_range.map(|r| r.start);
                let b_start = b.match_range.map(|r| r.start);
                a_start.cmp(&b_start)
            })
            .then_with(|| {
                a.text
                    .to_lowercase()
                    .cmp(&b.text.to_lowercase())
                    .then_with(|| a.text.cmp(&b.text))
            })
    });
    out.truncate(opts.max_suggestions);

    tracing::debug!(query = raw, count = out.len(), "suggestions generated");
    Suggestions::new(out)
}

fn collect(
    out: &mut Vec<Suggestion>,
    kind: SuggestionKind,
    entries: &[String],
    needle: &str,
    before: &str,
    cap: usize,
) {
    let (marker, id_prefix, label) = match kind {
        SuggestionKind::Tag => ('#', "tag", "Tag"),
        SuggestionKind::QuickAccess => ('/', "quickaccess", "Quick access"),
        SuggestionKind::Text => return,
    };
    let needle_lower = needle.to_lowercase();

    let candidates = entries.iter().filter_map(|entry| {
        if needle_lower.is_empty() {
            return Some((entry, None));
        }
        let entry_lower = entry.to_lowercase();
        let byte_idx = entry_lower.find(&needle_lower)?;
        // +1 skips the marker in the display text.
        let start = entry_lower[..byte_idx].chars().count() + 1;
        let end = start + needle_lower.chars().count();
        Some((entry, Some(MatchRange { start, end })))
    });

    for (entry, match_range) in candidates.take(cap) {
        out.push(Suggestion {
            id: format!("{id_prefix}-{entry}"),
            kind,
            text: format!("{marker}{entry}"),
            value: format!("{before}{marker}{entry} "),
            description: Some(format!("{label}: {entry}")),
            match_range,
        });
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
