//! Match scorer: ranks a corpus against a [`ParsedQuery`].
//!
//! Every criterion in the query is mandatory: the quick access key must
//! equal the prompt's key, every tag must be on the prompt, and every text
//! term must be found somewhere in it. A prompt failing any of them is left
//! out entirely; there are no partial matches.
//!
//! # Points
//!
//! | Criterion | Weight |
//! |-----------|--------|
//! | `/key` equals prompt key | `quick_access_match` |
//! | each `#tag` on the prompt | `exact_tag_match` |
//! | text term in key, tag or title | `title_match` |
//! | text term only in content | `content_match` |
//!
//! Case is ignored everywhere. Text terms are substring matches, tags and
//! keys are whole-value matches.

use crate::config::ScoreWeights;
use crate::search::parser::ParsedQuery;
use crate::Prompt;
use serde::Serialize;

/// Why a prompt matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchType {
    QuickAccess,
    Tag,
    Title,
    Content,
    /// Points came from more than one of key, tags and text.
    Mixed,
}

impl std::fmt::Display for MatchType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchType::QuickAccess => write!(f, "quickAccess"),
            MatchType::Tag => write!(f, "tag"),
            MatchType::Title => write!(f, "title"),
            MatchType::Content => write!(f, "content"),
            MatchType::Mixed => write!(f, "mixed"),
        }
    }
}

/// One qualifying prompt for one query.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult<'a> {
    pub item: &'a Prompt,
    pub score: u32,
    pub match_type: MatchType,
    /// Query terms that earned points, deduplicated, first occurrence first.
    pub matched_terms: Vec<String>,
}

/// Score every prompt and return the qualifying ones, best first.
///
/// Ties keep corpus order. An empty query returns nothing; callers that want
/// "no query shows everything" handle that themselves (see
/// [`search`](crate::search::search)).
pub fn score<'a>(
    prompts: &'a [Prompt],
    query: &ParsedQuery,
    weights: &ScoreWeights,
) -> Vec<SearchResult<'a>> {
    if query.is_empty() {
        return Vec::new();
    }

    let query_tags: Vec<String> = query.tags.iter().map(|t| t.to_lowercase()).collect();
    let query_terms: Vec<String> = query.text_terms.iter().map(|t| t.to_lowercase()).collect();

    let mut results: Vec<SearchResult<'a>> = prompts
        .iter()
        .filter_map(|prompt| score_prompt(prompt, query, &query_tags, &query_terms, weights))
        .collect();

    // `sort_by` is stable, so equal scores keep corpus order.
    results.sort_by(|a, b| b.score.cmp(&a.score));
    results
}

fn score_prompt<'a>(
    prompt: &'a Prompt,
    query: &ParsedQuery,
    query_tags: &[String],
    query_terms: &[String],
    weights: &ScoreWeights,
) -> Option<SearchResult<'a>> {
    let mut total: u32 = 0;
    let mut matched = MatchedTerms::default();

    let key_lower = prompt.quick_access_key.as_deref().map(str::to_lowercase);
    let tags_lower: Vec<String> = prompt.tags.iter().map(|t| t.to_lowercase()).collect();

    let has_key_match = match query.quick_access_key.as_deref() {
        Some(wanted) => {
            if key_lower.as_deref() != Some(wanted.to_lowercase().as_str()) {
                return None;
            }
            total = total.saturating_add(weights.quick_access_match);
            matched.push(wanted);
            true
        }
        None => false,
    };

    let has_tag_match = !query_tags.is_empty();
    for wanted in query_tags {
        if !tags_lower.iter().any(|tag| tag == wanted) {
            return None;
        }
        total = total.saturating_add(weights.exact_tag_match);
        // Record the spelling of the first query tag with this lowercase form.
        let first = query_tags.iter().position(|t| t == wanted).unwrap_or_default();
        matched.push(&query.tags[first]);
    }

    let has_text_match = !query_terms.is_empty();
    let mut title_tier = false;
    if has_text_match {
        let title_lower = prompt.title.as_deref().map(str::to_lowercase);
        let content_lower = prompt.content.to_lowercase();

        for (term, original) in query_terms.iter().zip(&query.text_terms) {
            let in_title_tier = key_lower.as_deref().is_some_and(|k| k.contains(term.as_str()))
                || tags_lower.iter().any(|tag| tag.contains(term.as_str()))
                || title_lower.as_deref().is_some_and(|t| t.contains(term.as_str()));

            if in_title_tier {
                total = total.saturating_add(weights.title_match);
                title_tier = true;
            } else if content_lower.contains(term.as_str()) {
                total = total.saturating_add(weights.content_match);
            } else {
                return None;
            }
            matched.push(original);
        }
    }

    if total == 0 {
        return None;
    }

    let categories = [has_key_match, has_tag_match, has_text_match]
        .iter()
        .filter(|hit| **hit)
        .count();
    let match_type = if categories > 1 {
        MatchType::Mixed
    } else if has_key_match {
        MatchType::QuickAccess
    } else if has_tag_match {
        MatchType::Tag
    } else if title_tier {
        MatchType::Title
    } else {
        MatchType::Content
    };

    Some(SearchResult {
        item: prompt,
        score: total,
        match_type,
        matched_terms: matched.into_vec(),
    })
}

/// Insertion-ordered set of matched query terms.
#[derive(Default)]
struct MatchedTerms(Vec<String>);

impl MatchedTerms {
    fn push(&mut self, term: &str) {
        if !self.0.iter().any(|t| t == term) {
            self.0.push(term.to_string());
        }
    }

    fn into_vec(self) -> Vec<String> {
        self.0
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
