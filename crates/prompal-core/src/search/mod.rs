//! Search layer.
//!
//! The free functions ([`search`], [`suggest::suggest`], [`complete::complete`])
//! are pure and take everything they need as arguments. [`SearchEngine`]
//! bundles them with the loaded configuration and a vocabulary cache, which
//! is what the CLI and the picker hold on to.

pub mod complete;
pub mod parser;
pub mod scorer;
pub mod suggest;
pub mod vocabulary;

use crate::config::{CompletionOptions, Config, ScoreWeights, SuggestionOptions};
use crate::corpus::Corpus;
use crate::Prompt;
use complete::InlineCompletion;
use parser::ParsedQuery;
use scorer::SearchResult;
use suggest::Suggestions;
use vocabulary::VocabularyCache;

pub use complete::complete;
pub use parser::parse_query;
pub use scorer::score;
pub use suggest::suggest;

/// What a search call produced.
#[derive(Debug, Clone)]
pub struct SearchOutcome<'a> {
    pub parsed: ParsedQuery,
    pub hits: Hits<'a>,
}

#[derive(Debug, Clone)]
pub enum Hits<'a> {
    /// The query had no criteria, so the whole corpus is shown unranked.
    All(&'a [Prompt]),
    /// Qualifying prompts, best first.
    Ranked(Vec<SearchResult<'a>>),
}

impl<'a> Hits<'a> {
    pub fn len(&self) -> usize {
        match self {
            Hits::All(prompts) => prompts.len(),
            Hits::Ranked(results) => results.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The matching prompts in display order.
    pub fn prompts(&self) -> Vec<&'a Prompt> {
        match self {
            Hits::All(prompts) => prompts.iter().collect(),
            Hits::Ranked(results) => results.iter().map(|r| r.item).collect(),
        }
    }
}

/// Parse `raw` and rank `prompts` against it.
pub fn search<'a>(prompts: &'a [Prompt], raw: &str, weights: &ScoreWeights) -> SearchOutcome<'a> {
    let parsed = parse_query(raw);
    let hits = if parsed.is_empty() {
        Hits::All(prompts)
    } else {
        Hits::Ranked(score(prompts, &parsed, weights))
    };
    tracing::debug!(query = raw, hits = hits.len(), "search");
    SearchOutcome { parsed, hits }
}

/// Split `raw` into everything up to and including the last whitespace
/// character, and the term being typed after it.
pub(crate) fn split_trailing_term(raw: &str) -> (&str, &str) {
    match raw.char_indices().rev().find(|(_, c)| c.is_whitespace()) {
        Some((idx, c)) => raw.split_at(idx + c.len_utf8()),
        None => ("", raw),
    }
}

/// Configured engine with a vocabulary cache for the current corpus.
#[derive(Debug, Default)]
pub struct SearchEngine {
    weights: ScoreWeights,
    suggestions: SuggestionOptions,
    completion: CompletionOptions,
    vocabulary: VocabularyCache,
}

impl SearchEngine {
    pub fn new(
        weights: ScoreWeights,
        suggestions: SuggestionOptions,
        completion: CompletionOptions,
    ) -> Self {
        Self {
            weights,
            suggestions,
            completion,
            vocabulary: VocabularyCache::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.search.weights, config.suggestions, config.completion)
    }

    pub fn search<'a>(&self, corpus: &'a Corpus, raw: &str) -> SearchOutcome<'a> {
        search(corpus.prompts(), raw, &self.weights)
    }

    pub fn suggest(&mut self, corpus: &Corpus, raw: &str) -> Suggestions {
        let opts = self.suggestions;
        suggest(self.vocabulary.get(corpus), raw, &opts)
    }

    pub fn complete(&mut self, corpus: &Corpus, raw: &str) -> InlineCompletion {
        let opts = self.completion;
        complete(self.vocabulary.get(corpus), raw, &opts)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
