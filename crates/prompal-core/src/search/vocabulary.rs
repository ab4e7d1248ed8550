//! Vocabulary index: the sorted, unique tags and quick access keys of a
//! corpus, which both the suggestion generator and inline completion draw
//! from.
//!
//! A [`Vocabulary`] is immutable and remembers the corpus fingerprint it was
//! built from. [`VocabularyCache`] holds at most one and replaces it wholesale
//! when it is asked for a corpus with a different fingerprint.

use crate::corpus::{self, Corpus};
use crate::Prompt;
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    fingerprint: u64,
    tags: Vec<String>,
    quick_access_keys: Vec<String>,
}

impl Vocabulary {
    /// Collect vocabularies from a prompt slice. Empty strings are skipped.
    pub fn build(prompts: &[Prompt]) -> Self {
        Self::with_fingerprint(prompts, corpus::fingerprint(prompts))
    }

    fn with_fingerprint(prompts: &[Prompt], fingerprint: u64) -> Self {
        let mut tags = BTreeSet::new();
        let mut keys = BTreeSet::new();
        for prompt in prompts {
            tags.extend(prompt.tags.iter().filter(|t| !t.is_empty()).cloned());
            if let Some(key) = prompt.quick_access_key.as_ref().filter(|k| !k.is_empty()) {
                keys.insert(key.clone());
            }
        }
        Self {
            fingerprint,
            tags: tags.into_iter().collect(),
            quick_access_keys: keys.into_iter().collect(),
        }
    }

    /// Build directly from explicit entries; used by tests and benches.
    pub fn from_entries<T, K>(tags: T, quick_access_keys: K) -> Self
    where
        T: IntoIterator,
        T::Item: Into<String>,
        K: IntoIterator,
        K::Item: Into<String>,
    {
        let tags: BTreeSet<String> = tags.into_iter().map(Into::into).collect();
        let keys: BTreeSet<String> = quick_access_keys.into_iter().map(Into::into).collect();
        Self {
            fingerprint: 0,
            tags: tags.into_iter().collect(),
            quick_access_keys: keys.into_iter().collect(),
        }
    }

    /// Sorted unique tags.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Sorted unique quick access keys.
    pub fn quick_access_keys(&self) -> &[String] {
        &self.quick_access_keys
    }

    pub fn fingerprint(&self) -> u64 {
        self.fingerprint
    }
}

/// Owned single-slot cache of the vocabulary for the current corpus.
#[derive(Debug, Default)]
pub struct VocabularyCache {
    current: Option<Vocabulary>,
}

impl VocabularyCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The vocabulary for `corpus`, rebuilt if the corpus changed since the
    /// last call.
    pub fn get(&mut self, corpus: &Corpus) -> &Vocabulary {
        if self.current.as_ref().map(Vocabulary::fingerprint) != Some(corpus.fingerprint()) {
            self.current = None;
        }
        self.current.get_or_insert_with(|| {
            tracing::debug!(fingerprint = corpus.fingerprint(), "rebuilding vocabulary");
            Vocabulary::with_fingerprint(corpus.prompts(), corpus.fingerprint())
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
