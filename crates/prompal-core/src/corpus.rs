//! Corpus: an immutable snapshot of [`Prompt`] values handed to the engine.
//!
//! The prompt store is the single source of truth; a `Corpus` is what a
//! search call sees of it. The fingerprint is computed once at construction
//! and is what vocabulary caches key on, so a new snapshot with different
//! contents always invalidates them.

use crate::{tags, Prompt};
use std::collections::hash_map::DefaultHasher;
use std::collections::{HashMap, HashSet};
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};

const QUICK_ACCESS_KEY_LEN: std::ops::RangeInclusive<usize> = 2..=20;

#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("failed to read corpus {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse corpus {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("duplicate prompt id {0:?}")]
    DuplicateId(String),
}

#[derive(Debug, Clone)]
pub struct Corpus {
    prompts: Vec<Prompt>,
    fingerprint: u64,
}

impl Default for Corpus {
    fn default() -> Self {
        Self {
            prompts: Vec::new(),
            fingerprint: fingerprint(&[]),
        }
    }
}

impl Corpus {
    /// Wrap prompts as-is. Ids must be unique.
    pub fn new(prompts: Vec<Prompt>) -> Result<Self, CorpusError> {
        let mut seen = HashSet::with_capacity(prompts.len());
        for prompt in &prompts {
            if !seen.insert(prompt.id.as_str()) {
                return Err(CorpusError::DuplicateId(prompt.id.clone()));
            }
        }
        let fingerprint = fingerprint(&prompts);
        Ok(Self { prompts, fingerprint })
    }

    /// Parse a JSON array of prompts, normalising tags on the way in.
    pub fn from_json_str(src: &str) -> Result<Self, CorpusError> {
        let prompts: Vec<Prompt> = serde_json::from_str(src).map_err(|source| CorpusError::Parse {
            path: PathBuf::from("<inline>"),
            source,
        })?;
        Self::ingest(prompts)
    }

    /// Read a JSON corpus file written by the prompt store.
    pub fn load(path: &Path) -> Result<Self, CorpusError> {
        let src = std::fs::read_to_string(path).map_err(|source| CorpusError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let prompts: Vec<Prompt> = serde_json::from_str(&src).map_err(|source| CorpusError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        let corpus = Self::ingest(prompts)?;
        tracing::info!(path = %path.display(), prompts = corpus.len(), "corpus loaded");
        Ok(corpus)
    }

    fn ingest(mut prompts: Vec<Prompt>) -> Result<Self, CorpusError> {
        for prompt in &mut prompts {
            prompt.tags = tags::normalize_tags(&prompt.tags);
        }
        warn_on_quick_access_keys(&prompts);
        Self::new(prompts)
    }

    pub fn prompts(&self) -> &[Prompt] {
        &self.prompts
    }

    pub fn fingerprint(&self) -> u64 {
        self.fingerprint
    }

    pub fn len(&self) -> usize {
        self.prompts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Prompt> {
        self.prompts.iter().find(|p| p.id == id)
    }
}

/// Content hash of a prompt slice. Equal slices always hash equal within a
/// process; any edit to any prompt changes it with overwhelming probability.
pub fn fingerprint(prompts: &[Prompt]) -> u64 {
    let mut hasher = DefaultHasher::new();
    prompts.hash(&mut hasher);
    hasher.finish()
}

/// Keys are meant to be 2–20 ASCII alphanumerics and unique. Neither rule is
/// enforced here; offenders are only reported.
fn warn_on_quick_access_keys(prompts: &[Prompt]) {
    let mut owners: HashMap<String, Vec<&str>> = HashMap::new();
    for prompt in prompts {
        let Some(key) = prompt.quick_access_key.as_deref() else {
            continue;
        };
        let well_formed = QUICK_ACCESS_KEY_LEN.contains(&key.len())
            && key.chars().all(|c| c.is_ascii_alphanumeric());
        if !well_formed {
            tracing::warn!(id = %prompt.id, key, "quick access key is not 2-20 alphanumerics");
        }
        owners.entry(key.to_lowercase()).or_default().push(&prompt.id);
    }
    for (key, ids) in owners {
        if ids.len() > 1 {
            tracing::warn!(key = %key, ?ids, "quick access key shared by several prompts");
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_PROMPTS: &str = r#"[
        {"id":"1","title":"Review","content":"review code","tags":[" review","code","review"],
         "quickAccessKey":"rvw","createdAt":"2024-01-01T00:00:00Z","updatedAt":"2024-01-01T00:00:00Z"},
        {"id":"2","content":"sql","createdAt":"2024-01-02T00:00:00Z","updatedAt":"2024-01-02T00:00:00Z"}
    ]"#;

    #[test]
    fn ingest_normalizes_tags() {
        let corpus = Corpus::from_json_str(TWO_PROMPTS).unwrap();
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.get("1").unwrap().tags, vec!["code", "review"]);
        assert!(corpus.get("2").unwrap().tags.is_empty());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut prompts = Corpus::from_json_str(TWO_PROMPTS).unwrap().prompts().to_vec();
        prompts[1].id = "1".to_string();
        let err = Corpus::new(prompts).unwrap_err();
        assert!(matches!(err, CorpusError::DuplicateId(id) if id == "1"));
    }

    #[test]
    fn fingerprint_tracks_content() {
        let a = Corpus::from_json_str(TWO_PROMPTS).unwrap();
        let b = Corpus::from_json_str(TWO_PROMPTS).unwrap();
        assert_eq!(a.fingerprint(), b.fingerprint());

        let mut prompts = a.prompts().to_vec();
        prompts[0].tags.push("extra".to_string());
        let c = Corpus::new(prompts).unwrap();
        assert_ne!(a.fingerprint(), c.fingerprint());
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = Corpus::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, CorpusError::Parse { .. }));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Corpus::load(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, CorpusError::Io { .. }));
        assert!(err.to_string().contains("nope.json"));
    }
}
