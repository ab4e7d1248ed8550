//! Configuration types for prompal.
//!
//! [`Config::load`] reads `~/.config/prompal/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::defaults`] returns
//! the same defaults without touching the filesystem (useful in tests).
//!
//! The `[search.weights]`, `[suggestions]` and `[completion]` sections are the
//! engine's whole configuration surface; `[ui]` is only read by the picker.

use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[search.weights]
quick_access_match  = 1000
exact_tag_match     = 100
title_match         = 50
content_match       = 10
fuzzy_title_match   = 25
fuzzy_content_match = 5

[suggestions]
max_suggestions      = 10
include_tags         = true
include_quick_access = true
disabled             = false

[completion]
disabled = false

[ui]
theme       = "default"
max_results = 50
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration, loaded from `~/.config/prompal/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub suggestions: SuggestionOptions,
    #[serde(default)]
    pub completion: CompletionOptions,
    #[serde(default)]
    pub ui: UiConfig,
}

/// `[search]` section of `config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchConfig {
    #[serde(default)]
    pub weights: ScoreWeights,
}

/// Points awarded per satisfied criterion by the scorer.
///
/// The two fuzzy weights are reserved: they are parsed and carried around
/// but no scoring path reads them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ScoreWeights {
    #[serde(default = "default_quick_access_match")]
    pub quick_access_match: u32,
    #[serde(default = "default_exact_tag_match")]
    pub exact_tag_match: u32,
    #[serde(default = "default_title_match")]
    pub title_match: u32,
    #[serde(default = "default_content_match")]
    pub content_match: u32,
    #[serde(default = "default_fuzzy_title_match")]
    pub fuzzy_title_match: u32,
    #[serde(default = "default_fuzzy_content_match")]
    pub fuzzy_content_match: u32,
}

fn default_quick_access_match() -> u32 { 1000 }
fn default_exact_tag_match() -> u32 { 100 }
fn default_title_match() -> u32 { 50 }
fn default_content_match() -> u32 { 10 }
fn default_fuzzy_title_match() -> u32 { 25 }
fn default_fuzzy_content_match() -> u32 { 5 }

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            quick_access_match: default_quick_access_match(),
            exact_tag_match: default_exact_tag_match(),
            title_match: default_title_match(),
            content_match: default_content_match(),
            fuzzy_title_match: default_fuzzy_title_match(),
            fuzzy_content_match: default_fuzzy_content_match(),
        }
    }
}

/// `[suggestions]` section: options for the dropdown suggestion generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SuggestionOptions {
    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: usize,
    #[serde(default = "default_true")]
    pub include_tags: bool,
    #[serde(default = "default_true")]
    pub include_quick_access: bool,
    #[serde(default)]
    pub disabled: bool,
}

fn default_max_suggestions() -> usize { 10 }
fn default_true() -> bool { true }

impl Default for SuggestionOptions {
    fn default() -> Self {
        Self {
            max_suggestions: default_max_suggestions(),
            include_tags: true,
            include_quick_access: true,
            disabled: false,
        }
    }
}

/// `[completion]` section: options for the inline ghost-text completion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct CompletionOptions {
    #[serde(default)]
    pub disabled: bool,
}

/// `[ui]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_theme")]
    pub theme: String,
    /// Corpus file used when `--corpus` is not given.
    #[serde(default)]
    pub corpus_path: Option<PathBuf>,
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

fn default_theme() -> String { "default".to_string() }
fn default_max_results() -> usize { 50 }

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            corpus_path: None,
            max_results: default_max_results(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/prompal/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
            tracing::info!(path = %path.display(), "wrote default config");
        }

        Self::load_from(&path)
    }

    /// Load an explicit config file layered on top of the built-in defaults.
    /// A missing file yields the defaults.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(false))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }

    /// Corpus file to read: the configured one, else the XDG data location.
    pub fn corpus_path(&self) -> PathBuf {
        self.ui.corpus_path.clone().unwrap_or_else(default_corpus_path)
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn home_dir() -> PathBuf {
    PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
}

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".config"))
        .join("prompal")
        .join("config.toml")
}

fn default_corpus_path() -> PathBuf {
    std::env::var("XDG_DATA_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".local").join("share"))
        .join("prompal")
        .join("prompts.json")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_load() {
        let cfg = Config::defaults();
        assert_eq!(cfg.search.weights, ScoreWeights::default());
        assert_eq!(cfg.search.weights.quick_access_match, 1000);
        assert_eq!(cfg.suggestions.max_suggestions, 10);
        assert!(cfg.suggestions.include_tags);
        assert!(!cfg.completion.disabled);
        assert_eq!(cfg.ui.theme, "default");
        assert!(cfg.ui.corpus_path.is_none());
    }

    #[test]
    fn file_overrides_single_weight() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[search.weights]\ntitle_match = 70\n\n[ui]\ncorpus_path = \"/tmp/p.json\"\n",
        )
        .unwrap();

        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg.search.weights.title_match, 70);
        assert_eq!(cfg.search.weights.exact_tag_match, 100);
        assert_eq!(cfg.corpus_path(), PathBuf::from("/tmp/p.json"));
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(cfg.suggestions, SuggestionOptions::default());
    }
}
