//! Inline completion integration harness.
//!
//! # What this covers
//!
//! - Prefix-only matching against the sorted vocabulary, case-insensitively.
//! - The typed part keeps the user's casing; only the remainder is appended.
//! - Exact matches yield nothing unless a longer entry shares the prefix.
//! - Empty corpus, plain text, blank input and the disabled switch.
//! - Contrast with the suggestion dropdown, which matches substrings.
//!
//! # Running
//!
//! ```sh
//! cargo test --test completion_harness
//! ```

mod common;
use common::*;

use pretty_assertions::assert_eq;
use prompal_core::config::{CompletionOptions, Config};
use prompal_core::search::complete::{complete, CompletionKind, InlineCompletion};
use prompal_core::search::vocabulary::Vocabulary;
use prompal_core::SearchEngine;
use rstest::rstest;

#[test]
fn key_prefix_completes() {
    let corpus = corpus_of(vec![keyed("1", "react"), keyed("2", "review")]);
    let c = SearchEngine::default().complete(&corpus, "/r");
    assert_eq!(
        c,
        InlineCompletion {
            completion: "eact".into(),
            full_text: "/react".into(),
            kind: Some(CompletionKind::QuickAccess),
        }
    );
}

#[test]
fn exact_key_yields_nothing() {
    let corpus = corpus_of(vec![keyed("1", "react")]);
    let c = SearchEngine::default().complete(&corpus, "/react");
    assert_eq!(c, InlineCompletion::none("/react"));
}

#[test]
fn empty_corpus_yields_nothing() {
    let corpus = corpus_of(Vec::new());
    assert_eq!(SearchEngine::default().complete(&corpus, "/"), InlineCompletion::none("/"));
    assert_eq!(SearchEngine::default().complete(&corpus, "#"), InlineCompletion::none("#"));
}

#[rstest]
#[case("#fr", "ontend", "#frontend", Some(CompletionKind::Tag))]
#[case("#FR", "ontend", "#FRontend", Some(CompletionKind::Tag))]
#[case("write #re", "act", "write #react", Some(CompletionKind::Tag))]
#[case("/api", "doc", "/apidoc", Some(CompletionKind::QuickAccess))]
#[case("/ho", "oks", "/hooks", Some(CompletionKind::QuickAccess))]
#[case("#コ", "ード", "#コード", Some(CompletionKind::Tag))]
#[case("#end", "", "#end", None)]
#[case("hooks", "", "hooks", None)]
#[case("#react ", "", "#react ", None)]
#[case("", "", "", None)]
fn completion_table(
    #[case] raw: &str,
    #[case] completion: &str,
    #[case] full_text: &str,
    #[case] kind: Option<CompletionKind>,
) {
    let corpus = library_corpus();
    let c = SearchEngine::default().complete(&corpus, raw);
    assert_eq!(c.completion, completion, "completion for {raw:?}");
    assert_eq!(c.full_text, full_text, "full text for {raw:?}");
    assert_eq!(c.kind, kind, "kind for {raw:?}");
}

#[test]
fn suggestions_match_substrings_completion_does_not() {
    let corpus = library_corpus();
    let mut engine = SearchEngine::default();
    assert!(!engine.suggest(&corpus, "#end").is_empty());
    assert!(!engine.complete(&corpus, "#end").is_some());
}

#[test]
fn disabled_by_config() {
    let mut config = Config::defaults();
    config.completion.disabled = true;
    let corpus = library_corpus();
    let c = SearchEngine::from_config(&config).complete(&corpus, "#re");
    assert_eq!(c, InlineCompletion::none("#re"));
}

#[test]
fn bare_marker_offers_first_entry() {
    let vocab = Vocabulary::from_entries(["zeta", "alpha"], ["k2", "k1"]);
    let opts = CompletionOptions::default();
    assert_eq!(complete(&vocab, "#", &opts).full_text, "#alpha");
    assert_eq!(complete(&vocab, "x /", &opts).full_text, "x /k1");
}

#[test]
fn serializes_with_wire_names() {
    let corpus = library_corpus();
    let c = SearchEngine::default().complete(&corpus, "/sq");
    let json = serde_json::to_value(&c).unwrap();
    assert_eq!(json["fullText"], "/sql");
    assert_eq!(json["type"], "quickAccess");

    let none = serde_json::to_value(InlineCompletion::none("x")).unwrap();
    assert!(none.get("type").is_none());
    assert_eq!(none["completion"], "");
}
