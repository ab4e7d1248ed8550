//! prompal-core: the prompt search engine.
//!
//! This crate holds everything that does not touch a terminal: the prompt
//! data model, corpus loading, configuration and the search layer.
//!
//! # Architecture
//!
//! ```text
//! corpus.json ──► Corpus ──► SearchEngine ──┬──► search   (parser + scorer)
//!                              │            ├──► suggest  (dropdown)
//!                              │            └──► complete (ghost text)
//!                              └── VocabularyCache
//! ```
//!
//! Everything in [`search`] is synchronous and side-effect free apart from
//! `tracing` events; a query is evaluated against an immutable snapshot.

pub mod config;
pub mod corpus;
pub mod search;
pub mod tags;
pub mod types;

pub use corpus::{Corpus, CorpusError};
pub use search::SearchEngine;
pub use types::Prompt;
