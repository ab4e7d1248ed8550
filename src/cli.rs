//! Non-interactive subcommands: `search`, `suggest` and `complete`.
//!
//! Each runner writes either a human-readable listing or, with `--json`, the
//! serialized engine output to the given writer.

use anyhow::Context;
use prompal_core::search::parser::ParsedQuery;
use prompal_core::search::scorer::MatchType;
use prompal_core::search::Hits;
use prompal_core::{tags, Corpus, Prompt, SearchEngine};
use serde::Serialize;
use std::io::Write;

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Rank the corpus against a query.
    Search(SearchArgs),
    /// List dropdown suggestions for the last token of a query.
    Suggest(QueryArgs),
    /// Show the inline completion for the last token of a query.
    Complete(QueryArgs),
}

#[derive(Debug, clap::Parser)]
pub struct SearchArgs {
    #[clap(flatten)]
    pub query: QueryArgs,

    /// Maximum number of results to print. Defaults to `[ui] max_results`.
    #[arg(long)]
    pub limit: Option<usize>,
}

#[derive(Debug, clap::Parser)]
pub struct QueryArgs {
    /// Raw query text, e.g. `/rvw #typescript guide`. Several words are
    /// joined with single spaces.
    #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
    pub query: Vec<String>,

    /// Print the engine output as JSON.
    #[arg(long)]
    pub json: bool,
}

impl QueryArgs {
    pub fn raw(&self) -> String {
        self.query.join(" ")
    }
}

/// One row of `search --json`. Unranked listings carry no score.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ResultRow<'a> {
    item: &'a Prompt,
    #[serde(skip_serializing_if = "Option::is_none")]
    score: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    match_type: Option<MatchType>,
    #[serde(skip_serializing_if = "no_terms")]
    matched_terms: &'a [String],
}

fn no_terms(terms: &&[String]) -> bool {
    terms.is_empty()
}

#[derive(Debug, Serialize)]
struct SearchReport<'a> {
    query: &'a ParsedQuery,
    total: usize,
    results: Vec<ResultRow<'a>>,
}

pub fn run(
    command: &Command,
    corpus: &Corpus,
    engine: &mut SearchEngine,
    default_limit: usize,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    match command {
        Command::Search(args) => run_search(
            corpus,
            engine,
            &args.query,
            args.limit.unwrap_or(default_limit),
            out,
        ),
        Command::Suggest(args) => run_suggest(corpus, engine, args, out),
        Command::Complete(args) => run_complete(corpus, engine, args, out),
    }
}

pub fn run_search(
    corpus: &Corpus,
    engine: &SearchEngine,
    args: &QueryArgs,
    limit: usize,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let raw = args.raw();
    let outcome = engine.search(corpus, &raw);
    let rows: Vec<ResultRow<'_>> = match &outcome.hits {
        Hits::All(prompts) => prompts
            .iter()
            .map(|item| ResultRow {
                item,
                score: None,
                match_type: None,
                matched_terms: &[],
            })
            .collect(),
        Hits::Ranked(results) => results
            .iter()
            .map(|r| ResultRow {
                item: r.item,
                score: Some(r.score),
                match_type: Some(r.match_type),
                matched_terms: &r.matched_terms,
            })
            .collect(),
    };
    let total = rows.len();
    let rows: Vec<ResultRow<'_>> = rows.into_iter().take(limit).collect();

    if args.json {
        let report = SearchReport {
            query: &outcome.parsed,
            total,
            results: rows,
        };
        serde_json::to_writer_pretty(&mut *out, &report).context("failed to write JSON")?;
        writeln!(out)?;
        return Ok(());
    }

    if rows.is_empty() {
        writeln!(out, "no matching prompts")?;
        return Ok(());
    }
    for row in &rows {
        if let (Some(score), Some(match_type)) = (row.score, row.match_type) {
            write!(out, "{score:>5}  {:<11}  ", match_type.to_string())?;
        }
        write!(out, "{:<12}  {}", row.item.id, row.item.display_title())?;
        if row.item.tags.is_empty() {
            writeln!(out)?;
        } else {
            writeln!(out, "  [{}]", tags::format_tag_list(&row.item.tags))?;
        }
    }
    if total > rows.len() {
        writeln!(out, "... {} more", total - rows.len())?;
    }
    Ok(())
}

pub fn run_suggest(
    corpus: &Corpus,
    engine: &mut SearchEngine,
    args: &QueryArgs,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let suggestions = engine.suggest(corpus, &args.raw());
    if args.json {
        serde_json::to_writer_pretty(&mut *out, &suggestions).context("failed to write JSON")?;
        writeln!(out)?;
        return Ok(());
    }
    for s in &suggestions.suggestions {
        writeln!(out, "{:<24}  {}", s.text, s.description.as_deref().unwrap_or_default())?;
    }
    Ok(())
}

pub fn run_complete(
    corpus: &Corpus,
    engine: &mut SearchEngine,
    args: &QueryArgs,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let completion = engine.complete(corpus, &args.raw());
    if args.json {
        serde_json::to_writer_pretty(&mut *out, &completion).context("failed to write JSON")?;
        writeln!(out)?;
        return Ok(());
    }
    writeln!(out, "{}", completion.full_text)?;
    Ok(())
}
