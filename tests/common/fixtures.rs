//! Static prompt corpora used across harnesses.

use super::builders::{corpus_of, PromptBuilder};
use prompal_core::{Corpus, Prompt};

/// The review corpus: one keyed TypeScript review prompt and one plain
/// checklist sharing the `review` tag.
pub fn review_prompts() -> Vec<Prompt> {
    vec![
        PromptBuilder::new("1", "guide")
            .title("TypeScript Review Guidelines")
            .tags(["review", "typescript", "guidelines"])
            .key("rvw")
            .build(),
        PromptBuilder::new("4", "...")
            .title("Code Review Checklist")
            .tags(["review", "checklist"])
            .build(),
    ]
}

pub fn review_corpus() -> Corpus {
    corpus_of(review_prompts())
}

/// A broader corpus for ranking and vocabulary tests.
pub fn library_prompts() -> Vec<Prompt> {
    vec![
        PromptBuilder::new("sql-opt", "Explain the query plan and suggest indexes")
            .title("SQL optimisation")
            .tags(["database", "sql", "performance"])
            .key("sql")
            .build(),
        PromptBuilder::new("react-hooks", "Refactor this component to use hooks")
            .title("React hooks refactor")
            .tags(["react", "refactor", "frontend"])
            .key("hooks")
            .build(),
        PromptBuilder::new("api-doc", "Write OpenAPI docs for this endpoint")
            .title("API documentation")
            .tags(["backend", "docs"])
            .key("apidoc")
            .build(),
        PromptBuilder::new("api", "Design a REST API for the resource")
            .tags(["backend", "design"])
            .key("api")
            .build(),
        PromptBuilder::new("review-ja", "このコードをレビューしてください")
            .title("コードレビュー")
            .tags(["レビュー", "コード"])
            .build(),
        PromptBuilder::new("commit", "Write a conventional commit message for the diff")
            .tags(["git"])
            .build(),
    ]
}

pub fn library_corpus() -> Corpus {
    corpus_of(library_prompts())
}

/// JSON form of [`review_prompts`], as the prompt store writes it.
pub const REVIEW_JSON: &str = r#"[
  {
    "id": "1",
    "title": "TypeScript Review Guidelines",
    "content": "guide",
    "tags": ["review", "typescript", "guidelines"],
    "quickAccessKey": "rvw",
    "createdAt": "2024-01-01T00:00:00Z",
    "updatedAt": "2024-01-01T00:00:00Z"
  },
  {
    "id": "4",
    "title": "Code Review Checklist",
    "content": "...",
    "tags": ["review", "checklist"],
    "createdAt": "2024-01-01T00:00:00Z",
    "updatedAt": "2024-01-01T00:00:00Z"
  }
]"#;
