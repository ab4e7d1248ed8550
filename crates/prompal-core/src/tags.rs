//! Tag list helpers used when prompts enter a corpus.

use std::collections::BTreeSet;

/// Split a comma-separated tag string, trimming each entry and dropping
/// empty ones. Order is preserved.
pub fn parse_tag_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Join tags back into the `a, b, c` form accepted by [`parse_tag_list`].
pub fn format_tag_list(tags: &[String]) -> String {
    tags.join(", ")
}

/// Trim, drop blanks, dedup and sort.
pub fn normalize_tags(tags: &[String]) -> Vec<String> {
    tags.iter()
        .map(|tag| tag.trim())
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
