//! Domain-specific assertion macros for prompal harnesses.
//!
//! These add context-rich failure messages that make it clear which ranking
//! or matching rule was violated.

use prompal_core::search::scorer::SearchResult;

/// Ids of a result list, in order.
pub fn result_ids(results: &[SearchResult<'_>]) -> Vec<String> {
    results.iter().map(|r| r.item.id.clone()).collect()
}

/// Assert that a result list holds exactly these ids in this order.
///
/// ```rust
/// assert_ids!(results, ["1", "4"]);
/// ```
#[macro_export]
macro_rules! assert_ids {
    ($results:expr, [$($id:expr),* $(,)?]) => {{
        let actual: Vec<String> = $crate::common::result_ids(&$results);
        let expected: Vec<&str> = vec![$($id),*];
        if actual != expected {
            panic!(
                "assert_ids! failed:\n  expected: {:?}\n  actual:   {:?}",
                expected, actual
            );
        }
    }};
}

/// Assert that every adjacent pair is ordered by score, highest first.
#[macro_export]
macro_rules! assert_sorted_by_score {
    ($results:expr) => {{
        let results = &$results;
        for pair in results.windows(2) {
            if pair[0].score < pair[1].score {
                panic!(
                    "assert_sorted_by_score! failed: {} ({}) before {} ({})",
                    pair[0].item.id, pair[0].score, pair[1].item.id, pair[1].score
                );
            }
        }
    }};
}

/// Assert a single result's score and match type.
///
/// ```rust
/// assert_scored!(results[0], 1000, MatchType::QuickAccess);
/// ```
#[macro_export]
macro_rules! assert_scored {
    ($result:expr, $score:expr, $match_type:expr) => {{
        let result = &$result;
        if result.score != $score || result.match_type != $match_type {
            panic!(
                "assert_scored! failed for {}:\n  expected: {} {:?}\n  actual:   {} {:?}",
                result.item.id, $score, $match_type, result.score, result.match_type
            );
        }
    }};
}
