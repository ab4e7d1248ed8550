//! Result list: the ranked prompts under the query bar.
//!
//! Each row shows the display title, the tags as coloured chips and, for
//! ranked results, the match type and score. The selected row is kept in
//! view by scrolling the window.
//!
//! Rows are computed once per query edit ([`ResultRow::from_hits`]) and hold
//! corpus indices, so redraws never re-run the search.

use crate::theme::Theme;
use prompal_core::search::scorer::MatchType;
use prompal_core::search::Hits;
use prompal_core::Prompt;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};
use std::collections::HashMap;

/// One listed prompt: its position in the corpus plus the score badge for
/// ranked hits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultRow {
    pub index: usize,
    pub badge: Option<(MatchType, u32)>,
}

impl ResultRow {
    /// Rows for `hits`, in display order. `prompts` is the slice `hits` was
    /// computed from.
    pub fn from_hits(prompts: &[Prompt], hits: &Hits<'_>) -> Vec<Self> {
        match hits {
            Hits::All(all) => (0..all.len())
                .map(|index| ResultRow { index, badge: None })
                .collect(),
            Hits::Ranked(results) => {
                let positions: HashMap<&str, usize> = prompts
                    .iter()
                    .enumerate()
                    .map(|(i, p)| (p.id.as_str(), i))
                    .collect();
                results
                    .iter()
                    .filter_map(|r| {
                        let index = *positions.get(r.item.id.as_str())?;
                        Some(ResultRow {
                            index,
                            badge: Some((r.match_type, r.score)),
                        })
                    })
                    .collect()
            }
        }
    }
}

pub struct ResultList<'a> {
    prompts: &'a [Prompt],
    rows: &'a [ResultRow],
    selected: usize,
    max_results: usize,
    theme: &'a Theme,
}

impl<'a> ResultList<'a> {
    pub fn new(
        prompts: &'a [Prompt],
        rows: &'a [ResultRow],
        selected: usize,
        max_results: usize,
        theme: &'a Theme,
    ) -> Self {
        Self { prompts, rows, selected, max_results, theme }
    }
}

impl Widget for ResultList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let total = self.rows.len();
        let shown = total.min(self.max_results);
        let title = if shown < total {
            format!(" Prompts ({shown} of {total}) ")
        } else {
            format!(" Prompts ({shown}) ")
        };
        let block = Block::bordered()
            .title(title)
            .border_style(self.theme.border_unfocused);
        let inner = block.inner(area);
        block.render(area, buf);

        if shown == 0 {
            Paragraph::new(Line::from(Span::styled(
                "no matching prompts",
                Style::default().add_modifier(Modifier::DIM),
            )))
            .render(inner, buf);
            return;
        }

        let height = (inner.height as usize).max(1);
        let start = window_start(self.selected, height, shown);
        let end = (start + height).min(shown);

        let lines: Vec<Line> = self.rows[start..end]
            .iter()
            .zip(start..)
            .filter_map(|(row, idx)| {
                let line = render_prompt(self.prompts.get(row.index)?, row.badge, self.theme);
                Some(if idx == self.selected {
                    line.patch_style(self.theme.selected)
                } else {
                    line
                })
            })
            .collect();
        Paragraph::new(lines).render(inner, buf);
    }
}

/// First visible row so that `selected` stays on screen.
fn window_start(selected: usize, height: usize, total: usize) -> usize {
    if selected < height {
        0
    } else {
        (selected + 1 - height).min(total.saturating_sub(height))
    }
}

fn render_prompt<'a>(
    prompt: &'a Prompt,
    badge: Option<(MatchType, u32)>,
    theme: &Theme,
) -> Line<'a> {
    let mut spans = Vec::new();
    if let Some(key) = prompt.quick_access_key.as_deref() {
        spans.push(Span::styled(format!("/{key} "), theme.match_quick_access));
    }
    spans.push(Span::raw(prompt.display_title()));
    for tag in &prompt.tags {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(format!("#{tag}"), theme.tag_style(tag)));
    }
    if let Some((match_type, score)) = badge {
        spans.push(Span::styled(
            format!("  [{match_type} {score}]"),
            theme.match_style(match_type),
        ));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use prompal_core::config::ScoreWeights;
    use prompal_core::search::search;
    use prompal_core::Corpus;

    fn corpus() -> Corpus {
        Corpus::from_json_str(
            r#"[
            {"id":"a","content":"x","tags":["sql"],"createdAt":"2024-01-01T00:00:00Z","updatedAt":"2024-01-01T00:00:00Z"},
            {"id":"b","title":"sql tips","content":"y","tags":["sql"],"createdAt":"2024-01-01T00:00:00Z","updatedAt":"2024-01-01T00:00:00Z"}
        ]"#,
        )
        .unwrap()
    }

    #[test]
    fn rows_follow_ranking_and_point_into_the_corpus() {
        let corpus = corpus();
        let outcome = search(corpus.prompts(), "#sql tips", &ScoreWeights::default());
        let rows = ResultRow::from_hits(corpus.prompts(), &outcome.hits);
        assert_eq!(
            rows,
            vec![ResultRow {
                index: 1,
                badge: Some((MatchType::Mixed, 150)),
            }]
        );
    }

    #[test]
    fn unranked_rows_have_no_badge() {
        let corpus = corpus();
        let outcome = search(corpus.prompts(), "", &ScoreWeights::default());
        let rows = ResultRow::from_hits(corpus.prompts(), &outcome.hits);
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.badge.is_none()));
        assert_eq!(rows[1].index, 1);
    }

    #[test]
    fn window_keeps_selection_visible() {
        assert_eq!(window_start(0, 5, 20), 0);
        assert_eq!(window_start(4, 5, 20), 0);
        assert_eq!(window_start(5, 5, 20), 1);
        assert_eq!(window_start(19, 5, 20), 15);
        assert_eq!(window_start(3, 10, 4), 0);
    }
}
