//! Suggestion dropdown: floats under the query bar while the trailing token
//! is a `#tag` or `/key` prefix with matching vocabulary entries.

use crate::theme::Theme;
use prompal_core::search::suggest::{Suggestion, Suggestions};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Widget},
};

pub struct SuggestionList<'a> {
    suggestions: &'a Suggestions,
    selected: usize,
    theme: &'a Theme,
}

impl<'a> SuggestionList<'a> {
    pub fn new(suggestions: &'a Suggestions, selected: usize, theme: &'a Theme) -> Self {
        Self { suggestions, selected, theme }
    }

    /// Rows needed including borders.
    pub fn height(&self) -> u16 {
        self.suggestions.len() as u16 + 2
    }
}

impl Widget for SuggestionList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        let block = Block::bordered()
            .title(" Suggestions ")
            .border_style(self.theme.border_unfocused);
        let inner = block.inner(area);
        block.render(area, buf);

        let lines: Vec<Line> = self
            .suggestions
            .suggestions
            .iter()
            .enumerate()
            .map(|(row, s)| {
                let line = render_suggestion(s, self.theme);
                if row == self.selected {
                    line.patch_style(self.theme.selected)
                } else {
                    line
                }
            })
            .collect();
        Paragraph::new(lines).render(inner, buf);
    }
}

/// Split the display text around its match range so the matched part can be
/// highlighted. Ranges are char offsets.
fn render_suggestion<'a>(s: &'a Suggestion, theme: &Theme) -> Line<'a> {
    let mut spans = Vec::with_capacity(4);
    match s.match_range {
        Some(range) => {
            let (head, rest) = split_at_char(&s.text, range.start);
            let (hit, tail) = split_at_char(rest, range.end - range.start);
            spans.push(Span::raw(head));
            spans.push(Span::styled(hit, theme.search_highlight));
            spans.push(Span::raw(tail));
        }
        None => spans.push(Span::raw(s.text.as_str())),
    }
    if let Some(desc) = s.description.as_deref() {
        spans.push(Span::styled(
            format!("  {desc}"),
            Style::default().add_modifier(Modifier::DIM),
        ));
    }
    Line::from(spans)
}

fn split_at_char(s: &str, n: usize) -> (&str, &str) {
    let idx = s.char_indices().nth(n).map_or(s.len(), |(i, _)| i);
    s.split_at(idx)
}
