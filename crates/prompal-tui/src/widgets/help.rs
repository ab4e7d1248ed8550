//! Help popup: centred floating overlay listing keybindings and query syntax.
//!
//! Toggle with `F1`; close with `F1` or `Escape`.

use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Widget},
};

const BINDINGS: &[(&str, &str)] = &[
    ("/key", "Prompt with that quick access key"),
    ("#tag", "Prompts carrying the tag (repeatable)"),
    ("text", "Title, tags, key or content contain it"),
    ("", ""),
    ("Tab", "Take ghost text, else the suggestion"),
    ("Enter", "Apply suggestion, else choose prompt"),
    ("↑ / ↓  Ctrl+p / Ctrl+n", "Move selection"),
    ("← / →  Home / End", "Move cursor"),
    ("Ctrl+u", "Clear the query"),
    ("Escape", "Close dropdown, else quit"),
    ("Ctrl+c", "Quit"),
    ("F1", "Toggle this help popup"),
];

pub struct HelpPopup<'a> {
    theme: &'a Theme,
}

impl<'a> HelpPopup<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Widget for HelpPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = centered_rect(64, BINDINGS.len() as u16 + 2, area);
        Clear.render(popup, buf);

        let block = Block::bordered()
            .title(" prompal: help (F1 to close) ")
            .border_style(self.theme.border_focused);
        let inner = block.inner(popup);
        block.render(popup, buf);

        let lines: Vec<Line> = BINDINGS
            .iter()
            .map(|(key, desc)| {
                Line::from(vec![
                    Span::styled(
                        format!("  {:<24}", key),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(*desc),
                ])
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}
