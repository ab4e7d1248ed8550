//! Query bar widget: the search input at the top of the picker.
//!
//! # Editing
//!
//! - `Char(c)` inserts at the cursor.
//! - `Backspace` deletes the character before the cursor.
//! - `Cursor(Left)` / `Cursor(Right)`, `Home`, `End` move the cursor.
//! - `ClearLine` empties the input.
//!
//! The inline completion is drawn as ghost text after the query, and only
//! while the cursor sits at the end of the line.

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct QueryBarState {
    pub query: String,
    /// Byte offset of the cursor within `query`.
    pub cursor: usize,
}

impl QueryBarState {
    /// Replace the whole input and park the cursor at the end.
    pub fn set(&mut self, text: impl Into<String>) {
        self.query = text.into();
        self.cursor = self.query.len();
        tracing::debug!(query = %self.query, "query: replaced");
    }

    pub fn at_end(&self) -> bool {
        self.cursor == self.query.len()
    }

    /// Apply an editing event. Returns `true` when the text changed.
    pub fn handle(&mut self, event: &AppEvent) -> bool {
        match event {
            AppEvent::Char(c) => {
                self.query.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                tracing::debug!(query = %self.query, cursor = self.cursor, "query: char inserted");
                true
            }
            AppEvent::Backspace => {
                if self.cursor == 0 {
                    return false;
                }
                let prev = self.prev_boundary();
                self.query.remove(prev);
                self.cursor = prev;
                tracing::debug!(query = %self.query, cursor = self.cursor, "query: backspace");
                true
            }
            AppEvent::ClearLine => {
                let changed = !self.query.is_empty();
                self.query.clear();
                self.cursor = 0;
                changed
            }
            AppEvent::Cursor(Direction::Left) => {
                self.cursor = self.prev_boundary();
                false
            }
            AppEvent::Cursor(Direction::Right) => {
                self.cursor = self.query[self.cursor..]
                    .chars()
                    .next()
                    .map_or(self.cursor, |c| self.cursor + c.len_utf8());
                false
            }
            AppEvent::Home => {
                self.cursor = 0;
                false
            }
            AppEvent::End => {
                self.cursor = self.query.len();
                false
            }
            _ => false,
        }
    }

    fn prev_boundary(&self) -> usize {
        self.query[..self.cursor]
            .char_indices()
            .last()
            .map_or(0, |(i, _)| i)
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct QueryBar<'a> {
    state: &'a QueryBarState,
    ghost: &'a str,
    theme: &'a Theme,
}

impl<'a> QueryBar<'a> {
    pub fn new(state: &'a QueryBarState, ghost: &'a str, theme: &'a Theme) -> Self {
        Self { state, ghost, theme }
    }

    /// Absolute terminal position of the text cursor within this widget's
    /// rendered area. Pass to `frame.set_cursor_position()` after rendering.
    pub fn cursor_position(&self, area: Rect) -> (u16, u16) {
        // The block adds 1-cell borders; text starts at (area.x+1, area.y+1).
        let col = self.state.query[..self.state.cursor].chars().count() as u16;
        let x = (area.x + 1 + col).min(area.right().saturating_sub(2));
        (x, area.y + 1)
    }
}

impl Widget for QueryBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(" Search ")
            .border_style(self.theme.border_focused);
        let inner = block.inner(area);
        block.render(area, buf);

        let line = if self.state.query.is_empty() {
            Line::from(Span::styled(
                "/key  #tag  text",
                Style::default().add_modifier(Modifier::DIM),
            ))
        } else if self.state.at_end() && !self.ghost.is_empty() {
            Line::from(vec![
                Span::raw(self.state.query.as_str()),
                Span::styled(self.ghost, self.theme.ghost),
            ])
        } else {
            Line::from(self.state.query.as_str())
        };
        Paragraph::new(line).render(inner, buf);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
