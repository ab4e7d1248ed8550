//! Semantic application events: crossterm key events mapped to a
//! widget-agnostic vocabulary so widgets never touch crossterm directly.
//!
//! The picker has a single text input that always owns the keyboard, so there
//! is one mapping and every printable character is typed.
//!
//! # Keybindings
//!
//! | Key(s)                  | Event                      |
//! |-------------------------|----------------------------|
//! | `Ctrl+c`                | `Quit`                     |
//! | `Esc`                   | `Escape`                   |
//! | `Tab`                   | `Accept`                   |
//! | `Enter`                 | `Enter`                    |
//! | `↑`, `Ctrl+p`           | `Move(Up)`                 |
//! | `↓`, `Ctrl+n`           | `Move(Down)`               |
//! | `←` / `→`               | `Cursor(Left/Right)`       |
//! | `Home`, `Ctrl+a`        | `Home`                     |
//! | `End`, `Ctrl+e`         | `End`                      |
//! | `Ctrl+u`                | `ClearLine`                |
//! | `F1`                    | `Help`                     |
//! | printable char          | `Char(c)`                  |
//! | `Backspace`             | `Backspace`                |
//! | terminal resize         | `Resize(w, h)`             |
//!
//! `→` with the cursor at the end of the line also takes the ghost text;
//! the app decides that, not this mapping.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// A semantic application event derived from a raw crossterm [`Event`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Leave the picker without choosing anything.
    Quit,
    /// Close the dropdown or help, or quit when nothing is open.
    Escape,
    /// Take the inline completion, else the highlighted suggestion.
    Accept,
    /// Apply the highlighted suggestion, else choose the highlighted result.
    Enter,
    /// Move the list selection.
    Move(Direction),
    /// Move the text cursor.
    Cursor(Direction),
    Home,
    End,
    ClearLine,
    Help,
    Char(char),
    Backspace,
    Resize(u16, u16),
}

/// Map a raw crossterm [`Event`] to an [`AppEvent`].
///
/// Returns `None` for mouse events and unbound keys.
pub fn to_app_event(event: Event) -> Option<AppEvent> {
    match event {
        Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
        Event::Key(key) => map_key(key),
        _ => None,
    }
}

fn map_key(key: KeyEvent) -> Option<AppEvent> {
    use KeyCode::*;
    use KeyModifiers as Mod;

    match key.code {
        Char('c') if key.modifiers == Mod::CONTROL => Some(AppEvent::Quit),
        Char('p') if key.modifiers == Mod::CONTROL => Some(AppEvent::Move(Direction::Up)),
        Char('n') if key.modifiers == Mod::CONTROL => Some(AppEvent::Move(Direction::Down)),
        Char('a') if key.modifiers == Mod::CONTROL => Some(AppEvent::Home),
        Char('e') if key.modifiers == Mod::CONTROL => Some(AppEvent::End),
        Char('u') if key.modifiers == Mod::CONTROL => Some(AppEvent::ClearLine),

        Up => Some(AppEvent::Move(Direction::Up)),
        Down => Some(AppEvent::Move(Direction::Down)),
        Left => Some(AppEvent::Cursor(Direction::Left)),
        Right => Some(AppEvent::Cursor(Direction::Right)),
        Home => Some(AppEvent::Home),
        End => Some(AppEvent::End),

        Tab if key.modifiers == Mod::NONE => Some(AppEvent::Accept),
        F(1) => Some(AppEvent::Help),

        // Shifted characters arrive with SHIFT set on most terminals.
        Char(c) if key.modifiers == Mod::NONE || key.modifiers == Mod::SHIFT => {
            Some(AppEvent::Char(c))
        }

        Backspace if key.modifiers == Mod::NONE => Some(AppEvent::Backspace),
        Enter if key.modifiers == Mod::NONE => Some(AppEvent::Enter),
        Esc => Some(AppEvent::Escape),

        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    fn press(code: KeyCode) -> Event {
        key(code, KeyModifiers::NONE)
    }

    fn ctrl(code: KeyCode) -> Event {
        key(code, KeyModifiers::CONTROL)
    }

    #[test]
    fn quit_and_escape() {
        assert_eq!(to_app_event(ctrl(KeyCode::Char('c'))), Some(AppEvent::Quit));
        assert_eq!(to_app_event(press(KeyCode::Esc)), Some(AppEvent::Escape));
    }

    #[test]
    fn query_syntax_characters_are_typed() {
        for ch in ['/', '#', 'q', 'j', 'k', '?', ' '] {
            assert_eq!(
                to_app_event(press(KeyCode::Char(ch))),
                Some(AppEvent::Char(ch)),
                "'{ch}' should be typed, not bound"
            );
        }
        assert_eq!(
            to_app_event(key(KeyCode::Char('R'), KeyModifiers::SHIFT)),
            Some(AppEvent::Char('R'))
        );
    }

    #[test]
    fn list_and_cursor_movement() {
        assert_eq!(to_app_event(press(KeyCode::Up)), Some(AppEvent::Move(Direction::Up)));
        assert_eq!(to_app_event(ctrl(KeyCode::Char('n'))), Some(AppEvent::Move(Direction::Down)));
        assert_eq!(
            to_app_event(press(KeyCode::Left)),
            Some(AppEvent::Cursor(Direction::Left))
        );
        assert_eq!(to_app_event(ctrl(KeyCode::Char('e'))), Some(AppEvent::End));
    }

    #[test]
    fn accept_enter_help() {
        assert_eq!(to_app_event(press(KeyCode::Tab)), Some(AppEvent::Accept));
        assert_eq!(to_app_event(press(KeyCode::Enter)), Some(AppEvent::Enter));
        assert_eq!(to_app_event(press(KeyCode::F(1))), Some(AppEvent::Help));
        assert_eq!(to_app_event(ctrl(KeyCode::Char('u'))), Some(AppEvent::ClearLine));
    }

    #[test]
    fn resize_and_unbound() {
        assert_eq!(to_app_event(Event::Resize(120, 40)), Some(AppEvent::Resize(120, 40)));
        assert_eq!(to_app_event(press(KeyCode::F(5))), None);
    }
}
