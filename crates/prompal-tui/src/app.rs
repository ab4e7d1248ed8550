//! Top-level picker state and the main event loop.
//!
//! [`App::run`] sets up the terminal, drives the crossterm event loop, and
//! tears everything down cleanly on exit or panic. Every edit of the query
//! recomputes suggestions, the inline completion and the result rows; drawing
//! only reads them.

use crate::{
    event::{self, AppEvent, Direction},
    theme::Theme,
    widgets::{
        help::HelpPopup,
        query_bar::{QueryBar, QueryBarState},
        result_list::{ResultList, ResultRow},
        suggestion_list::SuggestionList,
    },
};
use crossterm::{
    event::{self as ct_event, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use prompal_core::{
    config::Config,
    search::{complete::InlineCompletion, suggest::Suggestions},
    Corpus, Prompt, SearchEngine,
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction as LayoutDir, Layout, Rect},
    Frame, Terminal,
};
use std::{io, time::Duration};

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

pub struct AppState {
    pub corpus: Corpus,
    pub engine: SearchEngine,
    pub theme: Theme,
    pub max_results: usize,
    pub query: QueryBarState,
    pub suggestions: Suggestions,
    pub completion: InlineCompletion,
    /// Results for the current query, best first.
    pub results: Vec<ResultRow>,
    /// Highlighted row in the dropdown.
    pub suggestion_sel: usize,
    /// Highlighted row in the result list.
    pub result_sel: usize,
    /// Dropdown shown; Escape hides it until the next edit.
    pub dropdown_open: bool,
    pub show_help: bool,
    pub chosen: Option<Prompt>,
    pub quit: bool,
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    state: AppState,
}

impl App {
    pub fn new(corpus: Corpus, config: &Config, theme: Theme) -> Self {
        let mut state = AppState {
            corpus,
            engine: SearchEngine::from_config(config),
            theme,
            max_results: config.ui.max_results.max(1),
            query: QueryBarState::default(),
            suggestions: Suggestions::default(),
            completion: InlineCompletion::none(""),
            results: Vec::new(),
            suggestion_sel: 0,
            result_sel: 0,
            dropdown_open: false,
            show_help: false,
            chosen: None,
            quit: false,
        };
        refresh(&mut state);
        App { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Set up the terminal, run the event loop, and restore the terminal on
    /// exit. Returns the prompt chosen with Enter, if any.
    pub fn run(mut self) -> anyhow::Result<Option<Prompt>> {
        install_panic_hook();

        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        // Always restore terminal, even if the loop returned an error
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = terminal.show_cursor();

        result.map(|()| self.state.chosen)
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        loop {
            {
                let s = &self.state;
                terminal.draw(|frame| draw(frame, s))?;
            }

            if self.state.quit {
                break;
            }

            if ct_event::poll(Duration::from_millis(16))? {
                let raw = ct_event::read()?;
                if matches!(&raw, Event::Key(key) if key.kind != KeyEventKind::Press) {
                    continue;
                }
                if let Some(ev) = event::to_app_event(raw) {
                    tracing::debug!(event = ?ev, "key event");
                    self.handle(ev);
                }
            }
        }
        Ok(())
    }

    pub fn handle(&mut self, event: AppEvent) {
        let s = &mut self.state;

        // Help popup intercepts all events; only close keys pass through.
        if s.show_help {
            if matches!(event, AppEvent::Help | AppEvent::Escape | AppEvent::Quit) {
                tracing::debug!("help popup closed");
                s.show_help = false;
            }
            return;
        }

        match event {
            AppEvent::Quit => {
                tracing::debug!("quit");
                s.quit = true;
            }
            AppEvent::Help => {
                tracing::debug!("help popup opened");
                s.show_help = true;
            }
            AppEvent::Escape => {
                if dropdown_visible(s) {
                    tracing::debug!("dropdown closed");
                    s.dropdown_open = false;
                } else {
                    tracing::debug!("quit");
                    s.quit = true;
                }
            }
            AppEvent::Accept => {
                if !accept_completion(s) {
                    apply_suggestion(s);
                }
            }
            AppEvent::Cursor(Direction::Right) if s.query.at_end() => {
                accept_completion(s);
            }
            AppEvent::Enter => {
                if !apply_suggestion(s) {
                    choose_result(s);
                }
            }
            AppEvent::Move(dir) => move_selection(s, dir),
            AppEvent::Resize(_, _) => {}
            other => {
                if s.query.handle(&other) {
                    refresh(s);
                }
            }
        }
    }
}

/// Recompute everything that depends on the query text.
fn refresh(s: &mut AppState) {
    let raw = s.query.query.as_str();
    s.suggestions = s.engine.suggest(&s.corpus, raw);
    s.completion = s.engine.complete(&s.corpus, raw);
    let outcome = s.engine.search(&s.corpus, raw);
    s.results = ResultRow::from_hits(s.corpus.prompts(), &outcome.hits);
    s.suggestion_sel = 0;
    s.result_sel = 0;
    s.dropdown_open = s.suggestions.is_visible;
}

fn dropdown_visible(s: &AppState) -> bool {
    s.dropdown_open && !s.suggestions.is_empty()
}

fn accept_completion(s: &mut AppState) -> bool {
    if !s.completion.is_some() || !s.query.at_end() {
        return false;
    }
    tracing::debug!(completion = %s.completion.completion, "inline completion accepted");
    let full = std::mem::take(&mut s.completion.full_text);
    s.query.set(full);
    refresh(s);
    true
}

fn apply_suggestion(s: &mut AppState) -> bool {
    if !dropdown_visible(s) {
        return false;
    }
    let Some(value) = s
        .suggestions
        .suggestions
        .get(s.suggestion_sel)
        .map(|sug| sug.value.clone())
    else {
        return false;
    };
    tracing::debug!(value = %value, "suggestion applied");
    s.query.set(value);
    refresh(s);
    true
}

fn choose_result(s: &mut AppState) {
    let Some(row) = s.results.get(s.result_sel) else {
        return;
    };
    if let Some(prompt) = s.corpus.prompts().get(row.index) {
        tracing::info!(id = %prompt.id, "prompt chosen");
        s.chosen = Some(prompt.clone());
        s.quit = true;
    }
}

fn move_selection(s: &mut AppState, dir: Direction) {
    let (sel, len) = if dropdown_visible(s) {
        (&mut s.suggestion_sel, s.suggestions.len())
    } else {
        (&mut s.result_sel, s.results.len().min(s.max_results))
    };
    if len == 0 {
        return;
    }
    *sel = match dir {
        Direction::Up => sel.checked_sub(1).unwrap_or(len - 1),
        Direction::Down => (*sel + 1) % len,
        Direction::Left | Direction::Right => *sel,
    };
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn draw(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Vertical: 3-line query bar | result list
    let vert = Layout::default()
        .direction(LayoutDir::Vertical)
        .constraints([Constraint::Length(3), Constraint::Fill(1)])
        .split(area);

    frame.render_widget(
        ResultList::new(
            state.corpus.prompts(),
            &state.results,
            state.result_sel,
            state.max_results,
            &state.theme,
        ),
        vert[1],
    );

    let query_bar = QueryBar::new(&state.query, &state.completion.completion, &state.theme);
    let (cx, cy) = query_bar.cursor_position(vert[0]);
    frame.render_widget(query_bar, vert[0]);

    // Dropdown floats over the top of the result list
    if dropdown_visible(state) {
        let list = SuggestionList::new(&state.suggestions, state.suggestion_sel, &state.theme);
        let height = list.height().min(vert[1].height);
        let width = vert[1].width.min(48);
        let drop_area = Rect { x: vert[1].x + 1, y: vert[1].y, width, height };
        frame.render_widget(list, drop_area);
    }

    if state.show_help {
        frame.render_widget(HelpPopup::new(&state.theme), area);
    }

    frame.set_cursor_position((cx, cy));
}

// ---------------------------------------------------------------------------
// Terminal helpers
// ---------------------------------------------------------------------------

fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original(info);
    }));
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
