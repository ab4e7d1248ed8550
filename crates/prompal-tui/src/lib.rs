//! prompal TUI: ratatui picker over a prompt corpus.

pub mod app;
pub mod event;
pub mod theme;
pub mod widgets;

pub use app::App;

use prompal_core::{config::Config, Corpus, Prompt};

/// Run the picker until the user chooses a prompt or quits.
pub fn run(corpus: Corpus, config: &Config) -> anyhow::Result<Option<Prompt>> {
    let theme = theme::Theme::by_name(&config.ui.theme);
    tracing::info!(prompts = corpus.len(), theme = %config.ui.theme, "starting picker");
    App::new(corpus, config, theme).run()
}
