use anyhow::Context;
use clap::Parser;
use prompal::cli::Command;
use prompal_core::config::Config;
use prompal_core::{Corpus, SearchEngine};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "prompal", about = "Prompal: find prompts with /key, #tag and free text")]
struct Cli {
    /// Write debug logs to /tmp/prompal-debug.log (tail -f to inspect).
    #[arg(long, global = true)]
    debug: bool,

    /// Corpus JSON file. Defaults to `[ui] corpus_path`, then
    /// $XDG_DATA_HOME/prompal/prompts.json.
    #[arg(long, global = true, value_name = "PATH")]
    corpus: Option<PathBuf>,

    /// Config file to use instead of $XDG_CONFIG_HOME/prompal/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/prompal-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("prompal debug log started: tail -f /tmp/prompal-debug.log");
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => Config::load().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "config unreadable, using defaults");
            Config::defaults()
        }),
    };

    let corpus_path = cli.corpus.clone().unwrap_or_else(|| config.corpus_path());
    let corpus = Corpus::load(&corpus_path)?;

    match &cli.command {
        Some(command) => {
            let mut engine = SearchEngine::from_config(&config);
            let mut stdout = std::io::stdout().lock();
            prompal::cli::run(command, &corpus, &mut engine, config.ui.max_results, &mut stdout)
        }
        None => {
            if let Some(prompt) = prompal_tui::run(corpus, &config)? {
                println!("{}", prompt.content);
            }
            Ok(())
        }
    }
}
