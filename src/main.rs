use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use flashdeck::config::snapshot::{FileSnapshotStore, SnapshotStore};
use flashdeck::{App, Config, Deck};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "flashdeck")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Deck file to study (overrides the configured deck)
    #[arg(short, long, global = true)]
    deck: Option<PathBuf>,

    /// Seed for shuffling and reinsertion (overrides the configured seed)
    #[arg(short, long)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the deck's sections with card counts
    Sections,
    /// Delete the saved session
    ClearSession,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // The TUI owns the terminal, so it logs to a file
    init_logging(cli.command.is_none())?;

    let mut config = Config::load()?;
    if let Some(deck) = cli.deck {
        config.deck_path = deck;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    match cli.command {
        Some(Commands::Sections) => {
            let deck = Deck::load(&config.deck_path)?;
            for (section, count) in deck.section_counts() {
                println!("{:<24} {:>5}", section, count);
            }
            println!("{:<24} {:>5}", "total", deck.len());
        }
        Some(Commands::ClearSession) => {
            let store = FileSnapshotStore::in_data_dir()?;
            store.clear()?;
            println!("Cleared saved session at {}", store.path().display());
        }
        None => {
            let deck = Deck::load(&config.deck_path);
            let store = FileSnapshotStore::in_data_dir()?;
            let mut app = App::new(&config, deck, store)?;
            app.run()?;
        }
    }

    Ok(())
}

/// Initialize logging to the data directory log file, or stderr
fn init_logging(to_file: bool) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("flashdeck=info"));
    let registry = tracing_subscriber::registry().with(filter);

    if to_file {
        let dir = Config::data_dir()?;
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create data directory {:?}", dir))?;
        let path = dir.join("flashdeck.log");
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("Failed to open log file {:?}", path))?;

        registry
            .with(fmt::layer().with_target(false).with_ansi(false).with_writer(Mutex::new(file)))
            .init();
    } else {
        registry.with(fmt::layer().with_target(false).with_writer(std::io::stderr)).init();
    }

    Ok(())
}
