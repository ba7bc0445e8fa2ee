//! Pitwall - CLI
//!
//! Daily F1 word game: one deterministic word per day, six guesses,
//! progress stored per calendar day.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::warn;
use pitwall::{
    commands::{run_play, run_today},
    core::Word,
    game::{GameConfig, GameSession, SystemClock, selector},
    store::{FileStore, MemoryStore, SessionStore},
    wordlists::{WordList, loader},
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "pitwall",
    about = "Daily Formula 1 themed word-guessing game",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to a custom word list (one word per line)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Diagnostic: force a specific target word for this session
    #[arg(long, global = true, value_name = "WORD")]
    word: Option<String>,

    /// Discard any stored session and start today fresh
    #[arg(long, global = true)]
    reset: bool,

    /// Diagnostic: token that wins instantly regardless of length
    #[arg(long, global = true, value_name = "TOKEN")]
    master_guess: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play today's puzzle (default)
    Play,

    /// Show today's puzzle number and word length
    Today,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let list = match &cli.wordlist {
        Some(path) => {
            let words = loader::load_from_file(path)
                .with_context(|| format!("reading word list {}", path.display()))?;
            WordList::new(words).context("custom word list")?
        }
        None => WordList::embedded(),
    };

    let config = GameConfig {
        epoch: selector::default_epoch(),
        forced_word: cli
            .word
            .map(Word::new)
            .transpose()
            .context("forced word")?,
        reset: cli.reset,
        master_guess: cli.master_guess,
    };

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => match FileStore::open_default() {
            Ok(store) => play(&config, &list, store),
            Err(e) => {
                warn!("No persistent store available, progress will not survive restart: {e}");
                play(&config, &list, MemoryStore::new())
            }
        },
        Commands::Today => {
            run_today(&list, &config, &SystemClock);
            Ok(())
        }
    }
}

fn play<S: SessionStore>(config: &GameConfig, list: &WordList, store: S) -> Result<()> {
    let clock = SystemClock;
    let mut session = GameSession::start(config, list, &clock, store);
    let puzzle_number = selector::puzzle_number(session.date(), config.epoch);

    run_play(&mut session, puzzle_number).map_err(|e| anyhow::anyhow!(e))
}
