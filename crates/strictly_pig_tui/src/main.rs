//! Strictly Pig - two players, one die, first to 100.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufWriter};
use std::path::Path;
use std::sync::Arc;
use strictly_pig::{PlayerNames, Presentation, RandomDice};
use strictly_pig_tui::{
    Cli, Command, GameArgs, JsonSink, NamePrompt, PigConfig, TextSink, resolve_names, run_plain,
    run_tui,
};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = PigConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;

    init_tracing(&config.log_file_path())?;
    info!(config = %cli.config.display(), "Starting Strictly Pig");

    let mut presentation = presentation(&cli.game, &config)?;
    match cli.command() {
        Command::Tui => run_tui(&mut presentation),
        Command::Plain { json } => {
            let stdin = io::stdin();
            let stdout = BufWriter::new(io::stdout());
            if json {
                run_plain(stdin.lock(), &mut presentation, &mut JsonSink::new(stdout))
            } else {
                run_plain(stdin.lock(), &mut presentation, &mut TextSink::new(stdout))
            }
        }
    }
}

/// Sends tracing output to a file so it never draws over the game.
fn init_tracing(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

#[instrument(skip_all, fields(prompt_names = game.prompt_names))]
fn presentation(game: &GameArgs, config: &PigConfig) -> Result<Presentation<RandomDice>> {
    let names = player_names(game, config)?;

    let dice = match game.seed.or(*config.seed()) {
        Some(seed) => {
            info!(seed, "Using seeded die");
            RandomDice::seeded(seed)
        }
        None => RandomDice::from_entropy(),
    };

    Ok(Presentation::new(names, dice))
}

fn player_names(game: &GameArgs, config: &PigConfig) -> Result<PlayerNames> {
    let names = if game.prompt_names {
        let stdin = io::stdin();
        let mut prompt = NamePrompt::new(stdin.lock(), io::stdout());
        resolve_names(game, config, Some(&mut prompt))
    } else {
        resolve_names(game, config, None)
    };
    names.context("Failed to read player names")
}
