//! Command-line interface for strictly_pig.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::DEFAULT_CONFIG_PATH;

/// Strictly Pig - two players, one die, first to 100
#[derive(Parser, Debug)]
#[command(name = "strictly_pig")]
#[command(about = "Two-player Pig dice game for the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (optional)
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH, global = true)]
    pub config: PathBuf,

    /// Game setup, accepted before or after the subcommand
    #[command(flatten)]
    pub game: GameArgs,

    /// Subcommand to run (defaults to the terminal UI)
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Returns the chosen command, falling back to the terminal UI.
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Tui)
    }
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the full-screen terminal UI
    Tui,

    /// Play line by line over stdin and stdout
    Plain {
        /// Write every render command as a JSON line instead of text
        #[arg(long)]
        json: bool,
    },
}

/// Options shared by every way of playing.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct GameArgs {
    /// Name for the first player
    #[arg(long, global = true)]
    pub player_one: Option<String>,

    /// Name for the second player
    #[arg(long, global = true)]
    pub player_two: Option<String>,

    /// Ask for names on stdin before the game starts
    #[arg(long, global = true)]
    pub prompt_names: bool,

    /// Seed for the die, for reproducible games
    #[arg(long, global = true)]
    pub seed: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_tui() {
        let cli = Cli::try_parse_from(["strictly_pig"]).unwrap();
        assert_eq!(cli.command(), Command::Tui);
        assert_eq!(cli.config, PathBuf::from(DEFAULT_CONFIG_PATH));
    }

    #[test]
    fn test_plain_with_options() {
        let cli = Cli::try_parse_from([
            "strictly_pig",
            "plain",
            "--json",
            "--player-one",
            "Ada",
            "--seed",
            "7",
        ])
        .unwrap();
        assert_eq!(cli.command(), Command::Plain { json: true });
        assert_eq!(cli.game.player_one.as_deref(), Some("Ada"));
        assert_eq!(cli.game.seed, Some(7));
        assert!(!cli.game.prompt_names);
    }

    #[test]
    fn test_game_options_without_subcommand() {
        let cli = Cli::try_parse_from([
            "strictly_pig",
            "--player-one",
            "Ada",
            "--player-two",
            "Bo",
            "--seed",
            "3",
        ])
        .unwrap();
        assert_eq!(cli.command(), Command::Tui);
        assert_eq!(
            cli.game,
            GameArgs {
                player_one: Some("Ada".into()),
                player_two: Some("Bo".into()),
                prompt_names: false,
                seed: Some(3),
            }
        );
    }

    #[test]
    fn test_game_options_before_subcommand() {
        let cli = Cli::try_parse_from(["strictly_pig", "--prompt-names", "plain"]).unwrap();
        assert_eq!(cli.command(), Command::Plain { json: false });
        assert!(cli.game.prompt_names);
    }

    #[test]
    fn test_config_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["strictly_pig", "tui", "--config", "other.toml"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("other.toml"));
    }
}
