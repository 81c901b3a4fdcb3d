//! Collecting the two display names at startup.
//!
//! Priority per seat: command-line flag, then an interactive answer (when
//! asked for), then the config file, then the built-in default.

use crate::cli::GameArgs;
use crate::config::PigConfig;
use std::io::{self, BufRead, Write};
use strictly_pig::{PlayerNames, Seat};
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// Something that can ask the user for a name.
pub trait NameSource {
    /// Asks for the name of `seat`, offering `default`.
    ///
    /// Returns `None` when the user gave nothing.
    fn ask(&mut self, seat: Seat, default: &str) -> io::Result<Option<String>>;
}

/// Line-based prompt, one line per name.
#[derive(Debug)]
pub struct NamePrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> NamePrompt<R, W> {
    /// Creates a prompt reading from `input` and writing questions to `output`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> NameSource for NamePrompt<R, W> {
    fn ask(&mut self, seat: Seat, default: &str) -> io::Result<Option<String>> {
        write!(
            self.output,
            "Enter name for player {} [{}]: ",
            seat.index() + 1,
            default
        )?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let answer = line.trim_end_matches(['\r', '\n']).to_string();
        Ok(non_blank(Some(answer)))
    }
}

/// Works out both names from the flags, an optional prompt and the config.
#[instrument(skip_all, fields(prompting = prompt.is_some()))]
pub fn resolve_names(
    args: &GameArgs,
    config: &PigConfig,
    mut prompt: Option<&mut dyn NameSource>,
) -> io::Result<PlayerNames> {
    let fallback =
        PlayerNames::from_options(config.player_one().clone(), config.player_two().clone());
    let mut chosen = [
        non_blank(args.player_one.clone()),
        non_blank(args.player_two.clone()),
    ];

    if let Some(prompt) = prompt.as_deref_mut() {
        for seat in Seat::iter() {
            if chosen[seat.index()].is_none() {
                chosen[seat.index()] = prompt.ask(seat, fallback.get(seat))?;
            }
        }
    }

    let [first, second] = chosen;
    let names = PlayerNames::new(
        first.unwrap_or_else(|| fallback.get(Seat::First).to_string()),
        second.unwrap_or_else(|| fallback.get(Seat::Second).to_string()),
    );
    debug!(?names, "Names resolved");
    Ok(names)
}

fn non_blank(name: Option<String>) -> Option<String> {
    name.filter(|n| !n.trim().is_empty())
}
