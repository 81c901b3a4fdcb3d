//! Line-oriented play over any reader and writer.
//!
//! Commands are read one per line. Render commands are written either as
//! short human-readable lines ([`TextSink`]) or as JSON objects, one per
//! line ([`JsonSink`]).

use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};
use strictly_pig::{Dice, DieFace, InputEvent, Presentation, RenderCommand, RenderSink, Seat};
use tracing::{debug, info, instrument, warn};

/// A parsed input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlainCommand {
    /// Forward to the presentation.
    Input(InputEvent),
    /// Leave the game.
    Quit,
}

/// Parses one input line. Returns `None` for anything unrecognised.
pub fn parse_command(line: &str) -> Option<PlainCommand> {
    let command = match line.trim().to_ascii_lowercase().as_str() {
        "roll" | "r" => PlainCommand::Input(InputEvent::Roll),
        "hold" | "h" => PlainCommand::Input(InputEvent::Hold),
        "new" | "n" => PlainCommand::Input(InputEvent::NewGame),
        "close" | "c" => PlainCommand::Input(InputEvent::DismissOverlay),
        "quit" | "q" | "exit" => PlainCommand::Quit,
        _ => return None,
    };
    Some(command)
}

/// A render sink that writes lines and can report write failures.
pub trait LineSink: RenderSink {
    /// Writes a message that is not a render command.
    fn notice(&mut self, message: &str);

    /// Flushes output, returning the first write error seen since the last flush.
    fn flush(&mut self) -> io::Result<()>;
}

/// Human-readable sink. Only prints what changed.
#[derive(Debug)]
pub struct TextSink<W> {
    out: W,
    names: [String; 2],
    scores: [Option<u32>; 2],
    currents: [Option<u32>; 2],
    active: [bool; 2],
    winner: [bool; 2],
    dice: Option<DieFace>,
    overlay: bool,
    error: Option<io::Error>,
}

impl<W: Write> TextSink<W> {
    /// Creates a sink writing to `out`.
    pub fn new(out: W) -> Self {
        Self {
            out,
            names: [String::new(), String::new()],
            scores: [None; 2],
            currents: [None; 2],
            active: [false; 2],
            winner: [false; 2],
            dice: None,
            overlay: false,
            error: None,
        }
    }

    /// Returns the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: String) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = writeln!(self.out, "{}", text) {
            self.error = Some(e);
        }
    }

    fn name(&self, seat: Seat) -> &str {
        &self.names[seat.index()]
    }
}

impl<W: Write> RenderSink for TextSink<W> {
    fn apply(&mut self, command: RenderCommand) {
        match command {
            RenderCommand::SetName { seat, name } => {
                if self.names[seat.index()] != name {
                    self.line(format!("Player {}: {}", seat.index() + 1, name));
                    self.names[seat.index()] = name;
                }
            }
            RenderCommand::SetScore { seat, score } => {
                if self.scores[seat.index()].replace(score) != Some(score) {
                    self.line(format!("{} score: {}", self.name(seat), score));
                }
            }
            RenderCommand::SetCurrent { seat, score } => {
                if self.currents[seat.index()].replace(score) != Some(score) {
                    self.line(format!("{} current: {}", self.name(seat), score));
                }
            }
            RenderCommand::ShowDice { face } => {
                self.dice = Some(face);
                self.line(format!("Dice: {}", face));
            }
            RenderCommand::HideDice => {
                if self.dice.take().is_some() {
                    self.line("Dice: -".to_string());
                }
            }
            RenderCommand::SetActive { seat, active } => {
                let was = std::mem::replace(&mut self.active[seat.index()], active);
                if active && !was {
                    self.line(format!("{}'s turn", self.name(seat)));
                }
            }
            RenderCommand::SetWinner { seat, winner } => {
                self.winner[seat.index()] = winner;
            }
            RenderCommand::SetInputEnabled { enabled } => {
                if !enabled {
                    self.line("Roll and hold are disabled. Type 'new' to play again.".to_string());
                }
            }
            RenderCommand::ShowOverlay { winner_name } => {
                self.overlay = true;
                self.line(format!("*** {} Wins! *** (type 'close' to dismiss)", winner_name));
            }
            RenderCommand::HideOverlay => {
                if std::mem::take(&mut self.overlay) {
                    self.line("Closed.".to_string());
                }
            }
        }
    }
}

impl<W: Write> LineSink for TextSink<W> {
    fn notice(&mut self, message: &str) {
        self.line(message.to_string());
    }

    fn flush(&mut self) -> io::Result<()> {
        if let Some(e) = self.error.take() {
            return Err(e);
        }
        self.out.flush()
    }
}

/// Machine-readable sink: every render command as one JSON object per line.
///
/// Render commands carry a `command` key. Notices are `{"notice": ...}`
/// objects with no `command` key, so a reader can skip them before decoding
/// the rest as [`RenderCommand`]s.
#[derive(Debug)]
pub struct JsonSink<W> {
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> JsonSink<W> {
    /// Creates a sink writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out, error: None }
    }

    /// Returns the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_value(&mut self, value: &impl serde::Serialize) {
        if self.error.is_some() {
            return;
        }
        let result = serde_json::to_writer(&mut self.out, value)
            .map_err(io::Error::from)
            .and_then(|()| writeln!(self.out));
        if let Err(e) = result {
            self.error = Some(e);
        }
    }
}

impl<W: Write> RenderSink for JsonSink<W> {
    fn apply(&mut self, command: RenderCommand) {
        self.write_value(&command);
    }
}

impl<W: Write> LineSink for JsonSink<W> {
    fn notice(&mut self, message: &str) {
        self.write_value(&serde_json::json!({ "notice": message }));
    }

    fn flush(&mut self) -> io::Result<()> {
        if let Some(e) = self.error.take() {
            return Err(e);
        }
        self.out.flush()
    }
}

/// Plays until `quit` or end of input.
#[instrument(skip_all)]
pub fn run_plain<R, D, S>(input: R, presentation: &mut Presentation<D>, sink: &mut S) -> Result<()>
where
    R: BufRead,
    D: Dice,
    S: LineSink,
{
    info!("Starting plain game loop");
    presentation.start(sink);
    sink.notice("Commands: roll, hold, new, close, quit");
    sink.flush().context("Failed to write output")?;

    for line in input.lines() {
        let line = line.context("Failed to read command")?;
        match parse_command(&line) {
            Some(PlainCommand::Quit) => {
                info!("Player quit");
                break;
            }
            Some(PlainCommand::Input(event)) => {
                let play = matches!(event, InputEvent::Roll | InputEvent::Hold);
                if play && !presentation.input_enabled() {
                    sink.notice("The game is over. Type 'new' to play again.");
                }
                let outcome = presentation.handle(event, sink);
                debug!(?event, ?outcome, "Handled input");
            }
            None if line.trim().is_empty() => {}
            None => {
                warn!(line = %line.trim(), "Unknown command");
                sink.notice(&format!(
                    "Unknown command '{}'. Try roll, hold, new, close or quit.",
                    line.trim()
                ));
            }
        }
        sink.flush().context("Failed to write output")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_command("roll"), Some(PlainCommand::Input(InputEvent::Roll)));
        assert_eq!(parse_command(" H "), Some(PlainCommand::Input(InputEvent::Hold)));
        assert_eq!(parse_command("new"), Some(PlainCommand::Input(InputEvent::NewGame)));
        assert_eq!(
            parse_command("close"),
            Some(PlainCommand::Input(InputEvent::DismissOverlay))
        );
        assert_eq!(parse_command("q"), Some(PlainCommand::Quit));
        assert_eq!(parse_command("dance"), None);
    }

    #[test]
    fn test_text_sink_prints_changes_only() {
        let mut sink = TextSink::new(Vec::new());
        sink.apply(RenderCommand::SetName {
            seat: Seat::First,
            name: "Ada".into(),
        });
        sink.apply(RenderCommand::SetScore {
            seat: Seat::First,
            score: 0,
        });
        sink.apply(RenderCommand::SetScore {
            seat: Seat::First,
            score: 0,
        });
        sink.apply(RenderCommand::HideDice);

        let text = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(text, "Player 1: Ada\nAda score: 0\n");
    }

    #[test]
    fn test_json_sink_writes_one_object_per_line() {
        let mut sink = JsonSink::new(Vec::new());
        sink.apply(RenderCommand::ShowDice {
            face: DieFace::Three,
        });
        sink.notice("hi");

        let text = String::from_utf8(sink.into_inner()).unwrap();
        let lines: Vec<serde_json::Value> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines[0]["command"], "show_dice");
        assert_eq!(lines[0]["face"], 3);
        assert_eq!(lines[1]["notice"], "hi");
        assert!(lines[1].get("command").is_none());
    }
}
