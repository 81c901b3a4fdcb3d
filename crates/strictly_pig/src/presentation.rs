//! Presentation adapter between input events, the game and a render sink.
//!
//! The presentation owns the only [`GameState`] and the die. Surfaces feed
//! it [`InputEvent`]s and receive [`RenderCommand`]s through a
//! [`RenderSink`]; they never touch the game directly.

use crate::action::{Action, TurnEvent};
use crate::die::{Dice, DieFace};
use crate::{GameState, PlayerNames, Seat};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument, warn};

/// A user trigger. Carries no payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputEvent {
    /// The roll button.
    Roll,
    /// The hold button.
    Hold,
    /// The new game button.
    NewGame,
    /// Closing the win overlay.
    DismissOverlay,
}

/// A single change a surface must make.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum RenderCommand {
    /// Show a player's name on their panel.
    SetName {
        /// Panel.
        seat: Seat,
        /// Name to show.
        name: String,
    },
    /// Show a banked score.
    SetScore {
        /// Panel.
        seat: Seat,
        /// Banked score.
        score: u32,
    },
    /// Show a current turn total.
    SetCurrent {
        /// Panel.
        seat: Seat,
        /// Turn total.
        score: u32,
    },
    /// Show the die with this face up.
    ShowDice {
        /// Face to show.
        face: DieFace,
    },
    /// Hide the die.
    HideDice,
    /// Toggle the active highlight on a panel.
    SetActive {
        /// Panel.
        seat: Seat,
        /// Whether it is highlighted.
        active: bool,
    },
    /// Toggle the winner highlight on a panel.
    SetWinner {
        /// Panel.
        seat: Seat,
        /// Whether it is highlighted.
        winner: bool,
    },
    /// Enable or disable the roll and hold controls.
    SetInputEnabled {
        /// Whether roll and hold are accepted.
        enabled: bool,
    },
    /// Show the win overlay.
    ShowOverlay {
        /// Name of the winner.
        winner_name: String,
    },
    /// Hide the win overlay.
    HideOverlay,
}

/// Consumer of render commands.
pub trait RenderSink {
    /// Applies one command.
    fn apply(&mut self, command: RenderCommand);
}

impl RenderSink for Vec<RenderCommand> {
    fn apply(&mut self, command: RenderCommand) {
        self.push(command);
    }
}

impl<S: RenderSink + ?Sized> RenderSink for &mut S {
    fn apply(&mut self, command: RenderCommand) {
        (**self).apply(command);
    }
}

/// Drives one game from input events and renders every change.
#[derive(Debug, Clone)]
pub struct Presentation<D> {
    game: GameState,
    dice: D,
    input_enabled: bool,
    overlay_visible: bool,
}

impl<D: Dice> Presentation<D> {
    /// Creates the presentation for a fresh game.
    #[instrument(skip(names, dice))]
    pub fn new(names: PlayerNames, dice: D) -> Self {
        Self {
            game: GameState::new(names),
            dice,
            input_enabled: true,
            overlay_visible: false,
        }
    }

    /// The game being presented.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Whether roll and hold are currently accepted.
    pub fn input_enabled(&self) -> bool {
        self.input_enabled
    }

    /// Whether the win overlay is showing.
    pub fn overlay_visible(&self) -> bool {
        self.overlay_visible
    }

    /// Emits the full initial render.
    #[instrument(skip_all)]
    pub fn start(&mut self, sink: &mut impl RenderSink) {
        self.render_all(sink);
    }

    /// Handles one input event and renders its effects.
    ///
    /// Returns the turn event when a roll or hold went through.
    #[instrument(skip(self, sink))]
    pub fn handle(&mut self, event: InputEvent, sink: &mut impl RenderSink) -> Option<TurnEvent> {
        match event {
            InputEvent::Roll => self.act(Action::Roll, sink),
            InputEvent::Hold => self.act(Action::Hold, sink),
            InputEvent::NewGame => {
                self.game.reset();
                self.input_enabled = true;
                self.overlay_visible = false;
                self.render_all(sink);
                None
            }
            InputEvent::DismissOverlay => {
                if self.overlay_visible {
                    self.overlay_visible = false;
                    sink.apply(RenderCommand::HideOverlay);
                }
                None
            }
        }
    }

    fn act(&mut self, action: Action, sink: &mut impl RenderSink) -> Option<TurnEvent> {
        if !self.input_enabled {
            debug!(%action, "Input disabled, ignoring");
            return None;
        }
        match self.game.apply(action, &mut self.dice) {
            Ok(event) => {
                debug!(%event, "Rendering turn event");
                self.render_turn(&event, sink);
                Some(event)
            }
            Err(e) => {
                warn!(error = %e, %action, "Action rejected");
                None
            }
        }
    }

    fn render_turn(&mut self, event: &TurnEvent, sink: &mut impl RenderSink) {
        let seat = event.seat();
        match *event {
            TurnEvent::Rolled {
                face, turn_score, ..
            } => {
                sink.apply(RenderCommand::ShowDice { face });
                sink.apply(RenderCommand::SetCurrent {
                    seat,
                    score: turn_score,
                });
            }
            TurnEvent::Busted { .. } | TurnEvent::Banked { .. } => {
                sink.apply(RenderCommand::HideDice);
                sink.apply(RenderCommand::SetCurrent { seat, score: 0 });
            }
            TurnEvent::Won { .. } => {
                sink.apply(RenderCommand::SetCurrent { seat, score: 0 });
            }
        }

        self.render_scoreboard(sink);

        if matches!(event, TurnEvent::Won { .. }) {
            let winner_name = self.game.player(seat).name().to_string();
            info!(%winner_name, "Showing win overlay");
            self.input_enabled = false;
            self.overlay_visible = true;
            sink.apply(RenderCommand::SetInputEnabled { enabled: false });
            sink.apply(RenderCommand::ShowOverlay { winner_name });
        }
    }

    /// Banked scores and highlights for both panels.
    fn render_scoreboard(&self, sink: &mut impl RenderSink) {
        for seat in Seat::iter() {
            let player = self.game.player(seat);
            sink.apply(RenderCommand::SetScore {
                seat,
                score: player.banked_score(),
            });
            sink.apply(RenderCommand::SetActive {
                seat,
                active: player.is_active(),
            });
            sink.apply(RenderCommand::SetWinner {
                seat,
                winner: player.has_won(),
            });
        }
    }

    fn render_all(&self, sink: &mut impl RenderSink) {
        for seat in Seat::iter() {
            sink.apply(RenderCommand::SetName {
                seat,
                name: self.game.player(seat).name().to_string(),
            });
            let current = if self.game.active_seat() == Some(seat) {
                self.game.current_turn_score()
            } else {
                0
            };
            sink.apply(RenderCommand::SetCurrent {
                seat,
                score: current,
            });
        }
        self.render_scoreboard(sink);
        sink.apply(RenderCommand::HideDice);
        sink.apply(RenderCommand::SetInputEnabled {
            enabled: self.input_enabled,
        });
        sink.apply(RenderCommand::HideOverlay);
    }
}
