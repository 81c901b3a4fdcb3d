//! Strictly Pig - the two-player dice game as a checked state machine.
//!
//! Players take turns throwing a die. Every face but one adds to the turn
//! total; a one wipes it and passes the turn. Holding banks the turn total,
//! and the first player to bank [`WINNING_THRESHOLD`] wins.
//!
//! # Architecture
//!
//! - **State**: [`GameState`] owns scores, turn total and status
//! - **Dice**: [`Dice`] sources, random or scripted
//! - **Contracts**: pre/postconditions and invariants checked on every transition
//! - **Presentation**: [`Presentation`] turns [`InputEvent`]s into
//!   [`RenderCommand`]s for any [`RenderSink`]
//!
//! # Example
//!
//! ```
//! use strictly_pig::{GameState, PlayerNames, ScriptedDice, Seat, TurnEvent};
//!
//! let mut game = GameState::new(PlayerNames::new("Ada", "Bo"));
//! let mut dice = ScriptedDice::from_values(&[5, 4]).unwrap();
//!
//! game.roll(&mut dice).unwrap();
//! game.roll(&mut dice).unwrap();
//! assert_eq!(game.current_turn_score(), 9);
//!
//! let event = game.hold().unwrap();
//! assert_eq!(event, TurnEvent::Banked { seat: Seat::First, banked: 9, next: Seat::Second });
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod contracts;
mod die;
pub mod invariants;
mod presentation;
mod state;
mod types;

pub use action::{Action, ActionError, TurnEvent};
pub use die::{Dice, DiceError, DieFace, RandomDice, ScriptedDice};
pub use presentation::{InputEvent, Presentation, RenderCommand, RenderSink};
pub use state::GameState;
pub use types::{
    DEFAULT_FIRST_NAME, DEFAULT_SECOND_NAME, GameStatus, Player, PlayerNames, Seat,
    WINNING_THRESHOLD,
};
