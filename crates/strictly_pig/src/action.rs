//! Turn actions and what they produce.
//!
//! Actions are the only way a [`GameState`](crate::GameState) changes
//! outside of a reset. Each successful action yields a [`TurnEvent`] that
//! the presentation layer renders from.

use crate::{DieFace, Seat};
use serde::{Deserialize, Serialize};

/// Something the active player can do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Action {
    /// Throw the die.
    #[display("roll")]
    Roll,
    /// Bank the turn total.
    #[display("hold")]
    Hold,
}

/// Outcome of a successful action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TurnEvent {
    /// A scoring face was thrown; the turn continues.
    Rolled {
        /// Who rolled.
        seat: Seat,
        /// Face thrown (never one).
        face: DieFace,
        /// Turn total after adding the face.
        turn_score: u32,
    },
    /// A one was thrown; the turn total is lost.
    Busted {
        /// Who busted.
        seat: Seat,
        /// Who plays next.
        next: Seat,
    },
    /// The turn total was banked without reaching the threshold.
    Banked {
        /// Who held.
        seat: Seat,
        /// Banked score after the hold.
        banked: u32,
        /// Who plays next.
        next: Seat,
    },
    /// The hold reached the threshold and ended the game.
    Won {
        /// The winner.
        seat: Seat,
        /// Final banked score.
        banked: u32,
    },
}

impl TurnEvent {
    /// Seat that performed the action.
    pub fn seat(&self) -> Seat {
        match *self {
            TurnEvent::Rolled { seat, .. }
            | TurnEvent::Busted { seat, .. }
            | TurnEvent::Banked { seat, .. }
            | TurnEvent::Won { seat, .. } => seat,
        }
    }

    /// Whether this event ended the active player's turn.
    pub fn ends_turn(&self) -> bool {
        !matches!(self, TurnEvent::Rolled { .. })
    }
}

impl std::fmt::Display for TurnEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TurnEvent::Rolled {
                seat,
                face,
                turn_score,
            } => write!(f, "{} rolled {} (turn {})", seat, face, turn_score),
            TurnEvent::Busted { seat, next } => write!(f, "{} busted, {} is up", seat, next),
            TurnEvent::Banked { seat, banked, next } => {
                write!(f, "{} banked to {}, {} is up", seat, banked, next)
            }
            TurnEvent::Won { seat, banked } => write!(f, "{} won with {}", seat, banked),
        }
    }
}

/// Error returned when an action is refused or breaks a contract.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ActionError {
    /// The game has ended; only a reset is accepted. The state is untouched.
    #[display("Game is already over")]
    GameOver,

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for ActionError {}
