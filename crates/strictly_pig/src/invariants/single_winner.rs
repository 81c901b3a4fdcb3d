//! Winner invariants: at most one winner, and only one who earned it.

use super::Invariant;
use crate::{GameState, Seat, WINNING_THRESHOLD};
use strum::IntoEnumIterator;

/// Invariant: the `has_won` flags agree with the game status.
///
/// Nobody has won while the game is in progress; exactly the status's
/// winner has won once it is over.
pub struct SingleWinnerInvariant;

impl Invariant<GameState> for SingleWinnerInvariant {
    fn holds(game: &GameState) -> bool {
        let winner = game.winner();
        Seat::iter().all(|seat| game.player(seat).has_won() == (winner == Some(seat)))
    }

    fn description() -> &'static str {
        "At most one player has won, and only the recorded winner"
    }
}

/// Invariant: the threshold decides the game.
///
/// A winner has banked at least [`WINNING_THRESHOLD`]; while in progress
/// nobody has.
pub struct WinnerReachedThresholdInvariant;

impl Invariant<GameState> for WinnerReachedThresholdInvariant {
    fn holds(game: &GameState) -> bool {
        match game.winner() {
            Some(seat) => game.player(seat).banked_score() >= WINNING_THRESHOLD,
            None => game
                .players()
                .iter()
                .all(|p| p.banked_score() < WINNING_THRESHOLD),
        }
    }

    fn description() -> &'static str {
        "The winner banked at least the threshold; nobody has while playing"
    }
}
