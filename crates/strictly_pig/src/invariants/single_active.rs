//! Single active player invariant: exactly one player's turn while playing, nobody's after.

use super::Invariant;
use crate::{GameState, Seat};
use strum::IntoEnumIterator;

/// Invariant: the `is_active` flags agree with the game status.
///
/// While in progress only the status's active seat is flagged active.
/// Once the game is over no seat is.
pub struct SingleActivePlayerInvariant;

impl Invariant<GameState> for SingleActivePlayerInvariant {
    fn holds(game: &GameState) -> bool {
        let active = game.active_seat();
        Seat::iter().all(|seat| game.player(seat).is_active() == (active == Some(seat)))
    }

    fn description() -> &'static str {
        "Exactly one player is active while playing, none once the game is over"
    }
}
