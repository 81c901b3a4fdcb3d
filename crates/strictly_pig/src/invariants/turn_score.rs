//! Turn score invariant: nothing is left unbanked once the game is over.

use super::Invariant;
use crate::GameState;

/// Invariant: the turn total is zero when the game is over.
pub struct TurnScoreClearedInvariant;

impl Invariant<GameState> for TurnScoreClearedInvariant {
    fn holds(game: &GameState) -> bool {
        !game.is_game_over() || game.current_turn_score() == 0
    }

    fn description() -> &'static str {
        "Turn score is zero once the game is over"
    }
}
