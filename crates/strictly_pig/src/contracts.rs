//! Contract-based validation for Pig.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use crate::action::ActionError;
use crate::invariants::{InvariantSet, PigInvariants};
use crate::{GameState, Seat};
use strum::IntoEnumIterator;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S) -> Result<(), ActionError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), ActionError>;
}

// ─────────────────────────────────────────────────────────────
//  Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the game is still being played.
pub struct GameInProgress;

impl GameInProgress {
    /// Returns the active seat, or [`ActionError::GameOver`].
    #[instrument(skip(game))]
    pub fn check(game: &GameState) -> Result<Seat, ActionError> {
        game.active_seat().ok_or_else(|| {
            warn!("Action refused: game is over");
            ActionError::GameOver
        })
    }
}

// ─────────────────────────────────────────────────────────────
//  Roll and Hold Contracts
// ─────────────────────────────────────────────────────────────

/// Contract for rolling.
///
/// Postconditions:
/// - Banked scores are unchanged
/// - Either the turn total grew by a scoring face (same player), or it was
///   wiped and the turn passed
/// - All invariants hold
pub struct RollContract;

impl Contract<GameState> for RollContract {
    fn pre(game: &GameState) -> Result<(), ActionError> {
        GameInProgress::check(game).map(|_| ())
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), ActionError> {
        if Seat::iter()
            .any(|seat| before.player(seat).banked_score() != after.player(seat).banked_score())
        {
            return Err(violation("Postcondition failed: a roll changed a banked score"));
        }

        let kept_turn = after.active_seat() == before.active_seat()
            && after
                .current_turn_score()
                .checked_sub(before.current_turn_score())
                .is_some_and(|added| (2..=6).contains(&added));
        let busted = after.current_turn_score() == 0
            && after.active_seat() == before.active_seat().map(Seat::opponent);
        if !(kept_turn || busted) {
            return Err(violation(
                "Postcondition failed: a roll must add 2-6 or bust and pass the turn",
            ));
        }

        check_invariants(after)
    }
}

/// Contract for holding.
///
/// Postconditions:
/// - The holder's banked score grew by exactly the turn total
/// - The other player's banked score is unchanged
/// - The turn total is zero
/// - All invariants hold
pub struct HoldContract;

impl Contract<GameState> for HoldContract {
    fn pre(game: &GameState) -> Result<(), ActionError> {
        GameInProgress::check(game).map(|_| ())
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), ActionError> {
        let holder = GameInProgress::check(before)?;
        let expected = before.player(holder).banked_score() + before.current_turn_score();

        if after.player(holder).banked_score() != expected {
            return Err(violation(format!(
                "Postcondition failed: expected {} banked, found {}",
                expected,
                after.player(holder).banked_score()
            )));
        }
        let other = holder.opponent();
        if after.player(other).banked_score() != before.player(other).banked_score() {
            return Err(violation(
                "Postcondition failed: a hold changed the opponent's score",
            ));
        }
        if after.current_turn_score() != 0 {
            return Err(violation("Postcondition failed: turn score not cleared"));
        }

        check_invariants(after)
    }
}

fn violation(message: impl Into<String>) -> ActionError {
    let message = message.into();
    warn!(%message, "Contract violated");
    ActionError::InvariantViolation(message)
}

fn check_invariants(game: &GameState) -> Result<(), ActionError> {
    PigInvariants::check_all(game).map_err(|violations| {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        violation(format!("Postcondition failed: {}", descriptions))
    })
}

/// Asserts that all game invariants hold (panic on violation in debug builds).
#[instrument(skip(game))]
pub fn assert_invariants(game: &GameState) {
    debug_assert!(
        PigInvariants::check_all(game).is_ok(),
        "Pig invariants violated"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameStatus, ScriptedDice};

    #[test]
    fn test_precondition_accepts_running_game() {
        let game = GameState::default();
        assert!(RollContract::pre(&game).is_ok());
        assert!(HoldContract::pre(&game).is_ok());
    }

    #[test]
    fn test_precondition_refuses_finished_game() {
        let mut game = GameState::default();
        game.status = GameStatus::GameOver {
            winner: Seat::First,
        };
        assert_eq!(RollContract::pre(&game), Err(ActionError::GameOver));
        assert_eq!(HoldContract::pre(&game), Err(ActionError::GameOver));
    }

    #[test]
    fn test_roll_postcondition_holds() {
        let before = GameState::default();
        let mut after = before.clone();
        after.roll(&mut ScriptedDice::from_values(&[5]).unwrap()).unwrap();
        assert!(RollContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_roll_postcondition_detects_banking() {
        let before = GameState::default();
        let mut after = before.clone();
        after.players[0].bank(5);
        assert!(matches!(
            RollContract::post(&before, &after),
            Err(ActionError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_hold_postcondition_holds() {
        let mut before = GameState::default();
        before.roll(&mut ScriptedDice::from_values(&[4]).unwrap()).unwrap();
        let mut after = before.clone();
        after.hold().unwrap();
        assert!(HoldContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_hold_postcondition_detects_lost_points() {
        let mut before = GameState::default();
        before.roll(&mut ScriptedDice::from_values(&[4]).unwrap()).unwrap();
        let mut after = before.clone();
        after.hold().unwrap();
        after.players[0] = crate::Player::new("Player 1", false);
        assert!(HoldContract::post(&before, &after).is_err());
    }
}
