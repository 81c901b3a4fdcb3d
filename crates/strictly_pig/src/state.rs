//! The turn and scoring state machine.

use crate::action::{Action, ActionError, TurnEvent};
use crate::contracts::{GameInProgress, assert_invariants};
#[cfg(debug_assertions)]
use crate::contracts::{Contract, HoldContract, RollContract};
use crate::die::Dice;
use crate::types::{GameStatus, Player, PlayerNames, Seat, WINNING_THRESHOLD};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument};

/// Complete state of one game of Pig.
///
/// Changed only by [`roll`](Self::roll), [`hold`](Self::hold) and
/// [`reset`](Self::reset). Once the game is over rolls and holds are refused
/// with [`ActionError::GameOver`] and leave the state as it was.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) players: [Player; 2],
    pub(crate) names: PlayerNames,
    pub(crate) current_turn_score: u32,
    pub(crate) status: GameStatus,
}

impl GameState {
    /// Creates a fresh game with the first seat to play.
    #[instrument(skip(names))]
    pub fn new(names: PlayerNames) -> Self {
        Self::fresh(names)
    }

    fn fresh(names: PlayerNames) -> Self {
        Self {
            players: [
                Player::new(names.get(Seat::First), true),
                Player::new(names.get(Seat::Second), false),
            ],
            names,
            current_turn_score: 0,
            status: GameStatus::InProgress {
                active: Seat::First,
            },
        }
    }

    /// Throws the die for the active player.
    ///
    /// A one wipes the turn total and passes the turn; any other face is
    /// added to the turn total.
    #[instrument(skip(self, dice), fields(turn_score = self.current_turn_score))]
    pub fn roll(&mut self, dice: &mut impl Dice) -> Result<TurnEvent, ActionError> {
        let seat = GameInProgress::check(self)?;
        #[cfg(debug_assertions)]
        let before = self.clone();

        let face = dice.roll();
        let event = if face.is_bust() {
            self.current_turn_score = 0;
            let next = self.pass_turn(seat);
            info!(%seat, %next, "Bust");
            TurnEvent::Busted { seat, next }
        } else {
            self.current_turn_score += face.value();
            debug!(%seat, %face, turn_score = self.current_turn_score, "Rolled");
            TurnEvent::Rolled {
                seat,
                face,
                turn_score: self.current_turn_score,
            }
        };

        #[cfg(debug_assertions)]
        RollContract::post(&before, self)?;
        assert_invariants(self);

        Ok(event)
    }

    /// Banks the turn total for the active player.
    ///
    /// Reaching [`WINNING_THRESHOLD`] ends the game; otherwise the turn
    /// passes. Holding with an empty turn total simply passes the turn.
    #[instrument(skip(self), fields(turn_score = self.current_turn_score))]
    pub fn hold(&mut self) -> Result<TurnEvent, ActionError> {
        let seat = GameInProgress::check(self)?;
        #[cfg(debug_assertions)]
        let before = self.clone();

        let banked = self.players[seat.index()].bank(self.current_turn_score);
        self.current_turn_score = 0;

        let event = if banked >= WINNING_THRESHOLD {
            self.finish(seat);
            info!(%seat, banked, "Game won");
            TurnEvent::Won { seat, banked }
        } else {
            let next = self.pass_turn(seat);
            info!(%seat, banked, %next, "Banked");
            TurnEvent::Banked { seat, banked, next }
        };

        #[cfg(debug_assertions)]
        HoldContract::post(&before, self)?;
        assert_invariants(self);

        Ok(event)
    }

    /// Applies an action.
    pub fn apply(
        &mut self,
        action: Action,
        dice: &mut impl Dice,
    ) -> Result<TurnEvent, ActionError> {
        match action {
            Action::Roll => self.roll(dice),
            Action::Hold => self.hold(),
        }
    }

    /// Starts over with the same names. Calling it twice is the same as once.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::fresh(self.names.clone());
        assert_invariants(self);
        info!("Game reset");
    }

    fn pass_turn(&mut self, from: Seat) -> Seat {
        let next = from.opponent();
        self.players[from.index()].set_active(false);
        self.players[next.index()].set_active(true);
        self.status = GameStatus::InProgress { active: next };
        next
    }

    fn finish(&mut self, winner: Seat) {
        for seat in Seat::iter() {
            self.players[seat.index()].set_active(false);
        }
        self.players[winner.index()].set_won();
        self.status = GameStatus::GameOver { winner };
    }

    /// Player in the given seat.
    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    /// Both players, first seat first.
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Unbanked total of the active player's turn.
    pub fn current_turn_score(&self) -> u32 {
        self.current_turn_score
    }

    /// Game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Seat whose turn it is, if the game is still running.
    pub fn active_seat(&self) -> Option<Seat> {
        match self.status {
            GameStatus::InProgress { active } => Some(active),
            GameStatus::GameOver { .. } => None,
        }
    }

    /// Seat that won, if the game has ended.
    pub fn winner(&self) -> Option<Seat> {
        match self.status {
            GameStatus::GameOver { winner } => Some(winner),
            GameStatus::InProgress { .. } => None,
        }
    }

    /// Whether the game has ended.
    pub fn is_game_over(&self) -> bool {
        matches!(self.status, GameStatus::GameOver { .. })
    }

    /// Names captured at startup.
    pub fn names(&self) -> &PlayerNames {
        &self.names
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(PlayerNames::default())
    }
}
