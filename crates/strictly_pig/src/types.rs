//! Core domain types for Pig.

use serde::{Deserialize, Serialize};
use strum::EnumIter;
use tracing::instrument;

/// Banked score that ends the game. Reaching or passing it wins.
pub const WINNING_THRESHOLD: u32 = 100;

/// Name shown for the first seat when none is supplied.
pub const DEFAULT_FIRST_NAME: &str = "Player 1";

/// Name shown for the second seat when none is supplied.
pub const DEFAULT_SECOND_NAME: &str = "Player 2";

/// One of the two fixed seats at the table.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, EnumIter,
)]
#[serde(rename_all = "snake_case")]
pub enum Seat {
    /// Seat 0, always opens the game.
    First,
    /// Seat 1.
    Second,
}

impl Seat {
    /// Returns the other seat.
    pub fn opponent(self) -> Self {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }

    /// Zero-based index of the seat.
    pub fn index(self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "seat {}", self.index())
    }
}

/// A player at the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    banked_score: u32,
    is_active: bool,
    has_won: bool,
}

impl Player {
    /// Creates a player with nothing banked.
    pub fn new(name: impl Into<String>, is_active: bool) -> Self {
        Self {
            name: name.into(),
            banked_score: 0,
            is_active,
            has_won: false,
        }
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Score committed by holds.
    pub fn banked_score(&self) -> u32 {
        self.banked_score
    }

    /// Whether it is this player's turn.
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Whether this player won the current game.
    pub fn has_won(&self) -> bool {
        self.has_won
    }

    pub(crate) fn bank(&mut self, amount: u32) -> u32 {
        self.banked_score = self.banked_score.saturating_add(amount);
        self.banked_score
    }

    pub(crate) fn set_active(&mut self, active: bool) {
        self.is_active = active;
    }

    pub(crate) fn set_won(&mut self) {
        self.has_won = true;
    }
}

/// The two display names captured once at startup.
///
/// Blank names are replaced by [`DEFAULT_FIRST_NAME`] and
/// [`DEFAULT_SECOND_NAME`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerNames {
    first: String,
    second: String,
}

impl PlayerNames {
    /// Creates the name pair, substituting defaults for blank names.
    #[instrument(skip(first, second))]
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self::from_options(Some(first.into()), Some(second.into()))
    }

    /// Creates the name pair from optional inputs.
    pub fn from_options(first: Option<String>, second: Option<String>) -> Self {
        Self {
            first: or_default(first, DEFAULT_FIRST_NAME),
            second: or_default(second, DEFAULT_SECOND_NAME),
        }
    }

    /// Name for the given seat.
    pub fn get(&self, seat: Seat) -> &str {
        match seat {
            Seat::First => &self.first,
            Seat::Second => &self.second,
        }
    }
}

impl Default for PlayerNames {
    fn default() -> Self {
        Self::from_options(None, None)
    }
}

fn or_default(name: Option<String>, default: &str) -> String {
    match name {
        Some(name) if !name.trim().is_empty() => name,
        _ => default.to_string(),
    }
}

/// Where the game stands.
///
/// The active seat only exists while the game runs and the winner only
/// once it has ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GameStatus {
    /// Turns are being played.
    InProgress {
        /// Whose turn it is.
        active: Seat,
    },
    /// Someone banked enough to win.
    GameOver {
        /// The seat that reached the threshold.
        winner: Seat,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_round_trips() {
        assert_eq!(Seat::First.opponent(), Seat::Second);
        assert_eq!(Seat::Second.opponent().opponent(), Seat::Second);
    }

    #[test]
    fn test_blank_names_fall_back_to_defaults() {
        let names = PlayerNames::new("", "   ");
        assert_eq!(names.get(Seat::First), DEFAULT_FIRST_NAME);
        assert_eq!(names.get(Seat::Second), DEFAULT_SECOND_NAME);
    }

    #[test]
    fn test_names_keep_surrounding_spaces() {
        let names = PlayerNames::new(" Ada ", "Bo");
        assert_eq!(names.get(Seat::First), " Ada ");
    }

    #[test]
    fn test_given_names_are_kept() {
        let names = PlayerNames::from_options(Some("Ada".into()), None);
        assert_eq!(names.get(Seat::First), "Ada");
        assert_eq!(names.get(Seat::Second), "Player 2");
    }

    #[test]
    fn test_bank_accumulates() {
        let mut player = Player::new("Ada", true);
        player.bank(9);
        assert_eq!(player.bank(4), 13);
        assert_eq!(player.banked_score(), 13);
    }
}
