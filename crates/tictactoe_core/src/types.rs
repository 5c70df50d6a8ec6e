//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// The value occupying a cell.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum Mark {
    /// Nobody has played here.
    #[default]
    #[display(".")]
    Empty,
    /// Marked by player X.
    X,
    /// Marked by player O.
    O,
}

impl Mark {
    /// Returns the player owning this mark, or `None` for an empty cell.
    pub fn player(self) -> Option<Player> {
        match self {
            Mark::Empty => None,
            Mark::X => Some(Player::X),
            Mark::O => Some(Player::O),
        }
    }

    /// True for [`Mark::Empty`].
    pub fn is_empty(self) -> bool {
        self == Mark::Empty
    }
}

impl From<Player> for Mark {
    fn from(player: Player) -> Self {
        match player {
            Player::X => Mark::X,
            Player::O => Mark::O,
        }
    }
}

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Outcome {
    /// Player completed a line.
    #[display("{_0} wins")]
    Winner(Player),
    /// Board filled with no line completed.
    #[display("Draw")]
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marks_display_like_the_debug_dump() {
        assert_eq!(Mark::Empty.to_string(), ".");
        assert_eq!(Mark::X.to_string(), "X");
        assert_eq!(Mark::O.to_string(), "O");
    }

    #[test]
    fn test_mark_player_round_trip() {
        assert_eq!(Mark::from(Player::X).player(), Some(Player::X));
        assert_eq!(Mark::from(Player::O).player(), Some(Player::O));
        assert_eq!(Mark::Empty.player(), None);
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(Outcome::Winner(Player::O).to_string(), "O wins");
        assert_eq!(Outcome::Draw.to_string(), "Draw");
        assert!(Outcome::Draw.is_draw());
        assert_eq!(Outcome::Winner(Player::X).winner(), Some(Player::X));
    }
}
