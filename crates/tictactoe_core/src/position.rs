//! Cell addressing and cursor stepping.

use serde::{Deserialize, Serialize};

/// Number of cells on a side of the board.
pub const SIDE: usize = 3;

/// Total number of cells on the board.
pub const CELLS: usize = SIDE * SIDE;

/// A cell on the board, addressed row-major (`index = row * 3 + col`).
///
/// Always holds an index in `0..=8`; every constructor and step checks this,
/// so a cursor built from `Position` can never leave the grid.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "usize", into = "usize")]
pub struct Position(u8);

impl Position {
    /// The center cell, where the cursor starts.
    pub const CENTER: Position = Position(4);

    /// Creates a position from a board index, or `None` if it is off the board.
    pub fn new(index: usize) -> Option<Self> {
        (index < CELLS).then(|| Position(index as u8))
    }

    /// Creates a position from a row and column, or `None` if either is off the board.
    pub fn from_row_col(row: usize, col: usize) -> Option<Self> {
        if row < SIDE && col < SIDE {
            Self::new(row * SIDE + col)
        } else {
            None
        }
    }

    /// Board index (0-8).
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Row (0-2).
    pub fn row(self) -> usize {
        self.index() / SIDE
    }

    /// Column (0-2).
    pub fn col(self) -> usize {
        self.index() % SIDE
    }

    /// The cell to the left, unless already in the leftmost column.
    pub fn left(self) -> Option<Self> {
        (self.col() != 0).then(|| Position(self.0 - 1))
    }

    /// The cell to the right, unless already in the rightmost column.
    pub fn right(self) -> Option<Self> {
        (self.col() != SIDE - 1).then(|| Position(self.0 + 1))
    }

    /// The cell above, unless already in the top row.
    pub fn up(self) -> Option<Self> {
        (self.row() != 0).then(|| Position(self.0 - SIDE as u8))
    }

    /// The cell below, unless already in the bottom row.
    pub fn down(self) -> Option<Self> {
        (self.row() != SIDE - 1).then(|| Position(self.0 + SIDE as u8))
    }

    /// All nine positions in ascending index order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..CELLS as u8).map(Position)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::CENTER
    }
}

impl TryFrom<usize> for Position {
    type Error = crate::BoardError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::new(index).ok_or(crate::BoardError::IndexOutOfRange(index))
    }
}

impl From<Position> for usize {
    fn from(pos: Position) -> Self {
        pos.index()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row(), self.col())
    }
}
