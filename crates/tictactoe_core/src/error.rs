//! Board error types.

use derive_more::{Display, Error};

/// Error returned when a mark cannot be placed on the board.
///
/// Both variants are recoverable: the board is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// Row or column outside `0..=2`.
    #[display("Cell ({row}, {col}) is out of range")]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// Flat index outside `0..=8`.
    #[display("Index {_0} is out of range")]
    IndexOutOfRange(#[error(not(source))] usize),

    /// The target cell already holds a mark.
    #[display("Cell {_0} is already occupied")]
    CellOccupied(#[error(not(source))] usize),
}

impl BoardError {
    /// True for either addressing failure.
    pub fn is_out_of_range(&self) -> bool {
        matches!(
            self,
            BoardError::OutOfRange { .. } | BoardError::IndexOutOfRange(_)
        )
    }

    /// True when the cell was already taken.
    pub fn is_occupied(&self) -> bool {
        matches!(self, BoardError::CellOccupied(_))
    }
}
