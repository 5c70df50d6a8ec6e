//! The 3x3 grid of marks.

use crate::error::BoardError;
use crate::position::{CELLS, Position, SIDE};
use crate::types::{Mark, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// The eight winning lines, checked in this order: rows, columns, diagonals.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// 3x3 tic-tac-toe board.
///
/// A cell only ever changes from [`Mark::Empty`] to a player's mark; the only
/// way back is [`Board::reset`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Mark; CELLS],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the mark at `row`, `col`.
    ///
    /// # Panics
    ///
    /// If `row` or `col` is greater than 2. Use [`Board::cell`] for a checked read.
    pub fn get(&self, row: usize, col: usize) -> Mark {
        assert!(row < SIDE && col < SIDE, "cell ({row}, {col}) is off the board");
        self.cells[row * SIDE + col]
    }

    /// Returns the mark at a flat index, or `None` if the index is off the board.
    pub fn cell(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    /// Returns the mark at a position.
    pub fn at(&self, pos: Position) -> Mark {
        self.cells[pos.index()]
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Mark; CELLS] {
        &self.cells
    }

    /// Writes `mark` into an empty cell addressed by row and column.
    ///
    /// # Errors
    ///
    /// [`BoardError::OutOfRange`] if either coordinate is outside `0..=2`,
    /// [`BoardError::CellOccupied`] if the cell already holds a mark.
    #[instrument(skip(self))]
    pub fn set(&mut self, row: usize, col: usize, mark: Mark) -> Result<(), BoardError> {
        let pos = Position::from_row_col(row, col).ok_or(BoardError::OutOfRange { row, col })?;
        self.write(pos, mark)
    }

    /// Places `player`'s mark at a flat index.
    ///
    /// # Errors
    ///
    /// [`BoardError::IndexOutOfRange`] if `index > 8`,
    /// [`BoardError::CellOccupied`] if the cell already holds a mark.
    #[instrument(skip(self))]
    pub fn make_move(&mut self, index: usize, player: Player) -> Result<(), BoardError> {
        let pos = Position::new(index).ok_or(BoardError::IndexOutOfRange(index))?;
        self.write(pos, Mark::from(player))
    }

    fn write(&mut self, pos: Position, mark: Mark) -> Result<(), BoardError> {
        let cell = &mut self.cells[pos.index()];
        if !cell.is_empty() {
            debug!(index = pos.index(), existing = %cell, "Rejected write to occupied cell");
            return Err(BoardError::CellOccupied(pos.index()));
        }
        *cell = mark;
        Ok(())
    }

    /// Returns the first completed line, in [`LINES`] order.
    pub fn winning_line(&self) -> Option<[usize; 3]> {
        LINES.into_iter().find(|&[a, b, c]| {
            let mark = self.cells[a];
            !mark.is_empty() && mark == self.cells[b] && mark == self.cells[c]
        })
    }

    /// Returns the player owning the first completed line, if any.
    pub fn winner(&self) -> Option<Player> {
        self.winning_line()
            .and_then(|[a, _, _]| self.cells[a].player())
    }

    /// True when no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|m| !m.is_empty())
    }

    /// Empty cell indices in ascending order.
    pub fn moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, m)| m.is_empty())
            .map(|(i, _)| i)
            .collect()
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&m| m == mark).count()
    }

    /// Clears every cell.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells = [Mark::Empty; CELLS];
    }

    /// Plain-text dump for logs: rows on separate lines, cells separated by a
    /// space, `.` for empty.
    pub fn pretty(&self) -> String {
        self.cells
            .chunks(SIDE)
            .map(|row| {
                row.iter()
                    .map(Mark::to_string)
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.pretty())
    }
}
