//! Read-only view of controller state handed to renderers.

use crate::position::{CELLS, Position};
use crate::types::{Mark, Outcome, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Immutable copy of everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Snapshot {
    /// Cells in row-major order.
    cells: [Mark; CELLS],
    /// Highlighted cell.
    cursor: Position,
    /// Player whose mark the next commit places.
    turn: Player,
    /// True once the game is won or drawn.
    game_over: bool,
    /// How the game ended, if it has.
    outcome: Option<Outcome>,
    /// Completed line to emphasise, if the game was won.
    winning_line: Option<[usize; 3]>,
    /// Transient status text; empty when there is nothing to say.
    status: String,
    /// True once the session is over; renderers draw nothing.
    quitting: bool,
}

impl Snapshot {
    pub(crate) fn new(
        cells: [Mark; CELLS],
        cursor: Position,
        turn: Player,
        outcome: Option<Outcome>,
        winning_line: Option<[usize; 3]>,
        status: String,
        quitting: bool,
    ) -> Self {
        Self {
            cells,
            cursor,
            turn,
            game_over: outcome.is_some(),
            outcome,
            winning_line,
            status,
            quitting,
        }
    }

    /// Mark at a flat index.
    pub fn mark(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    /// True if `index` is part of the winning line.
    pub fn is_winning_cell(&self, index: usize) -> bool {
        self.winning_line.is_some_and(|line| line.contains(&index))
    }
}
