//! Keyboard-driven game controller.
//!
//! The controller owns the board, the cursor and the turn, and turns one
//! [`Input`] at a time into a state change. It never blocks and never fails:
//! rejected moves are reported through the status message.

use crate::board::Board;
use crate::input::Input;
use crate::position::Position;
use crate::snapshot::Snapshot;
use crate::types::{Outcome, Player};
use derive_getters::Getters;
use tracing::{debug, info, instrument, warn};

/// Status shown after committing on a taken cell.
pub const MSG_OCCUPIED: &str = "Cell occupied — choose another";
/// Status shown after a draw.
pub const MSG_DRAW: &str = "Draw! Press r to restart or q to quit";
/// Status shown after a restart.
pub const MSG_NEW_GAME: &str = "New game started";

/// Status shown after `winner` completes a line.
pub fn win_message(winner: Player) -> String {
    format!("{winner} wins! Press r to restart or q to quit")
}

/// What a single input did to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Cursor moved to a new cell.
    CursorMoved(Position),
    /// Cursor was already at the grid edge in that direction.
    AtEdge,
    /// Mark placed and the turn passed to the other player.
    Placed(Position),
    /// Commit on a cell that already holds a mark.
    Occupied(Position),
    /// Mark placed and it completed a line.
    Won(Player),
    /// Mark placed and it filled the board with no line.
    Drew,
    /// Commit while the game is over.
    Ignored,
    /// Board cleared, X to move.
    Restarted,
    /// Session ended by this input.
    Quit,
    /// Input arrived after the session ended.
    Halted,
}

/// Interactive tic-tac-toe session.
///
/// Starts in play with an empty board, the cursor on the center cell, and X
/// to move.
#[derive(Debug, Clone, Getters)]
pub struct GameController {
    /// The board.
    board: Board,
    /// Highlighted cell.
    cursor: Position,
    /// Player whose mark the next commit places.
    turn: Player,
    /// How the current game ended, if it has.
    outcome: Option<Outcome>,
    /// Transient status text.
    status: String,
    /// Set once by [`Input::Quit`]; never cleared.
    quitting: bool,
}

impl GameController {
    /// Creates a new session.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            cursor: Position::CENTER,
            turn: Player::X,
            outcome: None,
            status: String::new(),
            quitting: false,
        }
    }

    /// True once the current game is won or drawn.
    pub fn is_game_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// True once the session has ended.
    pub fn is_quitting(&self) -> bool {
        self.quitting
    }

    /// Applies one input.
    #[instrument(skip(self), fields(cursor = self.cursor.index(), turn = %self.turn))]
    pub fn handle_input(&mut self, input: Input) -> Transition {
        if self.quitting {
            debug!("Input after quit ignored");
            return Transition::Halted;
        }

        let transition = match input {
            Input::Quit => {
                info!("Session quitting");
                self.quitting = true;
                Transition::Quit
            }
            Input::Left => self.step(Position::left),
            Input::Right => self.step(Position::right),
            Input::Up => self.step(Position::up),
            Input::Down => self.step(Position::down),
            Input::Commit => self.commit(),
            Input::Restart => self.restart(),
        };

        debug!(?transition, "Input handled");
        transition
    }

    /// Read-only copy of the current state for rendering.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(
            *self.board.cells(),
            self.cursor,
            self.turn,
            self.outcome,
            self.board.winning_line().filter(|_| self.outcome.is_some()),
            self.status.clone(),
            self.quitting,
        )
    }

    fn step(&mut self, direction: fn(Position) -> Option<Position>) -> Transition {
        match direction(self.cursor) {
            Some(next) => {
                self.cursor = next;
                Transition::CursorMoved(next)
            }
            None => Transition::AtEdge,
        }
    }

    fn commit(&mut self) -> Transition {
        if self.is_game_over() {
            return Transition::Ignored;
        }

        let target = self.cursor;
        if let Err(e) = self.board.make_move(target.index(), self.turn) {
            warn!(error = %e, "Move rejected");
            self.status = MSG_OCCUPIED.to_string();
            return Transition::Occupied(target);
        }
        debug!(board = %self.board, "Mark placed");

        // A move that fills the last cell and completes a line is a win.
        if let Some(winner) = self.board.winner() {
            info!(%winner, "Game won");
            self.outcome = Some(Outcome::Winner(winner));
            self.status = win_message(winner);
            return Transition::Won(winner);
        }

        if self.board.is_full() {
            info!("Game drawn");
            self.outcome = Some(Outcome::Draw);
            self.status = MSG_DRAW.to_string();
            return Transition::Drew;
        }

        self.turn = self.turn.opponent();
        self.status.clear();
        Transition::Placed(target)
    }

    fn restart(&mut self) -> Transition {
        info!("Starting new game");
        self.board.reset();
        self.turn = Player::X;
        self.outcome = None;
        self.status = MSG_NEW_GAME.to_string();
        Transition::Restarted
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}
