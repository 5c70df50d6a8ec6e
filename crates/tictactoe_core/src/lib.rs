//! Tic-tac-toe game engine for keyboard-driven play.
//!
//! # Architecture
//!
//! - **Board**: the 3x3 grid, move legality, win and draw detection
//! - **GameController**: cursor, turn and game-over state driven by [`Input`]
//! - **Snapshot**: immutable view of the controller handed to a renderer
//!
//! Rendering and key handling live outside this crate.
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{GameController, Input, Mark, Player};
//!
//! let mut game = GameController::new();
//! game.handle_input(Input::Commit);
//! assert_eq!(game.board().get(1, 1), Mark::X);
//! assert_eq!(*game.turn(), Player::O);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod controller;
mod error;
mod input;
mod position;
mod snapshot;
mod types;

pub use board::{Board, LINES};
pub use controller::{
    GameController, MSG_DRAW, MSG_NEW_GAME, MSG_OCCUPIED, Transition, win_message,
};
pub use error::BoardError;
pub use input::Input;
pub use position::{CELLS, Position, SIDE};
pub use snapshot::Snapshot;
pub use types::{Mark, Outcome, Player};
