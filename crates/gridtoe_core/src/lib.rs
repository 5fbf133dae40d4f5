//! Pure game logic for N x N tic-tac-toe.
//!
//! # Architecture
//!
//! - **Types**: marks, cells, the board and its validated size
//! - **Geometry**: flat index arithmetic and diagonal index sets
//! - **Rules**: win and full-board detection around the last move
//! - **Game**: the owned state machine driven by `apply_move` and `reset`
//! - **Invariants**: checks of the state's guarantees, asserted in debug builds
//!
//! # Example
//!
//! ```
//! use gridtoe_core::{BoardSize, GameState, Transition};
//!
//! let mut game = GameState::new(BoardSize::new(3).unwrap());
//! for index in [0, 3, 1, 4] {
//!     game.apply_move(index);
//! }
//! assert_eq!(game.apply_move(2), Transition::Won(gridtoe_core::Mark::X));
//! assert_eq!(game.end_text(), "X WON!");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod game;
mod geometry;
mod types;

pub mod invariants;
pub mod rules;

pub use error::BoardSizeError;
pub use game::{DRAW_TEXT, GameState, GameStatus, IgnoreReason, Transition};
pub use geometry::{Geometry, diagonals};
pub use types::{Board, BoardSize, Cell, Mark};
