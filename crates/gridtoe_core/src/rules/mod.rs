//! Game rules for N x N tic-tac-toe.
//!
//! Pure functions over a board snapshot and its geometry. Rules are kept
//! apart from the state machine so they can be tested on hand-built boards.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{is_diagonal_win, is_horizontal_win, is_vertical_win, is_winning_move};
