//! gridtoe - variable-size tic-tac-toe in the terminal
//!
//! # Architecture
//!
//! - **Core** (`gridtoe_core`): board geometry, win evaluation, game state
//! - **Config**: TOML settings merged with command-line overrides
//! - **CLI**: `play` (terminal UI) and `replay` (headless)
//! - **TUI**: ratatui rendering, keyboard and mouse input

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod replay;
pub mod tui;

pub use config::{ConfigError, GameConfig};
pub use gridtoe_core::{BoardSize, GameState, GameStatus, Mark, Transition};
