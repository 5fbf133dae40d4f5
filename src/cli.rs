//! Command-line interface for gridtoe.

use clap::{Parser, Subcommand};
use gridtoe_core::{BoardSize, Mark};

/// gridtoe - tic-tac-toe on boards from 3 x 3 to 10 x 10
#[derive(Parser, Debug)]
#[command(name = "gridtoe")]
#[command(about = "Variable-size tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./gridtoe.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Board size (3-10)
        #[arg(short, long, value_parser = parse_board_size)]
        size: Option<BoardSize>,

        /// Mark that moves first (X or O)
        #[arg(short, long)]
        first: Option<Mark>,
    },

    /// Apply a sequence of moves and print the resulting board
    Replay {
        /// Board size (3-10)
        #[arg(short, long, value_parser = parse_board_size)]
        size: Option<BoardSize>,

        /// Mark that moves first (X or O)
        #[arg(short, long)]
        first: Option<Mark>,

        /// Cell indices in row-major order, one per move
        moves: Vec<usize>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Play {
            size: None,
            first: None,
        }
    }
}

/// Parses a board size argument within 3..=10.
pub fn parse_board_size(s: &str) -> Result<BoardSize, String> {
    let n: usize = s
        .trim()
        .parse()
        .map_err(|e| format!("`{s}` is not a number: {e}"))?;
    BoardSize::new(n).map_err(|e| {
        format!(
            "board size must be between {} and {}, got {}",
            e.min, e.max, e.requested
        )
    })
}
