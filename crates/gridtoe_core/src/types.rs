//! Core domain types for N x N tic-tac-toe.

use crate::error::BoardSizeError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A player's mark.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Mark {
    /// Mark X (moves first unless configured otherwise).
    #[default]
    X,
    /// Mark O.
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// No mark yet.
    #[default]
    Empty,
    /// Cell holding a player's mark.
    Occupied(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }
}

/// Number of rows (and columns) of the board, always within `MIN..=MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct BoardSize(usize);

impl BoardSize {
    /// Smallest supported board.
    pub const MIN: usize = 3;
    /// Largest supported board.
    pub const MAX: usize = 10;

    /// Creates a board size, rejecting values outside `MIN..=MAX`.
    #[track_caller]
    pub fn new(n: usize) -> Result<Self, BoardSizeError> {
        if (Self::MIN..=Self::MAX).contains(&n) {
            Ok(Self(n))
        } else {
            Err(BoardSizeError::new(n, Self::MIN, Self::MAX))
        }
    }

    /// Creates a board size, clamping into `MIN..=MAX`.
    pub fn clamped(n: usize) -> Self {
        Self(n.clamp(Self::MIN, Self::MAX))
    }

    /// Returns N.
    pub fn get(self) -> usize {
        self.0
    }

    /// Returns N², the number of cells.
    pub fn cells(self) -> usize {
        self.0 * self.0
    }

    /// Next larger size, saturating at `MAX`.
    pub fn grow(self) -> Self {
        Self::clamped(self.0 + 1)
    }

    /// Next smaller size, saturating at `MIN`.
    pub fn shrink(self) -> Self {
        Self::clamped(self.0.saturating_sub(1))
    }
}

impl Default for BoardSize {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl TryFrom<usize> for BoardSize {
    type Error = BoardSizeError;

    #[track_caller]
    fn try_from(n: usize) -> Result<Self, Self::Error> {
        Self::new(n)
    }
}

impl From<BoardSize> for usize {
    fn from(size: BoardSize) -> Self {
        size.0
    }
}

impl std::fmt::Display for BoardSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} x {}", self.0, self.0)
    }
}

/// N x N board in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: BoardSize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board with N² cells.
    #[instrument]
    pub fn new(size: BoardSize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size.cells()],
        }
    }

    /// Returns the board size.
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Number of cells (N²).
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: the smallest board has nine cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Gets the cell at the given index.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Writes a cell. Returns false when the index is off the board.
    pub(crate) fn set(&mut self, index: usize, cell: Cell) -> bool {
        match self.cells.get_mut(index) {
            Some(slot) => {
                *slot = cell;
                true
            }
            None => false,
        }
    }

    /// Checks if a cell exists and holds no mark.
    pub fn is_vacant(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// All cells, row-major.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .filter(|cell| **cell == Cell::Occupied(mark))
            .count()
    }

    /// Number of cells holding any mark.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|cell| **cell != Cell::Empty).count()
    }

    /// Formats the board as text, empty cells shown as `.`.
    pub fn display(&self) -> String {
        let n = self.size.get();
        self.cells
            .chunks(n)
            .map(|row| {
                row.iter()
                    .map(|cell| match cell {
                        Cell::Empty => ".".to_string(),
                        Cell::Occupied(mark) => mark.to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BoardSize::default())
    }
}
