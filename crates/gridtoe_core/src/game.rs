//! Game state machine for N x N tic-tac-toe.
//!
//! A single owned [`GameState`] moves between two phases: playing (no end
//! text) and concluded (win or draw). Only [`GameState::reset`] and its
//! wrappers leave the concluded phase.

use crate::geometry::Geometry;
use crate::rules;
use crate::types::{Board, BoardSize, Cell, Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// End text shown when the board fills without a winner.
pub const DRAW_TEXT: &str = "IT'S A DRAW";

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are being accepted.
    #[default]
    InProgress,
    /// The mark completed a line.
    Won(Mark),
    /// Board filled without a completed line.
    Draw,
}

impl GameStatus {
    /// True once the game has been won or drawn.
    pub fn is_concluded(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// The user-facing conclusion message; empty while in progress.
    pub fn end_text(self) -> String {
        match self {
            GameStatus::InProgress => String::new(),
            GameStatus::Won(mark) => format!("{mark} WON!"),
            GameStatus::Draw => DRAW_TEXT.to_string(),
        }
    }
}

/// Why a move was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum IgnoreReason {
    /// The index is not on the board.
    #[display("index is off the board")]
    OutOfRange,
    /// The cell already holds a mark.
    #[display("cell is already occupied")]
    Occupied,
    /// The game has already concluded.
    #[display("game is already over")]
    GameOver,
}

/// Result of [`GameState::apply_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transition {
    /// Nothing changed.
    Ignored(IgnoreReason),
    /// Mark placed, game continues.
    Placed,
    /// Mark placed and it completed a line.
    Won(Mark),
    /// Mark placed and filled the board.
    Draw,
}

/// Complete game state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    geometry: Geometry,
    first_mark: Mark,
    current_player: Mark,
    move_count: usize,
    status: GameStatus,
    history: Vec<usize>,
}

impl GameState {
    /// Creates a game with `X` moving first.
    #[instrument]
    pub fn new(size: BoardSize) -> Self {
        Self::with_first_mark(size, Mark::X)
    }

    /// Creates a game where `first_mark` moves first.
    #[instrument]
    pub fn with_first_mark(size: BoardSize, first_mark: Mark) -> Self {
        Self {
            board: Board::new(size),
            geometry: Geometry::new(size),
            first_mark,
            current_player: first_mark,
            move_count: 0,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Builds a game by applying `moves` in order from a fresh board.
    ///
    /// Ignored moves are skipped, as a click on them would be.
    #[instrument(skip(moves), fields(count = moves.len()))]
    pub fn replay(size: BoardSize, first_mark: Mark, moves: &[usize]) -> Self {
        let mut game = Self::with_first_mark(size, first_mark);
        for &index in moves {
            game.apply_move(index);
        }
        game
    }

    /// Starts over on an empty board of `size`.
    #[instrument(skip(self), fields(from = %self.size()))]
    pub fn reset(&mut self, size: BoardSize) {
        info!(%size, "Resetting game");
        *self = Self::with_first_mark(size, self.first_mark);
    }

    /// Starts over with the current size.
    pub fn restart(&mut self) {
        self.reset(self.size());
    }

    /// Handles a change of the size control.
    ///
    /// Returns true when the size differed and the game was reset.
    #[instrument(skip(self))]
    pub fn on_size_change(&mut self, size: BoardSize) -> bool {
        if size == self.size() {
            return false;
        }
        self.reset(size);
        true
    }

    /// Places the current player's mark at `index`.
    ///
    /// Off-board indices, occupied cells and moves after the game concluded
    /// leave the state untouched.
    #[instrument(skip(self), fields(player = %self.current_player, moves = self.move_count))]
    pub fn apply_move(&mut self, index: usize) -> Transition {
        if self.status.is_concluded() {
            debug!("Move ignored: game over");
            return Transition::Ignored(IgnoreReason::GameOver);
        }
        match self.board.get(index) {
            None => {
                debug!("Move ignored: off board");
                return Transition::Ignored(IgnoreReason::OutOfRange);
            }
            Some(Cell::Occupied(_)) => {
                debug!("Move ignored: occupied");
                return Transition::Ignored(IgnoreReason::Occupied);
            }
            Some(Cell::Empty) => {}
        }

        let mover = self.current_player;
        self.board.set(index, Cell::Occupied(mover));
        self.history.push(index);
        self.current_player = mover.opponent();
        self.move_count += 1;

        let transition = if rules::is_winning_move(&self.board, &self.geometry, index) {
            self.status = GameStatus::Won(mover);
            Transition::Won(mover)
        } else if self.move_count == self.size().cells() {
            self.status = GameStatus::Draw;
            Transition::Draw
        } else {
            Transition::Placed
        };
        debug!(?transition, "Move applied");

        #[cfg(debug_assertions)]
        {
            use crate::invariants::{GameInvariants, InvariantSet};
            let checked = GameInvariants::check_all(self);
            debug_assert!(checked.is_ok(), "Game invariants violated: {checked:?}");
        }

        transition
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the board size.
    pub fn size(&self) -> BoardSize {
        self.board.size()
    }

    /// Returns the geometry for the current size.
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Returns the mark that moves first after a reset.
    pub fn first_mark(&self) -> Mark {
        self.first_mark
    }

    /// Returns the mark to move next.
    pub fn current_player(&self) -> Mark {
        self.current_player
    }

    /// Number of marks placed since the last reset.
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the winner, if any.
    pub fn winner(&self) -> Option<Mark> {
        match self.status {
            GameStatus::Won(mark) => Some(mark),
            _ => None,
        }
    }

    /// True once the game has been won or drawn.
    pub fn is_concluded(&self) -> bool {
        self.status.is_concluded()
    }

    /// Conclusion message; empty while playing.
    pub fn end_text(&self) -> String {
        self.status.end_text()
    }

    /// Indices played since the last reset, in order.
    pub fn history(&self) -> &[usize] {
        &self.history
    }

    /// Overwrites a cell without any bookkeeping.
    #[cfg(test)]
    pub(crate) fn overwrite_cell(&mut self, index: usize, cell: Cell) {
        self.board.set(index, cell);
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(BoardSize::default())
    }
}
