//! Full-board detection.

use crate::types::{Board, Cell};
use tracing::instrument;

/// Checks if every cell holds a mark.
///
/// A full board with no winner is a draw.
#[instrument(skip(board), fields(size = %board.size()))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BoardSize, Mark};

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new(BoardSize::clamped(5))));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::default();
        board.set(4, Cell::Occupied(Mark::X));
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new(BoardSize::clamped(4));
        for i in 0..16 {
            let mark = if i % 2 == 0 { Mark::X } else { Mark::O };
            board.set(i, Cell::Occupied(mark));
        }
        assert!(is_full(&board));
    }
}
