//! Win detection around the last placed index.

use crate::geometry::Geometry;
use crate::types::{Board, Cell};
use tracing::{instrument, trace};

/// Checks if all cells at `indices` hold the same mark.
///
/// Stops at the first empty cell or mismatch.
fn line_is_uniform(board: &Board, mut indices: impl Iterator<Item = usize>) -> bool {
    let Some(first) = indices.next().and_then(|i| board.get(i)) else {
        return false;
    };
    if first == Cell::Empty {
        return false;
    }
    indices.all(|i| board.get(i) == Some(first))
}

/// Checks if every cell of `row` holds the same mark.
#[instrument(skip(board, geometry))]
pub fn is_horizontal_win(board: &Board, geometry: &Geometry, row: usize) -> bool {
    let n = geometry.size().get();
    let start = row * n;
    line_is_uniform(board, start..start + n)
}

/// Checks if every cell of `col` holds the same mark.
#[instrument(skip(board, geometry))]
pub fn is_vertical_win(board: &Board, geometry: &Geometry, col: usize) -> bool {
    let n = geometry.size().get();
    line_is_uniform(board, (col..board.len()).step_by(n))
}

/// Checks the diagonals that pass through `index`.
///
/// Off-diagonal indices never win here. The main diagonal is tried first and
/// the anti-diagonal only when the main one did not complete.
#[instrument(skip(board, geometry))]
pub fn is_diagonal_win(board: &Board, geometry: &Geometry, index: usize) -> bool {
    let main = geometry.main_diagonal();
    if main.contains(&index) && line_is_uniform(board, main.iter().copied()) {
        trace!("Main diagonal complete");
        return true;
    }

    let anti = geometry.anti_diagonal();
    if anti.contains(&index) && line_is_uniform(board, anti.iter().copied()) {
        trace!("Anti-diagonal complete");
        return true;
    }

    false
}

/// Checks if the mark at `index` completes a row, column or diagonal.
#[instrument(skip(board, geometry))]
pub fn is_winning_move(board: &Board, geometry: &Geometry, index: usize) -> bool {
    is_horizontal_win(board, geometry, geometry.row_of(index))
        || is_vertical_win(board, geometry, geometry.col_of(index))
        || is_diagonal_win(board, geometry, index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BoardSize, Mark};

    fn setup(n: usize, marks: &[(usize, Mark)]) -> (Board, Geometry) {
        let size = BoardSize::clamped(n);
        let mut board = Board::new(size);
        for &(i, mark) in marks {
            board.set(i, Cell::Occupied(mark));
        }
        (board, Geometry::new(size))
    }

    #[test]
    fn test_no_winner_empty_board() {
        let (board, g) = setup(3, &[]);
        for i in 0..9 {
            assert!(!is_winning_move(&board, &g, i));
        }
    }

    #[test]
    fn test_top_row() {
        let (board, g) = setup(3, &[(0, Mark::X), (1, Mark::X), (2, Mark::X)]);
        assert!(is_horizontal_win(&board, &g, 0));
        assert!(is_winning_move(&board, &g, 1));
        assert!(!is_horizontal_win(&board, &g, 1));
    }

    #[test]
    fn test_mixed_row_is_not_a_win() {
        let (board, g) = setup(3, &[(3, Mark::X), (4, Mark::O), (5, Mark::X)]);
        assert!(!is_horizontal_win(&board, &g, 1));
    }

    #[test]
    fn test_column() {
        let (board, g) = setup(3, &[(0, Mark::O), (3, Mark::O), (6, Mark::O)]);
        assert!(is_vertical_win(&board, &g, 0));
        assert!(is_winning_move(&board, &g, 6));
    }

    #[test]
    fn test_last_column_of_large_board() {
        let marks: Vec<_> = (0..10).map(|r| (r * 10 + 9, Mark::X)).collect();
        let (board, g) = setup(10, &marks);
        assert!(is_vertical_win(&board, &g, 9));
        assert!(is_winning_move(&board, &g, 99));
    }

    #[test]
    fn test_main_diagonal() {
        let (board, g) = setup(3, &[(0, Mark::X), (4, Mark::X), (8, Mark::X)]);
        assert!(is_diagonal_win(&board, &g, 8));
    }

    #[test]
    fn test_diagonal_ignored_for_off_diagonal_index() {
        let (board, g) = setup(3, &[(0, Mark::X), (4, Mark::X), (8, Mark::X)]);
        assert!(!is_diagonal_win(&board, &g, 1));
    }

    #[test]
    fn test_anti_diagonal_needs_all_four_cells() {
        let (board, g) = setup(4, &[(3, Mark::O), (6, Mark::O), (9, Mark::O)]);
        assert!(!is_diagonal_win(&board, &g, 9));

        let (board, g) = setup(
            4,
            &[(3, Mark::O), (6, Mark::O), (9, Mark::O), (12, Mark::O)],
        );
        assert!(is_diagonal_win(&board, &g, 12));
    }

    #[test]
    fn test_centre_checks_anti_when_main_fails() {
        let (board, g) = setup(
            3,
            &[(0, Mark::O), (2, Mark::X), (4, Mark::X), (6, Mark::X)],
        );
        assert!(is_diagonal_win(&board, &g, 4));
    }
}
