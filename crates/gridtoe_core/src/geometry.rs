//! Board geometry: flat index arithmetic and diagonal index sets.

use crate::types::BoardSize;
use tracing::{debug, instrument};

/// Index arithmetic and diagonal membership for one board size.
///
/// Built once per reset; the diagonal sets are scanned on every diagonal
/// win check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Geometry {
    size: BoardSize,
    main_diagonal: Vec<usize>,
    anti_diagonal: Vec<usize>,
}

impl Geometry {
    /// Computes the geometry for a board size.
    #[instrument]
    pub fn new(size: BoardSize) -> Self {
        let (main_diagonal, anti_diagonal) = diagonals(size);
        debug!(?main_diagonal, ?anti_diagonal, "Diagonals computed");
        Self {
            size,
            main_diagonal,
            anti_diagonal,
        }
    }

    /// Board size this geometry describes.
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Row of a flat index.
    pub fn row_of(&self, index: usize) -> usize {
        index / self.size.get()
    }

    /// Column of a flat index.
    pub fn col_of(&self, index: usize) -> usize {
        index % self.size.get()
    }

    /// Flat index of a (row, column) pair.
    pub fn index_of(&self, row: usize, col: usize) -> usize {
        row * self.size.get() + col
    }

    /// Top-left to bottom-right.
    pub fn main_diagonal(&self) -> &[usize] {
        &self.main_diagonal
    }

    /// Top-right to bottom-left.
    pub fn anti_diagonal(&self) -> &[usize] {
        &self.anti_diagonal
    }
}

/// Collects the main and anti-diagonal index sequences.
///
/// Walks the board in row-major order and accepts an index when it is the
/// previous entry plus the diagonal's stride (N + 1 for the main diagonal,
/// N - 1 for the anti-diagonal). The anti-diagonal stride overshoots from
/// the bottom-left corner onto the last board index, so that index is
/// refused.
#[instrument]
pub fn diagonals(size: BoardSize) -> (Vec<usize>, Vec<usize>) {
    let n = size.get();
    let len = size.cells();

    let mut main = vec![0];
    let mut anti = vec![n - 1];

    for i in 0..len {
        if main.last().is_some_and(|&last| i == last + n + 1) {
            main.push(i);
        }
        if i != len - 1 && anti.last().is_some_and(|&last| i == last + n - 1) {
            anti.push(i);
        }
    }

    (main, anti)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry(n: usize) -> Geometry {
        Geometry::new(BoardSize::clamped(n))
    }

    #[test]
    fn test_three_by_three_diagonals() {
        let g = geometry(3);
        assert_eq!(g.main_diagonal(), &[0, 4, 8]);
        assert_eq!(g.anti_diagonal(), &[2, 4, 6]);
    }

    #[test]
    fn test_four_by_four_anti_diagonal_stops_at_corner() {
        let g = geometry(4);
        assert_eq!(g.anti_diagonal(), &[3, 6, 9, 12]);
        assert!(!g.anti_diagonal().contains(&15));
    }

    #[test]
    fn test_diagonals_have_n_entries_on_the_right_cells() {
        for n in BoardSize::MIN..=BoardSize::MAX {
            let g = geometry(n);
            assert_eq!(g.main_diagonal().len(), n, "main diagonal for n={n}");
            assert_eq!(g.anti_diagonal().len(), n, "anti-diagonal for n={n}");
            for &i in g.main_diagonal() {
                assert_eq!(g.row_of(i), g.col_of(i));
            }
            for &i in g.anti_diagonal() {
                assert_eq!(g.row_of(i) + g.col_of(i), n - 1);
            }
        }
    }

    #[test]
    fn test_row_col_round_trip() {
        for n in BoardSize::MIN..=BoardSize::MAX {
            let g = geometry(n);
            for idx in 0..n * n {
                assert_eq!(g.row_of(idx) * n + g.col_of(idx), idx);
                assert_eq!(g.index_of(g.row_of(idx), g.col_of(idx)), idx);
            }
        }
    }
}
