//! Error types for the game core.

use derive_more::{Display, Error};
use tracing::instrument;

/// A board size outside the supported range.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display(
    "Board size {} is outside {}..={} at {}:{}",
    requested,
    min,
    max,
    file,
    line
)]
pub struct BoardSizeError {
    /// The rejected size.
    pub requested: usize,
    /// Smallest accepted size.
    pub min: usize,
    /// Largest accepted size.
    pub max: usize,
    /// Line number where the error occurred.
    pub line: u32,
    /// Source file where the error occurred.
    pub file: &'static str,
}

impl BoardSizeError {
    /// Creates a new size error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(requested: usize, min: usize, max: usize) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            requested,
            min,
            max,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_range() {
        let err = BoardSizeError::new(11, 3, 10);
        let text = err.to_string();
        assert!(text.starts_with("Board size 11 is outside 3..=10 at "));
        assert!(text.contains("error.rs"));
    }
}
