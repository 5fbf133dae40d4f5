//! Headless replay of a move list.

use crate::config::GameConfig;
use gridtoe_core::GameState;
use tracing::{info, instrument};

/// Applies `moves` to a fresh game built from `config`.
#[instrument(skip(config, moves), fields(size = %config.board_size(), count = moves.len()))]
pub fn replay(config: &GameConfig, moves: &[usize]) -> GameState {
    let game = GameState::replay(*config.board_size(), *config.first_mark(), moves);
    info!(
        placed = game.move_count(),
        ignored = moves.len() - game.move_count(),
        status = ?game.status(),
        "Replay finished"
    );
    game
}

/// Formats a game the way the terminal UI presents it: title, board, then
/// the end text or the player to move.
pub fn summary(game: &GameState) -> String {
    let footer = if game.is_concluded() {
        game.end_text()
    } else {
        format!("Player {}'s turn", game.current_player())
    };
    format!(
        "Tic Tac Toe ({})\n\n{}\n\n{}",
        game.size(),
        game.board().display(),
        footer
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_in_progress() {
        let game = replay(&GameConfig::default(), &[4]);
        assert_eq!(
            summary(&game),
            "Tic Tac Toe (3 x 3)\n\n. . .\n. X .\n. . .\n\nPlayer O's turn"
        );
    }

    #[test]
    fn test_summary_after_win() {
        let game = replay(&GameConfig::default(), &[0, 3, 1, 4, 2]);
        assert!(summary(&game).ends_with("X X X\nO O .\n. . .\n\nX WON!"));
    }
}
