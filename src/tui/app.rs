//! Application state and logic.

use crate::config::GameConfig;
use gridtoe_core::{GameState, Transition};
use tracing::{debug, info, instrument};

use super::input::{Action, move_cursor};
use super::ui::Target;

/// Main application state.
#[derive(Debug, Clone)]
pub struct App {
    game: GameState,
    cursor: usize,
    should_quit: bool,
}

impl App {
    /// Creates an application with a fresh game from the configuration.
    #[instrument(skip(config))]
    pub fn new(config: &GameConfig) -> Self {
        Self {
            game: GameState::with_first_mark(*config.board_size(), *config.first_mark()),
            cursor: 0,
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Index of the highlighted cell.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Text for the status line: whose turn it is, or the end text.
    pub fn status_message(&self) -> String {
        if self.game.is_concluded() {
            self.game.end_text()
        } else {
            format!("Player {}'s turn", self.game.current_player())
        }
    }

    /// Applies a decoded key action.
    #[instrument(skip(self))]
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::MoveCursor(direction) => {
                self.cursor = move_cursor(self.cursor, direction, self.game.size().get());
            }
            Action::Confirm if self.game.is_concluded() => self.restart(),
            Action::Confirm => self.place(self.cursor),
            Action::Grow => self.resize(true),
            Action::Shrink => self.resize(false),
            Action::Restart => self.restart(),
            Action::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
        }
    }

    /// Applies a mouse click on a screen element.
    #[instrument(skip(self))]
    pub fn click(&mut self, target: Target) {
        match target {
            Target::Cell(index) => {
                self.cursor = index;
                self.place(index);
            }
            Target::Shrink => self.resize(false),
            Target::Grow => self.resize(true),
            Target::PlayAgain => self.restart(),
        }
    }

    /// Places the current player's mark at `index`.
    fn place(&mut self, index: usize) {
        match self.game.apply_move(index) {
            Transition::Ignored(reason) => debug!(index, %reason, "Click ignored"),
            Transition::Placed => debug!(index, "Mark placed"),
            Transition::Won(mark) => info!(index, %mark, "Game won"),
            Transition::Draw => info!(index, "Game drawn"),
        }
    }

    /// Steps the size control; a change resets the game.
    fn resize(&mut self, grow: bool) {
        let current = self.game.size();
        let next = if grow { current.grow() } else { current.shrink() };
        if self.game.on_size_change(next) {
            self.cursor = 0;
        }
    }

    /// Plays again with the same size. Only available once the game is over.
    fn restart(&mut self) {
        if !self.game.is_concluded() {
            debug!("Restart ignored: game in progress");
            return;
        }
        self.game.restart();
        self.cursor = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::input::Direction;
    use gridtoe_core::{BoardSize, Mark};

    fn app(n: usize) -> App {
        let config = GameConfig::default().with_overrides(Some(BoardSize::clamped(n)), None);
        App::new(&config)
    }

    fn play(app: &mut App, cells: &[usize]) {
        for &i in cells {
            app.click(Target::Cell(i));
        }
    }

    #[test]
    fn test_status_follows_turns() {
        let mut app = app(3);
        assert_eq!(app.status_message(), "Player X's turn");
        app.apply(Action::Confirm);
        assert_eq!(app.status_message(), "Player O's turn");
    }

    #[test]
    fn test_cursor_then_confirm_places() {
        let mut app = app(3);
        app.apply(Action::MoveCursor(Direction::Down));
        app.apply(Action::MoveCursor(Direction::Right));
        assert_eq!(app.cursor(), 4);
        app.apply(Action::Confirm);
        assert_eq!(app.game().board().get(4).and_then(|c| c.mark()), Some(Mark::X));
    }

    #[test]
    fn test_restart_only_after_conclusion() {
        let mut app = app(3);
        play(&mut app, &[0, 3]);
        app.apply(Action::Restart);
        assert_eq!(app.game().move_count(), 2);

        play(&mut app, &[1, 4, 2]);
        assert_eq!(app.status_message(), "X WON!");
        app.apply(Action::Restart);
        assert_eq!(app.game().move_count(), 0);
        assert_eq!(app.status_message(), "Player X's turn");
    }

    #[test]
    fn test_confirm_after_win_plays_again() {
        let mut app = app(3);
        play(&mut app, &[0, 3, 1, 4, 2]);
        app.apply(Action::Confirm);
        assert!(!app.game().is_concluded());
        assert_eq!(app.game().move_count(), 0);
    }

    #[test]
    fn test_resize_resets_and_clamps() {
        let mut app = app(3);
        play(&mut app, &[8]);
        app.apply(Action::Shrink);
        assert_eq!(app.game().size().get(), 3);
        assert_eq!(app.game().move_count(), 1);

        app.apply(Action::Grow);
        assert_eq!(app.game().size().get(), 4);
        assert_eq!(app.game().move_count(), 0);
        assert_eq!(app.cursor(), 0);

        let mut big = self::app(10);
        big.click(Target::Grow);
        assert_eq!(big.game().size().get(), 10);
    }

    #[test]
    fn test_quit() {
        let mut app = app(3);
        app.apply(Action::Quit);
        assert!(app.should_quit());
    }
}
