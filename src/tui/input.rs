//! Keyboard mapping and cursor movement.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Direction of a cursor step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// One row up.
    Up,
    /// One row down.
    Down,
    /// One column left.
    Left,
    /// One column right.
    Right,
}

/// A user intent decoded from a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor one cell.
    MoveCursor(Direction),
    /// Place at the cursor, or play again once the game is over.
    Confirm,
    /// Increase the board size.
    Grow,
    /// Decrease the board size.
    Shrink,
    /// Play again (only honoured once the game is over).
    Restart,
    /// Leave the application.
    Quit,
}

/// Maps a key press to an action.
pub fn action_for(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return matches!(key.code, KeyCode::Char('c')).then_some(Action::Quit);
    }

    let action = match key.code {
        KeyCode::Up | KeyCode::Char('k') => Action::MoveCursor(Direction::Up),
        KeyCode::Down | KeyCode::Char('j') => Action::MoveCursor(Direction::Down),
        KeyCode::Left | KeyCode::Char('h') => Action::MoveCursor(Direction::Left),
        KeyCode::Right | KeyCode::Char('l') => Action::MoveCursor(Direction::Right),
        KeyCode::Enter | KeyCode::Char(' ') => Action::Confirm,
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Char(']') => Action::Grow,
        KeyCode::Char('-') | KeyCode::Char('[') => Action::Shrink,
        KeyCode::Char('r') => Action::Restart,
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        _ => return None,
    };
    Some(action)
}

/// Moves a flat cursor index one step on an `n` x `n` grid.
///
/// Steps off the edge leave the cursor where it is.
pub fn move_cursor(cursor: usize, direction: Direction, n: usize) -> usize {
    let (row, col) = (cursor / n, cursor % n);
    match direction {
        Direction::Up if row > 0 => cursor - n,
        Direction::Down if row + 1 < n => cursor + n,
        Direction::Left if col > 0 => cursor - 1,
        Direction::Right if col + 1 < n => cursor + 1,
        _ => cursor,
    }
}
