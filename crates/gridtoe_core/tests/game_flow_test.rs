//! Tests for the game state machine across board sizes.

use gridtoe_core::invariants::{GameInvariants, InvariantSet};
use gridtoe_core::{
    BoardSize, Cell, DRAW_TEXT, GameState, GameStatus, IgnoreReason, Mark, Transition,
};

fn size(n: usize) -> BoardSize {
    BoardSize::new(n).expect("valid size")
}

/// A full N x N fill with no completed line.
///
/// Marks alternate along each row, and the starting mark flips every two
/// rows, so columns read X X O O X X ... and no diagonal is uniform.
fn drawn_layout(n: usize) -> Vec<Mark> {
    (0..n * n)
        .map(|i| {
            let (row, col) = (i / n, i % n);
            if (col + (row / 2) % 2) % 2 == 0 {
                Mark::X
            } else {
                Mark::O
            }
        })
        .collect()
}

/// Orders the cells of `layout` into a legal move sequence (alternating
/// marks, first mark first).
fn sequence_for(layout: &[Mark], first: Mark) -> Vec<usize> {
    let mut leads: Vec<usize> = (0..layout.len()).filter(|&i| layout[i] == first).collect();
    let mut follows: Vec<usize> = (0..layout.len()).filter(|&i| layout[i] != first).collect();
    leads.reverse();
    follows.reverse();
    let mut moves = Vec::with_capacity(layout.len());
    while let Some(i) = leads.pop() {
        moves.push(i);
        if let Some(j) = follows.pop() {
            moves.push(j);
        }
    }
    moves
}

#[test]
fn test_reset_yields_empty_board_for_every_size() {
    let mut game = GameState::new(size(3));
    game.apply_move(0);
    for n in BoardSize::MIN..=BoardSize::MAX {
        game.reset(size(n));
        assert_eq!(game.board().len(), n * n);
        assert!(game.board().cells().iter().all(|c| *c == Cell::Empty));
        assert_eq!(game.current_player(), Mark::X);
        assert_eq!(game.move_count(), 0);
        assert_eq!(game.end_text(), "");
    }
}

#[test]
fn test_moves_after_conclusion_are_ignored() {
    let mut game = GameState::replay(size(3), Mark::X, &[0, 3, 1, 4, 2]);
    assert!(game.is_concluded());

    let before = game.clone();
    assert_eq!(
        game.apply_move(8),
        Transition::Ignored(IgnoreReason::GameOver)
    );
    assert_eq!(game, before);
}

#[test]
fn test_horizontal_win() {
    let mut game = GameState::new(size(3));
    for index in [0, 3, 1, 4] {
        assert_eq!(game.apply_move(index), Transition::Placed);
    }
    assert_eq!(game.apply_move(2), Transition::Won(Mark::X));
    assert_eq!(game.end_text(), "X WON!");
}

#[test]
fn test_vertical_win() {
    let game = GameState::replay(size(3), Mark::X, &[0, 1, 3, 2, 6]);
    assert_eq!(game.status(), GameStatus::Won(Mark::X));
}

#[test]
fn test_main_diagonal_win() {
    let game = GameState::replay(size(3), Mark::X, &[0, 1, 4, 2, 8]);
    assert_eq!(game.end_text(), "X WON!");
}

#[test]
fn test_second_player_win_is_attributed_to_second_player() {
    // O takes the anti-diagonal 2, 4, 6.
    let game = GameState::replay(size(3), Mark::X, &[0, 2, 1, 4, 8, 6]);
    assert_eq!(game.status(), GameStatus::Won(Mark::O));
    assert_eq!(game.end_text(), "O WON!");
}

#[test]
fn test_anti_diagonal_four_by_four_requires_all_four() {
    // X: 3 6 9 then 12; O fills the rest of the top row.
    let mut game = GameState::new(size(4));
    for index in [3, 0, 6, 1, 9, 2] {
        assert_eq!(game.apply_move(index), Transition::Placed);
    }
    assert_eq!(game.end_text(), "", "three of four is not a line");
    assert_eq!(game.apply_move(12), Transition::Won(Mark::X));
}

#[test]
fn test_bottom_right_corner_does_not_complete_anti_diagonal() {
    // X holds 3 6 9 15: the last index is not on the anti-diagonal.
    let game = GameState::replay(size(4), Mark::X, &[3, 0, 6, 1, 9, 4, 15]);
    assert_eq!(game.status(), GameStatus::InProgress);
}

#[test]
fn test_draw_for_every_size() {
    for n in BoardSize::MIN..=BoardSize::MAX {
        let layout = drawn_layout(n);
        let moves = sequence_for(&layout, Mark::X);
        let game = GameState::replay(size(n), Mark::X, &moves);

        assert_eq!(game.move_count(), n * n, "n={n}");
        assert_eq!(game.status(), GameStatus::Draw, "n={n}");
        assert_eq!(game.end_text(), DRAW_TEXT);
        assert!(GameInvariants::check_all(&game).is_ok());
    }
}

#[test]
fn test_winning_last_move_is_a_win_not_a_draw() {
    // X O X / O X O / O X X with X completing the main diagonal last.
    let moves = [0, 1, 2, 3, 4, 5, 7, 6, 8];
    let game = GameState::replay(size(3), Mark::X, &moves);
    assert_eq!(game.move_count(), 9);
    assert_eq!(game.status(), GameStatus::Won(Mark::X));
}

#[test]
fn test_invariants_hold_through_a_long_game() {
    let mut game = GameState::new(size(10));
    for index in (0..100).rev().step_by(3) {
        game.apply_move(index);
        assert!(GameInvariants::check_all(&game).is_ok());
    }
}
