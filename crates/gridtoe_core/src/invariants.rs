//! First-class invariants for the game state.
//!
//! Invariants are logical properties that hold after every transition.
//! [`GameState::apply_move`](crate::GameState::apply_move) checks the full set
//! in debug builds; tests check them directly.

use crate::game::{GameState, GameStatus};
use crate::rules;
use tracing::warn;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together.
///
/// Implemented for tuples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Checks every invariant, collecting all violations.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);

/// Board length is N² and the geometry matches the board.
pub struct BoardShapeInvariant;

impl Invariant<GameState> for BoardShapeInvariant {
    fn holds(game: &GameState) -> bool {
        let size = game.size();
        let valid = game.board().len() == size.cells()
            && game.geometry().size() == size
            && game.geometry().main_diagonal().len() == size.get()
            && game.geometry().anti_diagonal().len() == size.get();
        if !valid {
            warn!(len = game.board().len(), %size, "Board shape violated");
        }
        valid
    }

    fn description() -> &'static str {
        "Board holds N² cells and geometry matches N"
    }
}

/// Move count, history and occupied cells agree.
pub struct MoveCountInvariant;

impl Invariant<GameState> for MoveCountInvariant {
    fn holds(game: &GameState) -> bool {
        let occupied = game.board().occupied();
        let history_consistent = game
            .history()
            .iter()
            .all(|&i| !game.board().is_vacant(i));
        let valid = game.move_count() == occupied
            && game.history().len() == occupied
            && history_consistent;
        if !valid {
            warn!(
                move_count = game.move_count(),
                occupied,
                history = game.history().len(),
                "Move count violated"
            );
        }
        valid
    }

    fn description() -> &'static str {
        "Move count equals the number of occupied cells"
    }
}

/// Marks alternate: the first mark leads by at most one and the side to move
/// follows from the counts.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(game: &GameState) -> bool {
        let first = game.first_mark();
        let leader = game.board().count(first);
        let follower = game.board().count(first.opponent());
        let valid = match leader.checked_sub(follower) {
            Some(0) => game.current_player() == first,
            Some(1) => game.current_player() == first.opponent(),
            _ => false,
        };
        if !valid {
            warn!(leader, follower, current = %game.current_player(), "Turn order violated");
        }
        valid
    }

    fn description() -> &'static str {
        "Players alternate, starting with the first mark"
    }
}

/// Status agrees with the board: a win is held by the last mover on a
/// completed line, a draw is a full board, and a full board is never in
/// progress.
pub struct ConclusionInvariant;

impl Invariant<GameState> for ConclusionInvariant {
    fn holds(game: &GameState) -> bool {
        let full = rules::is_full(game.board());
        let last = game.history().last().copied();
        let valid = match game.status() {
            GameStatus::InProgress => !full,
            GameStatus::Draw => full,
            GameStatus::Won(mark) => last.is_some_and(|i| {
                game.board().get(i).and_then(|c| c.mark()) == Some(mark)
                    && rules::is_winning_move(game.board(), game.geometry(), i)
            }),
        };
        if !valid {
            warn!(status = ?game.status(), full, "Conclusion violated");
        }
        valid
    }

    fn description() -> &'static str {
        "Status matches the board"
    }
}

/// All game invariants as a composable set.
pub type GameInvariants = (
    BoardShapeInvariant,
    MoveCountInvariant,
    AlternatingTurnInvariant,
    ConclusionInvariant,
);
