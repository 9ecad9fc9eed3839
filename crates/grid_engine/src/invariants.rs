//! First-class invariants for grid games.
//!
//! Invariants are logical properties that hold for every state reachable
//! through the engine. The engine checks them on its output in debug builds,
//! and they can be tested on their own.

use crate::types::{GameState, GameStatus, Player};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{description}")]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: &'static str,
}

/// A set of invariants checked together.
///
/// Implemented for tuples so sets compose without boxing.
pub trait InvariantSet<S> {
    /// Checks every invariant, collecting all violations.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check_one<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation {
            description: I::description(),
        });
    }
}

fn into_result(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<S, I1>(state, &mut violations);
        check_one::<S, I2>(state, &mut violations);
        into_result(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<S, I1>(state, &mut violations);
        check_one::<S, I2>(state, &mut violations);
        check_one::<S, I3>(state, &mut violations);
        into_result(violations)
    }
}

/// Invariant: A has played as many marks as B, or exactly one more.
pub struct MarkBalance;

impl<const N: usize> Invariant<GameState<N>> for MarkBalance {
    fn holds(state: &GameState<N>) -> bool {
        let a = state.board().count(Player::A);
        let b = state.board().count(Player::B);
        a == b || a == b + 1
    }

    fn description() -> &'static str {
        "Player A has as many marks as player B, or one more"
    }
}

/// Invariant: the move counter equals the number of marks on the board.
pub struct MoveCountMatchesBoard;

impl<const N: usize> Invariant<GameState<N>> for MoveCountMatchesBoard {
    fn holds(state: &GameState<N>) -> bool {
        let occupied = state.board().occupied();
        occupied == state.move_count() && occupied <= N * N
    }

    fn description() -> &'static str {
        "Move count matches the number of occupied cells"
    }
}

/// Invariant: while the game runs, A moves on even counts and B on odd.
pub struct TurnFollowsCount;

impl<const N: usize> Invariant<GameState<N>> for TurnFollowsCount {
    fn holds(state: &GameState<N>) -> bool {
        if state.status() != GameStatus::InProgress {
            return true;
        }
        let expected = if state.move_count() % 2 == 0 {
            Player::A
        } else {
            Player::B
        };
        state.current_player() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns, starting with A"
    }
}

/// All game invariants as a composable set.
pub type GameInvariants = (MarkBalance, MoveCountMatchesBoard, TurnFollowsCount);
