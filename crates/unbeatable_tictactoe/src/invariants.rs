//! Invariants on the live board.
//!
//! Invariants are logical properties that must hold after every confirmed
//! move. The session checks them in debug builds; they are also testable
//! on their own.

use crate::board::Board;
use crate::position::Position;
use crate::types::{Cell, Mark};
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
pub trait InvariantSet<S> {
    /// Returns every violated invariant, or `Ok(())` if all hold.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// The live board before and after one confirmed move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// Board before the move.
    pub before: Board,
    /// Board after the move.
    pub after: Board,
}

impl Transition {
    /// Creates a transition.
    pub fn new(before: Board, after: Board) -> Self {
        Self { before, after }
    }
}

/// Invariant: the two marks differ in count by at most one.
pub struct BoardConsistent;

impl Invariant<Board> for BoardConsistent {
    fn holds(board: &Board) -> bool {
        let mine = board.count(Mark::Mine);
        let theirs = board.count(Mark::Theirs);
        let valid = mine.abs_diff(theirs) <= 1;
        if !valid {
            warn!(mine, theirs, "Board consistency violated");
        }
        valid
    }

    fn description() -> &'static str {
        "Mark counts differ by at most one"
    }
}

impl Invariant<Transition> for BoardConsistent {
    fn holds(transition: &Transition) -> bool {
        <Self as Invariant<Board>>::holds(&transition.after)
    }

    fn description() -> &'static str {
        <Self as Invariant<Board>>::description()
    }
}

/// Invariant: a move fills exactly one previously empty cell.
///
/// No other cell changes, and an occupied cell is never overwritten.
pub struct SinglePlacement;

impl Invariant<Transition> for SinglePlacement {
    fn holds(transition: &Transition) -> bool {
        let changed: Vec<Position> = Position::ALL
            .into_iter()
            .filter(|&pos| transition.before.get(pos) != transition.after.get(pos))
            .collect();

        match changed.as_slice() {
            [pos] => {
                transition.before.get(*pos) == Cell::Empty
                    && transition.after.get(*pos).mark().is_some()
            }
            _ => {
                warn!(changed = changed.len(), "Move changed an unexpected number of cells");
                false
            }
        }
    }

    fn description() -> &'static str {
        "A move fills exactly one empty cell"
    }
}

/// Invariants checked after every confirmed move.
pub type MoveInvariants = (SinglePlacement, BoardConsistent);
