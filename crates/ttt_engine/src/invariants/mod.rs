//! First-class invariants for the board.
//!
//! Invariants are logical properties that must hold after every applied
//! move. The board asserts them in debug builds, and tests can check them
//! against hand-built states.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violation: {}", description)]
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

/// A set of invariants that can be checked together.
///
/// Implemented for 2-tuples of invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants, collecting every violation.
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

pub mod availability;
pub mod history_consistent;

pub use availability::AvailabilityInvariant;
pub use history_consistent::HistoryConsistentInvariant;

/// All board invariants as a composable set.
pub type BoardInvariants = (AvailabilityInvariant, HistoryConsistentInvariant);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Mark};

    #[test]
    fn test_invariant_set_holds_for_new_board() {
        assert!(BoardInvariants::check_all(&Board::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut board = Board::new();
        board.apply_move(0, Mark::X).unwrap();
        board.apply_move(4, Mark::O).unwrap();
        board.apply_move(8, Mark::X).unwrap();
        assert!(BoardInvariants::check_all(&board).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let mut board = Board::new();
        // Claim a cell behind the board's back.
        board.cells[2].set_mark(Mark::O).unwrap();

        let violations = BoardInvariants::check_all(&board).unwrap_err();
        assert_eq!(violations.len(), 2);
        assert!(violations[0].to_string().starts_with("Invariant violation"));
    }
}
