//! Errors raised when a move cannot be applied.

/// Error that can occur when applying a move to the board.
///
/// Messages are player-facing: the console prints them verbatim before
/// asking for another position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The position is outside the 0-8 range.
    #[display("Position {} is outside of the board. Pick a different position...", _0)]
    OutOfRange(usize),

    /// The cell at the position already holds a mark.
    #[display("Cell {} is already taken, pick another cell", _0)]
    CellTaken(usize),

    /// A move tried to place `Mark::Empty`.
    #[display("Cannot place an empty mark at position {}", _0)]
    EmptyMark(usize),

    /// A random move was requested but every cell is claimed.
    #[display("No moves left on the board")]
    NoMovesLeft,
}

impl std::error::Error for MoveError {}
