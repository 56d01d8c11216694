//! Availability invariant: open positions mirror the empty cells.

use super::Invariant;
use crate::{Board, BOARD_CELLS};

/// Invariant: the available positions are exactly the empty cells, in
/// ascending order, and together with the filled cells account for all
/// nine positions.
pub struct AvailabilityInvariant;

impl Invariant<Board> for AvailabilityInvariant {
    fn holds(board: &Board) -> bool {
        let empty: Vec<usize> = board
            .cells()
            .iter()
            .filter(|cell| cell.is_empty())
            .map(|cell| cell.index())
            .collect();

        board.available_positions() == empty.as_slice()
            && board.available_positions().len() + board.filled_count() == BOARD_CELLS
    }

    fn description() -> &'static str {
        "Available positions must equal the set of empty cells"
    }
}
