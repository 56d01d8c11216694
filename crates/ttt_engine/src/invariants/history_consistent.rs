//! History invariant: replaying the move log rebuilds the board.

use super::Invariant;
use crate::{Board, Cell, Mark};

/// Invariant: cells are monotonic and fully explained by history.
///
/// Every recorded move must have landed on an empty cell, and replaying
/// the history onto fresh cells must reproduce the current board.
pub struct HistoryConsistentInvariant;

impl Invariant<Board> for HistoryConsistentInvariant {
    fn holds(board: &Board) -> bool {
        let mut replayed: [Cell; 9] = std::array::from_fn(Cell::new);

        for mov in board.history() {
            let Some(cell) = replayed.get_mut(mov.position) else {
                return false;
            };
            if mov.mark == Mark::Empty || cell.set_mark(mov.mark).is_err() {
                return false;
            }
        }

        &replayed == board.cells()
            && board.last_mark() == board.history().last().map(|mov| mov.mark)
    }

    fn description() -> &'static str {
        "Replaying move history must reproduce the board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Move;

    #[test]
    fn test_holds_after_moves() {
        let mut board = Board::new();
        board.apply_move(1, Mark::X).unwrap();
        board.apply_move(7, Mark::O).unwrap();
        assert!(HistoryConsistentInvariant::holds(&board));
    }

    #[test]
    fn test_detects_duplicate_history_entry() {
        let mut board = Board::new();
        board.apply_move(1, Mark::X).unwrap();
        board.history.push(Move::new(1, Mark::O));
        assert!(!HistoryConsistentInvariant::holds(&board));
    }
}
