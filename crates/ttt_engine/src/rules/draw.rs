//! Fullness check for tic-tac-toe.

use crate::Cell;

/// Checks if every cell holds a mark.
///
/// A full board with no winner is a tie.
pub fn is_full(cells: &[Cell; 9]) -> bool {
    cells.iter().all(|cell| !cell.is_empty())
}

#[cfg(test)]
mod tests {
    use super::super::win::check_winner;
    use super::*;
    use crate::Mark;

    fn fill(layout: [Mark; 9]) -> [Cell; 9] {
        let mut cells: [Cell; 9] = std::array::from_fn(Cell::new);
        for (cell, mark) in cells.iter_mut().zip(layout) {
            if mark.is_placed() {
                cell.set_mark(mark).unwrap();
            }
        }
        cells
    }

    #[test]
    fn test_partial_board_not_full() {
        use Mark::{Empty as E, X};
        assert!(!is_full(&fill([X, E, E, E, X, E, E, E, E])));
    }

    #[test]
    fn test_tied_board() {
        use Mark::{O, X};
        // X O X / O X X / O X O
        let cells = fill([X, O, X, O, X, X, O, X, O]);
        assert!(is_full(&cells));
        assert_eq!(check_winner(&cells), None);
    }
}
