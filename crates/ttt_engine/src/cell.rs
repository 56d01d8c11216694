//! A single board position.

use crate::error::MoveError;
use crate::types::Mark;
use serde::{Deserialize, Serialize};

/// One of the nine board positions.
///
/// A cell starts out `Empty` and can be claimed exactly once. Only the
/// [`Board`](crate::Board) hands out mutable access to its cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    index: usize,
    mark: Mark,
}

impl Cell {
    /// Creates an empty cell. The index is not validated here.
    pub fn new(index: usize) -> Self {
        Self {
            index,
            mark: Mark::Empty,
        }
    }

    /// Board index of this cell.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Current mark.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Checks if the cell is still unclaimed.
    pub fn is_empty(&self) -> bool {
        self.mark == Mark::Empty
    }

    /// Claims the cell.
    ///
    /// # Errors
    ///
    /// Returns `MoveError::CellTaken` if the cell already holds a mark,
    /// no matter how many times it is retried.
    pub(crate) fn set_mark(&mut self, mark: Mark) -> Result<(), MoveError> {
        if !self.is_empty() {
            return Err(MoveError::CellTaken(self.index));
        }
        self.mark = mark;
        Ok(())
    }

    /// The mark's symbol, or the index when unclaimed so an empty board
    /// doubles as a map of position numbers.
    pub fn display_value(&self) -> String {
        match self.mark.symbol() {
            Some(symbol) => symbol.to_string(),
            None => self.index.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cell_is_empty() {
        let cell = Cell::new(5);
        assert!(cell.is_empty());
        assert_eq!(cell.index(), 5);
        assert_eq!(cell.display_value(), "5");
    }

    #[test]
    fn test_set_mark_claims_once() {
        let mut cell = Cell::new(0);
        cell.set_mark(Mark::X).unwrap();
        assert_eq!(cell.mark(), Mark::X);
        assert_eq!(cell.display_value(), "X");

        assert_eq!(cell.set_mark(Mark::O), Err(MoveError::CellTaken(0)));
        assert_eq!(cell.set_mark(Mark::X), Err(MoveError::CellTaken(0)));
        assert_eq!(cell.mark(), Mark::X);
    }
}
