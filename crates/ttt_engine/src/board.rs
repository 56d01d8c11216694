//! The 3x3 game grid.

use crate::cell::Cell;
use crate::error::MoveError;
use crate::invariants::{BoardInvariants, InvariantSet};
use crate::rules::{self, Line};
use crate::types::{GameStatus, Mark, Move};
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{debug, instrument};

/// Number of cells on the board.
pub const BOARD_CELLS: usize = 9;

/// 3x3 tic-tac-toe board.
///
/// The board is the only writer of its cells. Besides the cells it keeps
/// the open positions in ascending order, so a seeded random source picks
/// the same machine move for the same board, plus a log of applied moves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Cells in row-major order (0-8).
    pub(crate) cells: [Cell; BOARD_CELLS],
    /// Indices of empty cells, ascending.
    pub(crate) available: Vec<usize>,
    /// Applied moves, oldest first.
    pub(crate) history: Vec<Move>,
}

impl Board {
    /// Creates a new empty board.
    #[instrument]
    pub fn new() -> Self {
        let mut board = Self {
            cells: std::array::from_fn(Cell::new),
            available: Vec::with_capacity(BOARD_CELLS),
            history: Vec::with_capacity(BOARD_CELLS),
        };
        board.reset();
        board
    }

    /// Discards the current game and recreates all nine cells empty.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells = std::array::from_fn(Cell::new);
        self.available.clear();
        self.available.extend(0..BOARD_CELLS);
        self.history.clear();
        debug!("Board reset");
    }

    /// Places `mark` at `position` (0-8).
    ///
    /// A rejected move leaves the board untouched.
    ///
    /// # Errors
    ///
    /// - `MoveError::OutOfRange` if `position > 8`.
    /// - `MoveError::EmptyMark` if `mark` is `Mark::Empty`.
    /// - `MoveError::CellTaken` if the cell already holds a mark.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, position: usize, mark: Mark) -> Result<(), MoveError> {
        let cell = self
            .cells
            .get_mut(position)
            .ok_or(MoveError::OutOfRange(position))?;

        if !mark.is_placed() {
            return Err(MoveError::EmptyMark(position));
        }

        cell.set_mark(mark)?;
        self.available.retain(|&open| open != position);
        self.history.push(Move::new(position, mark));
        debug!(remaining = self.available.len(), "Move applied");

        debug_assert!(
            BoardInvariants::check_all(self).is_ok(),
            "board invariants broken after move at {position}"
        );

        Ok(())
    }

    /// Checks if some line holds the same placed mark in all three cells.
    ///
    /// A full board without such a line is not terminal; the tie is
    /// reported by [`Board::status`].
    pub fn is_terminal(&self) -> bool {
        self.winning_line().is_some()
    }

    /// Places an `O` on a uniformly random open position.
    ///
    /// Returns the chosen position.
    ///
    /// # Errors
    ///
    /// Returns `MoveError::NoMovesLeft` if every cell is claimed. Any other
    /// error means the open-position bookkeeping is corrupt.
    #[instrument(skip(self, rng))]
    pub fn pick_random_position<R>(&mut self, rng: &mut R) -> Result<usize, MoveError>
    where
        R: Rng + ?Sized,
    {
        let position = *self.available.choose(rng).ok_or(MoveError::NoMovesLeft)?;
        debug!(position, "Machine picked position");
        self.apply_move(position, Mark::O)?;
        Ok(position)
    }

    /// Formats the board as a fixed-layout grid.
    ///
    /// Unclaimed cells show their index so the player can see which
    /// number to type.
    pub fn render(&self) -> String {
        let value = |pos: usize| self.cells[pos].display_value();
        let row = |start: usize| {
            format!(
                " {} | {} | {} \n",
                value(start),
                value(start + 1),
                value(start + 2)
            )
        };

        let mut out = String::new();
        for start in [0, 3, 6] {
            out.push_str("   |   |   \n");
            out.push_str(&row(start));
            if start < 6 {
                out.push_str("___|___|___\n");
            }
        }
        out.push_str("   |   |   \n");
        out
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; BOARD_CELLS] {
        &self.cells
    }

    /// Gets the cell at the given position (0-8).
    pub fn cell(&self, position: usize) -> Option<&Cell> {
        self.cells.get(position)
    }

    /// Open positions in ascending order.
    pub fn available_positions(&self) -> &[usize] {
        &self.available
    }

    /// Number of claimed cells.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Checks if every cell is claimed.
    pub fn is_full(&self) -> bool {
        rules::is_full(&self.cells)
    }

    /// Returns the first completed line and its mark.
    pub fn winning_line(&self) -> Option<(Line, Mark)> {
        rules::winning_line(&self.cells)
    }

    /// Returns the mark owning a completed line, if any.
    pub fn winner(&self) -> Option<Mark> {
        rules::check_winner(&self.cells)
    }

    /// Derives the game status from the cells.
    pub fn status(&self) -> GameStatus {
        match self.winner() {
            Some(mark) => GameStatus::Won(mark),
            None if self.is_full() => GameStatus::Tied,
            None => GameStatus::InProgress,
        }
    }

    /// Applied moves, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Mark of the most recently applied move.
    pub fn last_mark(&self) -> Option<Mark> {
        self.history.last().map(|mov| mov.mark)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}
