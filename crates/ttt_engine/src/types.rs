//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// The claimed state of a cell.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Mark {
    /// Unclaimed.
    #[default]
    Empty,
    /// Claimed by X (the human, who moves first).
    X,
    /// Claimed by O (the machine).
    O,
}

impl Mark {
    /// Printable form of a placed mark, `None` for `Empty`.
    pub fn symbol(self) -> Option<&'static str> {
        match self {
            Mark::Empty => None,
            Mark::X => Some("X"),
            Mark::O => Some("O"),
        }
    }

    /// Returns true for `X` and `O`.
    pub fn is_placed(self) -> bool {
        self != Mark::Empty
    }
}

/// A move that has been applied to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Board index (0-8).
    pub position: usize,
    /// The mark placed there.
    pub mark: Mark,
}

impl Move {
    /// Creates a new move record.
    pub fn new(position: usize, mark: Mark) -> Self {
        Self { position, mark }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark.symbol().unwrap_or("?"), self.position)
    }
}

/// Current status of the game, derived from the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// A line was completed by the given mark.
    Won(Mark),
    /// All nine cells are filled without a completed line.
    Tied,
}

impl GameStatus {
    /// Returns true for `Won` and `Tied`.
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}
