//! The two sides of a game.

use serde::{Deserialize, Serialize};
use ttt_engine::Mark;

/// A player in the console game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum Participant {
    /// The person at the keyboard, playing X.
    Human,
    /// The random opponent, playing O.
    Machine,
}

impl Participant {
    /// The mark this participant places.
    pub fn mark(self) -> Mark {
        match self {
            Participant::Human => Mark::X,
            Participant::Machine => Mark::O,
        }
    }

    /// Maps a placed mark back to its owner.
    pub fn for_mark(mark: Mark) -> Option<Self> {
        <Participant as strum::IntoEnumIterator>::iter().find(|p| p.mark() == mark)
    }
}

impl std::fmt::Display for Participant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Participant::Human => f.write_str("Player 1"),
            Participant::Machine => f.write_str("The Machine"),
        }
    }
}
