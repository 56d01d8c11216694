//! Running tally across rematches.

use crate::session::GameOutcome;
use crate::Participant;
use serde::{Deserialize, Serialize};

/// Results of every game played in one run of the program.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    /// Games finished.
    pub games: u32,
    /// Games won by the human.
    pub human_wins: u32,
    /// Games won by the machine.
    pub machine_wins: u32,
    /// Games ending without a line.
    pub ties: u32,
}

impl Scoreboard {
    /// Adds one finished game.
    pub fn record(&mut self, outcome: GameOutcome) {
        self.games += 1;
        match outcome {
            GameOutcome::Winner(Participant::Human) => self.human_wins += 1,
            GameOutcome::Winner(Participant::Machine) => self.machine_wins += 1,
            GameOutcome::Tied => self.ties += 1,
        }
    }
}

impl std::fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Games: {} | {}: {} | {}: {} | Ties: {}",
            self.games,
            Participant::Human,
            self.human_wins,
            Participant::Machine,
            self.machine_wins,
            self.ties
        )
    }
}
