//! Console frontend for tic-tac-toe against a random machine.
//!
//! # Architecture
//!
//! - **Cli**: command-line flags (seed, screen clearing, JSON output)
//! - **Session**: the turn loop driving a [`ttt_engine::Board`]
//! - **Participant**: who owns which mark
//! - **Scoreboard**: wins and ties across rematches

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod participant;
mod scoreboard;
mod screen;
mod session;

pub use cli::Cli;
pub use participant::Participant;
pub use scoreboard::Scoreboard;
pub use screen::Screen;
pub use session::{GameOutcome, Session};
