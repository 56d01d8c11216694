//! Tic-tac-toe engine for a human-vs-machine console game.
//!
//! The engine owns the whole game state: a 3x3 [`Board`] of [`Cell`]s,
//! the set of positions still open, win/tie detection and the random
//! opponent policy. Rendering and input handling live in the frontend,
//! which drives the board through the operations exposed here.
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use ttt_engine::{Board, GameStatus, Mark};
//!
//! let mut board = Board::new();
//! let mut rng = StdRng::seed_from_u64(7);
//!
//! board.apply_move(4, Mark::X)?;
//! let reply = board.pick_random_position(&mut rng)?;
//! assert_ne!(reply, 4);
//! assert_eq!(board.status(), GameStatus::InProgress);
//! # Ok::<(), ttt_engine::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod cell;
mod error;
pub mod invariants;
pub mod rules;
mod types;

pub use board::{Board, BOARD_CELLS};
pub use cell::Cell;
pub use error::MoveError;
pub use rules::{Line, LINES};
pub use types::{GameStatus, Mark, Move};
