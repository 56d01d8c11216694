//! Game rules for tic-tac-toe.
//!
//! Pure functions over the nine cells. Rules are kept apart from board
//! storage so invariants and tests can evaluate any cell layout.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{check_winner, winning_line, Line, LINES};
