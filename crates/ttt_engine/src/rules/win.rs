//! Win detection logic for tic-tac-toe.

use crate::{Cell, Mark};
use tracing::instrument;

/// Three board indices that win when claimed by one mark.
pub type Line = [usize; 3];

/// The 8 winning lines.
pub const LINES: [Line; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns the first completed line and the mark that completed it.
///
/// A line counts only when all three cells hold the same placed mark;
/// empty or mixed lines never match.
#[instrument(skip(cells))]
pub fn winning_line(cells: &[Cell; 9]) -> Option<(Line, Mark)> {
    LINES.into_iter().find_map(|line @ [a, b, c]| {
        let mark = cells[a].mark();
        (mark.is_placed() && mark == cells[b].mark() && mark == cells[c].mark())
            .then_some((line, mark))
    })
}

/// Returns the mark that owns a completed line, if any.
pub fn check_winner(cells: &[Cell; 9]) -> Option<Mark> {
    winning_line(cells).map(|(_, mark)| mark)
}
