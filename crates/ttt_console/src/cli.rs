//! Command-line interface for the console game.

use clap::Parser;

/// Tic Tac Toe against a machine that plays random moves
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "ttt")]
#[command(about = "Play tic-tac-toe against a random machine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Seed for the machine's moves (random if omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Keep previous boards on screen instead of clearing between moves
    #[arg(long)]
    pub no_clear: bool,

    /// Print the final scoreboard as JSON
    #[arg(long)]
    pub json: bool,
}
