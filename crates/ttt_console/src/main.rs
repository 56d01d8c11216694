//! Tic Tac Toe against the Machine
//!
//! Console game where the human plays X and the machine answers with
//! uniformly random moves.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;
use ttt_console::{Cli, Screen, Session};

fn main() -> Result<()> {
    let cli = Cli::parse();
    initialize_tracing();
    run(cli)
}

/// Logs go to stderr so they never interleave with the board.
fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}

#[instrument(skip(cli), fields(seed = ?cli.seed))]
fn run(cli: Cli) -> Result<()> {
    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    info!("Starting game session");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let screen = Screen::new(stdout.lock(), !cli.no_clear);
    let mut session = Session::new(stdin.lock(), screen, rng);

    let scoreboard = session.run()?;
    let mut screen = session.into_screen();

    if cli.json {
        screen.line(serde_json::to_string(&scoreboard)?)?;
    } else {
        screen.line(scoreboard)?;
    }
    screen.flush()?;

    info!(games = scoreboard.games, "Session ended");
    Ok(())
}
