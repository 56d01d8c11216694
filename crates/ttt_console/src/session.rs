//! Turn loop for a human-vs-machine session.

use crate::{Participant, Scoreboard, Screen};
use anyhow::{Context, Result, bail};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};
use ttt_engine::{BOARD_CELLS, Board};

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    /// A line was completed by this participant.
    Winner(Participant),
    /// Nine moves without a completed line.
    Tied,
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOutcome::Winner(participant) => {
                write!(f, "GameOver - Winner is: {participant}")
            }
            GameOutcome::Tied => f.write_str("GameOver - Tied Game"),
        }
    }
}

/// One run of the console game: a board, the player's input, the screen
/// and the machine's random source.
///
/// The human always moves first, on odd turns. The session owns the only
/// mutable handle to the board, so moves are applied strictly in order.
pub struct Session<R, W, G> {
    input: R,
    screen: Screen<W>,
    rng: G,
    board: Board,
    scoreboard: Scoreboard,
}

impl<R, W, G> Session<R, W, G>
where
    R: BufRead,
    W: Write,
    G: Rng,
{
    /// Creates a session with a fresh board.
    pub fn new(input: R, screen: Screen<W>, rng: G) -> Self {
        Self {
            input,
            screen,
            rng,
            board: Board::new(),
            scoreboard: Scoreboard::default(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the tally so far.
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// Returns the screen, consuming the session.
    pub fn into_screen(self) -> Screen<W> {
        self.screen
    }

    /// Shows the welcome screen, then plays games until the player
    /// declines a rematch or input runs out.
    ///
    /// # Errors
    ///
    /// Fails on I/O errors, when input ends in the middle of a game, or if
    /// a machine move is rejected by the board.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<Scoreboard> {
        self.screen.clear()?;
        self.screen
            .line("Welcome to Tic Tac Toe. You will play against the Machine.")?;
        self.screen.line("Press any key to continue...")?;
        self.screen.flush()?;
        self.read_line()?;

        loop {
            self.show_board()?;
            let outcome = self.play_game()?;
            self.scoreboard.record(outcome);
            info!(?outcome, games = self.scoreboard.games, "Game finished");
            self.screen.line(outcome)?;

            if !self.ask_rematch()? {
                break;
            }
            self.board.reset();
        }

        self.screen.flush()?;
        Ok(self.scoreboard)
    }

    /// Plays one game on the current board until a line is completed or
    /// nine moves have been made.
    ///
    /// The winner is whoever made the last applied move.
    ///
    /// # Errors
    ///
    /// Fails on I/O errors, on end of input during the human's turn, or if
    /// the machine's move is rejected.
    #[instrument(skip(self))]
    pub fn play_game(&mut self) -> Result<GameOutcome> {
        let mut turn = 1;
        while !self.board.is_terminal() && turn <= BOARD_CELLS {
            if turn % 2 == 0 {
                self.machine_turn()?;
            } else if !self.human_turn()? {
                continue;
            }

            self.show_board()?;
            turn += 1;
        }

        if !self.board.is_terminal() {
            return Ok(GameOutcome::Tied);
        }

        let winner = self
            .board
            .last_mark()
            .and_then(Participant::for_mark)
            .context("completed line without a recorded move")?;
        Ok(GameOutcome::Winner(winner))
    }

    /// Prompts for a position and applies it.
    ///
    /// Returns `false` when the input was rejected and the turn must be
    /// repeated; the board is unchanged in that case.
    fn human_turn(&mut self) -> Result<bool> {
        self.screen
            .line(format!("{} pick a position and press enter...", Participant::Human))?;
        self.screen.flush()?;

        let Some(line) = self.read_line()? else {
            bail!("input closed before the game finished");
        };
        let entry = line.trim();

        let position = match entry.parse::<usize>() {
            Ok(position) => position,
            Err(err) => {
                debug!(entry, error = %err, "Unparseable position");
                self.screen
                    .line(format!("'{entry}' is not a position. Enter a number from 0 to 8"))?;
                return Ok(false);
            }
        };

        match self.board.apply_move(position, Participant::Human.mark()) {
            Ok(()) => {
                debug!(position, "Human moved");
                Ok(true)
            }
            Err(err) => {
                debug!(position, error = %err, "Human move rejected");
                self.screen.line(err)?;
                Ok(false)
            }
        }
    }

    /// Lets the machine claim a random open position.
    fn machine_turn(&mut self) -> Result<()> {
        let position = self
            .board
            .pick_random_position(&mut self.rng)
            .context("machine move rejected; open-position bookkeeping is corrupt")?;
        debug!(position, "Machine moved");
        Ok(())
    }

    fn ask_rematch(&mut self) -> Result<bool> {
        self.screen.line("Play again? [y/N]")?;
        self.screen.flush()?;

        let answer = self.read_line()?.unwrap_or_default();
        Ok(matches!(
            answer.trim().to_ascii_lowercase().as_str(),
            "y" | "yes"
        ))
    }

    fn show_board(&mut self) -> Result<()> {
        self.screen.clear()?;
        self.screen.text(&self.board.render())?;
        Ok(())
    }

    /// Reads one line, `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read from input")?;
        if read == 0 {
            debug!("End of input");
            return Ok(None);
        }
        Ok(Some(line))
    }
}
