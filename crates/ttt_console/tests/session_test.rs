//! End-to-end tests for the console session.

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::Cursor;
use ttt_console::{GameOutcome, Participant, Screen, Session};
use ttt_engine::{BOARD_CELLS, Board, Mark};

/// Input that makes the human always take the lowest open position:
/// taken cells are rejected and the next number is tried.
const LOWEST_FIRST: &str = "0\n1\n2\n3\n4\n5\n6\n7\n8\n";

/// Plays the same game straight on the engine.
///
/// Returns the outcome and the last position the human claimed.
fn simulate(rng: &mut StdRng) -> (GameOutcome, usize) {
    let mut board = Board::new();
    let mut last_human = 0;
    let mut turn = 1;

    while !board.is_terminal() && turn <= BOARD_CELLS {
        if turn % 2 == 0 {
            board.pick_random_position(rng).unwrap();
        } else {
            last_human = board.available_positions()[0];
            board.apply_move(last_human, Mark::X).unwrap();
        }
        turn += 1;
    }

    let outcome = match board.winner() {
        None => GameOutcome::Tied,
        Some(_) => GameOutcome::Winner(Participant::for_mark(board.last_mark().unwrap()).unwrap()),
    };
    (outcome, last_human)
}

fn new_session(input: String, seed: u64) -> Session<Cursor<Vec<u8>>, Vec<u8>, StdRng> {
    Session::new(
        Cursor::new(input.into_bytes()),
        Screen::new(Vec::new(), false),
        StdRng::seed_from_u64(seed),
    )
}

#[test]
fn test_outcome_matches_engine_for_many_seeds() {
    let mut human_wins = 0;
    let mut other = 0;

    for seed in 0..50 {
        let (expected, _) = simulate(&mut StdRng::seed_from_u64(seed));
        let mut session = new_session(LOWEST_FIRST.to_string(), seed);

        let outcome = session.play_game().unwrap();
        assert_eq!(outcome, expected, "seed {seed}");

        match outcome {
            GameOutcome::Winner(Participant::Human) => human_wins += 1,
            _ => other += 1,
        }
    }

    assert!(human_wins > 0);
    assert!(other > 0);
}

#[test]
fn test_winner_comes_from_last_mark() {
    for seed in 0..50 {
        let mut session = new_session(LOWEST_FIRST.to_string(), seed);
        let outcome = session.play_game().unwrap();

        let board = session.board();
        match outcome {
            GameOutcome::Winner(participant) => {
                assert!(board.is_terminal());
                assert_eq!(board.winner(), Some(participant.mark()));
                assert_eq!(board.last_mark(), Some(participant.mark()));
            }
            GameOutcome::Tied => {
                assert!(!board.is_terminal());
                assert_eq!(board.filled_count(), BOARD_CELLS);
            }
        }
    }
}

#[test]
fn test_full_run_with_rematch() {
    let seed = 11;
    let mut rng = StdRng::seed_from_u64(seed);
    let (first, first_last) = simulate(&mut rng);
    let (second, second_last) = simulate(&mut rng);

    let moves = |last: usize| (0..=last).map(|pos| format!("{pos}\n")).collect::<String>();
    let input = format!("\n{}y\n{}n\n", moves(first_last), moves(second_last));

    let mut session = new_session(input, seed);
    let scoreboard = session.run().unwrap();

    assert_eq!(scoreboard.games, 2);
    let mut expected = ttt_console::Scoreboard::default();
    expected.record(first);
    expected.record(second);
    assert_eq!(scoreboard, expected);

    let out = String::from_utf8(session.into_screen().into_inner()).unwrap();
    assert_eq!(out.matches("Welcome to Tic Tac Toe").count(), 1);
    assert_eq!(out.matches("Play again? [y/N]").count(), 2);
    assert!(out.contains(&first.to_string()));
    assert!(out.contains(&second.to_string()));
}

#[test]
fn test_end_of_input_mid_game_is_an_error() {
    let mut session = new_session("\n0\n".to_string(), 3);
    assert!(session.run().is_err());
    assert_eq!(session.scoreboard().games, 0);
}
