//! Single-game loop

use anyhow::{anyhow, Result};
use engine_core::{GameResult, Position, Side};
use games_othello::Board;
use std::io::Write;
use std::time::{Duration, Instant};
use tracing::{debug, info};

use crate::player::{Player, PlayerAction};

/// Outcome and bookkeeping for one finished (or abandoned) game.
#[derive(Debug, Clone)]
pub struct GameRecord {
    /// Result read from the final board
    pub result: GameResult,
    pub black_discs: u32,
    pub white_discs: u32,
    /// Moves played, passes excluded
    pub plies: u32,
    pub passes: u32,
    /// A player quit before the game ended
    pub abandoned: bool,
    /// Total time spent deciding, indexed Black then White
    pub think_time: [Duration; 2],
    /// Number of decisions made, indexed Black then White
    pub decisions: [u32; 2],
}

fn side_index(side: Side) -> usize {
    match side {
        Side::Black => 0,
        Side::White => 1,
    }
}

/// Play a game from the standard opening, Black first.
pub fn play_game(
    black: &mut dyn Player,
    white: &mut dyn Player,
    show_board: Option<&mut dyn Write>,
) -> Result<GameRecord> {
    play_game_from(Board::new(), Side::Black, black, white, show_board)
}

/// Play a game from an arbitrary position.
///
/// A side without a legal move passes. The game ends when neither side can
/// move or a player quits. When `show_board` is set, the board is printed
/// before every decision and once at the end.
pub fn play_game_from(
    mut board: Board,
    mut side: Side,
    black: &mut dyn Player,
    white: &mut dyn Player,
    mut show_board: Option<&mut dyn Write>,
) -> Result<GameRecord> {
    let mut plies = 0;
    let mut passes = 0;
    let mut abandoned = false;
    let mut think_time = [Duration::ZERO; 2];
    let mut decisions = [0u32; 2];

    while !board.is_terminal() {
        let legal = board.legal_moves(side);
        if legal.is_empty() {
            debug!(side = %side, "No legal move, passing");
            if let Some(out) = show_board.as_mut() {
                writeln!(out, "{} has no legal move and passes", side)?;
            }
            passes += 1;
            side = side.opponent();
            continue;
        }

        if let Some(out) = show_board.as_mut() {
            writeln!(out, "\n{}", board)?;
        }

        let player: &mut dyn Player = match side {
            Side::Black => &mut *black,
            Side::White => &mut *white,
        };

        let started = Instant::now();
        let action = player.select_move(&board, side)?;
        think_time[side_index(side)] += started.elapsed();
        decisions[side_index(side)] += 1;

        match action {
            PlayerAction::Quit => {
                info!(side = %side, plies, "Player quit, game abandoned");
                abandoned = true;
                break;
            }
            PlayerAction::Play(square) => {
                if !legal.contains(&square) {
                    return Err(anyhow!(
                        "{} player returned illegal move {} for {}",
                        player.kind(),
                        square,
                        side
                    ));
                }
                board.apply_move(square, side);
                plies += 1;
                debug!(side = %side, square = %square, plies, "Move played");
                if let Some(out) = show_board.as_mut() {
                    writeln!(out, "{} plays {}", side, square)?;
                }
            }
        }

        side = side.opponent();
    }

    if let Some(out) = show_board.as_mut() {
        writeln!(out, "\n{}", board)?;
    }

    Ok(GameRecord {
        result: board.winner(),
        black_discs: board.count(Side::Black),
        white_discs: board.count(Side::White),
        plies,
        passes,
        abandoned,
        think_time,
        decisions,
    })
}

/// One-line human readable summary of a game.
pub fn describe(record: &GameRecord) -> String {
    if record.abandoned {
        return format!(
            "abandoned after {} plies ({}-{})",
            record.plies, record.black_discs, record.white_discs
        );
    }

    match record.result.winner() {
        Some(side) => format!(
            "{} wins by {} ({}-{}) in {} plies",
            side, record.result.margin, record.black_discs, record.white_discs, record.plies
        ),
        None => format!(
            "draw ({}-{}) in {} plies",
            record.black_discs, record.white_discs, record.plies
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::human::HumanPlayer;
    use crate::player::RandomPlayer;
    use engine_core::Outcome;
    use std::io::Cursor;

    fn single_move_board() -> Board {
        Board::from_rows([
            "XO......",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
        ])
        .unwrap()
    }

    #[test]
    fn test_random_game_completes() {
        let mut black = RandomPlayer::with_seed(1);
        let mut white = RandomPlayer::with_seed(2);

        let record = play_game(&mut black, &mut white, None).unwrap();

        assert!(!record.abandoned);
        assert!(record.plies <= 60);
        assert_eq!(record.black_discs + record.white_discs, record.plies + 4);
        assert_eq!(
            record.result,
            GameResult::from_counts(record.black_discs, record.white_discs)
        );
        assert_eq!(record.decisions[0] + record.decisions[1], record.plies);
    }

    #[test]
    fn test_seeded_games_repeat() {
        let play = || {
            let mut black = RandomPlayer::with_seed(10);
            let mut white = RandomPlayer::with_seed(11);
            play_game(&mut black, &mut white, None).unwrap()
        };

        let first = play();
        let second = play();
        assert_eq!(first.result, second.result);
        assert_eq!(first.plies, second.plies);
        assert_eq!(first.passes, second.passes);
    }

    #[test]
    fn test_pass_then_move() {
        let mut black = RandomPlayer::with_seed(1);
        let mut white = RandomPlayer::with_seed(2);

        let record =
            play_game_from(single_move_board(), Side::White, &mut black, &mut white, None).unwrap();

        assert_eq!(record.passes, 1);
        assert_eq!(record.plies, 1);
        assert_eq!(record.decisions, [1, 0]);
        assert_eq!(record.result.outcome, Outcome::FirstSideWins);
        assert_eq!(record.result.margin, 3);
    }

    #[test]
    fn test_human_quit_abandons_game() {
        let mut output = Vec::new();
        let mut black = HumanPlayer::new(Cursor::new(&b"Q\n"[..]), &mut output);
        let mut white = RandomPlayer::with_seed(3);

        let record = play_game(&mut black, &mut white, None).unwrap();

        assert!(record.abandoned);
        assert_eq!(record.plies, 0);
        assert!(describe(&record).starts_with("abandoned after 0 plies"));
    }

    #[test]
    fn test_show_board_output() {
        let mut black = RandomPlayer::with_seed(1);
        let mut white = RandomPlayer::with_seed(2);
        let mut out = Vec::new();

        let record = play_game_from(
            single_move_board(),
            Side::White,
            &mut black,
            &mut white,
            Some(&mut out),
        )
        .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("White(O) has no legal move and passes"));
        assert!(text.contains("Black(X) plays C1"));
        assert!(text.contains("  A B C D E F G H"));
        assert_eq!(describe(&record), "Black(X) wins by 3 (3-0) in 1 plies");
    }
}
