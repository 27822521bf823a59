//! Random playouts used by the Simulate step.

use engine_core::{GameResult, Outcome, Position, Side};
use rand::seq::SliceRandom;
use rand_chacha::ChaCha20Rng;

/// Final state of a single random playout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RolloutOutcome {
    /// Result read from the board where the playout stopped.
    pub result: GameResult,

    /// Plies played, never more than the cap.
    pub plies: u32,
}

/// Play uniformly random moves from a copy of `position`, `side` to move.
///
/// Stops after `ply_cap` plies or when neither side can move. When the side
/// to move has no legal move it passes and the opponent plays instead; the
/// pass and the reply count as one ply and the turn returns to the passing
/// side.
pub fn rollout<P: Position>(
    position: &P,
    side: Side,
    ply_cap: u32,
    rng: &mut ChaCha20Rng,
) -> RolloutOutcome {
    let mut board = position.deep_copy();
    let mut current = side;
    let mut plies = 0;

    while plies < ply_cap && !board.is_terminal() {
        let moves = board.legal_moves(current);
        match moves.choose(rng) {
            Some(&mv) => {
                board.apply_move(mv, current);
                current = current.opponent();
            }
            None => {
                let replier = current.opponent();
                let replies = board.legal_moves(replier);
                // Not terminal, so the opponent has a move
                if let Some(&mv) = replies.choose(rng) {
                    board.apply_move(mv, replier);
                }
            }
        }
        plies += 1;
    }

    RolloutOutcome {
        result: board.winner(),
        plies,
    }
}

/// Reward of a finished playout from `engine_side`'s point of view.
///
/// Draws score 0. Otherwise the magnitude is `win_bonus + margin`, positive
/// when `engine_side` won and negative when it lost.
pub fn reward_for(result: &GameResult, engine_side: Side, win_bonus: f64) -> f64 {
    match result.outcome {
        Outcome::Draw => 0.0,
        outcome => {
            let magnitude = win_bonus + result.margin as f64;
            if outcome == Outcome::won_by(engine_side) {
                magnitude
            } else {
                -magnitude
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use games_othello::Board;
    use rand::SeedableRng;

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
    fn test_rollout_respects_ply_cap() {
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        for cap in [1, 5, 10] {
            let outcome = rollout(&Board::new(), Side::Black, cap, &mut rng);
            assert_eq!(outcome.plies, cap, "opening cannot end within {} plies", cap);
        }
    }

    #[test]
    fn test_single_ply_cap_scores_current_board() {
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        let outcome = rollout(&Board::new(), Side::Black, 1, &mut rng);

        // Any opening move leaves Black 4 discs against 1
        assert_eq!(outcome.result.outcome, Outcome::FirstSideWins);
        assert_eq!(outcome.result.margin, 3);
    }

    #[test]
    fn test_rollout_does_not_mutate_input() {
        let board = Board::new();
        let mut rng = ChaCha20Rng::seed_from_u64(9);
        rollout(&board, Side::Black, 50, &mut rng);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_rollout_pass_then_move() {
        // White cannot move, so it passes and Black plays C1, ending the game
        let mut rng = ChaCha20Rng::seed_from_u64(5);
        let outcome = rollout(&single_move_board(), Side::White, 50, &mut rng);

        assert_eq!(outcome.plies, 1);
        assert_eq!(outcome.result.outcome, Outcome::FirstSideWins);
        assert_eq!(outcome.result.margin, 3);
    }

    #[test]
    fn test_rollout_from_terminal_position() {
        let board = Board::from_rows([
            "XXXX....",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
            ".......O",
        ])
        .unwrap();
        let mut rng = ChaCha20Rng::seed_from_u64(0);
        let outcome = rollout(&board, Side::White, 50, &mut rng);

        assert_eq!(outcome.plies, 0);
        assert_eq!(outcome.result, board.winner());
    }

    #[test]
    fn test_full_rollout_terminates() {
        let mut rng = ChaCha20Rng::seed_from_u64(11);
        for _ in 0..20 {
            let outcome = rollout(&Board::new(), Side::Black, 200, &mut rng);
            assert!(outcome.plies <= 60);
        }
    }

    #[test]
    fn test_rollout_is_deterministic_per_seed() {
        let a = rollout(&Board::new(), Side::Black, 50, &mut ChaCha20Rng::seed_from_u64(42));
        let b = rollout(&Board::new(), Side::Black, 50, &mut ChaCha20Rng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_reward_sign_follows_engine_side() {
        let black_wins = GameResult::from_counts(40, 24);
        assert_eq!(reward_for(&black_wins, Side::Black, 10.0), 26.0);
        assert_eq!(reward_for(&black_wins, Side::White, 10.0), -26.0);

        let white_wins = GameResult::from_counts(10, 13);
        assert_eq!(reward_for(&white_wins, Side::White, 10.0), 13.0);
        assert_eq!(reward_for(&white_wins, Side::Black, 10.0), -13.0);
    }

    #[test]
    fn test_draw_rewards_zero() {
        let draw = GameResult::draw();
        assert_eq!(reward_for(&draw, Side::Black, 10.0), 0.0);
        assert_eq!(reward_for(&draw, Side::White, 10.0), 0.0);
    }
}
