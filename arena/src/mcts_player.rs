//! UCT-backed player

use anyhow::{anyhow, Result};
use engine_config::MctsSettings;
use engine_core::Side;
use games_othello::Board;
use mcts::{run_uct, UctConfig};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing::debug;

use crate::player::{Player, PlayerAction, PlayerKind};

/// Build the search config from the central `[mcts]` settings.
pub fn uct_config_from(settings: &MctsSettings) -> UctConfig {
    UctConfig::default()
        .with_iterations(settings.iterations)
        .with_exploration(settings.exploration)
        .with_rollout_ply_cap(settings.rollout_ply_cap)
        .with_win_bonus(settings.win_bonus)
}

/// Player that runs a fresh UCT search for every move.
#[derive(Debug)]
pub struct MctsPlayer {
    config: UctConfig,
    rng: ChaCha20Rng,
}

impl MctsPlayer {
    pub fn new(config: UctConfig) -> Self {
        Self {
            config,
            rng: ChaCha20Rng::from_entropy(),
        }
    }

    /// Create with a specific seed for reproducible play
    pub fn with_seed(config: UctConfig, seed: u64) -> Self {
        Self {
            config,
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl Player for MctsPlayer {
    fn kind(&self) -> PlayerKind {
        PlayerKind::Mcts
    }

    fn select_move(&mut self, board: &Board, side: Side) -> Result<PlayerAction> {
        let result = run_uct(board, side, self.config.clone(), &mut self.rng)
            .map_err(|e| anyhow!("MCTS search failed: {}", e))?;

        debug!(
            side = %side,
            best_move = %result.best_move,
            value = result.value,
            score = result.score,
            iterations = result.iterations,
            "MCTS selected move"
        );

        Ok(PlayerAction::Play(result.best_move))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine_core::Position;

    #[test]
    fn test_config_from_settings() {
        let settings = MctsSettings {
            iterations: 120,
            exploration: 0.8,
            rollout_ply_cap: 30,
            win_bonus: 5.0,
        };
        let config = uct_config_from(&settings);

        assert_eq!(config.iterations, 120);
        assert!((config.exploration - 0.8).abs() < 1e-12);
        assert_eq!(config.rollout_ply_cap, 30);
        assert!((config.win_bonus - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_default_settings_match_search_defaults() {
        assert_eq!(uct_config_from(&MctsSettings::default()), UctConfig::default());
    }

    #[test]
    fn test_single_legal_move() {
        let board = Board::from_rows([
            "XO......",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
        ])
        .unwrap();
        let mut player = MctsPlayer::with_seed(UctConfig::for_testing(), 42);

        let action = player.select_move(&board, Side::Black).unwrap();
        assert_eq!(action, PlayerAction::Play("C1".parse().unwrap()));
    }

    #[test]
    fn test_seeded_players_agree() {
        let board = Board::new();
        let mut player1 = MctsPlayer::with_seed(UctConfig::for_testing(), 7);
        let mut player2 = MctsPlayer::with_seed(UctConfig::for_testing(), 7);

        let first = player1.select_move(&board, Side::Black).unwrap();
        let second = player2.select_move(&board, Side::Black).unwrap();
        assert_eq!(first, second);

        let PlayerAction::Play(mv) = first else {
            panic!("MCTS player never quits");
        };
        assert!(board.legal_moves(Side::Black).contains(&mv));
    }

    #[test]
    fn test_no_move_is_an_error() {
        let board = Board::empty();
        let mut player = MctsPlayer::with_seed(UctConfig::for_testing(), 1);
        let err = player.select_move(&board, Side::White).unwrap_err();
        assert!(err.to_string().contains("MCTS search failed"));
    }
}
