//! Move selection for the arena's players

use anyhow::{anyhow, Result};
use engine_core::{Position, Side};
use games_othello::{Board, Square};
use rand::prelude::*;
use rand_chacha::ChaCha20Rng;
use std::fmt;
use std::str::FromStr;

/// What a player decided to do on its turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    Play(Square),
    /// Abandon the game (human players only)
    Quit,
}

/// The kinds of player the arena can seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerKind {
    Mcts,
    Random,
    Human,
}

impl PlayerKind {
    pub const ALL: [PlayerKind; 3] = [PlayerKind::Mcts, PlayerKind::Random, PlayerKind::Human];

    pub fn as_str(self) -> &'static str {
        match self {
            PlayerKind::Mcts => "mcts",
            PlayerKind::Random => "random",
            PlayerKind::Human => "human",
        }
    }
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlayerKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_ascii_lowercase();
        PlayerKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == lower)
            .ok_or_else(|| {
                anyhow!(
                    "invalid player kind '{}', expected one of mcts, random, human",
                    s
                )
            })
    }
}

/// Trait for anything that can take a turn.
///
/// The arena only asks for a move when `side` has at least one legal move.
pub trait Player {
    fn kind(&self) -> PlayerKind;

    fn select_move(&mut self, board: &Board, side: Side) -> Result<PlayerAction>;
}

/// Player that picks uniformly among the legal moves.
#[derive(Debug)]
pub struct RandomPlayer {
    rng: ChaCha20Rng,
}

impl RandomPlayer {
    pub fn new() -> Self {
        Self {
            rng: ChaCha20Rng::from_entropy(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for RandomPlayer {
    fn kind(&self) -> PlayerKind {
        PlayerKind::Random
    }

    fn select_move(&mut self, board: &Board, side: Side) -> Result<PlayerAction> {
        let moves = board.legal_moves(side);
        moves
            .choose(&mut self.rng)
            .map(|&mv| PlayerAction::Play(mv))
            .ok_or_else(|| anyhow!("{} has no legal move", side))
    }
}
