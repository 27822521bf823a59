//! Configuration for the arena binary
//!
//! Configuration is loaded from config.toml with environment variable overrides.
//! CLI arguments take highest priority, followed by env vars, then config.toml.

use anyhow::{anyhow, Result};
use clap::Parser;
use engine_config::{load_config, CentralConfig, MctsSettings};
use mcts::UctConfig;
use once_cell::sync::Lazy;
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;

use crate::mcts_player::uct_config_from;
use crate::player::PlayerKind;

// Load central config once at startup
static CENTRAL_CONFIG: Lazy<CentralConfig> = Lazy::new(load_config);

// Default value functions that read from central config
fn default_black() -> String {
    CENTRAL_CONFIG.arena.black.clone()
}

fn default_white() -> String {
    CENTRAL_CONFIG.arena.white.clone()
}

fn default_games() -> u32 {
    CENTRAL_CONFIG.arena.games
}

fn default_log_level() -> String {
    CENTRAL_CONFIG.common.log_level.clone()
}

fn default_iterations() -> u32 {
    CENTRAL_CONFIG.mcts.iterations
}

fn default_exploration() -> f64 {
    CENTRAL_CONFIG.mcts.exploration
}

fn default_rollout_ply_cap() -> u32 {
    CENTRAL_CONFIG.mcts.rollout_ply_cap
}

fn default_win_bonus() -> f64 {
    CENTRAL_CONFIG.mcts.win_bonus
}

#[derive(Parser, Debug, Clone)]
#[command(name = "arena")]
#[command(about = "Reversi arena - play Othello between UCT, random and human players")]
#[command(
    long_about = "Plays one or more Othello games. Black moves first; a side with no
legal move passes, and the game ends when neither side can move.
Human players enter squares such as D3, or Q to quit.

Configuration is loaded from config.toml with environment variable overrides.
CLI arguments take highest priority."
)]
pub struct Config {
    /// Player for Black (mcts, random, human)
    #[arg(long, default_value_t = default_black())]
    pub black: String,

    /// Player for White (mcts, random, human)
    #[arg(long, default_value_t = default_white())]
    pub white: String,

    /// Number of games to play
    #[arg(long, default_value_t = default_games())]
    pub games: u32,

    /// RNG seed for reproducible MCTS and random players
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the board before every move
    #[arg(long)]
    pub show_board: bool,

    /// Write a JSON match summary to this path
    #[arg(long)]
    pub stats_path: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value_t = default_log_level())]
    pub log_level: String,

    /// UCT iterations per MCTS move
    #[arg(long, default_value_t = default_iterations())]
    pub iterations: u32,

    /// UCB1 exploration constant
    #[arg(long, default_value_t = default_exploration())]
    pub exploration: f64,

    /// Maximum plies per random rollout
    #[arg(long, default_value_t = default_rollout_ply_cap())]
    pub rollout_ply_cap: u32,

    /// Base reward for a decisive rollout
    #[arg(long, default_value_t = default_win_bonus())]
    pub win_bonus: f64,
}

impl Config {
    /// Fill options that have no clap default from the central config.
    pub fn with_central_fallbacks(self) -> Self {
        self.with_fallbacks(&CENTRAL_CONFIG)
    }

    fn with_fallbacks(mut self, central: &CentralConfig) -> Self {
        self.seed = self.seed.or(central.arena.seed);
        self.stats_path = self.stats_path.or_else(|| central.arena.stats_path.clone());
        self.show_board = self.show_board || central.arena.show_board;
        self
    }

    pub fn validate(&self) -> Result<()> {
        self.black_kind()?;
        self.white_kind()?;

        if self.games == 0 {
            return Err(anyhow!("games must be greater than 0"));
        }

        self.uct_config()
            .validate()
            .map_err(|e| anyhow!("invalid MCTS settings: {}", e))?;

        if self.log_level.parse::<LevelFilter>().is_err() {
            return Err(anyhow!(
                "invalid log level '{}', expected one of trace, debug, info, warn, error",
                self.log_level
            ));
        }

        Ok(())
    }

    pub fn black_kind(&self) -> Result<PlayerKind> {
        self.black.parse()
    }

    pub fn white_kind(&self) -> Result<PlayerKind> {
        self.white.parse()
    }

    /// Any seat taken by a person.
    pub fn has_human(&self) -> bool {
        matches!(self.black_kind(), Ok(PlayerKind::Human))
            || matches!(self.white_kind(), Ok(PlayerKind::Human))
    }

    /// Humans need to see the board regardless of the flag.
    pub fn board_visible(&self) -> bool {
        self.show_board || self.has_human()
    }

    pub fn uct_config(&self) -> UctConfig {
        uct_config_from(&MctsSettings {
            iterations: self.iterations,
            exploration: self.exploration,
            rollout_ply_cap: self.rollout_ply_cap,
            win_bonus: self.win_bonus,
        })
    }
}
