//! Configuration struct definitions.
//!
//! All config structs with serde deserialization support and default values.

use crate::defaults;
use serde::Deserialize;
use std::path::PathBuf;

// ============================================================================
// Serde default functions (required for #[serde(default = "...")])
// These call the accessor functions from defaults module
// ============================================================================

fn d_log_level() -> String {
    defaults::log_level().into()
}
fn d_iterations() -> u32 {
    defaults::iterations()
}
fn d_exploration() -> f64 {
    defaults::exploration()
}
fn d_rollout_ply_cap() -> u32 {
    defaults::rollout_ply_cap()
}
fn d_win_bonus() -> f64 {
    defaults::win_bonus()
}
fn d_black() -> String {
    defaults::black().into()
}
fn d_white() -> String {
    defaults::white().into()
}
fn d_games() -> u32 {
    defaults::games()
}
fn d_show_board() -> bool {
    defaults::show_board()
}

// ============================================================================
// Configuration Structs
// ============================================================================

/// Root configuration structure matching config.toml
#[derive(Debug, Deserialize, Default, Clone)]
pub struct CentralConfig {
    #[serde(default)]
    pub common: CommonConfig,
    #[serde(default)]
    pub mcts: MctsSettings,
    #[serde(default)]
    pub arena: ArenaConfig,
}

/// Common configuration shared by all components
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct CommonConfig {
    #[serde(default = "d_log_level")]
    pub log_level: String,
}

impl Default for CommonConfig {
    fn default() -> Self {
        Self {
            log_level: defaults::log_level().into(),
        }
    }
}

/// UCT search settings.
///
/// Mirrors the search crate's own config so this crate stays free of engine
/// dependencies; the arena converts between the two.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct MctsSettings {
    #[serde(default = "d_iterations")]
    pub iterations: u32,
    #[serde(default = "d_exploration")]
    pub exploration: f64,
    #[serde(default = "d_rollout_ply_cap")]
    pub rollout_ply_cap: u32,
    #[serde(default = "d_win_bonus")]
    pub win_bonus: f64,
}

impl Default for MctsSettings {
    fn default() -> Self {
        Self {
            iterations: defaults::iterations(),
            exploration: defaults::exploration(),
            rollout_ply_cap: defaults::rollout_ply_cap(),
            win_bonus: defaults::win_bonus(),
        }
    }
}

/// Arena (match runner) configuration
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ArenaConfig {
    /// Player kind for Black: "mcts", "random" or "human"
    #[serde(default = "d_black")]
    pub black: String,
    /// Player kind for White
    #[serde(default = "d_white")]
    pub white: String,
    #[serde(default = "d_games")]
    pub games: u32,
    #[serde(default = "d_show_board")]
    pub show_board: bool,
    /// Fixed RNG seed (None = seeded from entropy)
    #[serde(default)]
    pub seed: Option<u64>,
    /// Where to write the JSON match summary (None = don't write)
    #[serde(default)]
    pub stats_path: Option<PathBuf>,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            black: defaults::black().into(),
            white: defaults::white().into(),
            games: defaults::games(),
            show_board: defaults::show_board(),
            seed: None,
            stats_path: None,
        }
    }
}
