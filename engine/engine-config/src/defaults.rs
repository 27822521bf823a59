//! Default configuration values loaded from config.defaults.toml.
//!
//! The defaults file is embedded at compile time, so a binary built from this
//! workspace always agrees with the checked-in defaults.

use once_cell::sync::Lazy;
use serde::Deserialize;

/// The embedded defaults TOML file (loaded at compile time)
const DEFAULTS_TOML: &str = include_str!("../../../config.defaults.toml");

/// Parsed defaults structure (parsed once at first use)
static DEFAULTS: Lazy<DefaultsConfig> = Lazy::new(|| {
    toml::from_str(DEFAULTS_TOML).expect("config.defaults.toml should be valid TOML")
});

// ============================================================================
// Internal structs for parsing config.defaults.toml
// ============================================================================

#[derive(Debug, Deserialize)]
struct DefaultsConfig {
    common: CommonDefaults,
    mcts: MctsDefaults,
    arena: ArenaDefaults,
}

#[derive(Debug, Deserialize)]
struct CommonDefaults {
    log_level: String,
}

#[derive(Debug, Deserialize)]
struct MctsDefaults {
    iterations: u32,
    exploration: f64,
    rollout_ply_cap: u32,
    win_bonus: f64,
}

#[derive(Debug, Deserialize)]
struct ArenaDefaults {
    black: String,
    white: String,
    games: u32,
    show_board: bool,
}

// ============================================================================
// Public accessor functions
// ============================================================================

// Common
pub fn log_level() -> &'static str {
    &DEFAULTS.common.log_level
}

// MCTS
pub fn iterations() -> u32 {
    DEFAULTS.mcts.iterations
}
pub fn exploration() -> f64 {
    DEFAULTS.mcts.exploration
}
pub fn rollout_ply_cap() -> u32 {
    DEFAULTS.mcts.rollout_ply_cap
}
pub fn win_bonus() -> f64 {
    DEFAULTS.mcts.win_bonus
}

// Arena
pub fn black() -> &'static str {
    &DEFAULTS.arena.black
}
pub fn white() -> &'static str {
    &DEFAULTS.arena.white
}
pub fn games() -> u32 {
    DEFAULTS.arena.games
}
pub fn show_board() -> bool {
    DEFAULTS.arena.show_board
}
