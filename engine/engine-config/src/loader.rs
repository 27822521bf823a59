//! Configuration loading logic.
//!
//! Handles loading config from files and applying environment variable overrides.

use crate::CentralConfig;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Standard locations to search for config.toml
pub const CONFIG_SEARCH_PATHS: &[&str] = &[
    "config.toml",    // Current directory
    "../config.toml", // Parent directory (when running from subdirectory)
];

/// Load the central configuration from config.toml.
///
/// Searches for config.toml in the following order:
/// 1. Path specified by REVERSI_CONFIG environment variable
/// 2. Current directory (config.toml)
/// 3. Parent directory (../config.toml)
///
/// After loading, environment variable overrides are applied.
pub fn load_config() -> CentralConfig {
    // Check for explicit config path
    if let Ok(path) = std::env::var("REVERSI_CONFIG") {
        let path = PathBuf::from(&path);
        if path.exists() {
            info!("Loading config from REVERSI_CONFIG: {}", path.display());
            return load_from_path(&path);
        }
        warn!(
            "REVERSI_CONFIG={} not found, searching defaults",
            path.display()
        );
    }

    // Search default locations
    for path_str in CONFIG_SEARCH_PATHS {
        let path = Path::new(path_str);
        if path.exists() {
            info!("Loading config from {}", path.display());
            return load_from_path(path);
        }
    }

    // Fall back to defaults
    debug!("No config.toml found, using built-in defaults");
    apply_env_overrides(CentralConfig::default())
}

/// Load configuration from a specific path.
///
/// Unreadable or malformed files fall back to the built-in defaults with a
/// warning; env overrides are applied either way.
pub fn load_from_path(path: &Path) -> CentralConfig {
    match std::fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(config) => apply_env_overrides(config),
            Err(e) => {
                warn!("Failed to parse {}: {}, using defaults", path.display(), e);
                apply_env_overrides(CentralConfig::default())
            }
        },
        Err(e) => {
            warn!("Failed to read {}: {}, using defaults", path.display(), e);
            apply_env_overrides(CentralConfig::default())
        }
    }
}

/// Macro to reduce env override boilerplate
macro_rules! env_override {
    // String field
    ($config:expr, $section:ident . $field:ident, $key:expr) => {
        if let Ok(v) = std::env::var($key) {
            $config.$section.$field = v;
        }
    };
    // Parseable field (u32, f64, bool, etc.)
    ($config:expr, $section:ident . $field:ident, $key:expr, parse) => {
        if let Ok(v) =
            std::env::var($key).and_then(|s| s.parse().map_err(|_| std::env::VarError::NotPresent))
        {
            $config.$section.$field = v;
        }
    };
    // Optional parseable field (Option<u64>, Option<PathBuf>, etc.)
    ($config:expr, $section:ident . $field:ident, $key:expr, optional_parse) => {
        if let Ok(v) =
            std::env::var($key).and_then(|s| s.parse().map_err(|_| std::env::VarError::NotPresent))
        {
            $config.$section.$field = Some(v);
        }
    };
}

/// Apply environment variable overrides to a configuration.
///
/// Environment variables follow the pattern: REVERSI_<SECTION>_<KEY>
pub fn apply_env_overrides(mut config: CentralConfig) -> CentralConfig {
    // Common
    env_override!(config, common.log_level, "REVERSI_COMMON_LOG_LEVEL");

    // MCTS
    env_override!(
        config,
        mcts.iterations,
        "REVERSI_MCTS_ITERATIONS",
        parse
    );
    env_override!(
        config,
        mcts.exploration,
        "REVERSI_MCTS_EXPLORATION",
        parse
    );
    env_override!(
        config,
        mcts.rollout_ply_cap,
        "REVERSI_MCTS_ROLLOUT_PLY_CAP",
        parse
    );
    env_override!(config, mcts.win_bonus, "REVERSI_MCTS_WIN_BONUS", parse);

    // Arena
    env_override!(config, arena.black, "REVERSI_ARENA_BLACK");
    env_override!(config, arena.white, "REVERSI_ARENA_WHITE");
    env_override!(config, arena.games, "REVERSI_ARENA_GAMES", parse);
    env_override!(
        config,
        arena.show_board,
        "REVERSI_ARENA_SHOW_BOARD",
        parse
    );
    env_override!(config, arena.seed, "REVERSI_ARENA_SEED", optional_parse);
    env_override!(
        config,
        arena.stats_path,
        "REVERSI_ARENA_STATS_PATH",
        optional_parse
    );

    config
}
