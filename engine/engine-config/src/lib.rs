//! Centralized configuration loading from config.toml.
//!
//! This crate provides configuration structs and loading logic shared
//! across the Reversi components (search settings, arena).
//!
//! # Configuration Priority
//!
//! Settings are loaded with the following priority (highest to lowest):
//! 1. Environment variables (`REVERSI_<SECTION>_<KEY>`)
//! 2. config.toml file
//! 3. Built-in defaults (config.defaults.toml, embedded at compile time)
//!
//! Command-line flags in the arena binary sit above all of these.
//!
//! # Environment Variable Override Pattern
//!
//! ```text
//! REVERSI_<SECTION>_<KEY>=value
//!
//! Examples:
//!     REVERSI_COMMON_LOG_LEVEL=debug
//!     REVERSI_MCTS_ITERATIONS=400
//!     REVERSI_MCTS_EXPLORATION=1.0
//!     REVERSI_ARENA_WHITE=human
//!     REVERSI_ARENA_SEED=42
//! ```

mod defaults;
mod loader;
mod structs;

pub use defaults::*;
pub use loader::{apply_env_overrides, load_config, load_from_path, CONFIG_SEARCH_PATHS};
pub use structs::*;
