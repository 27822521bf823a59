//! Core traits and types for the Reversi engine
//!
//! This crate provides the fundamental abstractions shared by the rules
//! engine and the search:
//! - `Side`: the two players, Black (`X`, moves first) and White (`O`)
//! - `Outcome` / `GameResult`: final result of a game with the winning margin
//! - `Position`: the narrow interface the search consumes from a rules engine

pub mod game_utils;
pub mod position;

// Re-export main types for convenience
pub use game_utils::{GameResult, Outcome, Side};
pub use position::Position;
