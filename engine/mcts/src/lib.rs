//! UCT (Upper Confidence bounds applied to Trees) Monte Carlo Tree Search.
//!
//! This crate provides a game-agnostic UCT implementation that works with any
//! game implementing the `engine-core` [`Position`](engine_core::Position)
//! trait. It ships with Othello in mind but has no Othello-specific code.
//!
//! # Overview
//!
//! The search grows a tree by running iterations. Each iteration consists of
//! four phases:
//!
//! 1. **Selection**: descend through fully expanded nodes using UCB1; stop at
//!    a childless node or at the first unvisited child
//! 2. **Expansion**: a node is branched the second time it is reached, one
//!    child per legal move
//! 3. **Simulation**: play uniformly random moves (capped in plies) and score
//!    the final board for the searching side
//! 4. **Backpropagation**: update visit counts and rewards along the path
//!    from leaf to root, each node seeing the reward from the perspective of
//!    the player who moved into it
//!
//! # Usage
//!
//! ```rust
//! use engine_core::Side;
//! use games_othello::Board;
//! use mcts::{choose_move, run_uct, UctConfig};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha20Rng;
//!
//! let board = Board::new();
//! let mut rng = ChaCha20Rng::seed_from_u64(42);
//!
//! // Quick decision with the default settings
//! let mv = choose_move(&board, Side::Black, 50, &mut rng).unwrap();
//! println!("Best move: {}", mv);
//!
//! // Full result with custom settings
//! let config = UctConfig::default().with_iterations(100).with_exploration(1.0);
//! let result = run_uct(&board, Side::Black, config, &mut rng).unwrap();
//! println!("Value: {:.2} over {} iterations", result.value, result.iterations);
//! ```
//!
//! # Configuration
//!
//! The [`UctConfig`] struct controls search behavior:
//!
//! - `iterations`: iterations per decision (default: 50)
//! - `exploration`: UCB1 constant `C` (default: 1.5)
//! - `rollout_ply_cap`: maximum plies per rollout (default: 50)
//! - `win_bonus`: base reward for a decisive rollout (default: 10.0)
//!
//! # Architecture
//!
//! ```text
//! +-----------------------------------------------+
//! |                   UctSearch                   |
//! +-----------------------------------------------+
//! |  +-------------+   +-----------------------+  |
//! |  |  MctsTree   |   |   rollout / reward    |  |
//! |  |  (arena)    |   |   (random playouts)   |  |
//! |  +------+------+   +-----------+-----------+  |
//! |         |                      |              |
//! |         v                      v              |
//! |  +-----------------------------------------+  |
//! |  |  select -> expand -> simulate ->        |  |
//! |  |           backpropagate, then decide    |  |
//! |  +-----------------------------------------+  |
//! +-----------------------------------------------+
//! ```

pub mod config;
pub mod node;
pub mod rollout;
pub mod search;
pub mod tree;

// Re-export main types
pub use config::UctConfig;
pub use node::{NodeId, SearchNode};
pub use rollout::{reward_for, rollout, RolloutOutcome};
pub use search::{choose_move, run_uct, SearchError, SearchResult, UctSearch};
pub use tree::{MctsTree, TreeStats};
