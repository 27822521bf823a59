//! UCT search implementation.
//!
//! Each iteration runs the four classic phases:
//! 1. Selection: descend through fully expanded nodes by UCB1
//! 2. Expansion: branch a node the second time it is reached
//! 3. Simulation: random playout from the selected node
//! 4. Backpropagation: update visits and rewards along the path to the root
//!
//! After the budget is spent, the root child with the highest UCB1 score
//! decides the move.

use engine_core::{Position, Side};
use rand_chacha::ChaCha20Rng;
use thiserror::Error;
use tracing::{debug, trace};

use crate::config::UctConfig;
use crate::node::NodeId;
use crate::rollout::{reward_for, rollout};
use crate::tree::MctsTree;

/// Errors that can occur during UCT search.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    #[error("No legal move available for {side}")]
    NoLegalMove { side: Side },

    #[error("Invalid search config: {0}")]
    InvalidConfig(String),
}

/// Result of a UCT search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult<M> {
    /// Move chosen by the Decide step
    pub best_move: M,

    /// Number of iterations performed
    pub iterations: u32,

    /// Visit count of the root after the search
    pub root_visits: u32,

    /// Mean reward of the chosen child, from the searching side's view
    pub value: f64,

    /// UCB1 score of the chosen child at decision time
    pub score: f64,
}

/// UCT search state for one decision.
pub struct UctSearch<P: Position> {
    tree: MctsTree<P>,
    config: UctConfig,
    engine_side: Side,
}

impl<P: Position> UctSearch<P> {
    /// Create a new search rooted at a copy of `position`, `side` to move.
    pub fn new(position: &P, side: Side, config: UctConfig) -> Result<Self, SearchError> {
        config.validate()?;

        Ok(Self {
            tree: MctsTree::new(position.deep_copy(), side),
            config,
            engine_side: side,
        })
    }

    /// Run the search for the configured number of iterations.
    pub fn run(&mut self, rng: &mut ChaCha20Rng) -> Result<SearchResult<P::Move>, SearchError> {
        let root_id = self.tree.root();

        // A root without moves is never expanded or iterated
        if !self.tree.get(root_id).is_expanded() && self.expand_children(root_id) == 0 {
            return Err(SearchError::NoLegalMove {
                side: self.engine_side,
            });
        }

        for _ in 0..self.config.iterations {
            self.iterate(rng);
        }

        self.decide()
    }

    /// Run a single iteration (select -> expand -> simulate -> backpropagate).
    fn iterate(&mut self, rng: &mut ChaCha20Rng) {
        let selected = self.select(self.tree.root());
        let leaf = self.expand(selected);
        let reward = self.simulate(leaf, rng);

        self.tree.backpropagate(leaf, reward, self.engine_side);

        trace!(
            selected = selected.0,
            leaf = leaf.0,
            reward,
            "UCT iteration complete"
        );
    }

    /// Descend from `node_id` to the node the next rollout starts from.
    ///
    /// Childless nodes stop the descent. A node with an unvisited child yields
    /// the first such child; a fully expanded node descends by UCB1.
    pub fn select(&self, node_id: NodeId) -> NodeId {
        let mut current = node_id;

        loop {
            if !self.tree.get(current).is_expanded() {
                return current;
            }

            if !self.tree.is_fully_expanded(current) {
                return self.tree.first_unvisited_child(current).unwrap_or(current);
            }

            match self.tree.select_child(current, self.config.exploration) {
                Some(child_id) => current = child_id,
                None => return current,
            }
        }
    }

    /// Branch a node that has been simulated before.
    ///
    /// Unvisited nodes are returned unchanged so they get a rollout first.
    /// Otherwise one child is created per legal move and the first child is
    /// returned; a node without legal moves is returned itself.
    pub fn expand(&mut self, node_id: NodeId) -> NodeId {
        let node = self.tree.get(node_id);
        if node.visits == 0 {
            return node_id;
        }

        if !node.is_expanded() {
            self.expand_children(node_id);
        }

        self.tree
            .get(node_id)
            .children
            .first()
            .copied()
            .unwrap_or(node_id)
    }

    /// Random playout from `node_id`, scored for the searching side.
    pub fn simulate(&self, node_id: NodeId, rng: &mut ChaCha20Rng) -> f64 {
        let node = self.tree.get(node_id);
        let outcome = rollout(
            &node.position,
            node.side_to_move,
            self.config.rollout_ply_cap,
            rng,
        );
        reward_for(&outcome.result, self.engine_side, self.config.win_bonus)
    }

    /// Add one child per legal move of the side to move. Returns how many
    /// children were created.
    fn expand_children(&mut self, node_id: NodeId) -> usize {
        let node = self.tree.get(node_id);
        let side = node.side_to_move;
        let position = node.position.deep_copy();
        let moves = position.legal_moves(side);

        for &mv in &moves {
            let mut child_position = position.deep_copy();
            child_position.apply_move(mv, side);
            self.tree
                .add_child(node_id, child_position, mv, side.opponent());
        }

        moves.len()
    }

    /// Pick the root child with the highest UCB1 score.
    fn decide(&self) -> Result<SearchResult<P::Move>, SearchError> {
        let no_move = SearchError::NoLegalMove {
            side: self.engine_side,
        };
        let child_id = self
            .tree
            .best_child(self.config.exploration)
            .ok_or_else(|| no_move.clone())?;

        let root = self.tree.get(self.tree.root());
        let child = self.tree.get(child_id);
        let best_move = child.incoming_move.ok_or(no_move)?;

        let stats = self.tree.stats();
        debug!(
            side = %self.engine_side,
            best_move = %best_move,
            nodes = stats.total_nodes,
            max_depth = stats.max_depth,
            root_visits = stats.root_visits,
            child_visits = child.visits,
            value = child.mean_reward(),
            "UCT search complete"
        );

        Ok(SearchResult {
            best_move,
            iterations: self.config.iterations,
            root_visits: root.visits,
            value: child.mean_reward(),
            score: child.ucb_score(root.visits, self.config.exploration),
        })
    }

    /// Get the search tree (for inspection/debugging).
    pub fn tree(&self) -> &MctsTree<P> {
        &self.tree
    }
}

/// Convenience function to run a single UCT search.
pub fn run_uct<P: Position>(
    position: &P,
    side: Side,
    config: UctConfig,
    rng: &mut ChaCha20Rng,
) -> Result<SearchResult<P::Move>, SearchError> {
    let mut search = UctSearch::new(position, side, config)?;
    search.run(rng)
}

/// Choose a move for `side` using `iteration_budget` UCT iterations with the
/// default exploration and rollout settings.
///
/// Returns [`SearchError::NoLegalMove`] when `side` cannot move.
pub fn choose_move<P: Position>(
    position: &P,
    side: Side,
    iteration_budget: u32,
    rng: &mut ChaCha20Rng,
) -> Result<P::Move, SearchError> {
    let config = UctConfig::default().with_iterations(iteration_budget);
    run_uct(position, side, config, rng).map(|result| result.best_move)
}
