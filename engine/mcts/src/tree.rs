//! MCTS tree structure with arena allocation.
//!
//! Nodes are stored in a contiguous Vec and referenced by NodeId indices.
//! Parents are stored as handles, so walking back to the root never needs
//! shared ownership.

use engine_core::{Position, Side};

use crate::node::{NodeId, SearchNode};

/// MCTS tree with arena-based node storage.
#[derive(Debug)]
pub struct MctsTree<P: Position> {
    /// Arena storing all nodes
    nodes: Vec<SearchNode<P>>,

    /// Root node index (always 0 after initialization)
    root: NodeId,
}

impl<P: Position> MctsTree<P> {
    /// Create a new tree whose root holds `position` with `side` to move.
    pub fn new(position: P, side: Side) -> Self {
        Self {
            nodes: vec![SearchNode::new_root(position, side)],
            root: NodeId(0),
        }
    }

    /// Get the root node ID.
    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Get a reference to a node by ID.
    #[inline]
    pub fn get(&self, id: NodeId) -> &SearchNode<P> {
        &self.nodes[id.0 as usize]
    }

    /// Get a mutable reference to a node by ID.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut SearchNode<P> {
        &mut self.nodes[id.0 as usize]
    }

    /// Allocate a new node and return its ID.
    pub fn allocate(&mut self, node: SearchNode<P>) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Get the total number of nodes in the tree.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if tree is empty (should never be true after construction).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Add a child reached from `parent_id` by `mv`, with `side` to move next.
    /// The child is appended to the parent's children in discovery order.
    pub fn add_child(&mut self, parent_id: NodeId, position: P, mv: P::Move, side: Side) -> NodeId {
        debug_assert_eq!(
            side,
            self.get(parent_id).side_to_move.opponent(),
            "child side must alternate"
        );

        let child_id = self.allocate(SearchNode::new_child(parent_id, mv, position, side));
        self.get_mut(parent_id).children.push(child_id);
        child_id
    }

    /// Child of `node_id` with the highest UCB1 score.
    ///
    /// Ties go to the first child in insertion order. Returns `None` when the
    /// node has no children.
    pub fn select_child(&self, node_id: NodeId, exploration: f64) -> Option<NodeId> {
        let node = self.get(node_id);
        let parent_visits = node.visits;

        let mut best: Option<(NodeId, f64)> = None;
        for &child_id in &node.children {
            let score = self.get(child_id).ucb_score(parent_visits, exploration);
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((child_id, score)),
            }
        }

        best.map(|(id, _)| id)
    }

    /// True iff the node has children and every one has been visited.
    pub fn is_fully_expanded(&self, node_id: NodeId) -> bool {
        let node = self.get(node_id);
        node.is_expanded() && node.children.iter().all(|&id| self.get(id).visits > 0)
    }

    /// First child in insertion order with zero visits.
    pub fn first_unvisited_child(&self, node_id: NodeId) -> Option<NodeId> {
        self.get(node_id)
            .children
            .iter()
            .copied()
            .find(|&id| self.get(id).visits == 0)
    }

    /// Backpropagate a rollout reward from a leaf to the root.
    ///
    /// `reward` is signed from `engine_side`'s point of view. Every node on the
    /// path gains one visit. A node stores the reward from the perspective of
    /// the player who moved into it: nodes where the engine's opponent is to
    /// move add `reward`, nodes where the engine is to move subtract it.
    pub fn backpropagate(&mut self, leaf_id: NodeId, reward: f64, engine_side: Side) {
        let mut current_id = leaf_id;

        loop {
            let node = self.get_mut(current_id);
            node.visits += 1;
            if node.side_to_move == engine_side {
                node.reward_sum -= reward;
            } else {
                node.reward_sum += reward;
            }

            if node.is_root() {
                break;
            }
            current_id = node.parent;
        }
    }

    /// The Decide step: root child with the highest UCB1 score, same
    /// tie-break as selection.
    pub fn best_child(&self, exploration: f64) -> Option<NodeId> {
        self.select_child(self.root, exploration)
    }

    /// Move leading to the best root child, if the root has any children.
    pub fn best_move(&self, exploration: f64) -> Option<P::Move> {
        self.best_child(exploration)
            .and_then(|id| self.get(id).incoming_move)
    }

    /// Get statistics about the tree for debugging.
    pub fn stats(&self) -> TreeStats {
        let root = self.get(self.root);
        TreeStats {
            total_nodes: self.nodes.len(),
            root_visits: root.visits,
            root_value: root.mean_reward(),
            max_depth: self.compute_max_depth(self.root, 0),
        }
    }

    fn compute_max_depth(&self, node_id: NodeId, current_depth: u32) -> u32 {
        let node = self.get(node_id);
        if node.children.is_empty() {
            return current_depth;
        }

        node.children
            .iter()
            .map(|&id| self.compute_max_depth(id, current_depth + 1))
            .max()
            .unwrap_or(current_depth)
    }
}

/// Statistics about an MCTS tree.
#[derive(Debug, Clone)]
pub struct TreeStats {
    pub total_nodes: usize,
    pub root_visits: u32,
    pub root_value: f64,
    pub max_depth: u32,
}
