//! MCTS tree node representation.
//!
//! Each node represents a board position reached by playing a move from the
//! parent. Nodes store the visit statistics used for UCB1 selection.

use engine_core::{Position, Side};

/// Index into the node arena. Using a newtype for type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    pub const NONE: NodeId = NodeId(u32::MAX);

    pub fn is_none(self) -> bool {
        self == Self::NONE
    }
}

/// A node in the search tree.
#[derive(Debug, Clone)]
pub struct SearchNode<P: Position> {
    /// Parent node index (NONE for root)
    pub parent: NodeId,

    /// Move that led to this node from the parent (None for root)
    pub incoming_move: Option<P::Move>,

    /// Board snapshot owned by this node alone
    pub position: P,

    /// Player about to move at this node
    pub side_to_move: Side,

    /// Number of times this node has been backpropagated through
    pub visits: u32,

    /// Sum of rewards backpropagated through this node, from the point of
    /// view of the player whose move produced it.
    pub reward_sum: f64,

    /// Child indices in discovery order. Empty until expanded.
    pub children: Vec<NodeId>,
}

impl<P: Position> SearchNode<P> {
    /// Create a new root node.
    pub fn new_root(position: P, side_to_move: Side) -> Self {
        Self {
            parent: NodeId::NONE,
            incoming_move: None,
            position,
            side_to_move,
            visits: 0,
            reward_sum: 0.0,
            children: Vec::new(),
        }
    }

    /// Create a new child node.
    pub fn new_child(parent: NodeId, incoming_move: P::Move, position: P, side_to_move: Side) -> Self {
        Self {
            parent,
            incoming_move: Some(incoming_move),
            position,
            side_to_move,
            visits: 0,
            reward_sum: 0.0,
            children: Vec::new(),
        }
    }

    /// Average reward, 0.0 if never visited.
    #[inline]
    pub fn mean_reward(&self) -> f64 {
        if self.visits == 0 {
            0.0
        } else {
            self.reward_sum / self.visits as f64
        }
    }

    /// UCB1 score of this node given its parent's visit count.
    ///
    /// UCB1 = r / v + C * sqrt(2 * ln(Vp) / v)
    ///
    /// Unvisited nodes score `+inf` so every child is tried once before any
    /// visited sibling is preferred.
    #[inline]
    pub fn ucb_score(&self, parent_visits: u32, exploration: f64) -> f64 {
        if self.visits == 0 {
            return f64::INFINITY;
        }

        let visits = self.visits as f64;
        let explore = (2.0 * (parent_visits as f64).ln() / visits).sqrt();
        self.reward_sum / visits + exploration * explore
    }

    /// Check if this node has been expanded (has children).
    #[inline]
    pub fn is_expanded(&self) -> bool {
        !self.children.is_empty()
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}
