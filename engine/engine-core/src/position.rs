//! Position trait consumed by the search
//!
//! The search treats a board as an opaque value it can copy, query for legal
//! moves, advance, and score. Any rules engine implementing [`Position`] can
//! be searched.

use crate::game_utils::{GameResult, Side};
use std::fmt;

/// Board state of a two-player, perfect-information game.
///
/// # Example
///
/// ```rust
/// use engine_core::{GameResult, Position, Side};
///
/// /// A pile of stones; each move takes one; whoever takes the last wins.
/// #[derive(Debug, Clone)]
/// struct Pile {
///     stones: u32,
///     last_taker: Option<Side>,
/// }
///
/// impl Position for Pile {
///     type Move = u32;
///
///     fn legal_moves(&self, _side: Side) -> Vec<u32> {
///         if self.stones > 0 { vec![1] } else { Vec::new() }
///     }
///
///     fn apply_move(&mut self, mv: u32, side: Side) {
///         self.stones -= mv;
///         self.last_taker = Some(side);
///     }
///
///     fn winner(&self) -> GameResult {
///         match self.last_taker {
///             Some(side) => GameResult::from_counts(
///                 (side == Side::Black) as u32,
///                 (side == Side::White) as u32,
///             ),
///             None => GameResult::draw(),
///         }
///     }
/// }
///
/// let mut pile = Pile { stones: 1, last_taker: None };
/// let copy = pile.deep_copy();
/// pile.apply_move(1, Side::Black);
/// assert!(pile.is_terminal());
/// assert!(!copy.is_terminal());
/// assert_eq!(pile.winner().winner(), Some(Side::Black));
/// ```
pub trait Position: Clone + fmt::Debug {
    /// A move on this board. Small and `Copy`.
    type Move: Copy + Eq + fmt::Debug + fmt::Display;

    /// All legal moves for `side`, in a deterministic order. May be empty.
    fn legal_moves(&self, side: Side) -> Vec<Self::Move>;

    /// Apply a legal move for `side` in place.
    ///
    /// Callers only pass moves returned by [`Position::legal_moves`] for the
    /// same side; behaviour for other moves is unspecified.
    fn apply_move(&mut self, mv: Self::Move, side: Side);

    /// Current result: winner and the winner's piece margin.
    fn winner(&self) -> GameResult;

    /// Independent copy sharing no mutable state with `self`.
    fn deep_copy(&self) -> Self {
        self.clone()
    }

    /// Neither side has a legal move.
    fn is_terminal(&self) -> bool {
        Side::ALL.iter().all(|&side| self.legal_moves(side).is_empty())
    }
}
