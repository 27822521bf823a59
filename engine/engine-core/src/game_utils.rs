//! Shared types for two-player games.
//!
//! Side identifiers and game outcomes used by both the rules engine and the
//! search. The search never looks inside a position; it only reasons about
//! whose turn it is and who won.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two players.
///
/// Black (`X`) always moves first; White (`O`) second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Black,
    White,
}

impl Side {
    /// Both sides in turn order.
    pub const ALL: [Side; 2] = [Side::Black, Side::White];

    /// The other player.
    #[inline]
    pub fn opponent(self) -> Side {
        match self {
            Side::Black => Side::White,
            Side::White => Side::Black,
        }
    }

    /// Board symbol for this side (`X` for Black, `O` for White).
    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Side::Black => 'X',
            Side::White => 'O',
        }
    }

    /// Parse a board symbol back into a side.
    pub fn from_symbol(c: char) -> Option<Side> {
        match c {
            'X' | 'x' => Some(Side::Black),
            'O' | 'o' => Some(Side::White),
            _ => None,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Black => write!(f, "Black({})", self.symbol()),
            Side::White => write!(f, "White({})", self.symbol()),
        }
    }
}

/// Who won a finished (or capped) game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    FirstSideWins,
    SecondSideWins,
    Draw,
}

impl Outcome {
    /// The winning side, or `None` for a draw.
    #[inline]
    pub fn winner(self) -> Option<Side> {
        match self {
            Outcome::FirstSideWins => Some(Side::Black),
            Outcome::SecondSideWins => Some(Side::White),
            Outcome::Draw => None,
        }
    }

    /// Outcome in which `side` wins.
    #[inline]
    pub fn won_by(side: Side) -> Outcome {
        match side {
            Side::Black => Outcome::FirstSideWins,
            Side::White => Outcome::SecondSideWins,
        }
    }
}

/// Result of a game: who won and by how many pieces.
///
/// `margin` is the winner's piece-count lead over the loser. It carries no
/// meaning for a draw and is conventionally 0 there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub outcome: Outcome,
    pub margin: u32,
}

impl GameResult {
    /// Build a result from the two piece counts.
    ///
    /// # Example
    /// ```
    /// use engine_core::{GameResult, Outcome, Side};
    ///
    /// let result = GameResult::from_counts(40, 24);
    /// assert_eq!(result.outcome, Outcome::FirstSideWins);
    /// assert_eq!(result.margin, 16);
    /// assert_eq!(result.outcome.winner(), Some(Side::Black));
    /// ```
    pub fn from_counts(first: u32, second: u32) -> Self {
        if first > second {
            Self {
                outcome: Outcome::FirstSideWins,
                margin: first - second,
            }
        } else if second > first {
            Self {
                outcome: Outcome::SecondSideWins,
                margin: second - first,
            }
        } else {
            Self::draw()
        }
    }

    pub fn draw() -> Self {
        Self {
            outcome: Outcome::Draw,
            margin: 0,
        }
    }

    #[inline]
    pub fn winner(&self) -> Option<Side> {
        self.outcome.winner()
    }
}
