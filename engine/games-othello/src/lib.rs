//! Othello (Reversi) game implementation for the Reversi engine
//!
//! Othello is a two-player game on an 8x8 grid. A move places a disc so that
//! one or more contiguous runs of opponent discs are bracketed between the new
//! disc and another disc of the mover's colour; every bracketed disc flips.
//! A player with no legal move passes. The game ends when neither player can
//! move, and the player with more discs wins.
//!
//! # Board Layout
//!
//! Squares are stored in row-major order, with row 1 at the top:
//! ```text
//!           A   B   C   D   E   F   G   H
//! Row 1:  [ 0][ 1][ 2][ 3][ 4][ 5][ 6][ 7]
//! Row 2:  [ 8][ 9][10][11][12][13][14][15]
//! ...
//! Row 8:  [56][57][58][59][60][61][62][63]
//! ```
//!
//! # Usage
//!
//! ```rust
//! use engine_core::{Position, Side};
//! use games_othello::{Board, Square};
//!
//! let mut board = Board::new();
//! let moves = board.legal_moves(Side::Black);
//! assert_eq!(moves.len(), 4);
//!
//! let d3: Square = "D3".parse().unwrap();
//! assert!(moves.contains(&d3));
//! board.apply_move(d3, Side::Black);
//! assert_eq!(board.count(Side::Black), 4);
//! ```

use engine_core::{GameResult, Position, Side};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Board dimensions
pub const COLS: usize = 8;
pub const ROWS: usize = 8;
pub const BOARD_SIZE: usize = COLS * ROWS; // 64

/// The eight compass directions as (row delta, column delta).
const DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Errors from parsing a square coordinate such as `"D3"`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseSquareError {
    #[error("expected a column letter and a row digit (e.g. D3), got {0:?}")]
    BadLength(String),

    #[error("column must be A-H, got {0:?}")]
    BadColumn(char),

    #[error("row must be 1-8, got {0:?}")]
    BadRow(char),
}

/// Errors from parsing a textual board diagram.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseBoardError {
    #[error("row {row} has {len} squares, expected 8")]
    BadRowLength { row: usize, len: usize },

    #[error("unexpected character {found:?} in row {row}")]
    BadCell { row: usize, found: char },
}

/// A square on the board, 0..64 in row-major order from A1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// Create a square from a 0..64 index.
    pub fn new(index: u8) -> Option<Self> {
        ((index as usize) < BOARD_SIZE).then_some(Self(index))
    }

    /// Create a square from zero-based row and column.
    pub fn from_coords(row: usize, col: usize) -> Option<Self> {
        (row < ROWS && col < COLS).then(|| Self((row * COLS + col) as u8))
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub fn row(self) -> usize {
        self.index() / COLS
    }

    #[inline]
    pub fn col(self) -> usize {
        self.index() % COLS
    }

    /// Step one square in a direction, or `None` off the edge.
    #[inline]
    fn offset(self, dr: i8, dc: i8) -> Option<Self> {
        let row = usize::try_from(self.row() as i8 + dr).ok()?;
        let col = usize::try_from(self.col() as i8 + dc).ok()?;
        Self::from_coords(row, col)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let col = (b'A' + self.col() as u8) as char;
        write!(f, "{}{}", col, self.row() + 1)
    }
}

impl FromStr for Square {
    type Err = ParseSquareError;

    /// Parse algebraic coordinates: column letter then row digit, any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        let (Some(col), Some(row), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(ParseSquareError::BadLength(trimmed.to_string()));
        };

        let col_upper = col.to_ascii_uppercase();
        if !('A'..='H').contains(&col_upper) {
            return Err(ParseSquareError::BadColumn(col));
        }
        if !('1'..='8').contains(&row) {
            return Err(ParseSquareError::BadRow(row));
        }

        let col_idx = col_upper as usize - 'A' as usize;
        let row_idx = row as usize - '1' as usize;
        Ok(Self((row_idx * COLS + col_idx) as u8))
    }
}

/// Othello board state
///
/// Holds only the discs; whose turn it is lives with the caller, which is how
/// the search tracks it per node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Side>; BOARD_SIZE],
}

impl Board {
    /// Standard opening: White on D4 and E5, Black on E4 and D5.
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.cells[Self::idx(3, 3)] = Some(Side::White);
        board.cells[Self::idx(3, 4)] = Some(Side::Black);
        board.cells[Self::idx(4, 3)] = Some(Side::Black);
        board.cells[Self::idx(4, 4)] = Some(Side::White);
        board
    }

    /// A board with no discs.
    pub fn empty() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Build a board from eight row diagrams, row 1 first.
    ///
    /// `X` is Black, `O` is White, `.` is empty; spaces are ignored.
    pub fn from_rows(rows: [&str; ROWS]) -> Result<Self, ParseBoardError> {
        let mut board = Self::empty();
        for (row, line) in rows.iter().enumerate() {
            let cells: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if cells.len() != COLS {
                return Err(ParseBoardError::BadRowLength {
                    row: row + 1,
                    len: cells.len(),
                });
            }
            for (col, &c) in cells.iter().enumerate() {
                board.cells[Self::idx(row, col)] = match c {
                    '.' => None,
                    _ => Some(Side::from_symbol(c).ok_or(ParseBoardError::BadCell {
                        row: row + 1,
                        found: c,
                    })?),
                };
            }
        }
        Ok(board)
    }

    #[inline]
    fn idx(row: usize, col: usize) -> usize {
        row * COLS + col
    }

    /// Disc on a square, if any.
    #[inline]
    pub fn get(&self, square: Square) -> Option<Side> {
        self.cells[square.index()]
    }

    /// Number of discs belonging to `side`.
    pub fn count(&self, side: Side) -> u32 {
        self.cells.iter().filter(|&&c| c == Some(side)).count() as u32
    }

    /// Number of empty squares.
    pub fn empty_squares(&self) -> u32 {
        self.cells.iter().filter(|c| c.is_none()).count() as u32
    }

    /// Length of the opponent run bracketed by `side` when playing `from`
    /// in direction (dr, dc). Zero when nothing would flip.
    fn bracketed_run(&self, from: Square, side: Side, dr: i8, dc: i8) -> u32 {
        let opponent = side.opponent();
        let mut run = 0;
        let mut cursor = from.offset(dr, dc);

        while let Some(sq) = cursor {
            match self.cells[sq.index()] {
                Some(s) if s == opponent => run += 1,
                Some(_) => return run,
                None => return 0,
            }
            cursor = sq.offset(dr, dc);
        }

        0
    }

    /// Whether `side` may play on `square`.
    pub fn is_legal(&self, square: Square, side: Side) -> bool {
        self.cells[square.index()].is_none()
            && DIRECTIONS
                .iter()
                .any(|&(dr, dc)| self.bracketed_run(square, side, dr, dc) > 0)
    }

    /// Whether `side` has any legal move.
    pub fn has_legal_move(&self, side: Side) -> bool {
        (0..BOARD_SIZE as u8).any(|i| self.is_legal(Square(i), side))
    }

    /// Place a disc for `side` on `square` and flip every bracketed run.
    ///
    /// Returns the number of flipped discs. An illegal move leaves the board
    /// unchanged and returns 0.
    pub fn play(&mut self, square: Square, side: Side) -> u32 {
        if self.cells[square.index()].is_some() {
            return 0;
        }

        let mut flipped = 0;
        for &(dr, dc) in &DIRECTIONS {
            let run = self.bracketed_run(square, side, dr, dc);
            let mut cursor = square;
            for _ in 0..run {
                // The run was just measured, so every step stays on the board
                let Some(next) = cursor.offset(dr, dc) else {
                    break;
                };
                self.cells[next.index()] = Some(side);
                cursor = next;
            }
            flipped += run;
        }

        if flipped > 0 {
            self.cells[square.index()] = Some(side);
        }
        flipped
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " ")?;
        for col in 0..COLS {
            write!(f, " {}", (b'A' + col as u8) as char)?;
        }
        writeln!(f)?;

        for row in 0..ROWS {
            write!(f, "{}", row + 1)?;
            for col in 0..COLS {
                let c = self.cells[Self::idx(row, col)].map_or('.', Side::symbol);
                write!(f, " {}", c)?;
            }
            writeln!(f)?;
        }

        write!(
            f,
            "X: {}  O: {}",
            self.count(Side::Black),
            self.count(Side::White)
        )
    }
}

impl Position for Board {
    type Move = Square;

    fn legal_moves(&self, side: Side) -> Vec<Square> {
        (0..BOARD_SIZE as u8)
            .map(Square)
            .filter(|&sq| self.is_legal(sq, side))
            .collect()
    }

    fn apply_move(&mut self, mv: Square, side: Side) {
        self.play(mv, side);
    }

    fn winner(&self) -> GameResult {
        GameResult::from_counts(self.count(Side::Black), self.count(Side::White))
    }

    fn is_terminal(&self) -> bool {
        !self.has_legal_move(Side::Black) && !self.has_legal_move(Side::White)
    }
}
