//! Board coordinates.
//!
//! A `Position` is a plain (rank, file) pair. Rank 0 is the far (top) rank,
//! printed as `8`; file 0 is the `a` file. Construction never validates:
//! off-board coordinates are representable so move generators can step past
//! the edge, and `Board::is_valid_position` decides what is on the board.

use std::fmt;
use std::str::FromStr;

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::BOARD_SIZE;
use crate::utils::algebraic::{algebraic_to_position, position_to_algebraic};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    rank: i8,
    file: i8,
}

impl Position {
    #[inline]
    pub const fn new(rank: i8, file: i8) -> Self {
        Self { rank, file }
    }

    #[inline]
    pub const fn rank(self) -> i8 {
        self.rank
    }

    #[inline]
    pub const fn file(self) -> i8 {
        self.file
    }

    /// The position `d_rank` ranks and `d_file` files away. May be off the board.
    #[inline]
    pub const fn offset(self, d_rank: i8, d_file: i8) -> Self {
        Self {
            rank: self.rank.saturating_add(d_rank),
            file: self.file.saturating_add(d_file),
        }
    }

    /// True when both coordinates fall inside an 8x8 board.
    #[inline]
    pub const fn is_on_board(self) -> bool {
        self.rank >= 0 && self.rank < BOARD_SIZE && self.file >= 0 && self.file < BOARD_SIZE
    }

    /// Chebyshev distance, the number of king steps between two squares.
    #[inline]
    pub fn king_distance(self, other: Position) -> i16 {
        let d_rank = (i16::from(self.rank) - i16::from(other.rank)).abs();
        let d_file = (i16::from(self.file) - i16::from(other.file)).abs();
        d_rank.max(d_file)
    }

    /// Standard algebraic square name such as `e4`.
    pub fn to_algebraic(self) -> Result<String, ChessErrors> {
        position_to_algebraic(self)
    }

    pub fn from_algebraic(square: &str) -> Result<Self, ChessErrors> {
        algebraic_to_position(square)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match position_to_algebraic(*self) {
            Ok(square) => write!(f, "{square}"),
            Err(_) => write!(f, "({},{})", self.rank, self.file),
        }
    }
}

impl FromStr for Position {
    type Err = ChessErrors;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        algebraic_to_position(s)
    }
}
