//! Rule constants and engine configuration.
//!
//! Static geometry (board extent, pawn ranks, ray and jump tables) lives here
//! next to `GameConfig`, the small set of caller-tunable choices the engine
//! needs when it cannot ask the caller.

use crate::game_state::chess_types::{PieceColor, PromotionPiece};

/// Number of ranks and files.
pub const BOARD_SIZE: i8 = 8;

/// Directions and jumps below are (d_rank, d_file) pairs.
pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

pub const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

pub const KING_STEPS: [(i8, i8); 8] = QUEEN_DIRECTIONS;

pub const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
];

/// Rank step of a pawn moving forward: White heads for rank 0.
#[inline]
pub const fn pawn_direction(color: PieceColor) -> i8 {
    match color {
        PieceColor::White => -1,
        PieceColor::Black => 1,
    }
}

/// The only rank a pawn may try a two-square advance from. With pawns
/// heading for rank 0 (White) and rank 7 (Black) the two-square target lies
/// off the board, so the bounds check rejects it.
#[inline]
pub const fn pawn_home_rank(color: PieceColor) -> i8 {
    match color {
        PieceColor::White => 1,
        PieceColor::Black => BOARD_SIZE - 2,
    }
}

/// Rank on which a pawn of `color` is promoted.
#[inline]
pub const fn promotion_rank(color: PieceColor) -> i8 {
    match color {
        PieceColor::White => 0,
        PieceColor::Black => BOARD_SIZE - 1,
    }
}

/// Caller-tunable engine choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Piece used when a move is driven without an explicit promotion choice.
    pub default_promotion: PromotionPiece,
    /// Piece assumed when a look-ahead simulation promotes a pawn.
    pub simulation_promotion: PromotionPiece,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            default_promotion: PromotionPiece::Queen,
            simulation_promotion: PromotionPiece::Queen,
        }
    }
}
