//! Errors used throughout the rules engine.
//!
//! This module defines the canonical error type returned by board setup,
//! turn handling, notation parsing and the puzzle driver. The enum
//! `ChessErrors` is the single error type across the crate so rejections can
//! be propagated with `?` and matched in one place.
//!
//! Usage guidelines:
//! - Every variant describes a rejected action. A function returning
//!   `Err(ChessErrors)` has not changed any board or game state.
//! - Callers that only need the accept/reject answer can use `is_ok()`.
//! - A missing king is never an error; king-dependent queries degrade to
//!   "not applicable" instead.

use std::error::Error;
use std::fmt;

use crate::game_state::chess_types::{PieceColor, PieceId};
use crate::game_state::position::Position;

/// Unified error type for the rules engine.
///
/// Variants carry the offending position, handle or token so callers can log
/// or display a precise diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessErrors {
    /// A position outside the 8x8 board was used where a square was required.
    PositionOutOfBounds(Position),

    /// Tried to place a piece on a square held by a different piece.
    SquareOccupied(Position),

    /// The handle does not refer to a piece currently on the board.
    ///
    /// Happens for captured or promoted pieces and for handles taken from a
    /// different board.
    PieceNotOnBoard(PieceId),

    /// A square was expected to hold a piece but is empty.
    EmptySquare(Position),

    /// Tried to select a piece that does not belong to the side to move.
    NotYourTurn { piece: PieceId, turn: PieceColor },

    /// A move was requested without a selected piece.
    NoPieceSelected,

    /// The requested target is not among the selected piece's valid moves.
    TargetNotHighlighted(Position),

    /// The piece cannot legally move from `from` to `to`.
    IllegalMove { from: Position, to: Position },

    /// A single character used during algebraic parsing was invalid.
    ///
    /// Payload: the offending character (for example a file outside 'a'..'h').
    InvalidAlgebraicChar(char),

    /// An algebraic string failed to parse as a square.
    InvalidAlgebraicString(String),

    /// A placement token such as `Qd1` could not be parsed.
    InvalidPlacementToken(String),

    /// A puzzle goal description could not be parsed.
    InvalidGoal(String),
}

impl fmt::Display for ChessErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessErrors::PositionOutOfBounds(position) => {
                write!(f, "position {position} is outside the board")
            }
            ChessErrors::SquareOccupied(position) => {
                write!(f, "square {position} is already occupied")
            }
            ChessErrors::PieceNotOnBoard(id) => write!(f, "piece {id} is not on the board"),
            ChessErrors::EmptySquare(position) => write!(f, "no piece on {position}"),
            ChessErrors::NotYourTurn { piece, turn } => {
                write!(f, "piece {piece} cannot be selected, it is {turn}'s turn")
            }
            ChessErrors::NoPieceSelected => write!(f, "no piece is selected"),
            ChessErrors::TargetNotHighlighted(position) => {
                write!(f, "{position} is not a valid target for the selected piece")
            }
            ChessErrors::IllegalMove { from, to } => write!(f, "illegal move {from}{to}"),
            ChessErrors::InvalidAlgebraicChar(c) => write!(f, "invalid algebraic character '{c}'"),
            ChessErrors::InvalidAlgebraicString(s) => write!(f, "invalid algebraic square '{s}'"),
            ChessErrors::InvalidPlacementToken(s) => write!(f, "invalid placement token '{s}'"),
            ChessErrors::InvalidGoal(s) => write!(f, "invalid goal '{s}'"),
        }
    }
}

impl Error for ChessErrors {}
