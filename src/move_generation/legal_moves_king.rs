//! King movement.
//!
//! The king steps one square in any direction. Unlike the other pieces its
//! legal moves are narrower than its reach:
//! - it may not land next to the enemy king,
//! - it may not end the move attacked, which covers both "do not walk into
//!   check" and "a king in check must step out of it".
//!
//! Safety is decided by replaying the step on a clone of the board, so a king
//! sliding away along a checking ray is still seen as attacked.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::KING_STEPS;
use crate::game_state::chess_types::PieceKind;
use crate::game_state::piece::Piece;
use crate::game_state::position::Position;
use crate::move_generation::legal_move_checks::move_leaves_square_attacked;
use crate::move_generation::legal_move_generator::MovementRules;
use crate::move_generation::legal_move_shared::{destination_available, step_moves};

pub struct KingRules;

fn is_adjacent_to_enemy_king(board: &Board, king: &Piece, target: Position) -> bool {
    board.active_pieces().iter().any(|other| {
        other.kind() == PieceKind::King
            && other.color() != king.color()
            && other.position().king_distance(target) <= 1
    })
}

impl MovementRules for KingRules {
    fn valid_moves(&self, board: &Board, piece: &Piece) -> Vec<Position> {
        step_moves(board, piece, &KING_STEPS, |board, piece, target| {
            self.is_valid_move(board, piece, target)
        })
    }

    fn is_valid_move(&self, board: &Board, piece: &Piece, target: Position) -> bool {
        board.is_valid_position(target)
            && piece.position().king_distance(target) == 1
            && destination_available(board, piece, target)
            && !is_adjacent_to_enemy_king(board, piece, target)
            && !move_leaves_square_attacked(board, piece.id(), target)
    }

    /// Unrestricted one-step reach, used when asking whether this king
    /// threatens a square.
    fn can_attack_position(&self, board: &Board, piece: &Piece, target: Position) -> bool {
        board.is_valid_position(target) && piece.position().king_distance(target) == 1
    }
}
