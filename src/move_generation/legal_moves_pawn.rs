//! Pawn movement.
//!
//! Forward one square onto an empty square, forward two from the home rank
//! (see `pawn_home_rank`) when both squares are empty and on the board,
//! diagonally forward only onto an opposing piece. White heads for rank 0,
//! Black for rank 7.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::{pawn_direction, pawn_home_rank};
use crate::game_state::piece::Piece;
use crate::game_state::position::Position;
use crate::move_generation::legal_move_generator::MovementRules;

pub struct PawnRules;

impl MovementRules for PawnRules {
    fn valid_moves(&self, board: &Board, piece: &Piece) -> Vec<Position> {
        let origin = piece.position();
        let direction = pawn_direction(piece.color());
        [
            origin.offset(direction, 0),
            origin.offset(2 * direction, 0),
            origin.offset(direction, -1),
            origin.offset(direction, 1),
        ]
        .into_iter()
        .filter(|&target| self.is_valid_move(board, piece, target))
        .collect()
    }

    fn is_valid_move(&self, board: &Board, piece: &Piece, target: Position) -> bool {
        if !board.is_valid_position(target) {
            return false;
        }

        let origin = piece.position();
        let direction = pawn_direction(piece.color());
        let d_rank = target.rank() - origin.rank();
        let d_file = target.file() - origin.file();

        if d_file == 0 {
            if d_rank == direction {
                return board.piece_at(target).is_none();
            }
            if d_rank == 2 * direction && origin.rank() == pawn_home_rank(piece.color()) {
                return board.piece_at(origin.offset(direction, 0)).is_none()
                    && board.piece_at(target).is_none();
            }
            return false;
        }

        if d_file.abs() == 1 && d_rank == direction {
            return board
                .piece_at(target)
                .is_some_and(|occupant| occupant.color() != piece.color());
        }

        false
    }
}
