use crate::game_state::board::Board;
use crate::game_state::chess_rules::KNIGHT_JUMPS;
use crate::game_state::piece::Piece;
use crate::game_state::position::Position;
use crate::move_generation::legal_move_generator::MovementRules;
use crate::move_generation::legal_move_shared::{destination_available, step_moves};

/// L-shaped jumps; intervening squares are ignored.
pub struct KnightRules;

impl MovementRules for KnightRules {
    fn valid_moves(&self, board: &Board, piece: &Piece) -> Vec<Position> {
        step_moves(board, piece, &KNIGHT_JUMPS, |board, piece, target| {
            self.is_valid_move(board, piece, target)
        })
    }

    fn is_valid_move(&self, board: &Board, piece: &Piece, target: Position) -> bool {
        if !board.is_valid_position(target) {
            return false;
        }

        let d_rank = (target.rank() - piece.position().rank()).abs();
        let d_file = (target.file() - piece.position().file()).abs();
        let is_jump = (d_rank == 2 && d_file == 1) || (d_rank == 1 && d_file == 2);

        is_jump && destination_available(board, piece, target)
    }
}
