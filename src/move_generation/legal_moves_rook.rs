use crate::game_state::board::Board;
use crate::game_state::chess_rules::ROOK_DIRECTIONS;
use crate::game_state::piece::Piece;
use crate::game_state::position::Position;
use crate::move_generation::legal_move_generator::MovementRules;
use crate::move_generation::legal_move_shared::{destination_available, path_is_clear, slide_moves};

/// Rank and file slides.
pub struct RookRules;

/// Same rank xor same file.
#[inline]
pub(crate) fn is_orthogonal(from: Position, to: Position) -> bool {
    (from.rank() == to.rank()) != (from.file() == to.file())
}

impl MovementRules for RookRules {
    fn valid_moves(&self, board: &Board, piece: &Piece) -> Vec<Position> {
        slide_moves(board, piece, &ROOK_DIRECTIONS, |board, piece, target| {
            self.is_valid_move(board, piece, target)
        })
    }

    fn is_valid_move(&self, board: &Board, piece: &Piece, target: Position) -> bool {
        board.is_valid_position(target)
            && is_orthogonal(piece.position(), target)
            && path_is_clear(board, piece.position(), target)
            && destination_available(board, piece, target)
    }
}
