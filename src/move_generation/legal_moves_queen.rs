use crate::game_state::board::Board;
use crate::game_state::chess_rules::QUEEN_DIRECTIONS;
use crate::game_state::piece::Piece;
use crate::game_state::position::Position;
use crate::move_generation::legal_move_generator::MovementRules;
use crate::move_generation::legal_move_shared::{destination_available, path_is_clear, slide_moves};
use crate::move_generation::legal_moves_bishop::is_diagonal;
use crate::move_generation::legal_moves_rook::is_orthogonal;

/// Union of the rook and bishop slides.
pub struct QueenRules;

impl MovementRules for QueenRules {
    fn valid_moves(&self, board: &Board, piece: &Piece) -> Vec<Position> {
        slide_moves(board, piece, &QUEEN_DIRECTIONS, |board, piece, target| {
            self.is_valid_move(board, piece, target)
        })
    }

    fn is_valid_move(&self, board: &Board, piece: &Piece, target: Position) -> bool {
        let origin = piece.position();
        board.is_valid_position(target)
            && (is_orthogonal(origin, target) || is_diagonal(origin, target))
            && path_is_clear(board, origin, target)
            && destination_available(board, piece, target)
    }
}

#[cfg(test)]
mod tests {
    use crate::game_state::position::Position;
    use crate::utils::placement::board_from_placement;

    fn pos(square: &str) -> Position {
        square.parse().expect("test square should parse")
    }

    #[test]
    fn queen_in_center_reaches_twenty_seven_squares() {
        let board = board_from_placement("qd4").expect("placement should parse");
        let queen = board.piece_at(pos("d4")).expect("queen should be placed");
        assert_eq!(queen.valid_moves(&board).len(), 27);
    }

    #[test]
    fn queen_rejects_knight_shaped_targets() {
        let board = board_from_placement("Qd1 Pe2 pd2").expect("placement should parse");
        let queen = board.piece_at(pos("d1")).expect("queen should be placed");
        assert!(!queen.is_valid_move(&board, pos("e3")));
        assert!(!queen.is_valid_move(&board, pos("f3")));
        assert!(queen.is_valid_move(&board, pos("d2")));
        assert!(!queen.is_valid_move(&board, pos("d3")));
        assert!(queen.is_valid_move(&board, pos("c2")));
    }
}
