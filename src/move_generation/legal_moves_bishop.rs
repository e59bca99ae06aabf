use crate::game_state::board::Board;
use crate::game_state::chess_rules::BISHOP_DIRECTIONS;
use crate::game_state::piece::Piece;
use crate::game_state::position::Position;
use crate::move_generation::legal_move_generator::MovementRules;
use crate::move_generation::legal_move_shared::{destination_available, path_is_clear, slide_moves};

/// Diagonal slides.
pub struct BishopRules;

/// Same diagonal and not the same square.
#[inline]
pub(crate) fn is_diagonal(from: Position, to: Position) -> bool {
    let d_rank = (to.rank() - from.rank()).abs();
    let d_file = (to.file() - from.file()).abs();
    d_rank == d_file && d_rank > 0
}

impl MovementRules for BishopRules {
    fn valid_moves(&self, board: &Board, piece: &Piece) -> Vec<Position> {
        slide_moves(board, piece, &BISHOP_DIRECTIONS, |board, piece, target| {
            self.is_valid_move(board, piece, target)
        })
    }

    fn is_valid_move(&self, board: &Board, piece: &Piece, target: Position) -> bool {
        board.is_valid_position(target)
            && is_diagonal(piece.position(), target)
            && path_is_clear(board, piece.position(), target)
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
    fn bishop_on_open_board_covers_both_diagonals() {
        let board = board_from_placement("Bd4").expect("placement should parse");
        let bishop = board.piece_at(pos("d4")).expect("bishop should be placed");
        assert_eq!(bishop.valid_moves(&board).len(), 13);
    }

    #[test]
    fn bishop_stops_at_blockers_and_captures_opponents() {
        let board = board_from_placement("Bc1 Pe3 nb2").expect("placement should parse");
        let bishop = board.piece_at(pos("c1")).expect("bishop should be placed");
        let mut moves = bishop.valid_moves(&board);
        moves.sort();
        assert_eq!(moves, vec![pos("b2"), pos("d2")]);
        assert!(!bishop.is_valid_move(&board, pos("a3")));
        assert!(!bishop.is_valid_move(&board, pos("f4")));
        assert!(!bishop.is_valid_move(&board, pos("c2")));
    }
}
