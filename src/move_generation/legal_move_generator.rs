//! Movement rules dispatch.
//!
//! Each piece kind has a zero-sized rules type implementing `MovementRules`.
//! `rules_for` maps the closed `PieceKind` tag to its rules so `Piece` can
//! dispatch without knowing the geometry.

use crate::game_state::board::Board;
use crate::game_state::chess_types::PieceKind;
use crate::game_state::piece::Piece;
use crate::game_state::position::Position;
use crate::move_generation::legal_moves_bishop::BishopRules;
use crate::move_generation::legal_moves_king::KingRules;
use crate::move_generation::legal_moves_knight::KnightRules;
use crate::move_generation::legal_moves_pawn::PawnRules;
use crate::move_generation::legal_moves_queen::QueenRules;
use crate::move_generation::legal_moves_rook::RookRules;

/// Shared capability interface of every piece kind.
pub trait MovementRules: Send + Sync {
    /// Every target `is_valid_move` accepts, built from the piece's geometry.
    fn valid_moves(&self, board: &Board, piece: &Piece) -> Vec<Position>;

    /// Bounds, geometry, path and destination checks for a single target.
    fn is_valid_move(&self, board: &Board, piece: &Piece, target: Position) -> bool;

    /// Capturing is moving onto an opposing piece, so reach and legality
    /// coincide unless a kind says otherwise.
    fn can_attack_position(&self, board: &Board, piece: &Piece, target: Position) -> bool {
        self.is_valid_move(board, piece, target)
    }
}

pub fn rules_for(kind: PieceKind) -> &'static dyn MovementRules {
    match kind {
        PieceKind::Pawn => &PawnRules,
        PieceKind::Knight => &KnightRules,
        PieceKind::Bishop => &BishopRules,
        PieceKind::Rook => &RookRules,
        PieceKind::Queen => &QueenRules,
        PieceKind::King => &KingRules,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_rules::BOARD_SIZE;
    use crate::utils::placement::board_from_placement;

    #[test]
    fn attack_and_move_agree_for_every_non_king_piece() {
        let board = board_from_placement("Ke1 ke8 Qd4 Rb2 Bf3 Ng5 Pc3 Pe6 qd7 rh4 bb6 nc5 pf4 pa7")
            .expect("placement should parse");

        for piece in board.active_pieces() {
            if piece.kind() == PieceKind::King {
                continue;
            }
            for rank in -1..=BOARD_SIZE {
                for file in -1..=BOARD_SIZE {
                    let target = Position::new(rank, file);
                    assert_eq!(
                        piece.can_attack_position(&board, target),
                        piece.is_valid_move(&board, target),
                        "{piece} disagrees on {target}"
                    );
                }
            }
        }
    }

    #[test]
    fn attack_queries_far_off_the_board_are_false() {
        let board = board_from_placement("Kh1 ke8 Qd4 Rb2 Bf3 Ng5 Pc3 pf4")
            .expect("placement should parse");
        let far = [
            Position::new(i8::MIN, 0),
            Position::new(i8::MAX, 0),
            Position::new(0, i8::MIN),
            Position::new(i8::MIN, i8::MAX),
        ];

        for piece in board.active_pieces() {
            for target in far {
                assert!(!piece.can_attack_position(&board, target), "{piece} reaches {target}");
                assert!(!piece.is_valid_move(&board, target), "{piece} moves to {target}");
            }
        }
    }

    #[test]
    fn valid_moves_are_stable_without_mutation() {
        let board = board_from_placement("Ke1 ke8 Qd4 Rb2 nc5 pf4").expect("placement should parse");
        for piece in board.active_pieces() {
            assert_eq!(piece.valid_moves(&board), piece.valid_moves(&board));
        }
    }

    #[test]
    fn valid_moves_pass_is_valid_move() {
        let board = board_from_placement("Kg1 kg8 Qd4 Rb2 Bf3 Ng5 Pc2 nc5 pf4 rh4")
            .expect("placement should parse");
        for piece in board.active_pieces() {
            for target in piece.valid_moves(&board) {
                assert!(piece.is_valid_move(&board, target), "{piece} to {target}");
            }
        }
    }
}
