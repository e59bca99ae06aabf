//! Check, checkmate and stalemate inspection.
//!
//! All functions take the board by shared reference. Anything that needs to
//! know what happens *after* a move replays that move on a clone of the board
//! and inspects the clone, so the caller's board is never touched, not even
//! temporarily:
//! - `move_leaves_square_attacked` backs the king's own move legality,
//! - `has_escape_from_check` backs checkmate detection by trying every
//!   candidate move of the side and stopping at the first one that leaves
//!   its king safe.
//!
//! A side without a king is never in check; puzzle setup is incremental and a
//! half-built board must not make queries fail.

use log::trace;

use crate::game_state::board::Board;
use crate::game_state::chess_types::{GameStatus, PieceColor, PieceId, PromotionPiece};
use crate::game_state::position::Position;
use crate::move_generation::legal_move_apply::play_unchecked;

/// True if any active piece of `attacker_color` can attack `square`.
pub fn is_square_attacked(board: &Board, square: Position, attacker_color: PieceColor) -> bool {
    board
        .pieces_by_color(attacker_color)
        .any(|attacker| attacker.can_attack_position(board, square))
}

/// True if `color` has a king and an opposing piece can attack it.
pub fn is_king_in_check(board: &Board, color: PieceColor) -> bool {
    let Some(king) = board.find_king(color) else {
        return false;
    };
    is_square_attacked(board, king.position(), color.opposite())
}

/// Replay `piece` to `target` on a copy of the board and report whether the
/// destination is attacked by the other side afterwards.
///
/// The replay skips move validation; callers establish geometric legality
/// first.
pub fn move_leaves_square_attacked(board: &Board, piece: PieceId, target: Position) -> bool {
    let Some(color) = board.piece(piece).map(|p| p.color()) else {
        return false;
    };
    let mut probe = board.clone();
    match play_unchecked(&mut probe, piece, target, &mut PromotionPiece::default()) {
        Ok(_) => is_square_attacked(&probe, target, color.opposite()),
        Err(err) => {
            trace!("probe of {piece} to {target} rejected: {err}");
            true
        }
    }
}

/// True if some piece of `color` has a valid move after which its king is not
/// in check.
pub fn has_escape_from_check(
    board: &Board,
    color: PieceColor,
    simulation_promotion: PromotionPiece,
) -> bool {
    let candidates: Vec<(PieceId, Vec<Position>)> = board
        .pieces_by_color(color)
        .map(|piece| (piece.id(), piece.valid_moves(board)))
        .collect();

    for (id, targets) in candidates {
        for target in targets {
            let mut simulated = board.clone();
            let mut promotion = simulation_promotion;
            if let Err(err) = simulated.move_piece(id, target, &mut promotion) {
                trace!("simulation of {id} to {target} rejected: {err}");
                continue;
            }
            if !is_king_in_check(&simulated, color) {
                trace!("{color} escapes check with {id} to {target}");
                return true;
            }
        }
    }
    false
}

#[inline]
pub fn has_no_valid_moves_to_escape_check(
    board: &Board,
    color: PieceColor,
    simulation_promotion: PromotionPiece,
) -> bool {
    !has_escape_from_check(board, color, simulation_promotion)
}

/// True when no piece of `color` has a single valid move.
pub fn has_no_valid_moves(board: &Board, color: PieceColor) -> bool {
    board
        .pieces_by_color(color)
        .all(|piece| piece.valid_moves(board).is_empty())
}

pub fn is_checkmate(board: &Board, color: PieceColor, simulation_promotion: PromotionPiece) -> bool {
    is_king_in_check(board, color)
        && has_no_valid_moves_to_escape_check(board, color, simulation_promotion)
}

pub fn is_stalemate(board: &Board, color: PieceColor) -> bool {
    !is_king_in_check(board, color) && has_no_valid_moves(board, color)
}

/// Status of the game with `side_to_move` to play.
pub fn evaluate_status(
    board: &Board,
    side_to_move: PieceColor,
    simulation_promotion: PromotionPiece,
) -> GameStatus {
    if is_king_in_check(board, side_to_move) {
        if has_escape_from_check(board, side_to_move, simulation_promotion) {
            GameStatus::Check
        } else {
            GameStatus::Checkmate
        }
    } else if has_no_valid_moves(board, side_to_move) {
        GameStatus::Stalemate
    } else {
        GameStatus::InProgress
    }
}
