//! Helpers shared by the per-piece rules.

use crate::game_state::board::Board;
use crate::game_state::piece::Piece;
use crate::game_state::position::Position;

/// Target is empty or holds an opposing piece.
#[inline]
pub fn destination_available(board: &Board, piece: &Piece, target: Position) -> bool {
    match board.piece_at(target) {
        Some(occupant) => occupant.color() != piece.color(),
        None => true,
    }
}

/// Every square strictly between `from` and `to` is empty.
///
/// `from` and `to` must share a rank, a file or a diagonal.
pub fn path_is_clear(board: &Board, from: Position, to: Position) -> bool {
    let rank_step = (to.rank() - from.rank()).signum();
    let file_step = (to.file() - from.file()).signum();

    let mut current = from.offset(rank_step, file_step);
    while current != to {
        if board.piece_at(current).is_some() {
            return false;
        }
        current = current.offset(rank_step, file_step);
    }
    true
}

/// Walk each ray outward from the piece, stopping at the first target the
/// piece's own rules reject.
pub fn slide_moves(
    board: &Board,
    piece: &Piece,
    directions: &[(i8, i8)],
    is_valid_move: impl Fn(&Board, &Piece, Position) -> bool,
) -> Vec<Position> {
    let mut moves = Vec::new();
    let origin = piece.position();
    for &(d_rank, d_file) in directions {
        for distance in 1..=7 {
            let target = origin.offset(d_rank * distance, d_file * distance);
            if !is_valid_move(board, piece, target) {
                break;
            }
            moves.push(target);
        }
    }
    moves
}

/// Single-hop targets (knight jumps, king steps) that pass `is_valid_move`.
pub fn step_moves(
    board: &Board,
    piece: &Piece,
    steps: &[(i8, i8)],
    is_valid_move: impl Fn(&Board, &Piece, Position) -> bool,
) -> Vec<Position> {
    let origin = piece.position();
    steps
        .iter()
        .map(|&(d_rank, d_file)| origin.offset(d_rank, d_file))
        .filter(|&target| is_valid_move(board, piece, target))
        .collect()
}
