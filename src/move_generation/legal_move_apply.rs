//! Move, capture and promotion protocol.
//!
//! `apply_move` is the only way a piece changes square during play:
//! 1. the mover's own rules must accept the target,
//! 2. an opposing occupant is captured before the mover relocates,
//! 3. the mover is placed on the target,
//! 4. a pawn that reached its last rank is replaced by a piece the caller
//!    picks through `PromotionSelector`, same color, same square.
//!
//! Every precondition is checked before the first mutation, so an `Err`
//! leaves the board exactly as it was.

use log::debug;

use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{PieceColor, PieceId, PieceKind, PromotionPiece};
use crate::game_state::piece::Piece;
use crate::game_state::position::Position;

/// Caller-side choice of the piece a pawn is promoted to.
pub trait PromotionSelector {
    fn choose(&mut self, color: PieceColor, square: Position) -> PromotionPiece;
}

/// A fixed choice.
impl PromotionSelector for PromotionPiece {
    fn choose(&mut self, _color: PieceColor, _square: Position) -> PromotionPiece {
        *self
    }
}

impl<F> PromotionSelector for F
where
    F: FnMut(PieceColor, Position) -> PromotionPiece,
{
    fn choose(&mut self, color: PieceColor, square: Position) -> PromotionPiece {
        self(color, square)
    }
}

/// Summary of a successfully played move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    pub piece: PieceId,
    pub kind: PieceKind,
    pub color: PieceColor,
    pub from: Position,
    pub to: Position,
    pub captured: Option<Piece>,
    /// Handle and kind of the piece that replaced a promoted pawn.
    pub promoted: Option<(PieceId, PieceKind)>,
}

/// Validate `piece` to `target` against the piece's rules, then play it.
pub fn apply_move(
    board: &mut Board,
    piece: PieceId,
    target: Position,
    promotion: &mut impl PromotionSelector,
) -> Result<MoveOutcome, ChessErrors> {
    let mover = board.piece(piece).ok_or(ChessErrors::PieceNotOnBoard(piece))?;
    if !mover.is_valid_move(board, target) {
        return Err(ChessErrors::IllegalMove {
            from: mover.position(),
            to: target,
        });
    }
    play_unchecked(board, piece, target, promotion)
}

/// Play a move without consulting the piece's rules.
///
/// Still refuses off-board targets, unknown handles and landing on a friendly
/// piece, so the board invariants hold. Used directly only by look-ahead
/// probes that have already established geometric legality.
pub(crate) fn play_unchecked(
    board: &mut Board,
    piece: PieceId,
    target: Position,
    promotion: &mut impl PromotionSelector,
) -> Result<MoveOutcome, ChessErrors> {
    let mover = board
        .piece(piece)
        .cloned()
        .ok_or(ChessErrors::PieceNotOnBoard(piece))?;
    let from = mover.position();
    if !board.is_valid_position(target) {
        return Err(ChessErrors::PositionOutOfBounds(target));
    }
    if let Some(occupant) = board.piece_at(target) {
        if occupant.color() == mover.color() {
            return Err(ChessErrors::IllegalMove { from, to: target });
        }
    }

    let captured = board.remove_piece(target);
    if let Some(victim) = &captured {
        debug!("{} captures {victim}", mover.kind());
    }
    board.place_piece(piece, target)?;

    let mut promoted = None;
    let moved_pawn_can_promote = board.piece(piece).is_some_and(Piece::can_promote);
    if moved_pawn_can_promote {
        let choice = promotion.choose(mover.color(), target);
        board.remove_piece(target);
        let new_id = board.place_new_piece(choice.kind(), mover.color(), target)?;
        debug!("{} pawn promoted to {} on {target}", mover.color(), choice.kind());
        promoted = Some((new_id, choice.kind()));
    }

    debug!("{} {} {from}{target}", mover.color(), mover.kind());
    Ok(MoveOutcome {
        piece,
        kind: mover.kind(),
        color: mover.color(),
        from,
        to: target,
        captured,
        promoted,
    })
}
