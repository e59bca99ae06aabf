//! Pieces and their capability interface.
//!
//! A `Piece` is a tagged value: kind, color, current position and the handle
//! the board issued for it. The movement rules for each kind live in
//! `move_generation` behind the `MovementRules` trait; the methods here only
//! dispatch to the rules for `self.kind`.

use std::fmt;

use crate::game_state::board::Board;
use crate::game_state::chess_rules::promotion_rank;
use crate::game_state::chess_types::{PieceColor, PieceId, PieceKind};
use crate::game_state::position::Position;
use crate::move_generation::legal_move_generator::rules_for;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    id: PieceId,
    kind: PieceKind,
    color: PieceColor,
    position: Position,
}

impl Piece {
    /// Factory keyed by the variant tag. Only the board mints handles.
    pub(crate) fn new(id: PieceId, kind: PieceKind, color: PieceColor, position: Position) -> Self {
        Self {
            id,
            kind,
            color,
            position,
        }
    }

    #[inline]
    pub fn id(&self) -> PieceId {
        self.id
    }

    #[inline]
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub fn color(&self) -> PieceColor {
        self.color
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    #[inline]
    pub(crate) fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    /// All targets this piece may legally move to on `board`.
    pub fn valid_moves(&self, board: &Board) -> Vec<Position> {
        rules_for(self.kind).valid_moves(board, self)
    }

    pub fn is_valid_move(&self, board: &Board, target: Position) -> bool {
        rules_for(self.kind).is_valid_move(board, self, target)
    }

    /// Whether this piece threatens `target`.
    pub fn can_attack_position(&self, board: &Board, target: Position) -> bool {
        rules_for(self.kind).can_attack_position(board, self, target)
    }

    /// True for a pawn standing on its promotion rank.
    pub fn can_promote(&self) -> bool {
        self.kind == PieceKind::Pawn && self.position.rank() == promotion_rank(self.color)
    }

    /// Glyph used by the text renderer.
    pub fn symbol(&self) -> char {
        match (self.color, self.kind) {
            (PieceColor::White, PieceKind::Pawn) => '♙',
            (PieceColor::White, PieceKind::Knight) => '♘',
            (PieceColor::White, PieceKind::Bishop) => '♗',
            (PieceColor::White, PieceKind::Rook) => '♖',
            (PieceColor::White, PieceKind::Queen) => '♕',
            (PieceColor::White, PieceKind::King) => '♔',
            (PieceColor::Black, PieceKind::Pawn) => '♟',
            (PieceColor::Black, PieceKind::Knight) => '♞',
            (PieceColor::Black, PieceKind::Bishop) => '♝',
            (PieceColor::Black, PieceKind::Rook) => '♜',
            (PieceColor::Black, PieceKind::Queen) => '♛',
            (PieceColor::Black, PieceKind::King) => '♚',
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} on {}", self.color, self.kind, self.position)
    }
}
