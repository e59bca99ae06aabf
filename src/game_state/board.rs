//! Authoritative piece container.
//!
//! `Board` keeps a dense 8x8 grid of piece handles next to the ordered list of
//! active pieces. Every mutation goes through `place_new_piece`,
//! `place_piece`, `remove_piece` or the move protocol in
//! `move_generation::legal_move_apply`, which keeps both views in step:
//! - every occupied cell names exactly one active piece and vice versa,
//! - an active piece's stored position is the cell that names it.
//!
//! Cloning produces a fully independent board (pieces are owned values, not
//! shared references), which is what the look-ahead simulations rely on.

use std::fmt;

use log::debug;

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::chess_types::{PieceColor, PieceId, PieceKind};
use crate::game_state::piece::Piece;
use crate::game_state::position::Position;
use crate::move_generation::legal_move_apply::{apply_move, MoveOutcome, PromotionSelector};
use crate::utils::render_game_state::render_board;

const GRID_SIZE: usize = BOARD_SIZE as usize;

#[derive(Debug, Clone)]
pub struct Board {
    grid: [[Option<PieceId>; GRID_SIZE]; GRID_SIZE],
    active_pieces: Vec<Piece>,
    next_id: u32,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// An empty board.
    pub fn new() -> Self {
        Self {
            grid: [[None; GRID_SIZE]; GRID_SIZE],
            active_pieces: Vec::new(),
            next_id: 0,
        }
    }

    /// True when both coordinates lie in `0..8`.
    #[inline]
    pub fn is_valid_position(&self, position: Position) -> bool {
        position.is_on_board()
    }

    #[inline]
    fn cell(position: Position) -> Option<(usize, usize)> {
        if position.is_on_board() {
            Some((position.rank() as usize, position.file() as usize))
        } else {
            None
        }
    }

    /// The piece on `position`; `None` for empty or off-board squares.
    pub fn piece_at(&self, position: Position) -> Option<&Piece> {
        let (rank, file) = Self::cell(position)?;
        let id = self.grid[rank][file]?;
        self.piece(id)
    }

    /// Look up an active piece by handle.
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.active_pieces.iter().find(|piece| piece.id() == id)
    }

    fn piece_mut(&mut self, id: PieceId) -> Option<&mut Piece> {
        self.active_pieces.iter_mut().find(|piece| piece.id() == id)
    }

    /// All pieces in play, in placement order.
    #[inline]
    pub fn active_pieces(&self) -> &[Piece] {
        &self.active_pieces
    }

    #[inline]
    pub fn piece_count(&self) -> usize {
        self.active_pieces.len()
    }

    /// Active pieces of one color, in placement order.
    pub fn pieces_by_color(&self, color: PieceColor) -> impl Iterator<Item = &Piece> + '_ {
        self.active_pieces
            .iter()
            .filter(move |piece| piece.color() == color)
    }

    /// First active king of `color`, if any.
    pub fn find_king(&self, color: PieceColor) -> Option<&Piece> {
        self.active_pieces
            .iter()
            .find(|piece| piece.kind() == PieceKind::King && piece.color() == color)
    }

    /// Exactly one king per side plus at least one other piece.
    pub fn is_valid_board_configuration(&self) -> bool {
        let mut kings = [0usize; 2];
        let mut others = 0usize;
        for piece in &self.active_pieces {
            if piece.kind() == PieceKind::King {
                kings[piece.color().index()] += 1;
            } else {
                others += 1;
            }
        }
        kings == [1, 1] && others >= 1
    }

    /// Create a piece of `kind` and `color` and put it on an empty square.
    pub fn place_new_piece(
        &mut self,
        kind: PieceKind,
        color: PieceColor,
        position: Position,
    ) -> Result<PieceId, ChessErrors> {
        let (rank, file) =
            Self::cell(position).ok_or(ChessErrors::PositionOutOfBounds(position))?;
        if self.grid[rank][file].is_some() {
            return Err(ChessErrors::SquareOccupied(position));
        }

        let id = PieceId(self.next_id);
        self.next_id += 1;
        self.grid[rank][file] = Some(id);
        self.active_pieces.push(Piece::new(id, kind, color, position));
        debug!("placed {color} {kind} {id} on {position}");
        Ok(id)
    }

    /// Relocate an active piece, vacating the cell it occupied.
    ///
    /// Placing a piece on its own square is a no-op; a square held by another
    /// piece is rejected without any change.
    pub fn place_piece(&mut self, id: PieceId, position: Position) -> Result<(), ChessErrors> {
        let (rank, file) =
            Self::cell(position).ok_or(ChessErrors::PositionOutOfBounds(position))?;
        let current = self
            .piece(id)
            .map(Piece::position)
            .ok_or(ChessErrors::PieceNotOnBoard(id))?;
        match self.grid[rank][file] {
            Some(occupant) if occupant != id => return Err(ChessErrors::SquareOccupied(position)),
            _ => {}
        }

        if let Some((old_rank, old_file)) = Self::cell(current) {
            self.grid[old_rank][old_file] = None;
        }
        self.grid[rank][file] = Some(id);
        if let Some(piece) = self.piece_mut(id) {
            piece.set_position(position);
        }
        Ok(())
    }

    /// Take the piece off `position`. Empty or off-board squares are a no-op.
    pub fn remove_piece(&mut self, position: Position) -> Option<Piece> {
        let (rank, file) = Self::cell(position)?;
        let id = self.grid[rank][file].take()?;
        let index = self
            .active_pieces
            .iter()
            .position(|piece| piece.id() == id)?;
        let removed = self.active_pieces.remove(index);
        debug!("removed {removed}");
        Some(removed)
    }

    /// Validate and play a move, including capture and promotion.
    ///
    /// On `Err` the board is unchanged.
    pub fn move_piece(
        &mut self,
        id: PieceId,
        target: Position,
        promotion: &mut impl PromotionSelector,
    ) -> Result<MoveOutcome, ChessErrors> {
        apply_move(self, id, target, promotion)
    }

    /// Remove every piece. Handles issued earlier are not reused.
    pub fn clear(&mut self) {
        self.grid = [[None; GRID_SIZE]; GRID_SIZE];
        self.active_pieces.clear();
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", render_board(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::PromotionPiece;

    fn pos(square: &str) -> Position {
        square.parse().expect("test square should parse")
    }

    fn assert_consistent(board: &Board) {
        for piece in board.active_pieces() {
            let occupant = board.piece_at(piece.position()).expect("cell should be occupied");
            assert_eq!(occupant.id(), piece.id());
        }
        let occupied = (0..BOARD_SIZE)
            .flat_map(|rank| (0..BOARD_SIZE).map(move |file| Position::new(rank, file)))
            .filter(|p| board.piece_at(*p).is_some())
            .count();
        assert_eq!(occupied, board.piece_count());
    }

    #[test]
    fn valid_positions_are_exactly_the_8x8_grid() {
        let board = Board::new();
        for rank in -3..11 {
            for file in -3..11 {
                let expected = (0..=7).contains(&rank) && (0..=7).contains(&file);
                assert_eq!(board.is_valid_position(Position::new(rank, file)), expected);
            }
        }
    }

    #[test]
    fn place_then_remove_restores_empty_board() {
        let mut board = Board::new();
        board
            .place_new_piece(PieceKind::Queen, PieceColor::White, pos("d4"))
            .expect("empty square should accept a piece");
        assert_eq!(board.piece_count(), 1);

        let removed = board.remove_piece(pos("d4")).expect("queen should be removed");
        assert_eq!(removed.kind(), PieceKind::Queen);
        assert_eq!(board.piece_count(), 0);
        assert!(board.piece_at(pos("d4")).is_none());
    }

    #[test]
    fn remove_from_empty_or_off_board_is_noop() {
        let mut board = Board::new();
        assert!(board.remove_piece(pos("a1")).is_none());
        assert!(board.remove_piece(Position::new(9, 9)).is_none());
        assert!(board.piece_at(Position::new(-1, 0)).is_none());
    }

    #[test]
    fn placing_on_occupied_square_is_rejected() {
        let mut board = Board::new();
        let rook = board
            .place_new_piece(PieceKind::Rook, PieceColor::White, pos("a1"))
            .expect("a1 is empty");
        let knight = board
            .place_new_piece(PieceKind::Knight, PieceColor::Black, pos("b1"))
            .expect("b1 is empty");

        assert_eq!(
            board.place_new_piece(PieceKind::Pawn, PieceColor::White, pos("a1")),
            Err(ChessErrors::SquareOccupied(pos("a1")))
        );
        assert_eq!(
            board.place_piece(rook, pos("b1")),
            Err(ChessErrors::SquareOccupied(pos("b1")))
        );
        assert_eq!(board.piece(knight).map(Piece::position), Some(pos("b1")));
        assert_consistent(&board);
    }

    #[test]
    fn relocating_vacates_previous_square_without_duplicates() {
        let mut board = Board::new();
        let bishop = board
            .place_new_piece(PieceKind::Bishop, PieceColor::Black, pos("c8"))
            .expect("c8 is empty");
        board.place_piece(bishop, pos("f5")).expect("f5 is empty");
        board.place_piece(bishop, pos("f5")).expect("own square is accepted");

        assert!(board.piece_at(pos("c8")).is_none());
        assert_eq!(board.piece_at(pos("f5")).map(Piece::id), Some(bishop));
        assert_eq!(board.piece_count(), 1);
        assert_consistent(&board);
    }

    #[test]
    fn identical_pieces_keep_distinct_handles() {
        let mut board = Board::new();
        let first = board
            .place_new_piece(PieceKind::Pawn, PieceColor::White, pos("a2"))
            .expect("a2 is empty");
        board.remove_piece(pos("a2"));
        let second = board
            .place_new_piece(PieceKind::Pawn, PieceColor::White, pos("a2"))
            .expect("a2 is empty again");
        assert_ne!(first, second);
        assert!(board.piece(first).is_none());
    }

    #[test]
    fn pieces_by_color_preserves_insertion_order() {
        let mut board = Board::new();
        let squares = ["h1", "a1", "d4"];
        for square in squares {
            board
                .place_new_piece(PieceKind::Rook, PieceColor::White, pos(square))
                .expect("square is empty");
        }
        board
            .place_new_piece(PieceKind::Rook, PieceColor::Black, pos("e5"))
            .expect("e5 is empty");

        let white: Vec<Position> = board
            .pieces_by_color(PieceColor::White)
            .map(Piece::position)
            .collect();
        assert_eq!(white, squares.map(pos).to_vec());
    }

    #[test]
    fn find_king_tolerates_missing_king() {
        let mut board = Board::new();
        assert!(board.find_king(PieceColor::White).is_none());
        board
            .place_new_piece(PieceKind::King, PieceColor::Black, pos("e8"))
            .expect("e8 is empty");
        assert!(board.find_king(PieceColor::White).is_none());
        assert_eq!(
            board.find_king(PieceColor::Black).map(Piece::position),
            Some(pos("e8"))
        );
    }

    #[test]
    fn board_configuration_needs_two_kings_and_another_piece() {
        let mut board = Board::new();
        board
            .place_new_piece(PieceKind::King, PieceColor::White, pos("e1"))
            .expect("e1 is empty");
        board
            .place_new_piece(PieceKind::King, PieceColor::Black, pos("e8"))
            .expect("e8 is empty");
        assert!(!board.is_valid_board_configuration());

        board
            .place_new_piece(PieceKind::Pawn, PieceColor::White, pos("e2"))
            .expect("e2 is empty");
        assert!(board.is_valid_board_configuration());

        board
            .place_new_piece(PieceKind::King, PieceColor::White, pos("a1"))
            .expect("a1 is empty");
        assert!(!board.is_valid_board_configuration());
    }

    #[test]
    fn clone_is_isolated_from_original() {
        let mut board = Board::new();
        let rook = board
            .place_new_piece(PieceKind::Rook, PieceColor::White, pos("a1"))
            .expect("a1 is empty");
        board
            .place_new_piece(PieceKind::Knight, PieceColor::Black, pos("a5"))
            .expect("a5 is empty");

        let mut copy = board.clone();
        copy.move_piece(rook, pos("a5"), &mut PromotionPiece::Queen)
            .expect("rook captures along the file");
        copy.remove_piece(pos("a5"));
        copy.place_new_piece(PieceKind::Queen, PieceColor::Black, pos("h8"))
            .expect("h8 is empty");

        assert_eq!(board.piece(rook).map(Piece::position), Some(pos("a1")));
        assert_eq!(
            board.piece_at(pos("a5")).map(Piece::kind),
            Some(PieceKind::Knight)
        );
        assert!(board.piece_at(pos("h8")).is_none());
        assert_eq!(board.piece_count(), 2);
        assert_consistent(&board);
        assert_consistent(&copy);
    }

    #[test]
    fn clear_empties_everything() {
        let mut board = Board::new();
        board
            .place_new_piece(PieceKind::King, PieceColor::White, pos("e1"))
            .expect("e1 is empty");
        board.clear();
        assert_eq!(board.piece_count(), 0);
        assert!(board.piece_at(pos("e1")).is_none());
    }
}
