//! Turn-taking layer on top of the board.
//!
//! `GameState` owns the `Board` and drives play through a select-then-move
//! protocol:
//! 1. `select_piece` caches the piece and its valid targets (the highlights),
//! 2. `move_piece` plays one of the highlighted targets, flips the turn,
//!    clears the selection and recomputes the status for the new side to move.
//!
//! Rejected actions return `Err` and leave the state as it was. Status only
//! changes after a successful move; setup edits (placing or removing pieces)
//! only drop the selection.

use log::{debug, info};

use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::chess_rules::GameConfig;
use crate::game_state::chess_types::{GameStatus, PieceColor, PieceId, PieceKind};
use crate::game_state::piece::Piece;
use crate::game_state::position::Position;
use crate::move_generation::legal_move_apply::{MoveOutcome, PromotionSelector};
use crate::move_generation::legal_move_checks;

#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    current_turn: PieceColor,
    selected_piece: Option<PieceId>,
    highlighted_moves: Vec<Position>,
    game_status: GameStatus,
    config: GameConfig,
    moves_played: usize,
    last_move: Option<MoveOutcome>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::with_config(GameConfig::default())
    }
}

impl GameState {
    /// Empty board, White to move.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: GameConfig) -> Self {
        Self {
            board: Board::new(),
            current_turn: PieceColor::White,
            selected_piece: None,
            highlighted_moves: Vec::new(),
            game_status: GameStatus::InProgress,
            config,
            moves_played: 0,
            last_move: None,
        }
    }

    /// Start over with an empty board; the configuration is kept.
    pub fn reset_game(&mut self) {
        *self = Self::with_config(self.config);
        debug!("game reset");
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[inline]
    pub fn current_turn(&self) -> PieceColor {
        self.current_turn
    }

    #[inline]
    pub fn game_status(&self) -> GameStatus {
        self.game_status
    }

    pub fn is_game_over(&self) -> bool {
        matches!(
            self.game_status,
            GameStatus::Checkmate | GameStatus::Stalemate
        )
    }

    #[inline]
    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    pub fn last_move(&self) -> Option<&MoveOutcome> {
        self.last_move.as_ref()
    }

    pub fn active_pieces(&self) -> &[Piece] {
        self.board.active_pieces()
    }

    pub fn piece_at(&self, position: Position) -> Option<&Piece> {
        self.board.piece_at(position)
    }

    /// The selected piece, if it is still on the board.
    pub fn selected_piece(&self) -> Option<&Piece> {
        self.selected_piece.and_then(|id| self.board.piece(id))
    }

    /// Valid targets of the selected piece, computed when it was selected.
    pub fn highlighted_moves(&self) -> &[Position] {
        &self.highlighted_moves
    }

    pub fn is_valid_board_configuration(&self) -> bool {
        self.board.is_valid_board_configuration()
    }

    // Setup

    pub fn place_new_piece(
        &mut self,
        kind: PieceKind,
        color: PieceColor,
        position: Position,
    ) -> Result<PieceId, ChessErrors> {
        let id = self.board.place_new_piece(kind, color, position)?;
        self.clear_selection();
        Ok(id)
    }

    pub fn place_piece(&mut self, id: PieceId, position: Position) -> Result<(), ChessErrors> {
        self.board.place_piece(id, position)?;
        self.clear_selection();
        Ok(())
    }

    pub fn remove_piece(&mut self, position: Position) -> Option<Piece> {
        let removed = self.board.remove_piece(position);
        if removed.is_some() {
            self.clear_selection();
        }
        removed
    }

    /// Start a new game on `board`, for instance a parsed placement list.
    /// Turn, status, move count and last move start over; the configuration
    /// is kept.
    pub fn load_board(&mut self, board: Board) {
        *self = Self {
            board,
            ..Self::with_config(self.config)
        };
        debug!("board loaded, {} pieces", self.board.active_pieces().len());
    }

    // Turn protocol

    pub fn clear_selection(&mut self) {
        self.selected_piece = None;
        self.highlighted_moves.clear();
    }

    /// Select a piece of the side to move and cache its valid targets.
    pub fn select_piece(&mut self, id: PieceId) -> Result<&[Position], ChessErrors> {
        let piece = self.board.piece(id).ok_or(ChessErrors::PieceNotOnBoard(id))?;
        if piece.color() != self.current_turn {
            return Err(ChessErrors::NotYourTurn {
                piece: id,
                turn: self.current_turn,
            });
        }

        self.highlighted_moves = piece.valid_moves(&self.board);
        self.selected_piece = Some(id);
        debug!("selected {piece} with {} moves", self.highlighted_moves.len());
        Ok(&self.highlighted_moves)
    }

    pub fn select_piece_at(&mut self, position: Position) -> Result<&[Position], ChessErrors> {
        let id = self
            .board
            .piece_at(position)
            .map(Piece::id)
            .ok_or(ChessErrors::EmptySquare(position))?;
        self.select_piece(id)
    }

    /// Move the selected piece, promoting to the configured default piece.
    pub fn move_piece(&mut self, target: Position) -> Result<MoveOutcome, ChessErrors> {
        let mut promotion = self.config.default_promotion;
        self.move_piece_with(target, &mut promotion)
    }

    /// Move the selected piece, asking `promotion` if a pawn reaches its last
    /// rank.
    pub fn move_piece_with(
        &mut self,
        target: Position,
        promotion: &mut impl PromotionSelector,
    ) -> Result<MoveOutcome, ChessErrors> {
        let id = self.selected_piece.ok_or(ChessErrors::NoPieceSelected)?;
        if !self.highlighted_moves.contains(&target) {
            return Err(ChessErrors::TargetNotHighlighted(target));
        }

        let outcome = self.board.move_piece(id, target, promotion)?;
        self.current_turn = self.current_turn.opposite();
        self.clear_selection();
        self.moves_played += 1;
        self.last_move = Some(outcome.clone());
        self.update_status();
        Ok(outcome)
    }

    fn update_status(&mut self) {
        self.game_status = legal_move_checks::evaluate_status(
            &self.board,
            self.current_turn,
            self.config.simulation_promotion,
        );
        match self.game_status {
            GameStatus::InProgress => {}
            status => info!("{} to move: {status}", self.current_turn),
        }
    }

    // Status queries

    pub fn is_king_in_check(&self, color: PieceColor) -> bool {
        legal_move_checks::is_king_in_check(&self.board, color)
    }

    pub fn is_checkmate(&self, color: PieceColor) -> bool {
        legal_move_checks::is_checkmate(&self.board, color, self.config.simulation_promotion)
    }

    pub fn has_no_valid_moves_to_escape_check(&self, color: PieceColor) -> bool {
        legal_move_checks::has_no_valid_moves_to_escape_check(
            &self.board,
            color,
            self.config.simulation_promotion,
        )
    }

    pub fn has_no_valid_moves(&self, color: PieceColor) -> bool {
        legal_move_checks::has_no_valid_moves(&self.board, color)
    }
}
