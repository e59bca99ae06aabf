//! Random playouts.
//!
//! Plays uniformly random selectable moves for the side to move until the
//! game ends, the side to move has nothing to play, or a move cap is reached.
//! Used for diagnostics, invariant tests and benchmarks; it is not a search.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::PieceId;
use crate::game_state::game_state::GameState;
use crate::game_state::position::Position;
use crate::move_generation::legal_move_apply::MoveOutcome;

pub struct RandomPlayout {
    rng: StdRng,
}

impl RandomPlayout {
    /// Reproducible playouts.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn new() -> Self {
        Self::seeded(rand::random())
    }

    /// Every (piece, target) pair the side to move could select and play.
    pub fn candidate_moves(game: &GameState) -> Vec<(PieceId, Position)> {
        let board = game.board();
        board
            .pieces_by_color(game.current_turn())
            .flat_map(|piece| {
                piece
                    .valid_moves(board)
                    .into_iter()
                    .map(move |target| (piece.id(), target))
            })
            .collect()
    }

    pub fn choose_move(&mut self, game: &GameState) -> Option<(PieceId, Position)> {
        Self::candidate_moves(game)
            .as_slice()
            .choose(&mut self.rng)
            .copied()
    }

    /// Play up to `max_moves` random moves on `game` and return them in order.
    pub fn play(
        &mut self,
        game: &mut GameState,
        max_moves: usize,
    ) -> Result<Vec<MoveOutcome>, ChessErrors> {
        let mut played = Vec::new();
        while played.len() < max_moves && !game.is_game_over() {
            let Some((piece, target)) = self.choose_move(game) else {
                break;
            };
            game.select_piece(piece)?;
            played.push(game.move_piece(target)?);
        }
        Ok(played)
    }
}

impl Default for RandomPlayout {
    fn default() -> Self {
        Self::new()
    }
}
