//! Crate root module declarations for the chess puzzle rules engine.
//!
//! This file exposes the subsystems (board and turn state, per-piece move
//! rules, check and stalemate evaluation, puzzle goals, the console front-end
//! and utility helpers) so the binary, benches and tests can import stable
//! module paths.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod piece;
    pub mod position;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
}

pub mod puzzle {
    pub mod puzzle_goal;
}

pub mod console {
    pub mod console_top;
}

pub mod utils {
    pub mod algebraic;
    pub mod placement;
    pub mod random_playout;
    pub mod render_game_state;
}
