//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view for the console front-end, tests and
//! diagnostics in text environments.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::game_state::GameState;
use crate::game_state::position::Position;

/// Render the board to a Unicode string for terminal output.
///
/// Rank index 0 (printed as `8`) is the top row, White's side is at the bottom.
pub fn render_board(board: &Board) -> String {
    render_with_marks(board, &[])
}

/// Render the board, marking the selected piece's highlighted targets with `*`.
pub fn render_game_state(game_state: &GameState) -> String {
    let mut out = render_with_marks(game_state.board(), game_state.highlighted_moves());
    out.push('\n');
    out.push_str(&format!(
        "{} to move, {}",
        game_state.current_turn(),
        game_state.game_status()
    ));
    out
}

fn render_with_marks(board: &Board, marks: &[Position]) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for rank in 0..BOARD_SIZE {
        let label = char::from(b'8' - rank as u8);
        out.push(label);
        out.push(' ');

        for file in 0..BOARD_SIZE {
            let position = Position::new(rank, file);
            match board.piece_at(position) {
                Some(piece) => out.push(piece.symbol()),
                None if marks.contains(&position) => out.push('*'),
                None => out.push('·'),
            }

            if file < BOARD_SIZE - 1 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(label);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}
