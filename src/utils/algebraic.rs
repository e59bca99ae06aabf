//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and `Position`.
//! File `a` is file index 0; rank `8` is rank index 0 because rank indices
//! count down from the far side of the board.

use crate::chess_errors::ChessErrors;
use crate::game_state::position::Position;

/// Convert algebraic notation (for example: "e4") to a position.
pub fn algebraic_to_position(square: &str) -> Result<Position, ChessErrors> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 || !square.is_ascii() {
        return Err(ChessErrors::InvalidAlgebraicString(square.to_owned()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(ChessErrors::InvalidAlgebraicChar(file as char));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidAlgebraicChar(rank as char));
    }

    let file_index = (file - b'a') as i8;
    let rank_index = (b'8' - rank) as i8;
    Ok(Position::new(rank_index, file_index))
}

/// Convert an on-board position to algebraic notation (for example: "e4").
pub fn position_to_algebraic(position: Position) -> Result<String, ChessErrors> {
    if !position.is_on_board() {
        return Err(ChessErrors::PositionOutOfBounds(position));
    }

    let file_char = char::from(b'a' + position.file() as u8);
    let rank_char = char::from(b'8' - position.rank() as u8);

    Ok(format!("{file_char}{rank_char}"))
}
