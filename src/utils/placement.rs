//! Placement-list parser and generator.
//!
//! A placement list is a whitespace-separated sequence of `<piece><square>`
//! tokens such as `Ke1 ke8 ra2`. Upper-case piece letters are White,
//! lower-case are Black. Unlike FEN it carries no side to move, castling or
//! counters; it only describes where pieces stand.

use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{PieceColor, PieceKind};
use crate::game_state::position::Position;
use crate::utils::algebraic::algebraic_to_position;

/// Parse one `<piece><square>` token.
pub fn parse_placement_token(token: &str) -> Result<(PieceKind, PieceColor, Position), ChessErrors> {
    let invalid = || ChessErrors::InvalidPlacementToken(token.to_owned());

    let mut chars = token.chars();
    let letter = chars.next().ok_or_else(invalid)?;
    let kind = PieceKind::from_letter(letter).ok_or_else(invalid)?;
    let color = if letter.is_ascii_uppercase() {
        PieceColor::White
    } else {
        PieceColor::Black
    };
    let position = algebraic_to_position(chars.as_str()).map_err(|_| invalid())?;

    Ok((kind, color, position))
}

/// Put every piece of `placement` on `board`, in list order.
///
/// Stops at the first bad token or occupied square; pieces placed before the
/// failure stay on the board.
pub fn apply_placement(board: &mut Board, placement: &str) -> Result<(), ChessErrors> {
    for token in placement.split_whitespace() {
        let (kind, color, position) = parse_placement_token(token)?;
        board.place_new_piece(kind, color, position)?;
    }
    Ok(())
}

/// Build a fresh board from a placement list.
pub fn board_from_placement(placement: &str) -> Result<Board, ChessErrors> {
    let mut board = Board::new();
    apply_placement(&mut board, placement)?;
    Ok(board)
}

/// Placement list of `board`, in active-piece order.
pub fn generate_placement(board: &Board) -> String {
    board
        .active_pieces()
        .iter()
        .map(|piece| {
            let letter = match piece.color() {
                PieceColor::White => piece.kind().letter(),
                PieceColor::Black => piece.kind().letter().to_ascii_lowercase(),
            };
            format!("{letter}{}", piece.position())
        })
        .collect::<Vec<_>>()
        .join(" ")
}
