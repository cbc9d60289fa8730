//! Square conversions between algebraic coordinates and mailbox indices.
//!
//! Converts human-readable coordinates (e.g. `e4`) to the 10x12 mailbox index
//! space and back. Reused by FEN handling and the text front-end.

use crate::chess_errors::ChessError;
use crate::game_state::chess_types::{Square, BOARD_CELLS};

/// Convert algebraic notation (for example: "e4") to a mailbox index.
///
/// Files a..h map to column offsets 1..8, so `a1 == 21` and `h8 == 98`.
#[inline]
pub fn algebraic_to_index(notation: &str) -> Result<Square, ChessError> {
    let bytes = notation.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::out_of_bounds(notation));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::out_of_bounds(notation));
    }

    let file_offset = (file - b'a' + 1) as usize;
    let rank_number = (rank - b'0') as usize;
    Ok((rank_number + 1) * 10 + file_offset)
}

/// Convert a mailbox index to algebraic notation (for example: "e4").
#[inline]
pub fn index_to_algebraic(index: Square) -> Result<String, ChessError> {
    let column = index % 10;
    let rank_number = (index / 10) as isize - 1;

    if index >= BOARD_CELLS || column == 0 || column == 9 || !(1..=8).contains(&rank_number) {
        return Err(ChessError::out_of_bounds(format!("index {index}")));
    }

    let file_char = char::from(b'a' + (column - 1) as u8);
    let rank_char = char::from(b'0' + rank_number as u8);

    Ok(format!("{file_char}{rank_char}"))
}
