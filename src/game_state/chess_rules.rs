//! Canonical chess-rule constants.
//!
//! Standard starting position plus the fixed back-rank squares used by
//! castling generation and castling-rights bookkeeping.

use crate::game_state::chess_types::*;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

pub const WHITE_KING_HOME: Square = 25;
pub const BLACK_KING_HOME: Square = 95;

/// One castling option: the rights bit it needs and the squares it touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlingSide {
    pub color: Color,
    pub right: CastlingRights,
    pub king_from: Square,
    pub king_to: Square,
    pub rook_from: Square,
    pub rook_to: Square,
    /// Cells between king and rook that must be empty.
    pub transit: &'static [Square],
}

pub static CASTLING_SIDES: [CastlingSide; 4] = [
    CastlingSide {
        color: Color::White,
        right: CASTLE_WHITE_KINGSIDE,
        king_from: WHITE_KING_HOME,
        king_to: 27,
        rook_from: 28,
        rook_to: 26,
        transit: &[26, 27],
    },
    CastlingSide {
        color: Color::White,
        right: CASTLE_WHITE_QUEENSIDE,
        king_from: WHITE_KING_HOME,
        king_to: 23,
        rook_from: 21,
        rook_to: 24,
        transit: &[22, 23, 24],
    },
    CastlingSide {
        color: Color::Black,
        right: CASTLE_BLACK_KINGSIDE,
        king_from: BLACK_KING_HOME,
        king_to: 97,
        rook_from: 98,
        rook_to: 96,
        transit: &[96, 97],
    },
    CastlingSide {
        color: Color::Black,
        right: CASTLE_BLACK_QUEENSIDE,
        king_from: BLACK_KING_HOME,
        king_to: 93,
        rook_from: 91,
        rook_to: 94,
        transit: &[92, 93, 94],
    },
];

#[inline]
pub fn castling_sides_for(color: Color) -> impl Iterator<Item = &'static CastlingSide> {
    CASTLING_SIDES.iter().filter(move |side| side.color == color)
}

#[inline]
pub const fn rights_for_color(color: Color) -> CastlingRights {
    match color {
        Color::White => CASTLE_WHITE_KINGSIDE | CASTLE_WHITE_QUEENSIDE,
        Color::Black => CASTLE_BLACK_KINGSIDE | CASTLE_BLACK_QUEENSIDE,
    }
}

/// Rank index a pawn of `color` starts on.
#[inline]
pub const fn pawn_start_rank(color: Color) -> u8 {
    match color {
        Color::White => 1,
        Color::Black => 6,
    }
}

/// Mailbox step of a single pawn push.
#[inline]
pub const fn pawn_push_offset(color: Color) -> isize {
    match color {
        Color::White => 10,
        Color::Black => -10,
    }
}

#[inline]
pub const fn pawn_capture_offsets(color: Color) -> [isize; 2] {
    match color {
        Color::White => [9, 11],
        Color::Black => [-9, -11],
    }
}
