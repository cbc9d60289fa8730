//! Lightweight piece view derived from a board cell.

use crate::game_state::chess_types::*;

/// A piece as seen on one square at one moment.
///
/// Holds no reference to the board; re-derive it with
/// [`BoardState::piece_at`] after the board changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
    pub square: Square,
}

impl Piece {
    #[inline]
    pub const fn code(&self) -> PieceCode {
        piece_code(self.color, self.kind)
    }

    #[inline]
    pub fn rank(&self) -> u8 {
        RANK_OF[self.square]
    }

    #[inline]
    pub fn file(&self) -> u8 {
        FILE_OF[self.square]
    }
}
