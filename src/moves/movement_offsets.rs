//! Mailbox step tables for every piece kind.
//!
//! On the 10x12 grid one rank is 10 cells and one file is 1 cell, so every
//! piece direction is a fixed signed offset. Border padding is two cells deep
//! on the rank axis, which keeps knight jumps from the edge inside the array.

use crate::game_state::chess_types::PieceKind;

pub const KNIGHT_OFFSETS: [isize; 8] = [-21, -19, -12, -8, 8, 12, 19, 21];
pub const BISHOP_OFFSETS: [isize; 4] = [-11, -9, 9, 11];
pub const ROOK_OFFSETS: [isize; 4] = [-10, -1, 1, 10];
pub const ROYAL_OFFSETS: [isize; 8] = [-11, -10, -9, -1, 1, 9, 10, 11];

/// How a piece kind moves outside of its special rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovementRule {
    pub offsets: &'static [isize],
    /// Repeat each offset until blocked.
    pub sliding: bool,
}

/// Indexed by [`PieceKind::index`]. Pawns have no generic rule.
pub static MOVEMENT_RULES: [MovementRule; 6] = [
    MovementRule {
        offsets: &[],
        sliding: false,
    },
    MovementRule {
        offsets: &KNIGHT_OFFSETS,
        sliding: false,
    },
    MovementRule {
        offsets: &BISHOP_OFFSETS,
        sliding: true,
    },
    MovementRule {
        offsets: &ROOK_OFFSETS,
        sliding: true,
    },
    MovementRule {
        offsets: &ROYAL_OFFSETS,
        sliding: true,
    },
    MovementRule {
        offsets: &ROYAL_OFFSETS,
        sliding: false,
    },
];

#[inline]
pub fn movement_rule(kind: PieceKind) -> &'static MovementRule {
    &MOVEMENT_RULES[kind.index()]
}
