//! Core value types for the mailbox board.
//!
//! Piece codes are packed as `color | kind` so a single byte per cell carries
//! both attributes. The 10x12 board geometry and its lookup tables live here
//! as compile-time constants shared by every board instance.

pub use crate::game_state::board_state::BoardState;
pub use crate::game_state::piece::Piece;

/// Mailbox cell index (`0..120`).
pub type Square = usize;

/// Packed `color | kind` cell contents.
pub type PieceCode = u8;

pub type CastlingRights = u8;

pub const BOARD_CELLS: usize = 120;

/// Contents of an empty interior cell.
pub const EMPTY: PieceCode = 0;

/// Contents of every border cell.
pub const OFF_BOARD: PieceCode = 0xFF;

/// Marker stored in the rank/file tables for border cells.
pub const OFF_BOARD_COORD: u8 = 0xFF;

pub const PIECE_KIND_MASK: PieceCode = 0b0_0111;
pub const PIECE_COLOR_MASK: PieceCode = 0b1_1000;

pub const CASTLE_WHITE_KINGSIDE: CastlingRights = 1 << 0;
pub const CASTLE_WHITE_QUEENSIDE: CastlingRights = 1 << 1;
pub const CASTLE_BLACK_KINGSIDE: CastlingRights = 1 << 2;
pub const CASTLE_BLACK_QUEENSIDE: CastlingRights = 1 << 3;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    White = 8,
    Black = 16,
}

impl Color {
    #[inline]
    pub const fn code(self) -> PieceCode {
        self as PieceCode
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    #[inline]
    pub const fn from_code(code: PieceCode) -> Option<Self> {
        match code & PIECE_COLOR_MASK {
            8 => Some(Color::White),
            16 => Some(Color::Black),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    Pawn = 1,
    Knight = 2,
    Bishop = 3,
    Rook = 4,
    Queen = 5,
    King = 6,
}

impl PieceKind {
    #[inline]
    pub const fn code(self) -> PieceCode {
        self as PieceCode
    }

    /// Position of this kind in per-kind tables.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize - 1
    }

    #[inline]
    pub const fn from_code(code: PieceCode) -> Option<Self> {
        match code & PIECE_KIND_MASK {
            1 => Some(PieceKind::Pawn),
            2 => Some(PieceKind::Knight),
            3 => Some(PieceKind::Bishop),
            4 => Some(PieceKind::Rook),
            5 => Some(PieceKind::Queen),
            6 => Some(PieceKind::King),
            _ => None,
        }
    }
}

#[inline]
pub const fn piece_code(color: Color, kind: PieceKind) -> PieceCode {
    color.code() | kind.code()
}

/// Splits a cell value into its color and kind, or `None` for empty and border cells.
#[inline]
pub const fn decode_piece(code: PieceCode) -> Option<(Color, PieceKind)> {
    if code == EMPTY || code == OFF_BOARD {
        return None;
    }
    match (Color::from_code(code), PieceKind::from_code(code)) {
        (Some(color), Some(kind)) => Some((color, kind)),
        _ => None,
    }
}

/// Interior cell index for zero-based `rank` (0 == rank 1) and `file` (0 == file a).
#[inline]
pub const fn index_from_rank_file(rank: u8, file: u8) -> Square {
    21 + file as usize + 10 * rank as usize
}

/// Rank of every cell, `OFF_BOARD_COORD` on the border.
pub const RANK_OF: [u8; BOARD_CELLS] = generate_coordinate_table(true);

/// File of every cell, `OFF_BOARD_COORD` on the border.
pub const FILE_OF: [u8; BOARD_CELLS] = generate_coordinate_table(false);

const fn generate_coordinate_table(ranks: bool) -> [u8; BOARD_CELLS] {
    let mut table = [OFF_BOARD_COORD; BOARD_CELLS];
    let mut rank = 0u8;

    while rank < 8 {
        let mut file = 0u8;
        while file < 8 {
            table[index_from_rank_file(rank, file)] = if ranks { rank } else { file };
            file += 1;
        }
        rank += 1;
    }

    table
}

#[inline]
pub fn is_interior(square: Square) -> bool {
    square < BOARD_CELLS && RANK_OF[square] != OFF_BOARD_COORD
}
