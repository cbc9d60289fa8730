use crate::game_state::chess_rules::{pawn_push_offset, CastlingSide};
use crate::game_state::{board_state::BoardState, chess_types::*};

/// What a mover finds on a target cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellContents {
    OffBoard,
    Empty,
    Own,
    Enemy,
}

#[inline]
pub fn offset_square(square: Square, offset: isize) -> Square {
    square.wrapping_add_signed(offset)
}

#[inline]
pub fn classify_cell(board_state: &BoardState, square: Square, mover: Color) -> CellContents {
    match board_state.piece_code_at(square) {
        OFF_BOARD => CellContents::OffBoard,
        EMPTY => CellContents::Empty,
        code if Color::from_code(code) == Some(mover) => CellContents::Own,
        _ => CellContents::Enemy,
    }
}

/// King and rook of `side` are both still on their home squares.
#[inline]
pub fn castling_pieces_home(board_state: &BoardState, side: &CastlingSide) -> bool {
    board_state.piece_code_at(side.king_from) == piece_code(side.color, PieceKind::King)
        && board_state.piece_code_at(side.rook_from) == piece_code(side.color, PieceKind::Rook)
}

/// Square of the pawn an en-passant capture onto `target` would take, if an
/// opposing pawn actually stands there.
pub fn en_passant_victim(board_state: &BoardState, mover: Color, target: Square) -> Option<Square> {
    let passed = offset_square(target, -pawn_push_offset(mover));
    (board_state.piece_code_at(passed) == piece_code(mover.opposite(), PieceKind::Pawn)).then_some(passed)
}
