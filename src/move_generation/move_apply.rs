//! Turn controller: applies an accepted move to a board in place.
//!
//! The destination is trusted to come from the move generator; only the
//! structural shape of the move is checked. Castling rook relocation,
//! en-passant capture, castling-rights loss, clocks and the side to move are
//! all updated here.

use crate::chess_errors::ChessError;
use crate::game_state::chess_rules::{rights_for_color, CASTLING_SIDES};
use crate::game_state::{board_state::BoardState, chess_types::*};
use crate::move_generation::pseudo_move_shared::{castling_pieces_home, en_passant_victim};

/// What happened while applying a move.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AppliedMove {
    pub from: Square,
    pub to: Square,
    pub captured: Option<PieceCode>,
    pub castled: bool,
    pub en_passant: bool,
    pub double_step: bool,
}

pub fn apply_move(board_state: &mut BoardState, from: Square, to: Square) -> Result<AppliedMove, ChessError> {
    if !is_interior(from) {
        return Err(ChessError::NotInteriorSquare { index: from });
    }
    if !is_interior(to) {
        return Err(ChessError::NotInteriorSquare { index: to });
    }
    let moved = board_state
        .piece_at(from)
        .ok_or(ChessError::EmptyOriginSquare { square: from })?;

    let mut applied = AppliedMove {
        from,
        to,
        ..AppliedMove::default()
    };

    let file_delta = (FILE_OF[to] as i16 - FILE_OF[from] as i16).abs();
    let rank_delta = (RANK_OF[to] as i16 - RANK_OF[from] as i16).abs();

    // Resolved against the board before anything moves.
    let castling_side = if moved.kind == PieceKind::King && file_delta > 1 {
        CASTLING_SIDES.iter().find(|side| {
            side.color == moved.color
                && side.king_from == from
                && side.king_to == to
                && castling_pieces_home(board_state, side)
        })
    } else {
        None
    };

    let target_code = board_state.squares[to];
    let en_passant_square = if moved.kind == PieceKind::Pawn
        && file_delta == 1
        && target_code == EMPTY
        && board_state.en_passant_target == Some(to)
    {
        en_passant_victim(board_state, moved.color, to)
    } else {
        None
    };

    if target_code != EMPTY {
        applied.captured = Some(target_code);
    }

    // Piece placement.
    board_state.squares[to] = moved.code();
    board_state.squares[from] = EMPTY;

    if let Some(side) = castling_side {
        board_state.squares[side.rook_to] = board_state.squares[side.rook_from];
        board_state.squares[side.rook_from] = EMPTY;
        applied.castled = true;
    }

    if let Some(passed) = en_passant_square {
        applied.captured = Some(board_state.squares[passed]);
        board_state.squares[passed] = EMPTY;
        applied.en_passant = true;
    }

    update_castling_rights(board_state, moved, from, to);

    applied.double_step = moved.kind == PieceKind::Pawn && rank_delta == 2;
    board_state.en_passant_target = if applied.double_step {
        Some((from + to) / 2)
    } else {
        None
    };

    // FEN halfmove clock: pawn moves and captures reset it.
    if moved.kind == PieceKind::Pawn || applied.captured.is_some() {
        board_state.halfmove_clock = 0;
    } else {
        board_state.halfmove_clock = board_state.halfmove_clock.saturating_add(1);
    }
    if moved.color == Color::Black {
        board_state.fullmove_number = board_state.fullmove_number.saturating_add(1);
    }

    board_state.side_to_move = moved.color.opposite();

    Ok(applied)
}

fn update_castling_rights(board_state: &mut BoardState, moved: Piece, from: Square, to: Square) {
    if moved.kind == PieceKind::King {
        board_state.castling_rights &= !rights_for_color(moved.color);
    }

    // A rook leaving its corner, or anything landing on one, ends that side's right.
    for side in CASTLING_SIDES.iter() {
        if from == side.rook_from || to == side.rook_from {
            board_state.castling_rights &= !side.right;
        }
    }
}
