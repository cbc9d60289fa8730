//! Pseudo-legal pawn moves: single and double pushes, diagonal captures and
//! en-passant captures. Promotion is not modelled.

use crate::game_state::chess_rules::{pawn_capture_offsets, pawn_push_offset, pawn_start_rank};
use crate::game_state::{board_state::BoardState, chess_types::*};
use crate::move_generation::pseudo_move_shared::{
    classify_cell, en_passant_victim, offset_square, CellContents,
};
use crate::moves::move_options::MoveOptions;

pub fn generate_pawn_moves(board_state: &BoardState, pawn: &Piece, out: &mut MoveOptions) {
    let from = pawn.square;
    let push = pawn_push_offset(pawn.color);

    let one_step = offset_square(from, push);
    if classify_cell(board_state, one_step, pawn.color) == CellContents::Empty {
        if pawn.rank() == pawn_start_rank(pawn.color) {
            let two_step = offset_square(one_step, push);
            if classify_cell(board_state, two_step, pawn.color) == CellContents::Empty {
                out.quiet.push(two_step);
            }
        }
        out.quiet.push(one_step);
    }

    for offset in pawn_capture_offsets(pawn.color) {
        let to = offset_square(from, offset);
        match classify_cell(board_state, to, pawn.color) {
            CellContents::Enemy => out.captures.push(to),
            CellContents::Empty
                if board_state.en_passant_target() == Some(to)
                    && en_passant_victim(board_state, pawn.color, to).is_some() =>
            {
                out.captures.push(to)
            }
            _ => {}
        }
    }
}
