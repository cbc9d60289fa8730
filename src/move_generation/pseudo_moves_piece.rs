//! Pseudo-legal moves for knights, bishops, rooks, queens and kings.
//!
//! Walks each offset of the piece's movement rule across the mailbox; border
//! sentinels end a ray without explicit edge checks.

use crate::game_state::{board_state::BoardState, chess_types::*};
use crate::move_generation::pseudo_move_shared::{classify_cell, offset_square, CellContents};
use crate::moves::move_options::MoveOptions;
use crate::moves::movement_offsets::movement_rule;

pub fn generate_piece_moves_by_rule(board_state: &BoardState, piece: &Piece, out: &mut MoveOptions) {
    let rule = movement_rule(piece.kind);

    for &offset in rule.offsets {
        let mut to = piece.square;
        loop {
            to = offset_square(to, offset);
            match classify_cell(board_state, to, piece.color) {
                CellContents::OffBoard | CellContents::Own => break,
                CellContents::Enemy => {
                    out.captures.push(to);
                    break;
                }
                CellContents::Empty => out.quiet.push(to),
            }

            if !rule.sliding {
                break;
            }
        }
    }
}
