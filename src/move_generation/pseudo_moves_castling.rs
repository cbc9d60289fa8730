use crate::game_state::chess_rules::castling_sides_for;
use crate::game_state::{board_state::BoardState, chess_types::*};
use crate::move_generation::pseudo_move_shared::castling_pieces_home;
use crate::moves::move_options::MoveOptions;

/// Appends the king's castling destinations whose right is held, whose king
/// and rook are on their home squares and whose transit squares are empty.
/// Attacked squares are not considered.
pub fn generate_castling_moves(board_state: &BoardState, king: &Piece, out: &mut MoveOptions) {
    for side in castling_sides_for(king.color) {
        if board_state.castling_rights() & side.right == 0
            || king.square != side.king_from
            || !castling_pieces_home(board_state, side)
        {
            continue;
        }

        let transit_empty = side
            .transit
            .iter()
            .all(|&sq| board_state.piece_code_at(sq) == EMPTY);
        if transit_empty {
            out.quiet.push(side.king_to);
        }
    }
}
