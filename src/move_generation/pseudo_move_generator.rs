//! Pseudo-legal move generation entry points.
//!
//! Moves obey piece movement, occupancy, castling-rights and en-passant
//! rules but are not filtered for leaving the mover's own king attacked.

use crate::game_state::{board_state::BoardState, chess_types::*};
use crate::move_generation::pseudo_moves_castling::generate_castling_moves;
use crate::move_generation::pseudo_moves_pawn::generate_pawn_moves;
use crate::move_generation::pseudo_moves_piece::generate_piece_moves_by_rule;
use crate::moves::move_options::MoveOptions;

/// Quiet moves and captures for one piece.
pub fn generate_piece_moves(board_state: &BoardState, piece: &Piece) -> MoveOptions {
    let mut out = MoveOptions::default();

    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(board_state, piece, &mut out),
        PieceKind::King => {
            generate_piece_moves_by_rule(board_state, piece, &mut out);
            generate_castling_moves(board_state, piece, &mut out);
        }
        _ => generate_piece_moves_by_rule(board_state, piece, &mut out),
    }

    out
}

/// Moves of whatever stands on `square`; empty when the square holds no piece.
pub fn generate_square_moves(board_state: &BoardState, square: Square) -> MoveOptions {
    board_state
        .piece_at(square)
        .map(|piece| generate_piece_moves(board_state, &piece))
        .unwrap_or_default()
}

/// Every `(from, to)` pair available to the side to move, in board scan order.
pub fn generate_side_moves(board_state: &BoardState) -> Vec<(Square, Square)> {
    let mut out = Vec::with_capacity(48);

    for piece in board_state.pieces_for_color(board_state.side_to_move()) {
        let options = generate_piece_moves(board_state, &piece);
        out.extend(options.iter().map(|to| (piece.square, to)));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::{generate_side_moves, generate_square_moves};
    use crate::game_state::board_state::BoardState;

    #[test]
    fn starting_position_has_twenty_moves_per_side() {
        let board = BoardState::new_game();
        assert_eq!(generate_side_moves(&board).len(), 20);

        let black = BoardState::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR b KQkq - 0 1")
            .expect("FEN should parse");
        assert_eq!(generate_side_moves(&black).len(), 20);
    }

    #[test]
    fn empty_or_border_squares_have_no_moves() {
        let board = BoardState::new_game();
        assert!(generate_square_moves(&board, 55).is_empty());
        assert!(generate_square_moves(&board, 0).is_empty());
        assert!(generate_square_moves(&board, 500).is_empty());
    }

    #[test]
    fn king_moves_include_castling() {
        let board = BoardState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1")
            .expect("FEN should parse");
        let moves = generate_square_moves(&board, 25);
        assert_eq!(moves.quiet.len(), 5 + 2);
        assert!(moves.quiet.contains(&27));
        assert!(moves.quiet.contains(&23));
    }
}
