//! FEN-to-BoardState parser.
//!
//! Builds a fully-populated mailbox board from a Forsyth-Edwards Notation
//! string, including castling rights, en-passant target and clocks. A parse
//! either succeeds completely or returns an error; no partial board escapes.

use crate::chess_errors::ChessError;
use crate::game_state::{board_state::BoardState, chess_types::*};
use crate::utils::algebraic::algebraic_to_index;

pub fn parse_fen(fen: &str) -> Result<BoardState, ChessError> {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    if fields.len() != 6 {
        return Err(ChessError::malformed_fen(
            fen,
            format!("expected 6 fields, found {}", fields.len()),
        ));
    }

    let mut board_state = BoardState::new_empty();

    parse_board(fen, fields[0], &mut board_state)?;
    board_state.side_to_move = parse_side_to_move(fen, fields[1])?;
    board_state.castling_rights = parse_castling_rights(fen, fields[2])?;
    board_state.en_passant_target = parse_en_passant_square(fen, fields[3])?;
    board_state.halfmove_clock = fields[4]
        .parse::<u32>()
        .map_err(|_| ChessError::malformed_fen(fen, format!("invalid halfmove clock: {}", fields[4])))?;
    board_state.fullmove_number = fields[5]
        .parse::<u32>()
        .map_err(|_| ChessError::malformed_fen(fen, format!("invalid fullmove number: {}", fields[5])))?;

    Ok(board_state)
}

fn parse_board(fen: &str, board_part: &str, board_state: &mut BoardState) -> Result<(), ChessError> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(ChessError::malformed_fen(fen, "board layout must contain 8 ranks"));
    }

    // First FEN rank is rank 8.
    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let board_rank = 7 - fen_rank_idx as u8;
        let mut file = 0u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessError::malformed_fen(
                        fen,
                        format!("invalid empty-square count '{ch}'"),
                    ));
                }
                file += empty_count as u8;
                if file > 8 {
                    return Err(ChessError::malformed_fen(fen, "board rank has too many files"));
                }
                continue;
            }

            let (color, kind) = piece_from_fen_char(ch).ok_or_else(|| {
                ChessError::malformed_fen(fen, format!("invalid piece character '{ch}' in board layout"))
            })?;

            if file >= 8 {
                return Err(ChessError::malformed_fen(fen, "board rank has too many files"));
            }

            let sq = index_from_rank_file(board_rank, file);
            board_state.squares[sq] = piece_code(color, kind);
            file += 1;
        }

        if file != 8 {
            return Err(ChessError::malformed_fen(fen, "board rank does not sum to 8 files"));
        }
    }

    Ok(())
}

fn parse_side_to_move(fen: &str, side_part: &str) -> Result<Color, ChessError> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(ChessError::malformed_fen(
            fen,
            format!("invalid side-to-move field: {side_part}"),
        )),
    }
}

fn parse_castling_rights(fen: &str, castling_part: &str) -> Result<CastlingRights, ChessError> {
    if castling_part == "-" {
        return Ok(0);
    }

    let mut rights: CastlingRights = 0;

    for ch in castling_part.chars() {
        match ch {
            'K' => rights |= CASTLE_WHITE_KINGSIDE,
            'Q' => rights |= CASTLE_WHITE_QUEENSIDE,
            'k' => rights |= CASTLE_BLACK_KINGSIDE,
            'q' => rights |= CASTLE_BLACK_QUEENSIDE,
            _ => {
                return Err(ChessError::malformed_fen(
                    fen,
                    format!("invalid castling rights character: {ch}"),
                ))
            }
        }
    }

    Ok(rights)
}

fn parse_en_passant_square(fen: &str, en_passant_part: &str) -> Result<Option<Square>, ChessError> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    let square = algebraic_to_index(en_passant_part)?;
    // Only a double step can create a target: rank 3 or rank 6.
    if !matches!(RANK_OF[square], 2 | 5) {
        return Err(ChessError::malformed_fen(
            fen,
            format!("en-passant square {en_passant_part} is not on rank 3 or 6"),
        ));
    }

    Ok(Some(square))
}

pub(crate) fn piece_from_fen_char(ch: char) -> Option<(Color, PieceKind)> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some((color, kind))
}

#[cfg(test)]
mod tests {
    use super::parse_fen;
    use crate::chess_errors::ChessError;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::*;
    use crate::utils::render_game_state::render_game_state;

    #[test]
    fn parse_starting_fen_and_render_board() {
        let board = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");

        println!("\n{}", render_game_state(&board));

        assert_eq!(board.side_to_move(), Color::White);
        assert_eq!(board.castling_rights(), 0b1111);
        assert_eq!(board.en_passant_target(), None);
        assert_eq!(board.fullmove_number(), 1);
        assert_eq!(board.halfmove_clock(), 0);
        assert_eq!(board.piece_code_at(21), piece_code(Color::White, PieceKind::Rook));
        assert_eq!(board.piece_code_at(98), piece_code(Color::Black, PieceKind::Rook));
        assert_eq!(board.piece_code_at(25), piece_code(Color::White, PieceKind::King));
        assert_eq!(board.piece_code_at(94), piece_code(Color::Black, PieceKind::Queen));
    }

    #[test]
    fn custom_placement_puts_pieces_where_fen_says() {
        let board = parse_fen("8/8/8/8/8/8/8/p7 w - - 0 1").expect("custom FEN should parse");
        assert_eq!(board.piece_code_at(21), piece_code(Color::Black, PieceKind::Pawn));

        let crowded = parse_fen("pppppppp/pppp4/4pppp/6pp/pp6/7p/p7/8 w - - 0 1")
            .expect("crowded FEN should parse");
        assert_eq!(crowded.pieces_of(Color::Black, PieceKind::Pawn).len(), 22);
    }

    #[test]
    fn parses_metadata_fields() {
        let board = parse_fen("4k3/8/8/3pP3/8/8/8/4K3 w Kq d6 3 17").expect("FEN should parse");
        assert_eq!(board.castling_rights(), CASTLE_WHITE_KINGSIDE | CASTLE_BLACK_QUEENSIDE);
        assert_eq!(board.en_passant_target(), Some(74));
        assert_eq!(board.halfmove_clock(), 3);
        assert_eq!(board.fullmove_number(), 17);
    }

    #[test]
    fn rejects_malformed_input() {
        let bad = [
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1 extra",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP w KQkq - 0 1",
            "rnbqkbnr/ppppxppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "rnbqkbnr/pppppppp/9/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "rnbqkbnr/ppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQxq - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - -1 1",
        ];
        for fen in bad {
            assert!(
                matches!(parse_fen(fen), Err(ChessError::MalformedFen { .. })),
                "{fen} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_bad_en_passant_square() {
        let result = parse_fen("4k3/8/8/8/8/8/8/4K3 w - z9 0 1");
        assert!(matches!(result, Err(ChessError::OutOfBoundsSquare { .. })));
    }

    #[test]
    fn rejects_en_passant_square_off_the_double_step_ranks() {
        for fen in ["4k3/8/8/8/8/8/8/4K3 w - d5 0 1", "4k3/8/8/8/8/8/8/4K3 b - e1 0 1"] {
            assert!(
                matches!(parse_fen(fen), Err(ChessError::MalformedFen { .. })),
                "{fen} should be rejected"
            );
        }
        assert!(parse_fen("4k3/8/8/8/4P3/8/8/4K3 b - e3 0 1").is_ok());
    }
}
