//! BoardState-to-FEN serializer.
//!
//! Reads the mailbox interior one 8-cell row at a time, rank 8 first,
//! collapsing runs of empty cells into digits. The metadata fields follow in
//! FEN order; castling letters are always written as a subset of `KQkq`.

use crate::game_state::{board_state::BoardState, chess_types::*};
use crate::utils::algebraic::index_to_algebraic;

/// Black piece letters indexed by `PieceKind::index`; white is the uppercase.
const FEN_LETTERS: [u8; 6] = *b"pnbrqk";

const CASTLING_LETTERS: [(CastlingRights, char); 4] = [
    (CASTLE_WHITE_KINGSIDE, 'K'),
    (CASTLE_WHITE_QUEENSIDE, 'Q'),
    (CASTLE_BLACK_KINGSIDE, 'k'),
    (CASTLE_BLACK_QUEENSIDE, 'q'),
];

pub fn generate_fen(board_state: &BoardState) -> String {
    let side_to_move = match board_state.side_to_move() {
        Color::White => 'w',
        Color::Black => 'b',
    };
    let en_passant = board_state
        .en_passant_target()
        .and_then(|square| index_to_algebraic(square).ok())
        .unwrap_or_else(|| "-".to_owned());

    format!(
        "{} {} {} {} {} {}",
        generate_board_field(board_state),
        side_to_move,
        generate_castling_field(board_state.castling_rights()),
        en_passant,
        board_state.halfmove_clock(),
        board_state.fullmove_number()
    )
}

fn generate_board_field(board_state: &BoardState) -> String {
    let cells = board_state.cells();
    (0..8u8)
        .rev()
        .map(|rank| {
            let row_start = index_from_rank_file(rank, 0);
            encode_row(&cells[row_start..row_start + 8])
        })
        .collect::<Vec<_>>()
        .join("/")
}

fn encode_row(row: &[PieceCode]) -> String {
    let mut out = String::with_capacity(8);
    let mut empty_run = 0u32;

    for &code in row {
        let Some((color, kind)) = decode_piece(code) else {
            empty_run += 1;
            continue;
        };
        out.extend(char::from_digit(empty_run, 10).filter(|_| empty_run > 0));
        empty_run = 0;
        out.push(piece_to_fen_char(color, kind));
    }
    out.extend(char::from_digit(empty_run, 10).filter(|_| empty_run > 0));

    out
}

fn piece_to_fen_char(color: Color, kind: PieceKind) -> char {
    let letter = char::from(FEN_LETTERS[kind.index()]);
    match color {
        Color::White => letter.to_ascii_uppercase(),
        Color::Black => letter,
    }
}

fn generate_castling_field(rights: CastlingRights) -> String {
    let letters: String = CASTLING_LETTERS
        .iter()
        .filter(|&&(bit, _)| rights & bit != 0)
        .map(|&(_, letter)| letter)
        .collect();

    if letters.is_empty() {
        "-".to_owned()
    } else {
        letters
    }
}

#[cfg(test)]
mod tests {
    use super::generate_fen;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::{
        piece_code, Color, PieceKind, CASTLE_BLACK_KINGSIDE, CASTLE_BLACK_QUEENSIDE,
    };
    use crate::utils::fen_parser::parse_fen;

    #[test]
    fn round_trip_starting_position_fen() {
        let parsed = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");
        assert_eq!(generate_fen(&parsed), STARTING_POSITION_FEN);
    }

    #[test]
    fn round_trip_preserves_piece_colors_and_metadata() {
        let fens = [
            "r1bqk2r/pppp1ppp/2n2n2/2b1p3/2B1P3/2N2N2/PPPP1PPP/R1BQ1RK1 b kq - 4 6",
            "rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq e6 0 2",
            "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
            "r3k2r/8/8/8/8/8/8/R3K2R b Qk - 12 40",
            "8/8/8/8/8/8/8/8 w - - 0 1",
        ];
        for fen in fens {
            let parsed = parse_fen(fen).expect("FEN should parse");
            let generated = generate_fen(&parsed);
            assert_eq!(generated, fen);

            let reparsed = parse_fen(&generated).expect("generated FEN should parse");
            assert_eq!(reparsed, parsed);
        }
    }

    #[test]
    fn castling_letters_are_emitted_in_canonical_order() {
        let parsed = parse_fen("r3k2r/8/8/8/8/8/8/R3K2R w qkQK - 0 1").expect("FEN should parse");
        assert_eq!(parsed.side_to_move(), Color::White);
        assert_eq!(
            parsed.castling_rights() & (CASTLE_BLACK_KINGSIDE | CASTLE_BLACK_QUEENSIDE),
            CASTLE_BLACK_KINGSIDE | CASTLE_BLACK_QUEENSIDE
        );
        assert!(generate_fen(&parsed).contains(" KQkq "));
    }

    #[test]
    fn empty_runs_are_flushed_around_pieces() {
        let mut board = parse_fen("8/8/8/8/8/8/8/8 w - - 0 1").expect("FEN should parse");
        board.squares[22] = piece_code(Color::Black, PieceKind::Queen);
        board.squares[98] = piece_code(Color::White, PieceKind::King);
        assert_eq!(generate_fen(&board), "7K/8/8/8/8/8/8/1q6 w - - 0 1");
    }
}
