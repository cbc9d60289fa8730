use mailbox_chess::chess_errors::ChessError;
use mailbox_chess::game_state::board_state::BoardState;
use mailbox_chess::game_state::chess_rules::STARTING_POSITION_FEN;
use mailbox_chess::game_state::chess_types::*;
use mailbox_chess::session::game_session::GameSession;
use mailbox_chess::utils::algebraic::{algebraic_to_index, index_to_algebraic};
use mailbox_chess::utils::fen_generator::generate_fen;
use mailbox_chess::utils::fen_parser::parse_fen;

fn sq(name: &str) -> usize {
    algebraic_to_index(name).expect("square should parse")
}

#[test]
fn canonical_fens_round_trip() {
    let fens = [
        STARTING_POSITION_FEN,
        "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        "r2q1rk1/pP1p2pp/Q4n2/bbp1p3/Np6/1B3NBn/pPPP1PPP/R3K2R b KQ - 0 1",
        "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
        "4k3/8/8/8/8/8/8/4K3 b - - 99 150",
    ];
    for fen in fens {
        let board = parse_fen(fen).expect("canonical FEN should parse");
        assert_eq!(generate_fen(&board), fen);
    }
}

#[test]
fn algebraic_and_index_are_inverse_over_the_board() {
    for file in b'a'..=b'h' {
        for rank in b'1'..=b'8' {
            let name = format!("{}{}", file as char, rank as char);
            let index = algebraic_to_index(&name).expect("square should parse");
            assert_eq!(index, index_from_rank_file(rank - b'1', file - b'a'));
            assert_eq!(index_to_algebraic(index).expect("index should convert"), name);
        }
    }
}

#[test]
fn starting_position_literals() {
    let board = BoardState::new_game();
    assert_eq!(board.pieces_of(Color::White, PieceKind::Pawn).len(), 8);
    assert_eq!(board.pieces_of(Color::Black, PieceKind::Pawn).len(), 8);
    assert_eq!(sq("a1"), 21);
    assert_eq!(sq("h8"), 98);
    assert_eq!(board.piece_code_at(21), Color::White.code() | PieceKind::Rook.code());
    assert_eq!(board.piece_code_at(98), Color::Black.code() | PieceKind::Rook.code());
}

#[test]
fn lone_rook_and_knight_mobility() {
    let rook = GameSession::from_fen("8/8/8/8/8/2R5/8/8 w - - 0 1").expect("FEN should parse");
    let moves = rook.legal_moves(sq("c3"));
    assert_eq!(moves.quiet.len(), 14);
    assert!(moves.captures.is_empty());

    let centre = GameSession::from_fen("8/8/8/4n3/8/8/8/8 b - - 0 1").expect("FEN should parse");
    assert_eq!(centre.legal_moves(sq("e5")).len(), 8);

    let corner = GameSession::from_fen("8/8/8/8/8/8/8/7N w - - 0 1").expect("FEN should parse");
    assert_eq!(corner.legal_moves(sq("h1")).len(), 2);
}

#[test]
fn en_passant_target_lives_for_one_ply() {
    let mut session = GameSession::new();
    session.apply_move(sq("e2"), sq("e4")).expect("e2e4 should apply");
    assert_eq!(session.board().en_passant_target(), Some(sq("e3")));

    session.apply_move(sq("e7"), sq("e6")).expect("e7e6 should apply");
    assert_eq!(session.board().en_passant_target(), None);

    session.apply_move(sq("d2"), sq("d4")).expect("d2d4 should apply");
    assert_eq!(session.board().en_passant_target(), Some(sq("d3")));
    session.apply_move(sq("b8"), sq("c6")).expect("b8c6 should apply");
    assert_eq!(session.board().en_passant_target(), None);
}

#[test]
fn white_kingside_castling_relocates_rook_and_clears_rights() {
    let mut session = GameSession::from_fen("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq - 0 1")
        .expect("FEN should parse");
    assert!(session.legal_moves(sq("e1")).quiet.contains(&sq("g1")));

    session.apply_move(sq("e1"), sq("g1")).expect("castling should apply");
    let board = session.board();
    assert_eq!(board.piece_code_at(sq("f1")), Color::White.code() | PieceKind::Rook.code());
    assert_eq!(board.piece_code_at(sq("h1")), EMPTY);
    assert_eq!(board.castling_rights() & (CASTLE_WHITE_KINGSIDE | CASTLE_WHITE_QUEENSIDE), 0);

    // Rights stay cleared for the rest of the game.
    session.apply_move(sq("a8"), sq("b8")).expect("rook move should apply");
    session.apply_move(sq("f1"), sq("e1")).expect("rook move should apply");
    assert_eq!(session.board().castling_rights(), CASTLE_BLACK_KINGSIDE);
    assert!(!session.legal_moves(sq("g1")).quiet.contains(&sq("e1")));
}

#[test]
fn malformed_input_is_reported() {
    assert!(matches!(
        BoardState::from_fen("rnbqkbnr/pppppppp w KQkq - 0 1"),
        Err(ChessError::MalformedFen { .. })
    ));
    assert!(matches!(
        algebraic_to_index("j4"),
        Err(ChessError::OutOfBoundsSquare { .. })
    ));
    assert!(matches!(
        index_to_algebraic(30),
        Err(ChessError::OutOfBoundsSquare { .. })
    ));
}
