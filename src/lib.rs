//! Crate root module declarations for the mailbox chess rules engine.
//!
//! Exposes the board state, notation codec, pseudo-legal move generation,
//! the turn controller, and the session/front-end layers so binaries, tests
//! and external tooling can import stable module paths.

pub mod chess_errors;

pub mod game_state {
    pub mod board_state;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod piece;
}

pub mod moves {
    pub mod move_options;
    pub mod movement_offsets;
}

pub mod move_generation {
    pub mod move_apply;
    pub mod pseudo_move_generator;
    pub mod pseudo_move_shared;
    pub mod pseudo_moves_castling;
    pub mod pseudo_moves_pawn;
    pub mod pseudo_moves_piece;
    pub mod pseudo_perft;
}

pub mod engines {
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod session {
    pub mod game_session;
    pub mod session_loop;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod render_game_state;
}
