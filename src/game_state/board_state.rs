//! Mailbox board state.
//!
//! `BoardState` owns the 120-cell board array together with the side to move,
//! castling rights, en-passant target and clocks. Border cells always hold
//! `OFF_BOARD`, which lets move generation walk offsets without bounds checks.
//! Only FEN construction and the turn controller write to the board.

use std::fmt;
use std::str::FromStr;

use crate::chess_errors::ChessError;
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::*;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;
use crate::utils::render_game_state::render_game_state;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardState {
    pub(crate) squares: [PieceCode; BOARD_CELLS],

    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,

    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
}

impl BoardState {
    /// Empty interior, white to move, no rights, move 1.
    pub(crate) fn new_empty() -> Self {
        let mut squares = [OFF_BOARD; BOARD_CELLS];
        for rank in 0..8u8 {
            for file in 0..8u8 {
                squares[index_from_rank_file(rank, file)] = EMPTY;
            }
        }

        Self {
            squares,
            side_to_move: Color::White,
            castling_rights: 0,
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    #[inline]
    pub fn new_game() -> Self {
        parse_fen(STARTING_POSITION_FEN).expect("starting FEN should always parse")
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, ChessError> {
        parse_fen(fen)
    }

    #[inline]
    pub fn export_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn piece_code_at(&self, square: Square) -> PieceCode {
        self.squares.get(square).copied().unwrap_or(OFF_BOARD)
    }

    /// The piece standing on `square`, if any.
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        decode_piece(self.piece_code_at(square)).map(|(color, kind)| Piece {
            color,
            kind,
            square,
        })
    }

    /// Every `(rank, file)` holding exactly `color | kind`, in index order.
    pub fn pieces_of(&self, color: Color, kind: PieceKind) -> Vec<(u8, u8)> {
        let wanted = piece_code(color, kind);
        self.squares
            .iter()
            .enumerate()
            .filter(|&(_, &code)| code == wanted)
            .map(|(sq, _)| (RANK_OF[sq], FILE_OF[sq]))
            .collect()
    }

    /// Every piece belonging to `color`, in index order.
    pub fn pieces_for_color(&self, color: Color) -> impl Iterator<Item = Piece> + '_ {
        (0..BOARD_CELLS)
            .filter_map(move |sq| self.piece_at(sq))
            .filter(move |piece| piece.color == color)
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[inline]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Raw 10x12 cell array, border included.
    #[inline]
    pub fn cells(&self) -> &[PieceCode; BOARD_CELLS] {
        &self.squares
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl FromStr for BoardState {
    type Err = ChessError;

    fn from_str(fen: &str) -> Result<Self, Self::Err> {
        parse_fen(fen)
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_game_state(self))
    }
}
