//! Caller-owned game context.
//!
//! A `GameSession` owns exactly one `BoardState` and is the surface a
//! rendering or input layer talks to: piece queries, FEN export, per-square
//! move lists and the single mutation path.

use crate::chess_errors::ChessError;
use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::*;
use crate::move_generation::move_apply::{apply_move, AppliedMove};
use crate::move_generation::pseudo_move_generator::generate_square_moves;
use crate::moves::move_options::MoveOptions;

#[derive(Debug, Clone, Default)]
pub struct GameSession {
    board: BoardState,
}

impl GameSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_fen(fen: &str) -> Result<Self, ChessError> {
        Ok(Self {
            board: BoardState::from_fen(fen)?,
        })
    }

    /// Throws away the current game and starts from the standard position.
    pub fn new_game(&mut self) {
        self.board = BoardState::new_game();
    }

    /// Replaces the board; on error the current game is kept.
    pub fn load_fen(&mut self, fen: &str) -> Result<(), ChessError> {
        self.board = BoardState::from_fen(fen)?;
        Ok(())
    }

    #[inline]
    pub fn board(&self) -> &BoardState {
        &self.board
    }

    pub fn pieces_of(&self, color: Color, kind: PieceKind) -> Vec<(u8, u8)> {
        self.board.pieces_of(color, kind)
    }

    pub fn export_fen(&self) -> String {
        self.board.export_fen()
    }

    pub fn legal_moves(&self, square: Square) -> MoveOptions {
        generate_square_moves(&self.board, square)
    }

    /// `to` must come from [`GameSession::legal_moves`] for `from`.
    pub fn apply_move(&mut self, from: Square, to: Square) -> Result<AppliedMove, ChessError> {
        apply_move(&mut self.board, from, to)
    }
}

#[cfg(test)]
mod tests {
    use super::GameSession;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::*;

    #[test]
    fn session_round_trips_through_its_interface() {
        let mut session = GameSession::new();
        assert_eq!(session.export_fen(), STARTING_POSITION_FEN);
        assert_eq!(session.pieces_of(Color::White, PieceKind::Knight), vec![(0, 1), (0, 6)]);

        let options = session.legal_moves(22);
        assert_eq!(options.quiet, vec![41, 43]);

        session.apply_move(22, 43).expect("knight move should apply");
        assert_eq!(session.pieces_of(Color::White, PieceKind::Knight), vec![(0, 6), (2, 2)]);
        assert_eq!(session.board().side_to_move(), Color::Black);

        session.new_game();
        assert_eq!(session.export_fen(), STARTING_POSITION_FEN);
    }

    #[test]
    fn failed_load_keeps_the_current_game() {
        let mut session = GameSession::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        assert!(session.load_fen("4k3/8/8 w - - 0 1").is_err());
        assert_eq!(session.export_fen(), "4k3/8/8/8/8/8/8/4K3 w - - 0 1");
    }
}
