//! Engine abstraction used by the text front-end.
//!
//! An engine looks at a board and proposes one move for the side to move,
//! together with any diagnostic lines it wants surfaced.

use crate::chess_errors::ChessError;
use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::Square;

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<(Square, Square)>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn set_option(&mut self, _name: &str, _value: &str) -> Result<(), String> {
        Ok(())
    }

    fn choose_move(&mut self, board_state: &BoardState) -> Result<EngineOutput, ChessError>;
}
