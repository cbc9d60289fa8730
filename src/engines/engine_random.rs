//! Random-move engine.
//!
//! Selects uniformly from the pseudo-legal moves of the side to move. Used by
//! the `go` command and for driving boards through arbitrary move sequences
//! in tests.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::chess_errors::ChessError;
use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::board_state::BoardState;
use crate::move_generation::pseudo_move_generator::generate_side_moves;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible move choices for a fixed seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Mailbox Random"
    }

    fn set_option(&mut self, name: &str, value: &str) -> Result<(), String> {
        if name.eq_ignore_ascii_case("Seed") {
            let seed = value
                .parse::<u64>()
                .map_err(|_| format!("invalid Seed value '{value}'"))?;
            self.rng = StdRng::seed_from_u64(seed);
        }
        Ok(())
    }

    fn choose_move(&mut self, board_state: &BoardState) -> Result<EngineOutput, ChessError> {
        let moves = generate_side_moves(board_state);

        let mut out = EngineOutput::default();
        out.info_lines
            .push(format!("info string random_engine pseudo_legal_moves {}", moves.len()));

        out.best_move = moves.as_slice().choose(&mut self.rng).copied();
        Ok(out)
    }
}
