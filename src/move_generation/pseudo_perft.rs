//! Pseudo-legal perft (move-path enumeration) over the mailbox generator.
//!
//! Because moves are not filtered for king safety, counts match standard
//! perft tables only while no side can be left in check, which holds for the
//! start position up to depth 3.

use crate::game_state::board_state::BoardState;
use crate::move_generation::move_apply::apply_move;
use crate::move_generation::pseudo_move_generator::generate_side_moves;
use crate::chess_errors::ChessError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub double_steps: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.double_steps += rhs.double_steps;
    }
}

pub fn perft(board_state: &BoardState, depth: u8) -> Result<PerftCounts, ChessError> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();

    for (from, to) in generate_side_moves(board_state) {
        let mut child = board_state.clone();
        let applied = apply_move(&mut child, from, to)?;

        if depth == 1 {
            total.nodes += 1;
            total.captures += usize::from(applied.captured.is_some());
            total.en_passant += usize::from(applied.en_passant);
            total.castles += usize::from(applied.castled);
            total.double_steps += usize::from(applied.double_step);
        } else {
            total.merge(perft(&child, depth - 1)?);
        }
    }

    Ok(total)
}

/// Node count per root move, for comparing move trees.
pub fn perft_divide(board_state: &BoardState, depth: u8) -> Result<Vec<((usize, usize), usize)>, ChessError> {
    let mut out = Vec::new();
    if depth == 0 {
        return Ok(out);
    }

    for (from, to) in generate_side_moves(board_state) {
        let mut child = board_state.clone();
        apply_move(&mut child, from, to)?;
        out.push(((from, to), perft(&child, depth - 1)?.nodes));
    }

    Ok(out)
}
