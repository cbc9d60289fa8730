//! Errors used throughout the mailbox engine.
//!
//! `ChessError` is the single error type returned by notation parsing, board
//! construction and the turn controller. Parse failures are recoverable input
//! errors; the square-shape variants reject structurally impossible moves
//! before the board is touched.

use thiserror::Error;

use crate::game_state::chess_types::Square;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ChessError {
    /// The FEN string does not have the expected shape or contains an
    /// unrecognized character.
    #[error("malformed FEN \"{fen}\": {reason}")]
    MalformedFen { fen: String, reason: String },

    /// An algebraic square or mailbox index lies outside a1..h8.
    #[error("square \"{input}\" is outside a1..h8")]
    OutOfBoundsSquare { input: String },

    /// A move endpoint is a border cell or lies past the end of the grid.
    #[error("mailbox index {index} is not an interior square")]
    NotInteriorSquare { index: Square },

    /// The origin of a move holds no piece.
    #[error("no piece on origin square {square}")]
    EmptyOriginSquare { square: Square },
}

impl ChessError {
    pub(crate) fn malformed_fen(fen: &str, reason: impl Into<String>) -> Self {
        ChessError::MalformedFen {
            fen: fen.to_owned(),
            reason: reason.into(),
        }
    }

    pub(crate) fn out_of_bounds(input: impl Into<String>) -> Self {
        ChessError::OutOfBoundsSquare {
            input: input.into(),
        }
    }
}
