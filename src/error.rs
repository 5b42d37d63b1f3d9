//! Error types for board transitions and text parsing.

use thiserror::Error;

use crate::board::{Mark, Move};

/// A move was rejected by [`apply_move`](crate::game::apply_move).
///
/// This signals a usage fault by the caller, never a game-state condition.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidMoveError {
    #[error("illegal move: ({row}, {col}) is off the board")]
    OutOfRange { row: usize, col: usize },

    #[error("illegal move: {mv} is already occupied by {mark}")]
    Occupied { mv: Move, mark: Mark },
}

/// Failure to read a board or a move from text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected {expected} cells, got {got} in '{input}'")]
    InvalidLength {
        expected: usize,
        got: usize,
        input: String,
    },

    #[error("invalid character '{character}' at cell {position} in '{input}'")]
    InvalidCharacter {
        character: char,
        position: usize,
        input: String,
    },

    #[error("unreachable mark counts: X={x}, O={o} (X must equal O or lead by one)")]
    UnbalancedMarks { x: usize, o: usize },

    #[error("invalid vertex '{input}' (expected a1..c3 or row,col)")]
    InvalidVertex { input: String },
}
