//! tictactoe-minimax: perfect Tic-Tac-Toe play by exhaustive game-tree search.
//!
//! Boards are immutable values; the rule functions derive everything else
//! (side to move, legal moves, winner, utility) from the cells alone, and the
//! search runs minimax with alpha-beta pruning down to terminal positions.
//!
//! ## Modules
//!
//! - [`constants`] - Board geometry, winning lines and outcome values
//! - [`board`] - Marks, moves and the 3x3 board value
//! - [`game`] - Rule functions: turn, legal moves, transitions, outcome
//! - [`search`] - Minimax with alpha-beta pruning
//! - [`playout`] - Players and complete games
//! - [`protocol`] - Text protocol for driving the engine
//! - [`error`] - Error types
//!
//! ## Example
//!
//! ```
//! use tictactoe_minimax::game::{apply_move, initial_state, is_terminal, utility};
//! use tictactoe_minimax::search::best_move;
//!
//! // Let the engine play both sides
//! let mut board = initial_state();
//! while let Some(mv) = best_move(&board) {
//!     board = apply_move(&board, mv).unwrap();
//! }
//!
//! // Perfect play on both sides is a draw
//! assert!(is_terminal(&board));
//! assert_eq!(utility(&board), 0);
//! ```

pub mod board;
pub mod constants;
pub mod error;
pub mod game;
pub mod playout;
pub mod protocol;
pub mod search;

pub use board::{Board, Cell, Mark, Move};
pub use error::{InvalidMoveError, ParseError};
