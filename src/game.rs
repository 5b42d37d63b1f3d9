//! Game rules: whose turn it is, legal moves, transitions and outcomes.
//!
//! All functions are pure over [`Board`] values. Only [`apply_move`] can
//! fail; the rest are total over boards reachable from [`initial_state`].

use crate::board::{Board, Mark, Move};
use crate::constants::{DRAW, LINES, O_WINS, X_WINS};
use crate::error::InvalidMoveError;

/// The empty board, X to move.
pub fn initial_state() -> Board {
    Board::new()
}

/// The side to move.
///
/// X moves first and turns strictly alternate, so it is X's turn exactly
/// when both marks appear equally often.
pub fn current_turn(board: &Board) -> Mark {
    if board.count(Mark::X) == board.count(Mark::O) {
        Mark::X
    } else {
        Mark::O
    }
}

/// Every empty cell, in row-major order.
///
/// Empty on a full board. A won board with empty cells still reports them;
/// check [`is_terminal`] first.
pub fn legal_moves(board: &Board) -> Vec<Move> {
    Move::all().filter(|&mv| board.get(mv).is_none()).collect()
}

/// Place the side-to-move's mark at `mv`, returning the new board.
///
/// The input board is left untouched.
pub fn apply_move(board: &Board, mv: Move) -> Result<Board, InvalidMoveError> {
    if !mv.in_range() {
        return Err(InvalidMoveError::OutOfRange {
            row: mv.row,
            col: mv.col,
        });
    }
    if let Some(mark) = board.get(mv) {
        return Err(InvalidMoveError::Occupied { mv, mark });
    }
    Ok(play_unchecked(board, mv))
}

/// Transition for moves already known to be legal, e.g. taken from
/// [`legal_moves`].
pub(crate) fn play_unchecked(board: &Board, mv: Move) -> Board {
    board.with(mv, current_turn(board))
}

/// The mark holding a complete line, if any.
///
/// Lines are checked rows first, then the main diagonal, the anti-diagonal
/// and finally the columns, stopping at the first complete one.
pub fn winner(board: &Board) -> Option<Mark> {
    LINES.iter().find_map(|&line| match board.line(line) {
        [Some(a), Some(b), Some(c)] if a == b && b == c => Some(a),
        _ => None,
    })
}

/// True once someone has won or no empty cell remains.
pub fn is_terminal(board: &Board) -> bool {
    winner(board).is_some() || board.empty_count() == 0
}

/// +1 if X won, -1 if O won, 0 otherwise.
///
/// Only meaningful on terminal boards; an undecided board also yields 0.
pub fn utility(board: &Board) -> i32 {
    match winner(board) {
        Some(Mark::X) => X_WINS,
        Some(Mark::O) => O_WINS,
        None => DRAW,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_initial_state() {
        let b = initial_state();
        assert_eq!(current_turn(&b), Mark::X);
        assert_eq!(legal_moves(&b).len(), 9);
        assert!(!is_terminal(&b));
        assert_eq!(winner(&b), None);
    }

    #[test]
    fn test_turn_alternates() {
        let b1 = apply_move(&initial_state(), Move::new(1, 1)).unwrap();
        assert_eq!(current_turn(&b1), Mark::O);
        let b2 = apply_move(&b1, Move::new(0, 0)).unwrap();
        assert_eq!(current_turn(&b2), Mark::X);
        assert_eq!(b2.get(Move::new(1, 1)), Some(Mark::X));
        assert_eq!(b2.get(Move::new(0, 0)), Some(Mark::O));
    }

    #[test]
    fn test_apply_move_rejects_occupied() {
        let b = board("X........");
        assert_eq!(
            apply_move(&b, Move::new(0, 0)),
            Err(InvalidMoveError::Occupied {
                mv: Move::new(0, 0),
                mark: Mark::X
            })
        );
    }

    #[test]
    fn test_apply_move_rejects_out_of_range() {
        let b = initial_state();
        assert_eq!(
            apply_move(&b, Move::new(3, 1)),
            Err(InvalidMoveError::OutOfRange { row: 3, col: 1 })
        );
        assert!(apply_move(&b, Move::new(0, 9)).is_err());
    }

    #[test]
    fn test_apply_move_keeps_input() {
        let b = initial_state();
        let next = apply_move(&b, Move::new(2, 2)).unwrap();
        assert_eq!(b, initial_state());
        assert_ne!(next, b);
        assert_eq!(legal_moves(&next).len(), 8);
    }

    #[test]
    fn test_winner_rows_columns_diagonals() {
        assert_eq!(winner(&board("XXX/OO./...")), Some(Mark::X));
        assert_eq!(winner(&board("XX./OOO/X..")), Some(Mark::O));
        assert_eq!(winner(&board("XO./XO./X..")), Some(Mark::X));
        assert_eq!(winner(&board("XXO/.O./O.X")), Some(Mark::O));
        assert_eq!(winner(&board("XO./OX./..X")), Some(Mark::X));
        assert_eq!(winner(&board("XO./XO./O.X")), None);
    }

    #[test]
    fn test_top_row_win() {
        // Top row X, rest empty: not reachable, but the queries still hold.
        let b = initial_state()
            .with(Move::new(0, 0), Mark::X)
            .with(Move::new(0, 1), Mark::X)
            .with(Move::new(0, 2), Mark::X);
        assert_eq!(winner(&b), Some(Mark::X));
        assert!(is_terminal(&b));
        assert_eq!(utility(&b), 1);
    }

    #[test]
    fn test_full_board_draw() {
        let b = board("XOX/XOO/OXX");
        assert_eq!(winner(&b), None);
        assert!(is_terminal(&b));
        assert_eq!(utility(&b), 0);
        assert!(legal_moves(&b).is_empty());
    }

    #[test]
    fn test_utility_o_wins() {
        let b = board("XX./OOO/X.X");
        assert!(is_terminal(&b));
        assert_eq!(utility(&b), -1);
    }
}
