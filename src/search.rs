//! Minimax search with alpha-beta pruning.
//!
//! X maximizes and O minimizes the terminal [`utility`]. The search always
//! runs to terminal boards; a 3x3 tree is at most nine plies deep, so no
//! depth limit, evaluation heuristic or transposition table is involved.
//!
//! Every procedure returns the same [`SearchResult`] shape: at leaves the
//! move slot is `None`, at inner nodes it holds the chosen move.
//!
//! ## Tie-break
//!
//! Moves are tried in row-major order and a best (or worst) result is only
//! replaced by a strictly better one, so among equally valued moves the
//! first one the pruned search evaluates wins.

use log::debug;

use crate::board::{Board, Mark, Move};
use crate::constants::SEARCH_INF;
use crate::game::{current_turn, is_terminal, legal_moves, play_unchecked, utility};

/// Value of a position together with the move that achieves it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    /// Utility from X's point of view (+1, 0, -1 for a decided search).
    pub value: i32,
    /// The move leading to `value`; `None` at terminal boards.
    pub best: Option<Move>,
}

/// Counters collected during one search.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Boards visited, including the root.
    pub nodes: u64,
    /// Times the remaining moves of a node were pruned.
    pub cutoffs: u64,
}

/// Runs the two mutually recursive search procedures and keeps statistics.
#[derive(Debug, Default)]
pub struct Searcher {
    pub stats: SearchStats,
}

impl Searcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Search from `board` for the side to move with a full window.
    pub fn search(&mut self, board: &Board) -> SearchResult {
        match current_turn(board) {
            Mark::X => self.max_search(board, -SEARCH_INF, SEARCH_INF),
            Mark::O => self.min_search(board, -SEARCH_INF, SEARCH_INF),
        }
    }

    /// Maximizing procedure: the move with the highest child value.
    pub fn max_search(&mut self, board: &Board, mut alpha: i32, beta: i32) -> SearchResult {
        self.stats.nodes += 1;
        if is_terminal(board) {
            return SearchResult {
                value: utility(board),
                best: None,
            };
        }

        let mut best = SearchResult {
            value: -SEARCH_INF,
            best: None,
        };
        for mv in legal_moves(board) {
            let child = self.min_search(&play_unchecked(board, mv), alpha, beta).value;
            if child > best.value {
                best = SearchResult {
                    value: child,
                    best: Some(mv),
                };
            }
            alpha = alpha.max(child);
            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }
        best
    }

    /// Minimizing procedure: the move with the lowest child value.
    pub fn min_search(&mut self, board: &Board, alpha: i32, mut beta: i32) -> SearchResult {
        self.stats.nodes += 1;
        if is_terminal(board) {
            return SearchResult {
                value: utility(board),
                best: None,
            };
        }

        let mut worst = SearchResult {
            value: SEARCH_INF,
            best: None,
        };
        for mv in legal_moves(board) {
            let child = self.max_search(&play_unchecked(board, mv), alpha, beta).value;
            if child < worst.value {
                worst = SearchResult {
                    value: child,
                    best: Some(mv),
                };
            }
            beta = beta.min(child);
            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }
        worst
    }
}

/// The optimal move for the side to move, or `None` on a terminal board.
pub fn best_move(board: &Board) -> Option<Move> {
    if is_terminal(board) {
        return None;
    }

    let mut searcher = Searcher::new();
    let result = searcher.search(board);
    if let Some(mv) = result.best {
        debug!(
            "best move {} for {} (value {}, {} nodes, {} cutoffs)",
            mv,
            current_turn(board),
            result.value,
            searcher.stats.nodes,
            searcher.stats.cutoffs
        );
    }
    result.best
}

/// Game-theoretic value of `board` under perfect play: +1 X wins,
/// -1 O wins, 0 draw.
pub fn minimax_value(board: &Board) -> i32 {
    Searcher::new().search(board).value
}
