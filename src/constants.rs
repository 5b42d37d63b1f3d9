//! Board geometry, outcome values and engine defaults.
//!
//! The board is a fixed 3x3 grid addressed by `(row, col)` with row 0 at the
//! top. There is no padding: every coordinate in `0..N` is playable.

// =============================================================================
// Board Geometry
// =============================================================================

/// Board size (NxN). Only the classic 3x3 game is supported.
pub const N: usize = 3;

/// Number of cells on the board.
pub const CELLS: usize = N * N;

/// The eight winning lines, in the order [`winner`](crate::game::winner)
/// checks them: rows, main diagonal, anti-diagonal, then columns.
pub const LINES: [[(usize, usize); N]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
];

// =============================================================================
// Outcome Values
// =============================================================================

/// Utility of a board won by X (the maximizer).
pub const X_WINS: i32 = 1;

/// Utility of a board won by O (the minimizer).
pub const O_WINS: i32 = -1;

/// Utility of a drawn (or undecided) board.
pub const DRAW: i32 = 0;

/// Bound of the initial alpha-beta window. Any value outside
/// `[O_WINS, X_WINS]` works; the window starts at `(-SEARCH_INF, SEARCH_INF)`.
pub const SEARCH_INF: i32 = i32::MAX;

// =============================================================================
// Engine Defaults
// =============================================================================

/// Default number of games for `match`.
pub const MATCH_GAMES: usize = 100;

/// Default seed for the random opponent.
pub const MATCH_SEED: u64 = 0x7777;

/// Default log filter when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_cover_every_cell() {
        let mut hits = [[0; N]; N];
        for line in LINES {
            for (r, c) in line {
                hits[r][c] += 1;
            }
        }
        // Corners sit on 3 lines, edges on 2, the center on 4.
        assert_eq!(hits, [[3, 2, 3], [2, 4, 2], [3, 2, 3]]);
    }

    #[test]
    fn window_contains_all_utilities() {
        assert!(-SEARCH_INF < O_WINS);
        assert!(SEARCH_INF > X_WINS);
        assert_eq!(CELLS, 9);
    }
}
