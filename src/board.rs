//! Board model: marks, cells, moves and the 3x3 grid.
//!
//! A [`Board`] is a small `Copy` value. Nothing mutates a board in place;
//! transitions in [`game`](crate::game) return a fresh board.

use std::fmt;
use std::str::FromStr;

use crate::constants::{CELLS, N};
use crate::error::ParseError;

/// A player's mark. X moves first and is the maximizing side.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Content of one square: empty or holding a mark.
pub type Cell = Option<Mark>;

/// A `(row, col)` coordinate. Row 0 is the top row.
///
/// A move is only meaningful against a board where the cell is empty;
/// [`apply_move`](crate::game::apply_move) enforces that.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// True when both coordinates are on the board.
    pub fn in_range(self) -> bool {
        self.row < N && self.col < N
    }

    /// All nine coordinates in row-major order.
    pub fn all() -> impl Iterator<Item = Move> {
        (0..N).flat_map(|row| (0..N).map(move |col| Move::new(row, col)))
    }
}

/// Vertex form: column letter then row number, `a1` is the top-left cell.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.in_range() {
            let col = (b'a' + self.col as u8) as char;
            write!(f, "{col}{}", self.row + 1)
        } else {
            write!(f, "({}, {})", self.row, self.col)
        }
    }
}

/// Accepts vertex form (`b2`) or numeric form (`1,1`).
///
/// Numeric coordinates are not range-checked here so that off-board moves
/// reach [`apply_move`](crate::game::apply_move) and fail there.
impl FromStr for Move {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim().to_lowercase();
        let invalid = || ParseError::InvalidVertex {
            input: s.to_string(),
        };

        if let Some((row, col)) = input.split_once(',') {
            let row = row.trim().parse::<usize>().map_err(|_| invalid())?;
            let col = col.trim().parse::<usize>().map_err(|_| invalid())?;
            return Ok(Move::new(row, col));
        }

        let bytes = input.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }
        let (letter, digit) = (bytes[0], bytes[1]);
        if !(b'a'..b'a' + N as u8).contains(&letter) || !(b'1'..b'1' + N as u8).contains(&digit) {
            return Err(invalid());
        }
        Ok(Move::new((digit - b'1') as usize, (letter - b'a') as usize))
    }
}

/// A 3x3 grid of cells in row-major order.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; N]; N],
}

impl Board {
    /// The empty board.
    pub const fn new() -> Self {
        Self {
            cells: [[None; N]; N],
        }
    }

    /// Cell at `mv`, or `None` for an off-board coordinate.
    pub fn get(&self, mv: Move) -> Cell {
        if !mv.in_range() {
            return None;
        }
        self.cells[mv.row][mv.col]
    }

    /// Copy of this board with `mark` written at `mv`.
    ///
    /// The caller guarantees `mv` is on the board.
    pub(crate) fn with(&self, mv: Move, mark: Mark) -> Board {
        let mut next = *self;
        next.cells[mv.row][mv.col] = Some(mark);
        next
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&c| c == Some(mark))
            .count()
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_none()).count()
    }

    /// The three cells of a line given as coordinates.
    pub(crate) fn line(&self, line: [(usize, usize); N]) -> [Cell; N] {
        line.map(|(r, c)| self.cells[r][c])
    }

    fn cell_from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '-' | '_' => Some(None),
            'X' | 'x' => Some(Some(Mark::X)),
            'O' | 'o' | '0' => Some(Some(Mark::O)),
            _ => None,
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for (i, cell) in row.iter().enumerate() {
                let ch = cell.map_or('.', Mark::to_char);
                if i + 1 < N {
                    write!(f, "{ch} ")?;
                } else {
                    write!(f, "{ch}")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Parses nine cell characters, ignoring whitespace and `/` or `|`
/// separators, e.g. `"XO./.X./..O"`.
///
/// Rejects boards whose mark counts cannot arise from alternating play.
impl FromStr for Board {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/' && *c != '|')
            .collect();
        if chars.len() != CELLS {
            return Err(ParseError::InvalidLength {
                expected: CELLS,
                got: chars.len(),
                input: s.to_string(),
            });
        }

        let mut board = Board::new();
        for (i, &c) in chars.iter().enumerate() {
            let cell = Board::cell_from_char(c).ok_or_else(|| ParseError::InvalidCharacter {
                character: c,
                position: i,
                input: s.to_string(),
            })?;
            board.cells[i / N][i % N] = cell;
        }

        let (x, o) = (board.count(Mark::X), board.count(Mark::O));
        if x != o && x != o + 1 {
            return Err(ParseError::UnbalancedMarks { x, o });
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let board = Board::default();
        assert_eq!(board, Board::new());
        assert_eq!(board.empty_count(), CELLS);
        assert_eq!(board.count(Mark::X), 0);
    }

    #[test]
    fn test_get_out_of_range() {
        let board: Board = "XXX/OO./...".parse().unwrap();
        assert_eq!(board.get(Move::new(0, 0)), Some(Mark::X));
        assert_eq!(board.get(Move::new(3, 0)), None);
        assert_eq!(board.get(Move::new(0, 7)), None);
    }

    #[test]
    fn test_with_leaves_original() {
        let board = Board::new();
        let next = board.with(Move::new(1, 1), Mark::X);
        assert_eq!(board.get(Move::new(1, 1)), None);
        assert_eq!(next.get(Move::new(1, 1)), Some(Mark::X));
    }

    #[test]
    fn test_display_round_trip() {
        let board: Board = "X.O/.X./O..".parse().unwrap();
        let text = board.to_string();
        assert_eq!(text, "X . O\n. X .\nO . .\n");
        assert_eq!(text.parse::<Board>().unwrap(), board);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "XO".parse::<Board>(),
            Err(ParseError::InvalidLength { got: 2, .. })
        ));
        assert!(matches!(
            "XO?......".parse::<Board>(),
            Err(ParseError::InvalidCharacter {
                character: '?',
                position: 2,
                ..
            })
        ));
        assert_eq!(
            "OO.......".parse::<Board>(),
            Err(ParseError::UnbalancedMarks { x: 0, o: 2 })
        );
        assert_eq!(
            "XX.......".parse::<Board>(),
            Err(ParseError::UnbalancedMarks { x: 2, o: 0 })
        );
    }

    #[test]
    fn test_move_notation() {
        assert_eq!("a1".parse::<Move>().unwrap(), Move::new(0, 0));
        assert_eq!("C2".parse::<Move>().unwrap(), Move::new(1, 2));
        assert_eq!("2, 0".parse::<Move>().unwrap(), Move::new(2, 0));
        assert_eq!("5,5".parse::<Move>().unwrap(), Move::new(5, 5));
        assert!("d1".parse::<Move>().is_err());
        assert!("a4".parse::<Move>().is_err());
        assert!("pass".parse::<Move>().is_err());

        assert_eq!(Move::new(2, 1).to_string(), "b3");
        assert_eq!(Move::new(4, 1).to_string(), "(4, 1)");
    }

    #[test]
    fn test_all_moves_row_major() {
        let moves: Vec<Move> = Move::all().collect();
        assert_eq!(moves.len(), CELLS);
        assert_eq!(moves[0], Move::new(0, 0));
        assert_eq!(moves[1], Move::new(0, 1));
        assert_eq!(moves[3], Move::new(1, 0));
        assert_eq!(moves[8], Move::new(2, 2));
    }

    #[test]
    fn test_opponent() {
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::O.opponent(), Mark::X);
    }
}
