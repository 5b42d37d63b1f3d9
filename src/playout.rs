//! Complete games between players.
//!
//! A [`Player`] picks a move for the side to move; [`play_game`] alternates
//! two players from the empty board until the game ends. [`run_match`] pits
//! the perfect player against a seeded random opponent.

use log::{debug, info};

use crate::board::{Board, Mark, Move};
use crate::error::InvalidMoveError;
use crate::game::{apply_move, initial_state, is_terminal, legal_moves, utility, winner};
use crate::search::best_move;

/// Something that can choose a move.
pub trait Player {
    /// Choose a move for the side to move, or `None` when it has none.
    fn choose(&mut self, board: &Board) -> Option<Move>;

    /// Display name.
    fn name(&self) -> &str;
}

/// Plays the minimax-optimal move.
#[derive(Debug, Default, Clone, Copy)]
pub struct PerfectPlayer;

impl Player for PerfectPlayer {
    fn choose(&mut self, board: &Board) -> Option<Move> {
        best_move(board)
    }

    fn name(&self) -> &str {
        "perfect"
    }
}

/// Plays a uniformly random empty cell.
pub struct RandomPlayer {
    rng: fastrand::Rng,
}

impl RandomPlayer {
    /// A reproducible opponent.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }
}

impl Player for RandomPlayer {
    fn choose(&mut self, board: &Board) -> Option<Move> {
        if is_terminal(board) {
            return None;
        }
        let moves = legal_moves(board);
        if moves.is_empty() {
            return None;
        }
        Some(moves[self.rng.usize(..moves.len())])
    }

    fn name(&self) -> &str {
        "random"
    }
}

/// Moves played and the final position of one game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub moves: Vec<Move>,
    pub final_board: Board,
    pub winner: Option<Mark>,
}

impl GameRecord {
    /// Utility of the final board.
    pub fn utility(&self) -> i32 {
        utility(&self.final_board)
    }
}

/// Play one game, X first.
///
/// Stops early if the side to move returns no move. A move rejected by the
/// rules aborts the game with that error.
pub fn play_game<X, O>(x: &mut X, o: &mut O) -> Result<GameRecord, InvalidMoveError>
where
    X: Player + ?Sized,
    O: Player + ?Sized,
{
    let mut board = initial_state();
    let mut moves = Vec::new();

    while !is_terminal(&board) {
        let (choice, name) = if moves.len() % 2 == 0 {
            (x.choose(&board), x.name())
        } else {
            (o.choose(&board), o.name())
        };
        let Some(mv) = choice else {
            break;
        };
        board = apply_move(&board, mv)?;
        debug!("{name} played {mv}");
        moves.push(mv);
    }

    Ok(GameRecord {
        moves,
        winner: winner(&board),
        final_board: board,
    })
}

/// Results of a match, from the perfect player's point of view.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MatchSummary {
    pub wins: usize,
    pub draws: usize,
    pub losses: usize,
}

impl MatchSummary {
    pub fn games(&self) -> usize {
        self.wins + self.draws + self.losses
    }
}

/// Play `games` games of perfect vs random, swapping sides every game
/// (the perfect player is X in even-numbered games).
pub fn run_match(games: usize, seed: u64) -> Result<MatchSummary, InvalidMoveError> {
    let mut perfect = PerfectPlayer;
    let mut random = RandomPlayer::with_seed(seed);
    let mut summary = MatchSummary::default();

    for game in 0..games {
        let perfect_mark = if game % 2 == 0 { Mark::X } else { Mark::O };
        let record = match perfect_mark {
            Mark::X => play_game(&mut perfect, &mut random)?,
            Mark::O => play_game(&mut random, &mut perfect)?,
        };
        match record.winner {
            Some(mark) if mark == perfect_mark => summary.wins += 1,
            Some(_) => summary.losses += 1,
            None => summary.draws += 1,
        }
    }

    info!(
        "match over {} games: {} wins, {} draws, {} losses",
        summary.games(),
        summary.wins,
        summary.draws,
        summary.losses
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replays a fixed list of moves.
    struct Scripted(Vec<Move>);

    impl Player for Scripted {
        fn choose(&mut self, _board: &Board) -> Option<Move> {
            if self.0.is_empty() {
                None
            } else {
                Some(self.0.remove(0))
            }
        }

        fn name(&self) -> &str {
            "scripted"
        }
    }

    #[test]
    fn test_scripted_win() {
        let mut x = Scripted(vec![Move::new(0, 0), Move::new(0, 1), Move::new(0, 2)]);
        let mut o = Scripted(vec![Move::new(1, 0), Move::new(1, 1)]);
        let record = play_game(&mut x, &mut o).unwrap();
        assert_eq!(record.moves.len(), 5);
        assert_eq!(record.winner, Some(Mark::X));
        assert_eq!(record.utility(), 1);
    }

    #[test]
    fn test_illegal_move_aborts() {
        let mut x = Scripted(vec![Move::new(1, 1)]);
        let mut o = Scripted(vec![Move::new(1, 1)]);
        let err = play_game(&mut x, &mut o).unwrap_err();
        assert_eq!(
            err,
            InvalidMoveError::Occupied {
                mv: Move::new(1, 1),
                mark: Mark::X
            }
        );
    }

    #[test]
    fn test_random_player_is_legal_and_seeded() {
        let a = play_game(&mut RandomPlayer::with_seed(7), &mut RandomPlayer::with_seed(8)).unwrap();
        let b = play_game(&mut RandomPlayer::with_seed(7), &mut RandomPlayer::with_seed(8)).unwrap();
        assert_eq!(a, b);
        assert!(is_terminal(&a.final_board));
    }

    #[test]
    fn test_perfect_self_play_draws() {
        let record = play_game(&mut PerfectPlayer, &mut PerfectPlayer).unwrap();
        assert_eq!(record.moves.len(), 9);
        assert_eq!(record.winner, None);
    }

    #[test_log::test]
    fn test_perfect_never_loses() {
        let summary = run_match(40, 1234).unwrap();
        assert_eq!(summary.games(), 40);
        assert_eq!(summary.losses, 0);
    }
}
