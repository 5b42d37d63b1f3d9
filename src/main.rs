//! tictactoe-minimax: a perfect Tic-Tac-Toe engine.
//!
//! ## Usage
//!
//! - `tictactoe-minimax` - Start the text protocol on stdin/stdout
//! - `tictactoe-minimax selfplay` - Watch the engine play itself
//! - `tictactoe-minimax match` - Perfect player against a random opponent
//! - `tictactoe-minimax best <board>` - Optimal move for a board

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

use tictactoe_minimax::board::Board;
use tictactoe_minimax::constants::{DEFAULT_LOG_FILTER, MATCH_GAMES, MATCH_SEED};
use tictactoe_minimax::game::{apply_move, current_turn, is_terminal, winner};
use tictactoe_minimax::playout::{PerfectPlayer, play_game, run_match};
use tictactoe_minimax::protocol::Engine;
use tictactoe_minimax::search::Searcher;

/// tictactoe-minimax: perfect Tic-Tac-Toe by minimax search
#[derive(Parser)]
#[command(name = "tictactoe-minimax")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log filter (overrides RUST_LOG), e.g. `debug`
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the text protocol on stdin/stdout
    Protocol,
    /// Let the engine play both sides and print every position
    Selfplay,
    /// Play the engine against a random opponent
    Match {
        /// Number of games
        #[arg(long, default_value_t = MATCH_GAMES)]
        games: usize,
        /// Seed for the random opponent
        #[arg(long, default_value_t = MATCH_SEED)]
        seed: u64,
    },
    /// Print the optimal move for a board such as `X../.O./...`
    Best {
        /// Nine cells (X, O, .), separators `/` and `|` allowed
        board: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let env = env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER);
    let mut logger = env_logger::Builder::from_env(env);
    if let Some(filter) = &cli.log_level {
        logger.parse_filters(filter);
    }
    logger.init();

    match cli.command {
        Some(Commands::Protocol) | None => Engine::new()
            .run_stdio()
            .context("protocol loop failed")?,
        Some(Commands::Selfplay) => run_selfplay()?,
        Some(Commands::Match { games, seed }) => {
            let summary = run_match(games, seed).context("match aborted")?;
            println!(
                "{} games: {} wins, {} draws, {} losses",
                summary.games(),
                summary.wins,
                summary.draws,
                summary.losses
            );
        }
        Some(Commands::Best { board }) => run_best(&board)?,
    }
    Ok(())
}

fn run_selfplay() -> Result<()> {
    let record = play_game(&mut PerfectPlayer, &mut PerfectPlayer).context("self-play failed")?;

    let mut board = Board::new();
    for mv in &record.moves {
        let mark = current_turn(&board);
        board = apply_move(&board, *mv)?;
        println!("{mark} plays {mv}\n{board}");
    }
    match winner(&record.final_board) {
        Some(mark) => println!("{mark} wins"),
        None => println!("draw"),
    }
    Ok(())
}

fn run_best(input: &str) -> Result<()> {
    let board: Board = input
        .parse()
        .with_context(|| format!("cannot read board '{input}'"))?;
    if is_terminal(&board) {
        bail!("board is already decided:\n{board}");
    }

    let mut searcher = Searcher::new();
    let result = searcher.search(&board);
    let Some(mv) = result.best else {
        bail!("no move found for:\n{board}");
    };
    println!("{board}");
    println!(
        "{} to move: {mv} (value {}, {} nodes, {} cutoffs)",
        current_turn(&board),
        result.value,
        searcher.stats.nodes,
        searcher.stats.cutoffs
    );
    Ok(())
}
