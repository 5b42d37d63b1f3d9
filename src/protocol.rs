//! Line-oriented text protocol for driving the engine.
//!
//! The protocol mirrors the shape of GTP: one command per line, an optional
//! numeric id in front, and a response of `=[id] message` on success or
//! `?[id] message` on failure, each followed by a blank line.
//!
//! ## Supported Commands
//!
//! - `name` - Return engine name
//! - `version` - Return engine version
//! - `protocol_version` - Return protocol version (1)
//! - `list_commands` - List all supported commands
//! - `known_command <cmd>` - Check if a command is supported
//! - `quit` - Exit the loop
//! - `clear_board` - Reset to the empty board
//! - `play [x|o] <vertex>` - Play a move for the side to move
//! - `genmove [x|o]` - Let the engine pick and play the optimal move
//! - `undo` - Take back the last move
//! - `showboard` - Print the board
//! - `final_result` - `X+`, `O+` or `draw` once the game is over
//!
//! Vertices are `a1`..`c3` (column letter, row number, `a1` top-left) or
//! `row,col`.
//!
//! ## Example
//!
//! ```
//! use tictactoe_minimax::protocol::Engine;
//!
//! let mut engine = Engine::new();
//! let mut out = Vec::new();
//! engine.run("play b2\ngenmove\nquit\n".as_bytes(), &mut out).unwrap();
//! let text = String::from_utf8(out).unwrap();
//! assert!(text.contains("= a1"));
//! ```

use std::io::{self, BufRead, Write};

use log::trace;

use crate::board::{Board, Mark, Move};
use crate::game::{apply_move, current_turn, initial_state, is_terminal, winner};
use crate::search::best_move;

/// The list of known commands.
const KNOWN_COMMANDS: &[&str] = &[
    "clear_board",
    "final_result",
    "genmove",
    "known_command",
    "list_commands",
    "name",
    "play",
    "protocol_version",
    "quit",
    "showboard",
    "undo",
    "version",
];

/// Protocol engine state.
pub struct Engine {
    /// Current position
    board: Board,
    /// Positions before each move, for `undo`
    history: Vec<Board>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Create an engine on the empty board.
    pub fn new() -> Self {
        Self {
            board: initial_state(),
            history: Vec::new(),
        }
    }

    /// Current position.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Run the command loop on stdin and stdout.
    pub fn run_stdio(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        self.run(stdin.lock(), io::stdout())
    }

    /// Run the command loop until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (id, command_line) = Self::parse_id(line);

            let parts: Vec<&str> = command_line.split_whitespace().collect();
            let Some((command, args)) = parts.split_first() else {
                continue;
            };
            let command = command.to_lowercase();

            trace!("command {command} {args:?}");
            let (success, message) = self.execute(&command, args);

            let prefix = if success { '=' } else { '?' };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();
            writeln!(output, "{prefix}{id_str} {message}\n")?;
            output.flush()?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Parse an optional numeric command id from the beginning of the line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        if end == 0 {
            return (None, trimmed);
        }
        match trimmed[..end].parse::<u32>() {
            Ok(id) => (Some(id), trimmed[end..].trim()),
            Err(_) => (None, trimmed),
        }
    }

    /// Parse an optional `x`/`o` argument and check it is the side to move.
    fn check_side(&self, arg: Option<&str>) -> Result<(), String> {
        let Some(arg) = arg else {
            return Ok(());
        };
        let mark = match arg.to_lowercase().as_str() {
            "x" => Mark::X,
            "o" => Mark::O,
            other => return Err(format!("invalid side '{other}'")),
        };
        let to_move = current_turn(&self.board);
        if mark == to_move {
            Ok(())
        } else {
            Err(format!("wrong side: {to_move} to move"))
        }
    }

    fn play(&mut self, mv: Move) -> Result<(), String> {
        let next = apply_move(&self.board, mv).map_err(|e| e.to_string())?;
        self.history.push(self.board);
        self.board = next;
        Ok(())
    }

    /// Execute a command and return (success, response).
    fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        match command {
            "name" => (true, env!("CARGO_PKG_NAME").to_string()),

            "version" => (true, env!("CARGO_PKG_VERSION").to_string()),

            "protocol_version" => (true, "1".to_string()),

            "list_commands" => (true, KNOWN_COMMANDS.join("\n")),

            "known_command" => {
                let Some(cmd) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                let known = KNOWN_COMMANDS.contains(&cmd.to_lowercase().as_str());
                (true, known.to_string())
            }

            "quit" => (true, String::new()),

            "clear_board" => {
                self.board = initial_state();
                self.history.clear();
                (true, String::new())
            }

            "play" => {
                let (side, vertex) = match args {
                    [vertex] => (None, *vertex),
                    [side, vertex] => (Some(*side), *vertex),
                    [] => return (false, "missing argument".to_string()),
                    _ => return (false, "too many arguments".to_string()),
                };
                if let Err(e) = self.check_side(side) {
                    return (false, e);
                }
                if is_terminal(&self.board) {
                    return (false, "game is over".to_string());
                }
                let mv = match vertex.parse::<Move>() {
                    Ok(mv) => mv,
                    Err(e) => return (false, e.to_string()),
                };
                match self.play(mv) {
                    Ok(()) => (true, String::new()),
                    Err(e) => (false, e),
                }
            }

            "genmove" => {
                if let Err(e) = self.check_side(args.first().copied()) {
                    return (false, e);
                }
                let Some(mv) = best_move(&self.board) else {
                    return (false, "game is over".to_string());
                };
                match self.play(mv) {
                    Ok(()) => (true, mv.to_string()),
                    Err(e) => (false, e),
                }
            }

            "undo" => match self.history.pop() {
                Some(previous) => {
                    self.board = previous;
                    (true, String::new())
                }
                None => (false, "cannot undo".to_string()),
            },

            "showboard" => (true, format!("\n{}", self.board.to_string().trim_end())),

            "final_result" => {
                if !is_terminal(&self.board) {
                    return (false, "game is not over".to_string());
                }
                let result = match winner(&self.board) {
                    Some(mark) => format!("{mark}+"),
                    None => "draw".to_string(),
                };
                (true, result)
            }

            _ => (false, format!("unknown command: {command}")),
        }
    }
}
