//! Line-oriented text protocol for driving a game.
//!
//! The protocol follows the shape of GTP: every line holds an optional
//! numeric id, a command and its arguments. Replies start with `=` on
//! success or `?` on failure, followed by the id and the message, and end
//! with a blank line.
//!
//! Vertices are written as a column letter `A`-`H` and a row number `1`-`8`,
//! row 1 being the top of the board.
//!
//! ## Supported Commands
//!
//! - `name`, `version`, `protocol_version`
//! - `list_commands`, `known_command <cmd>`
//! - `quit`
//! - `clear_board` - Start a new game
//! - `play <vertex>` - Play a stone for the side to move
//! - `legal_moves` - List the legal moves
//! - `flips <vertex>` - Show which stones a move would flip
//! - `showboard` - Print the board, `*` marking legal moves
//! - `status` - Turn, player, attribute and mode flags
//! - `score` - Running counts, or the final result once the game is over
//! - `toggle_advantage`, `toggle_special`

use std::io::{self, BufRead, Write};

use crate::board::{Board, Coord};
use crate::game::{Game, GameConfig, MoveOutcome};
use crate::rng::{FastRandSource, RandomSource};

/// The list of known commands.
const KNOWN_COMMANDS: &[&str] = &[
    "clear_board",
    "flips",
    "known_command",
    "legal_moves",
    "list_commands",
    "name",
    "play",
    "protocol_version",
    "quit",
    "score",
    "showboard",
    "status",
    "toggle_advantage",
    "toggle_special",
    "version",
];

/// Parse a vertex such as `C3` into `(row, col)`.
pub fn parse_coord(s: &str) -> Option<Coord> {
    let bytes = s.as_bytes();
    if bytes.len() != 2 {
        return None;
    }
    let col = bytes[0].to_ascii_uppercase().checked_sub(b'A')? as usize;
    let row = bytes[1].checked_sub(b'1')? as usize;
    Board::in_bounds(row, col).then_some((row, col))
}

/// Format `(row, col)` as a vertex such as `C3`.
pub fn str_coord((row, col): Coord) -> String {
    format!("{}{}", (b'A' + col as u8) as char, row + 1)
}

fn format_coords(coords: &[Coord]) -> String {
    coords.iter().map(|&c| str_coord(c)).collect::<Vec<_>>().join(" ")
}

fn on_off(flag: bool) -> &'static str {
    if flag { "on" } else { "off" }
}

/// Protocol session state.
pub struct ProtocolEngine<R: RandomSource = FastRandSource> {
    game: Game<R>,
}

impl Default for ProtocolEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ProtocolEngine {
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    pub fn with_config(config: GameConfig) -> Self {
        Self {
            game: Game::with_config(config),
        }
    }
}

impl<R: RandomSource> ProtocolEngine<R> {
    /// Drive an existing game.
    pub fn with_game(game: Game<R>) -> Self {
        Self { game }
    }

    pub fn game(&self) -> &Game<R> {
        &self.game
    }

    /// Run the command loop on stdin/stdout.
    pub fn run(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run_with(stdin.lock(), stdout.lock())
    }

    /// Run the command loop until `quit` or end of input.
    pub fn run_with(&mut self, input: impl BufRead, mut output: impl Write) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (id, command_line) = Self::parse_id(line);

            let parts: Vec<&str> = command_line.split_whitespace().collect();
            if parts.is_empty() {
                continue;
            }

            let command = parts[0].to_lowercase();
            let args = &parts[1..];

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

    /// Parse an optional numeric command ID from the beginning of the line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        if end > 0 {
            if let Ok(id) = trimmed[..end].parse::<u32>() {
                return (Some(id), trimmed[end..].trim());
            }
        }
        (None, trimmed)
    }

    fn vertex_arg(args: &[&str]) -> Result<Coord, String> {
        let arg = args.first().ok_or_else(|| "missing argument".to_string())?;
        parse_coord(arg).ok_or_else(|| format!("invalid vertex: {arg}"))
    }

    /// Execute a command and return (success, response).
    pub fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        match command {
            "name" => (true, env!("CARGO_PKG_NAME").to_string()),

            "version" => (true, env!("CARGO_PKG_VERSION").to_string()),

            "protocol_version" => (true, "1".to_string()),

            "list_commands" => (true, KNOWN_COMMANDS.join("\n")),

            "known_command" => match args.first() {
                Some(cmd) => {
                    let known = KNOWN_COMMANDS.contains(&cmd.to_lowercase().as_str());
                    (true, known.to_string())
                }
                None => (false, "missing argument".to_string()),
            },

            "quit" => (true, String::new()),

            "clear_board" => {
                self.game.initialize();
                (true, String::new())
            }

            "play" => {
                let (row, col) = match Self::vertex_arg(args) {
                    Ok(at) => at,
                    Err(e) => return (false, e),
                };
                match self.game.apply_move(row, col) {
                    Ok(report) => {
                        let message = match report.outcome {
                            MoveOutcome::Continue => String::new(),
                            MoveOutcome::Passed { skipped } => format!("pass {skipped}"),
                            MoveOutcome::GameOver(score) => format!(
                                "game over after {} turns: {score}",
                                self.game.turns_played()
                            ),
                        };
                        (true, message)
                    }
                    Err(e) => (false, e.to_string()),
                }
            }

            "legal_moves" => (true, format_coords(self.game.legal_moves())),

            "flips" => match Self::vertex_arg(args) {
                Ok(at) => (true, format_coords(&self.game.flips_for(at))),
                Err(e) => (false, e),
            },

            "showboard" => (
                true,
                format!("\n{}", self.game.board().render(self.game.legal_moves())),
            ),

            "status" => {
                let g = &self.game;
                let state = if g.is_over() { "over" } else { "playing" };
                (
                    true,
                    format!(
                        "turn {} player {} attribute {} advantage {} special {} {state}",
                        g.turn_count(),
                        g.current_player(),
                        g.current_attribute(),
                        on_off(g.advantage_mode()),
                        on_off(g.special_placement()),
                    ),
                )
            }

            "score" => match self.game.final_score() {
                Some(score) => (true, score.to_string()),
                None => {
                    let (black, purple) = self.game.tally();
                    (true, format!("Black {black} Purple {purple}"))
                }
            },

            "toggle_advantage" => (true, on_off(self.game.toggle_advantage_mode()).to_string()),

            "toggle_special" => (true, on_off(self.game.toggle_special_placement()).to_string()),

            _ => (false, format!("unknown command: {command}")),
        }
    }
}
