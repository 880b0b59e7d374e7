//! Input line parsing.

use chessmatch_core::{ChessPosition, Position};

use crate::error::ConsoleError;

/// A parsed line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// A board coordinate such as `e2`.
    Square(Position),
    /// `help` or `?`.
    Help,
    /// `quit`, `exit` or `q`.
    Quit,
}

/// Parse a single line of input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, ConsoleError> {
    let trimmed = line.trim();
    match trimmed.to_ascii_lowercase().as_str() {
        "quit" | "exit" | "q" => Ok(Command::Quit),
        "help" | "?" => Ok(Command::Help),
        _ => trimmed
            .parse::<ChessPosition>()
            .map(|chess| Command::Square(chess.to_position()))
            .map_err(|_| ConsoleError::InvalidSquare {
                input: trimmed.to_string(),
            }),
    }
}
