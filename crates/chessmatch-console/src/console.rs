//! Interactive game loop over any line-based reader and writer.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use chessmatch_core::{MoveMask, Position};
use chessmatch_rules::{ChessMatch, MatchError, MatchStatus, Setup};

use crate::command::{Command, parse_command};
use crate::error::ConsoleError;
use crate::render::render_match;

const HELP: &str = "Enter a square such as e2 to pick a piece, then a square to move it to.\n\
                    Reachable squares are marked * (empty) or x (capture).\n\
                    Type quit to leave.";

/// Knobs for a console session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Starting layout.
    pub setup: Setup,
    /// Print captured pieces under the board.
    pub show_captured: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            setup: Setup::Demo,
            show_captured: true,
        }
    }
}

/// A match driven by text input.
///
/// Each turn asks for an origin, shows the piece's reachable squares, then
/// asks for a destination. Rejected input is reported and the turn restarts.
pub struct Console<R, W> {
    input: R,
    output: W,
    chess_match: ChessMatch,
    config: ConsoleConfig,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Create a console with a fresh match built from `config.setup`.
    pub fn new(input: R, output: W, config: ConsoleConfig) -> Result<Self, ConsoleError> {
        let chess_match = ChessMatch::with_setup(config.setup)?;
        Ok(Self {
            input,
            output,
            chess_match,
            config,
        })
    }

    pub fn chess_match(&self) -> &ChessMatch {
        &self.chess_match
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    /// Run until checkmate, `quit`, or end of input. Returns the final status.
    pub fn run(&mut self) -> Result<MatchStatus, ConsoleError> {
        loop {
            self.render(MoveMask::EMPTY)?;
            if self.chess_match.is_finished() {
                break;
            }

            write!(self.output, "\nOrigin: ")?;
            self.output.flush()?;
            let Some(origin) = self.read_square()? else {
                break;
            };
            if let Err(err) = self.chess_match.validate_origin(origin) {
                self.report(err)?;
                continue;
            }

            let highlight = self
                .chess_match
                .board()
                .occupant(origin)
                .map_or(MoveMask::EMPTY, |piece| piece.possible_moves(self.chess_match.board()));
            self.render(highlight)?;

            write!(self.output, "\nDestination: ")?;
            self.output.flush()?;
            let Some(destination) = self.read_square()? else {
                break;
            };
            if let Err(err) = self.chess_match.validate_target(origin, destination) {
                self.report(err)?;
                continue;
            }

            match self.chess_match.make_move(origin, destination) {
                Ok(captured) => {
                    debug!(%origin, %destination, captured = captured.is_some(), "player moved");
                }
                Err(err) => self.report(err)?,
            }
        }

        let status = self.chess_match.status();
        info!(?status, turn = self.chess_match.turn(), "session over");
        Ok(status)
    }

    fn render(&mut self, highlight: MoveMask) -> Result<(), ConsoleError> {
        writeln!(self.output)?;
        render_match(
            &mut self.output,
            &self.chess_match,
            highlight,
            self.config.show_captured,
        )?;
        Ok(())
    }

    /// Read lines until one names a square. `None` on `quit` or end of input.
    fn read_square(&mut self) -> Result<Option<Position>, ConsoleError> {
        let mut line = String::new();
        loop {
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                debug!("input closed");
                return Ok(None);
            }
            match parse_command(&line) {
                Ok(Command::Square(position)) => return Ok(Some(position)),
                Ok(Command::Quit) => return Ok(None),
                Ok(Command::Help) => writeln!(self.output, "{HELP}")?,
                Err(err) => {
                    warn!(error = %err, "unreadable input");
                    writeln!(self.output, "{err}")?;
                }
            }
            write!(self.output, "> ")?;
            self.output.flush()?;
        }
    }

    /// Print a rule violation, or escalate it if play cannot continue.
    fn report(&mut self, err: MatchError) -> Result<(), ConsoleError> {
        if !err.is_recoverable() {
            return Err(err.into());
        }
        warn!(error = %err, "move rejected");
        writeln!(self.output, "Error: {err}")?;
        Ok(())
    }
}
