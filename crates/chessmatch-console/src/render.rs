//! Text rendering of a match: board, captured pieces, and turn status.

use std::collections::BTreeSet;
use std::io::{self, Write};

use chessmatch_core::{Color, MoveMask, PieceId};
use chessmatch_rules::{ChessMatch, MatchStatus};

/// Print the board (marking `highlight`), then the captured pieces if
/// requested, then the turn and check/checkmate status.
pub fn render_match<W: Write>(
    out: &mut W,
    chess_match: &ChessMatch,
    highlight: MoveMask,
    show_captured: bool,
) -> io::Result<()> {
    writeln!(out, "{}", chess_match.board().pretty(highlight))?;
    writeln!(out)?;

    if show_captured {
        writeln!(out, "Captured pieces:")?;
        for color in Color::ALL {
            let captured = chess_match.captured_pieces(color);
            writeln!(out, "{color}: [{}]", symbols(chess_match, &captured))?;
        }
        writeln!(out)?;
    }

    writeln!(out, "Turn: {}", chess_match.turn())?;
    match chess_match.status() {
        MatchStatus::InProgress => {
            writeln!(out, "Waiting for player: {}", chess_match.current_player())?;
        }
        MatchStatus::Check => {
            writeln!(out, "Waiting for player: {}", chess_match.current_player())?;
            writeln!(out, "CHECK!")?;
        }
        MatchStatus::Finished { winner } => {
            writeln!(out, "CHECKMATE!")?;
            writeln!(out, "Winner: {winner}")?;
        }
    }
    Ok(())
}

fn symbols(chess_match: &ChessMatch, ids: &BTreeSet<PieceId>) -> String {
    ids.iter()
        .filter_map(|&id| chess_match.piece(id))
        .map(|piece| piece.symbol().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
