//! Starting layouts.

use std::fmt;
use std::str::FromStr;

use chessmatch_core::{Color, PieceKind};

use crate::chess_match::ChessMatch;
use crate::error::{MatchError, UnknownSetup};

/// Which pieces a new match starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Setup {
    /// Two white rooks and a king against a black rook and king.
    #[default]
    Demo,
    /// The regular 32-piece starting position.
    Standard,
    /// No pieces; callers place their own with [`ChessMatch::place_new_piece`].
    Empty,
}

const DEMO: [(char, u8, PieceKind, Color); 5] = [
    ('c', 1, PieceKind::Rook, Color::White),
    ('h', 7, PieceKind::Rook, Color::White),
    ('d', 1, PieceKind::King, Color::White),
    ('b', 8, PieceKind::Rook, Color::Black),
    ('a', 8, PieceKind::King, Color::Black),
];

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

impl Setup {
    /// Place this layout's pieces onto `chess_match`.
    pub(crate) fn apply(self, chess_match: &mut ChessMatch) -> Result<(), MatchError> {
        match self {
            Setup::Demo => {
                for (column, row, kind, color) in DEMO {
                    chess_match.place_new_piece(column, row, kind, color)?;
                }
            }
            Setup::Standard => {
                for (kind, column) in BACK_RANK.into_iter().zip('a'..='h') {
                    chess_match.place_new_piece(column, 1, kind, Color::White)?;
                    chess_match.place_new_piece(column, 2, PieceKind::Pawn, Color::White)?;
                    chess_match.place_new_piece(column, 7, PieceKind::Pawn, Color::Black)?;
                    chess_match.place_new_piece(column, 8, kind, Color::Black)?;
                }
            }
            Setup::Empty => {}
        }
        Ok(())
    }
}

impl FromStr for Setup {
    type Err = UnknownSetup;

    fn from_str(s: &str) -> Result<Setup, UnknownSetup> {
        match s.to_ascii_lowercase().as_str() {
            "demo" => Ok(Setup::Demo),
            "standard" => Ok(Setup::Standard),
            "empty" => Ok(Setup::Empty),
            _ => Err(UnknownSetup { name: s.to_string() }),
        }
    }
}

impl fmt::Display for Setup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Setup::Demo => write!(f, "demo"),
            Setup::Standard => write!(f, "standard"),
            Setup::Empty => write!(f, "empty"),
        }
    }
}
