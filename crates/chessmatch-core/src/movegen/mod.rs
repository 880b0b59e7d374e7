//! Per-kind reachability rules.
//!
//! Each piece kind has a unit type implementing [`MoveRule`]. The rules ignore
//! whether a move would expose the mover's own king; that is the match
//! controller's job.

mod king;
mod knights;
mod pawns;
mod sliders;

use crate::board::Board;
use crate::color::Color;
use crate::move_mask::MoveMask;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;

pub use self::king::King;
pub use self::knights::Knight;
pub use self::pawns::Pawn;
pub use self::sliders::{Bishop, Queen, Rook};

/// Reachability capability shared by every piece kind.
pub trait MoveRule {
    /// Cells the piece standing on `from` could move to under its own rules.
    fn possible_moves(&self, board: &Board, piece: &Piece, from: Position) -> MoveMask;
}

/// Return the rule implementation for a piece kind.
pub fn rule_for(kind: PieceKind) -> &'static dyn MoveRule {
    match kind {
        PieceKind::Pawn => &Pawn,
        PieceKind::Knight => &Knight,
        PieceKind::Bishop => &Bishop,
        PieceKind::Rook => &Rook,
        PieceKind::Queen => &Queen,
        PieceKind::King => &King,
    }
}

/// Reachability of `piece` on `board`. Pieces not currently occupying their
/// cached position (never placed, or captured) cannot move.
pub(crate) fn possible_moves(board: &Board, piece: &Piece) -> MoveMask {
    let Some(from) = piece.position() else {
        return MoveMask::EMPTY;
    };
    if board.occupant(from).map(Piece::id) != Some(piece.id()) {
        return MoveMask::EMPTY;
    }
    rule_for(piece.kind()).possible_moves(board, piece, from)
}

/// A cell a piece of `color` may land on: empty or holding an opposing piece.
#[inline]
fn can_land(board: &Board, to: Position, color: Color) -> bool {
    board.occupant(to).is_none_or(|other| other.color() != color)
}

/// Single-step targets for leapers (knight, king).
fn leaper_targets(board: &Board, from: Position, color: Color, deltas: &[(i8, i8)]) -> MoveMask {
    deltas
        .iter()
        .filter_map(|&(d_row, d_column)| from.offset(d_row, d_column))
        .filter(|&to| can_land(board, to, color))
        .collect()
}

/// Ray targets for sliders: walk each direction until the edge or the first
/// occupied cell, which is included only if it holds an opposing piece.
fn slider_targets(board: &Board, from: Position, color: Color, directions: &[(i8, i8)]) -> MoveMask {
    let mut mask = MoveMask::EMPTY;
    for &(d_row, d_column) in directions {
        let mut cursor = from;
        while let Some(to) = cursor.offset(d_row, d_column) {
            match board.occupant(to) {
                None => mask = mask.with(to),
                Some(other) => {
                    if other.color() != color {
                        mask = mask.with(to);
                    }
                    break;
                }
            }
            cursor = to;
        }
    }
    mask
}
