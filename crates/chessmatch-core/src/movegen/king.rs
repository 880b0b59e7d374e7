//! King reachability.

use crate::board::Board;
use crate::move_mask::MoveMask;
use crate::piece::Piece;
use crate::position::Position;

use super::{MoveRule, leaper_targets};

#[rustfmt::skip]
const KING_DELTAS: [(i8, i8); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// One step in any direction. Castling is not generated.
#[derive(Debug, Clone, Copy, Default)]
pub struct King;

impl MoveRule for King {
    fn possible_moves(&self, board: &Board, piece: &Piece, from: Position) -> MoveMask {
        leaper_targets(board, from, piece.color(), &KING_DELTAS)
    }
}
