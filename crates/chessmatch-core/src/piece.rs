//! Pieces: identity, color, cached position and move counter.

use std::fmt;

use crate::board::Board;
use crate::color::Color;
use crate::move_mask::MoveMask;
use crate::movegen;
use crate::piece_kind::PieceKind;
use crate::position::Position;

/// Stable identifier of a piece for the lifetime of a match (arena index).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PieceId(u16);

impl PieceId {
    #[inline]
    pub(crate) const fn new(index: u16) -> PieceId {
        PieceId(index)
    }

    /// Return the arena index.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A piece created for a match.
///
/// The position is a cache of the board's occupancy: it is written only when
/// the [`Board`] places the piece, and keeps its last value after removal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    id: PieceId,
    kind: PieceKind,
    color: Color,
    position: Option<Position>,
    move_count: u32,
}

impl Piece {
    pub(crate) fn new(id: PieceId, kind: PieceKind, color: Color) -> Piece {
        Piece {
            id,
            kind,
            color,
            position: None,
            move_count: 0,
        }
    }

    #[inline]
    pub fn id(&self) -> PieceId {
        self.id
    }

    #[inline]
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Last position the board placed this piece on, `None` if never placed.
    #[inline]
    pub fn position(&self) -> Option<Position> {
        self.position
    }

    /// Number of moves this piece has made.
    #[inline]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    #[inline]
    pub(crate) fn set_position(&mut self, position: Position) {
        self.position = Some(position);
    }

    pub(crate) fn increment_move_count(&mut self) {
        self.move_count += 1;
    }

    /// Undo one [`increment_move_count`](Piece::increment_move_count).
    pub(crate) fn decrement_move_count(&mut self) {
        debug_assert!(self.move_count > 0, "move counter underflow for {}", self.id);
        self.move_count = self.move_count.saturating_sub(1);
    }

    /// Cells this piece could move to under its own movement rules,
    /// ignoring whether the move would leave its king in check.
    pub fn possible_moves(&self, board: &Board) -> MoveMask {
        movegen::possible_moves(board, self)
    }

    /// Return `true` if `position` is in this piece's reachability matrix.
    pub fn can_move_to(&self, board: &Board, position: Position) -> bool {
        self.possible_moves(board).contains(position)
    }

    /// Return `true` if the reachability matrix has at least one cell set.
    pub fn has_any_possible_move(&self, board: &Board) -> bool {
        self.possible_moves(board).is_nonempty()
    }

    /// Board letter: uppercase for White, lowercase for Black.
    pub fn symbol(&self) -> char {
        match self.color {
            Color::White => self.kind.letter(),
            Color::Black => self.kind.letter().to_ascii_lowercase(),
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::{Piece, PieceId};
    use crate::color::Color;
    use crate::piece_kind::PieceKind;

    #[test]
    fn new_piece_is_unplaced() {
        let piece = Piece::new(PieceId::new(3), PieceKind::Rook, Color::White);
        assert_eq!(piece.id().index(), 3);
        assert_eq!(piece.position(), None);
        assert_eq!(piece.move_count(), 0);
    }

    #[test]
    fn move_counter_roundtrip() {
        let mut piece = Piece::new(PieceId::new(0), PieceKind::King, Color::Black);
        piece.increment_move_count();
        piece.increment_move_count();
        assert_eq!(piece.move_count(), 2);
        piece.decrement_move_count();
        assert_eq!(piece.move_count(), 1);
    }

    #[test]
    fn symbols() {
        let white = Piece::new(PieceId::new(0), PieceKind::Queen, Color::White);
        let black = Piece::new(PieceId::new(1), PieceKind::Knight, Color::Black);
        assert_eq!(white.symbol(), 'Q');
        assert_eq!(format!("{black}"), "n");
    }

    #[test]
    fn id_display() {
        assert_eq!(format!("{}", PieceId::new(7)), "#7");
    }
}
