//! The board: an 8x8 occupancy grid over an arena of pieces.

use std::fmt;

use tracing::trace;

use crate::color::Color;
use crate::error::BoardError;
use crate::move_mask::MoveMask;
use crate::piece::{Piece, PieceId};
use crate::piece_kind::PieceKind;
use crate::position::{COLUMNS, Position, ROWS};

/// Occupancy grid plus every piece created for the match.
///
/// The grid is the single source of truth for where pieces stand. A piece's
/// cached position is only written by [`Board::place_piece`].
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    /// Occupant of each cell, indexed row-major.
    cells: [Option<PieceId>; 64],
    /// Arena of pieces, indexed by [`PieceId::index()`].
    pieces: Vec<Piece>,
}

impl Board {
    /// Return an empty board with no pieces.
    pub fn new() -> Board {
        Board {
            cells: [None; 64],
            pieces: Vec::new(),
        }
    }

    /// Create a piece in the arena. It is not placed on any cell yet.
    pub fn add_piece(&mut self, kind: PieceKind, color: Color) -> Result<PieceId, BoardError> {
        let index = u16::try_from(self.pieces.len()).map_err(|_| BoardError::TooManyPieces)?;
        let id = PieceId::new(index);
        self.pieces.push(Piece::new(id, kind, color));
        Ok(id)
    }

    /// Return `true` if the position lies within the grid.
    #[inline]
    pub fn contains(&self, position: Position) -> bool {
        position.row() < ROWS && position.column() < COLUMNS
    }

    fn check_bounds(&self, position: Position) -> Result<(), BoardError> {
        if self.contains(position) {
            Ok(())
        } else {
            Err(BoardError::OutOfBounds { position })
        }
    }

    /// Place a piece on an empty cell and update its cached position.
    ///
    /// A piece stands on at most one cell, so an id that is already on the
    /// grid is rejected.
    pub fn place_piece(&mut self, id: PieceId, position: Position) -> Result<(), BoardError> {
        self.check_bounds(position)?;
        if self.cells[position.index()].is_some() {
            return Err(BoardError::Occupied { position });
        }
        if self.cells.contains(&Some(id)) {
            return Err(BoardError::AlreadyPlaced { id });
        }
        self.piece_mut(id)?.set_position(position);
        self.cells[position.index()] = Some(id);
        trace!(%id, %position, "placed piece");
        Ok(())
    }

    /// Detach the occupant of a cell, if any. The piece keeps its cached position.
    pub fn remove_piece(&mut self, position: Position) -> Result<Option<PieceId>, BoardError> {
        self.check_bounds(position)?;
        let removed = self.cells[position.index()].take();
        if let Some(id) = removed {
            trace!(%id, %position, "removed piece");
        }
        Ok(removed)
    }

    /// Return the piece on a cell, if any.
    pub fn piece_at(&self, position: Position) -> Result<Option<&Piece>, BoardError> {
        self.check_bounds(position)?;
        Ok(self.occupant(position))
    }

    /// Return the piece on a cell. Off-board positions have no occupant.
    #[inline]
    pub fn occupant(&self, position: Position) -> Option<&Piece> {
        if !self.contains(position) {
            return None;
        }
        self.cells[position.index()].and_then(|id| self.pieces.get(id.index()))
    }

    /// Return `true` if the cell is on the board and holds a piece.
    #[inline]
    pub fn is_occupied(&self, position: Position) -> bool {
        self.occupant(position).is_some()
    }

    /// Look up a piece by id, whether or not it is on the board.
    #[inline]
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id.index())
    }

    #[inline]
    pub(crate) fn piece_mut(&mut self, id: PieceId) -> Result<&mut Piece, BoardError> {
        self.pieces
            .get_mut(id.index())
            .ok_or(BoardError::UnknownPiece { id })
    }

    /// Count one more move for a piece.
    pub fn increment_move_count(&mut self, id: PieceId) -> Result<(), BoardError> {
        self.piece_mut(id)?.increment_move_count();
        Ok(())
    }

    /// Take back one counted move.
    pub fn decrement_move_count(&mut self, id: PieceId) -> Result<(), BoardError> {
        self.piece_mut(id)?.decrement_move_count();
        Ok(())
    }

    /// Iterate over every piece created on this board, placed or not.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.iter()
    }

    /// Return a printable grid, marking the cells of `highlight`.
    pub fn pretty(&self, highlight: MoveMask) -> PrettyBoard<'_> {
        PrettyBoard {
            board: self,
            highlight,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board(")?;
        writeln!(f, "{}", self.pretty(MoveMask::EMPTY))?;
        write!(f, ")")
    }
}

/// Wrapper for printing a board as an 8x8 grid.
///
/// Empty cells print as `-`. Highlighted cells print as `*` when empty and
/// `x` when they hold a piece that would be captured.
pub struct PrettyBoard<'a> {
    board: &'a Board,
    highlight: MoveMask,
}

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..ROWS {
            write!(f, "{} ", ROWS - row)?;
            for column in 0..COLUMNS {
                let pos = Position::new(row, column);
                let c = match (self.board.occupant(pos), self.highlight.contains(pos)) {
                    (Some(_), true) => 'x',
                    (Some(piece), false) => piece.symbol(),
                    (None, true) => '*',
                    (None, false) => '-',
                };
                write!(f, "{c} ")?;
            }
            writeln!(f)?;
        }
        write!(f, "  a b c d e f g h")
    }
}
