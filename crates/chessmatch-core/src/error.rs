//! Error types for board access and coordinate parsing.

use crate::piece::PieceId;
use crate::position::Position;

/// Errors from [`Board`](crate::board::Board) operations and coordinate translation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// The position lies outside the 8x8 grid.
    #[error("position {position} is out of bounds")]
    OutOfBounds {
        /// The offending position.
        position: Position,
    },
    /// A piece was placed onto a cell that already holds one.
    #[error("there is already a piece on {position}")]
    Occupied {
        /// The occupied position.
        position: Position,
    },
    /// The piece id does not belong to this board.
    #[error("unknown piece id {id}")]
    UnknownPiece {
        /// The unknown id.
        id: PieceId,
    },
    /// The piece already stands on another cell.
    #[error("piece {id} is already on the board")]
    AlreadyPlaced {
        /// The placed id.
        id: PieceId,
    },
    /// The arena has run out of piece ids.
    #[error("no more pieces can be created on this board")]
    TooManyPieces,
    /// A human coordinate with a column outside `a`-`h` or a row outside 1-8.
    #[error("invalid chess coordinate: column '{column}', row {row}")]
    InvalidCoordinate {
        /// The column letter given.
        column: char,
        /// The row number given.
        row: u8,
    },
}
