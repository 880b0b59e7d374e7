//! Core chess types: board occupancy, pieces, coordinates, and per-piece reachability.

mod board;
mod color;
mod error;
mod move_mask;
pub mod movegen;
mod piece;
mod piece_kind;
mod position;

pub use board::{Board, PrettyBoard};
pub use color::Color;
pub use error::BoardError;
pub use move_mask::MoveMask;
pub use movegen::MoveRule;
pub use piece::{Piece, PieceId};
pub use piece_kind::PieceKind;
pub use position::{COLUMNS, ChessPosition, Position, ROWS};
