//! Sliding pieces: bishop, rook, queen.

use crate::board::Board;
use crate::move_mask::MoveMask;
use crate::piece::Piece;
use crate::position::Position;

use super::{MoveRule, slider_targets};

const ORTHOGONAL: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const DIAGONAL: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

#[derive(Debug, Clone, Copy, Default)]
pub struct Rook;

#[derive(Debug, Clone, Copy, Default)]
pub struct Bishop;

/// Union of rook and bishop rays.
#[derive(Debug, Clone, Copy, Default)]
pub struct Queen;

impl MoveRule for Rook {
    fn possible_moves(&self, board: &Board, piece: &Piece, from: Position) -> MoveMask {
        slider_targets(board, from, piece.color(), &ORTHOGONAL)
    }
}

impl MoveRule for Bishop {
    fn possible_moves(&self, board: &Board, piece: &Piece, from: Position) -> MoveMask {
        slider_targets(board, from, piece.color(), &DIAGONAL)
    }
}

impl MoveRule for Queen {
    fn possible_moves(&self, board: &Board, piece: &Piece, from: Position) -> MoveMask {
        slider_targets(board, from, piece.color(), &ORTHOGONAL)
            | slider_targets(board, from, piece.color(), &DIAGONAL)
    }
}

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::color::Color;
    use crate::piece_kind::PieceKind;
    use crate::position::Position;

    #[test]
    fn rook_on_empty_board() {
        let mut board = Board::new();
        let rook = board.add_piece(PieceKind::Rook, Color::White).unwrap();
        board.place_piece(rook, Position::new(7, 2)).unwrap();
        let moves = board.piece(rook).unwrap().possible_moves(&board);
        assert_eq!(moves.count(), 14);
        assert!(moves.contains(Position::new(0, 2)));
        assert!(moves.contains(Position::new(7, 7)));
        assert!(!moves.contains(Position::new(6, 3)));
    }

    #[test]
    fn rook_stops_at_blockers() {
        let mut board = Board::new();
        let rook = board.add_piece(PieceKind::Rook, Color::White).unwrap();
        let friend = board.add_piece(PieceKind::King, Color::White).unwrap();
        let enemy = board.add_piece(PieceKind::Rook, Color::Black).unwrap();
        board.place_piece(rook, Position::new(7, 2)).unwrap();
        board.place_piece(friend, Position::new(7, 3)).unwrap();
        board.place_piece(enemy, Position::new(4, 2)).unwrap();

        let moves = board.piece(rook).unwrap().possible_moves(&board);
        assert!(!moves.contains(Position::new(7, 3)));
        assert!(!moves.contains(Position::new(7, 4)));
        assert!(moves.contains(Position::new(4, 2)));
        assert!(!moves.contains(Position::new(3, 2)));
        // c2, c3 up to the capture on c4; a1, b1 to the left
        assert_eq!(moves.count(), 5);
    }

    #[test]
    fn bishop_diagonals() {
        let mut board = Board::new();
        let bishop = board.add_piece(PieceKind::Bishop, Color::Black).unwrap();
        board.place_piece(bishop, Position::new(0, 2)).unwrap();
        let moves = board.piece(bishop).unwrap().possible_moves(&board);
        assert_eq!(moves.count(), 7);
        assert!(moves.contains(Position::new(1, 1)));
        assert!(moves.contains(Position::new(5, 7)));
    }

    #[test]
    fn queen_is_rook_plus_bishop() {
        let mut board = Board::new();
        let queen = board.add_piece(PieceKind::Queen, Color::White).unwrap();
        board.place_piece(queen, Position::new(4, 3)).unwrap();
        assert_eq!(board.piece(queen).unwrap().possible_moves(&board).count(), 27);
    }
}
