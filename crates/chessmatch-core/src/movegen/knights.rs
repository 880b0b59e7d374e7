//! Knight reachability.

use crate::board::Board;
use crate::move_mask::MoveMask;
use crate::piece::Piece;
use crate::position::Position;

use super::{MoveRule, leaper_targets};

#[rustfmt::skip]
const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (-2, -1), (-2, 1), (-1, -2), (-1, 2),
    (1, -2), (1, 2), (2, -1), (2, 1),
];

/// Jumps in an L shape; blocking pieces are irrelevant.
#[derive(Debug, Clone, Copy, Default)]
pub struct Knight;

impl MoveRule for Knight {
    fn possible_moves(&self, board: &Board, piece: &Piece, from: Position) -> MoveMask {
        leaper_targets(board, from, piece.color(), &KNIGHT_DELTAS)
    }
}

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::color::Color;
    use crate::piece_kind::PieceKind;
    use crate::position::Position;

    #[test]
    fn center_and_corner() {
        let mut board = Board::new();
        let knight = board.add_piece(PieceKind::Knight, Color::White).unwrap();
        board.place_piece(knight, Position::new(4, 4)).unwrap();
        assert_eq!(board.piece(knight).unwrap().possible_moves(&board).count(), 8);

        let mut board = Board::new();
        let knight = board.add_piece(PieceKind::Knight, Color::White).unwrap();
        board.place_piece(knight, Position::new(0, 0)).unwrap();
        let moves = board.piece(knight).unwrap().possible_moves(&board);
        assert_eq!(moves.count(), 2);
        assert!(moves.contains(Position::new(1, 2)));
        assert!(moves.contains(Position::new(2, 1)));
    }

    #[test]
    fn jumps_over_pieces_but_not_onto_friends() {
        let mut board = Board::new();
        let knight = board.add_piece(PieceKind::Knight, Color::Black).unwrap();
        let friend = board.add_piece(PieceKind::Pawn, Color::Black).unwrap();
        let enemy = board.add_piece(PieceKind::Pawn, Color::White).unwrap();
        board.place_piece(knight, Position::new(0, 1)).unwrap();
        board.place_piece(friend, Position::new(2, 0)).unwrap();
        board.place_piece(enemy, Position::new(2, 2)).unwrap();

        let moves = board.piece(knight).unwrap().possible_moves(&board);
        assert!(!moves.contains(Position::new(2, 0)));
        assert!(moves.contains(Position::new(2, 2)));
        assert!(moves.contains(Position::new(1, 3)));
        assert_eq!(moves.count(), 2);
    }
}
