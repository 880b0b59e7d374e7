//! Pawn reachability: pushes and diagonal captures. No en passant or promotion.

use crate::board::Board;
use crate::move_mask::MoveMask;
use crate::piece::Piece;
use crate::position::Position;

use super::MoveRule;

#[derive(Debug, Clone, Copy, Default)]
pub struct Pawn;

impl MoveRule for Pawn {
    fn possible_moves(&self, board: &Board, piece: &Piece, from: Position) -> MoveMask {
        let color = piece.color();
        let forward = color.forward();
        let mut mask = MoveMask::EMPTY;

        if let Some(one) = from.offset(forward, 0)
            && !board.is_occupied(one)
        {
            mask = mask.with(one);
            if piece.move_count() == 0
                && let Some(two) = one.offset(forward, 0)
                && !board.is_occupied(two)
            {
                mask = mask.with(two);
            }
        }

        for d_column in [-1, 1] {
            if let Some(diagonal) = from.offset(forward, d_column)
                && board.occupant(diagonal).is_some_and(|other| other.color() != color)
            {
                mask = mask.with(diagonal);
            }
        }

        mask
    }
}

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::color::Color;
    use crate::piece_kind::PieceKind;
    use crate::position::Position;

    #[test]
    fn first_move_double_push() {
        let mut board = Board::new();
        let pawn = board.add_piece(PieceKind::Pawn, Color::White).unwrap();
        board.place_piece(pawn, Position::new(6, 4)).unwrap();
        let moves = board.piece(pawn).unwrap().possible_moves(&board);
        assert_eq!(moves.count(), 2);
        assert!(moves.contains(Position::new(5, 4)));
        assert!(moves.contains(Position::new(4, 4)));
    }

    #[test]
    fn moved_pawn_single_push() {
        let mut board = Board::new();
        let pawn = board.add_piece(PieceKind::Pawn, Color::Black).unwrap();
        board.place_piece(pawn, Position::new(1, 4)).unwrap();
        board.piece_mut(pawn).unwrap().increment_move_count();
        let moves = board.piece(pawn).unwrap().possible_moves(&board);
        assert_eq!(moves.count(), 1);
        assert!(moves.contains(Position::new(2, 4)));
    }

    #[test]
    fn blocked_pawn_cannot_push() {
        let mut board = Board::new();
        let pawn = board.add_piece(PieceKind::Pawn, Color::White).unwrap();
        let blocker = board.add_piece(PieceKind::Knight, Color::Black).unwrap();
        board.place_piece(pawn, Position::new(6, 0)).unwrap();
        board.place_piece(blocker, Position::new(5, 0)).unwrap();
        assert!(!board.piece(pawn).unwrap().has_any_possible_move(&board));
    }

    #[test]
    fn diagonal_captures_only_enemies() {
        let mut board = Board::new();
        let pawn = board.add_piece(PieceKind::Pawn, Color::White).unwrap();
        let enemy = board.add_piece(PieceKind::Rook, Color::Black).unwrap();
        let friend = board.add_piece(PieceKind::Rook, Color::White).unwrap();
        board.place_piece(pawn, Position::new(4, 4)).unwrap();
        board.place_piece(enemy, Position::new(3, 3)).unwrap();
        board.place_piece(friend, Position::new(3, 5)).unwrap();

        let moves = board.piece(pawn).unwrap().possible_moves(&board);
        assert!(moves.contains(Position::new(3, 3)));
        assert!(!moves.contains(Position::new(3, 5)));
        assert!(moves.contains(Position::new(3, 4)));
    }
}
