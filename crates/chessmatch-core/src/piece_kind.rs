//! Chess piece kinds.

use std::fmt;

/// The kind of a chess piece, without color information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Every piece kind, pawn first.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Return the board letter for this kind (uppercase).
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[cfg(test)]
mod tests {
    use super::PieceKind;

    #[test]
    fn letters_are_distinct_uppercase() {
        let letters: Vec<char> = PieceKind::ALL.iter().map(|kind| kind.letter()).collect();
        assert_eq!(letters, vec!['P', 'N', 'B', 'R', 'Q', 'K']);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", PieceKind::Rook), "R");
        assert_eq!(format!("{}", PieceKind::Knight), "N");
    }
}
