//! Board coordinates: internal `(row, column)` positions and human chess coordinates.

use std::fmt;
use std::str::FromStr;

use crate::error::BoardError;

/// Number of rows on the board.
pub const ROWS: u8 = 8;

/// Number of columns on the board.
pub const COLUMNS: u8 = 8;

/// A zero-indexed `(row, column)` cell. Row 0 is rank 8, row 7 is rank 1.
///
/// Any coordinates can be represented; bounds are enforced by the
/// [`Board`](crate::board::Board).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: u8,
    column: u8,
}

impl Position {
    /// Create a position from a row and column.
    #[inline]
    pub const fn new(row: u8, column: u8) -> Position {
        Position { row, column }
    }

    /// Return the row index.
    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Return the column index.
    #[inline]
    pub const fn column(self) -> u8 {
        self.column
    }

    /// Return `true` if the position lies on the 8x8 board.
    #[inline]
    pub const fn is_on_board(self) -> bool {
        self.row < ROWS && self.column < COLUMNS
    }

    /// Return the row-major cell index (0..63) for on-board positions.
    #[inline]
    pub(crate) const fn index(self) -> usize {
        self.row as usize * COLUMNS as usize + self.column as usize
    }

    /// Inverse of [`Position::index`].
    #[inline]
    pub(crate) const fn from_index(index: usize) -> Position {
        debug_assert!(index < 64);
        Position::new((index / COLUMNS as usize) as u8, (index % COLUMNS as usize) as u8)
    }

    /// Step by a row/column delta, returning `None` if the result leaves the board.
    #[inline]
    pub fn offset(self, d_row: i8, d_column: i8) -> Option<Position> {
        let row = self.row as i16 + d_row as i16;
        let column = self.column as i16 + d_column as i16;
        if (0..ROWS as i16).contains(&row) && (0..COLUMNS as i16).contains(&column) {
            Some(Position::new(row as u8, column as u8))
        } else {
            None
        }
    }

    /// Iterate over every on-board position in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..64).map(Position::from_index)
    }

    /// Convert to a human chess coordinate, or `None` if off the board.
    pub fn to_chess(self) -> Option<ChessPosition> {
        if !self.is_on_board() {
            return None;
        }
        Some(ChessPosition {
            column: (b'a' + self.column) as char,
            row: ROWS - self.row,
        })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_chess() {
            Some(chess) => write!(f, "{chess}"),
            None => write!(f, "({}, {})", self.row, self.column),
        }
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position({}, {})", self.row, self.column)
    }
}

/// A human chess coordinate: column letter `a`-`h` and row number 1-8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChessPosition {
    column: char,
    row: u8,
}

impl ChessPosition {
    /// Create a chess coordinate, rejecting letters outside `a`-`h` and numbers outside 1-8.
    pub fn new(column: char, row: u8) -> Result<ChessPosition, BoardError> {
        if !('a'..='h').contains(&column) || !(1..=ROWS).contains(&row) {
            return Err(BoardError::InvalidCoordinate { column, row });
        }
        Ok(ChessPosition { column, row })
    }

    /// Return the column letter.
    #[inline]
    pub fn column(self) -> char {
        self.column
    }

    /// Return the row number.
    #[inline]
    pub fn row(self) -> u8 {
        self.row
    }

    /// Translate to internal indices: `row = 8 - number`, `column = letter - 'a'`.
    #[inline]
    pub fn to_position(self) -> Position {
        Position::new(ROWS - self.row, self.column as u8 - b'a')
    }
}

impl FromStr for ChessPosition {
    type Err = BoardError;

    /// Parse a two-character coordinate such as `"c1"`.
    fn from_str(s: &str) -> Result<ChessPosition, BoardError> {
        let mut chars = s.chars();
        let (Some(column), Some(digit), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(BoardError::InvalidCoordinate {
                column: s.chars().next().unwrap_or(' '),
                row: 0,
            });
        };
        let row = digit.to_digit(10).map_or(0, |d| d as u8);
        ChessPosition::new(column.to_ascii_lowercase(), row)
    }
}

impl fmt::Display for ChessPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.column, self.row)
    }
}

#[cfg(test)]
mod tests {
    use super::{ChessPosition, Position};
    use crate::error::BoardError;

    #[test]
    fn chess_coordinate_mapping() {
        let c1 = ChessPosition::new('c', 1).unwrap();
        assert_eq!(c1.to_position(), Position::new(7, 2));

        let a8 = ChessPosition::new('a', 8).unwrap();
        assert_eq!(a8.to_position(), Position::new(0, 0));

        let h1 = ChessPosition::new('h', 1).unwrap();
        assert_eq!(h1.to_position(), Position::new(7, 7));
    }

    #[test]
    fn to_chess_inverts_mapping() {
        for pos in Position::all() {
            let chess = pos.to_chess().unwrap();
            assert_eq!(chess.to_position(), pos);
        }
        assert!(Position::new(8, 0).to_chess().is_none());
    }

    #[test]
    fn invalid_coordinates() {
        assert_eq!(
            ChessPosition::new('i', 1),
            Err(BoardError::InvalidCoordinate { column: 'i', row: 1 })
        );
        assert!(ChessPosition::new('a', 0).is_err());
        assert!(ChessPosition::new('a', 9).is_err());
    }

    #[test]
    fn parse_from_text() {
        let parsed: ChessPosition = "e4".parse().unwrap();
        assert_eq!(parsed.to_position(), Position::new(4, 4));
        let upper: ChessPosition = "H8".parse().unwrap();
        assert_eq!(upper.to_position(), Position::new(0, 7));
        assert!("e".parse::<ChessPosition>().is_err());
        assert!("e44".parse::<ChessPosition>().is_err());
        assert!("z1".parse::<ChessPosition>().is_err());
        assert!("ex".parse::<ChessPosition>().is_err());
    }

    #[test]
    fn offset_stays_on_board() {
        let corner = Position::new(0, 0);
        assert_eq!(corner.offset(1, 1), Some(Position::new(1, 1)));
        assert_eq!(corner.offset(-1, 0), None);
        assert_eq!(corner.offset(0, -1), None);
        assert_eq!(Position::new(7, 7).offset(1, 0), None);
    }

    #[test]
    fn display_uses_chess_coordinates() {
        assert_eq!(format!("{}", Position::new(7, 2)), "c1");
        assert_eq!(format!("{}", Position::new(9, 2)), "(9, 2)");
        assert_eq!(format!("{:?}", Position::new(7, 2)), "Position(7, 2)");
    }

    #[test]
    fn all_iterator_row_major() {
        let all: Vec<Position> = Position::all().collect();
        assert_eq!(all.len(), 64);
        assert_eq!(all[0], Position::new(0, 0));
        assert_eq!(all[9], Position::new(1, 1));
        assert_eq!(all[63], Position::new(7, 7));
    }
}
