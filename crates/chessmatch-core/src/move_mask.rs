//! Reachability matrix: one boolean per board cell, packed into a `u64`.

use std::fmt;
use std::ops::BitOr;

use crate::position::{COLUMNS, Position, ROWS};

/// An 8x8 boolean grid, bit `row * 8 + column` set where a piece may move.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MoveMask(u64);

impl MoveMask {
    /// No cells set.
    pub const EMPTY: MoveMask = MoveMask(0);

    /// Return `true` if no cell is set.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Return `true` if at least one cell is set.
    #[inline]
    pub const fn is_nonempty(self) -> bool {
        self.0 != 0
    }

    /// Count the set cells.
    #[inline]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Return `true` if the cell is set. Off-board positions are never set.
    #[inline]
    pub const fn contains(self, pos: Position) -> bool {
        pos.is_on_board() && (self.0 & (1u64 << pos.index())) != 0
    }

    /// Return a new mask with the cell set.
    #[inline]
    pub const fn with(self, pos: Position) -> MoveMask {
        debug_assert!(pos.is_on_board());
        MoveMask(self.0 | (1u64 << pos.index()))
    }

    /// Return the first set cell in row-major order, or `None` if empty.
    #[inline]
    pub const fn first(self) -> Option<Position> {
        if self.0 == 0 {
            None
        } else {
            Some(Position::from_index(self.0.trailing_zeros() as usize))
        }
    }
}

impl BitOr for MoveMask {
    type Output = MoveMask;
    #[inline]
    fn bitor(self, rhs: MoveMask) -> MoveMask {
        MoveMask(self.0 | rhs.0)
    }
}

// Iterates set cells in row-major order (a8, b8, ..., h1).
impl Iterator for MoveMask {
    type Item = Position;

    #[inline]
    fn next(&mut self) -> Option<Position> {
        let pos = self.first()?;
        self.0 &= self.0 - 1;
        Some(pos)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.count() as usize;
        (count, Some(count))
    }
}

impl ExactSizeIterator for MoveMask {}

impl FromIterator<Position> for MoveMask {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> MoveMask {
        iter.into_iter().fold(MoveMask::EMPTY, MoveMask::with)
    }
}

impl fmt::Debug for MoveMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        for row in 0..ROWS {
            write!(f, "  {} ", ROWS - row)?;
            for column in 0..COLUMNS {
                if self.contains(Position::new(row, column)) {
                    write!(f, "1 ")?;
                } else {
                    write!(f, ". ")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "    a b c d e f g h")
    }
}
