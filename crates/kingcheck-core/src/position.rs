//! Grid coordinates.

use std::fmt;

/// A `(row, column)` pair on a square board. Row 0 is the first input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// Create a position. Bounds are checked by the board, not here.
    #[inline]
    pub const fn new(row: usize, col: usize) -> Position {
        Position { row, col }
    }

    /// Return the row.
    #[inline]
    pub const fn row(self) -> usize {
        self.row
    }

    /// Return the column.
    #[inline]
    pub const fn col(self) -> usize {
        self.col
    }

    /// Return the row-major index on a board of side `size`.
    #[inline]
    pub const fn index(self, size: usize) -> usize {
        self.row * size + self.col
    }

    /// Step by `(dr, dc)`, returning `None` if the result leaves a `size x size` board.
    #[inline]
    pub fn offset(self, dr: isize, dc: isize, size: usize) -> Option<Position> {
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        if row < size && col < size {
            Some(Position { row, col })
        } else {
            None
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
