//! Contents of a single grid cell.

use std::fmt;

use crate::piece_kind::PieceKind;

/// Marker used for empty cells unless the caller picks another one.
pub const DEFAULT_EMPTY_MARKER: char = '.';

/// What a cell holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Nothing on this cell.
    Empty,
    /// A recognized piece.
    Piece(PieceKind),
    /// An unrecognized character. It occupies the cell (blocks rays) but never attacks.
    Unknown(char),
}

impl Cell {
    /// Classify a character given the board's empty marker.
    #[inline]
    pub fn from_char(c: char, empty_marker: char) -> Cell {
        if c == empty_marker {
            return Cell::Empty;
        }
        match PieceKind::from_code(c) {
            Some(kind) => Cell::Piece(kind),
            None => Cell::Unknown(c),
        }
    }

    /// Return `true` unless the cell is empty.
    #[inline]
    pub fn is_occupied(self) -> bool {
        !matches!(self, Cell::Empty)
    }

    /// Return the piece kind, if the cell holds a recognized piece.
    #[inline]
    pub fn piece(self) -> Option<PieceKind> {
        match self {
            Cell::Piece(kind) => Some(kind),
            _ => None,
        }
    }

    /// Render the cell back into its input character.
    #[inline]
    pub fn to_char(self, empty_marker: char) -> char {
        match self {
            Cell::Empty => empty_marker,
            Cell::Piece(kind) => kind.code(),
            Cell::Unknown(c) => c,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char(DEFAULT_EMPTY_MARKER))
    }
}

#[cfg(test)]
mod tests {
    use super::{Cell, DEFAULT_EMPTY_MARKER};
    use crate::piece_kind::PieceKind;

    #[test]
    fn classify_default_marker() {
        assert_eq!(Cell::from_char('.', DEFAULT_EMPTY_MARKER), Cell::Empty);
        assert_eq!(
            Cell::from_char('R', DEFAULT_EMPTY_MARKER),
            Cell::Piece(PieceKind::Rook)
        );
        assert_eq!(Cell::from_char('x', DEFAULT_EMPTY_MARKER), Cell::Unknown('x'));
    }

    #[test]
    fn custom_marker_makes_dot_unknown() {
        assert_eq!(Cell::from_char('_', '_'), Cell::Empty);
        assert_eq!(Cell::from_char('.', '_'), Cell::Unknown('.'));
    }

    #[test]
    fn occupancy() {
        assert!(!Cell::Empty.is_occupied());
        assert!(Cell::Unknown('#').is_occupied());
        assert!(Cell::Piece(PieceKind::Pawn).is_occupied());
        assert_eq!(Cell::Unknown('#').piece(), None);
        assert_eq!(Cell::Piece(PieceKind::Knight).piece(), Some(PieceKind::Knight));
    }

    #[test]
    fn to_char_roundtrip() {
        for c in ['.', 'K', 'Q', 'z', '*'] {
            assert_eq!(Cell::from_char(c, '.').to_char('.'), c);
        }
    }
}
