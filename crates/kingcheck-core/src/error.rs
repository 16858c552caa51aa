//! Error types for board validation.

use std::fmt;

/// Why a board was rejected before any threat scan ran.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// No rows were supplied.
    #[error("empty board")]
    EmptyBoard,
    /// A row's length differs from the number of rows.
    #[error("row {row} has {length} cells, expected {expected}")]
    NonSquareBoard {
        /// Zero-based index of the first offending row.
        row: usize,
        /// Number of characters in that row.
        length: usize,
        /// Number of rows, which every row must match.
        expected: usize,
    },
    /// No king marker on the board.
    #[error("no king on the board")]
    NoKing,
    /// More than one king marker on the board.
    #[error("expected 1 king, found {count}")]
    MultipleKings {
        /// Number of kings found.
        count: usize,
    },
}

impl BoardError {
    /// Return the field-less reason tag for this error.
    pub const fn reason(&self) -> InvalidReason {
        match self {
            BoardError::EmptyBoard => InvalidReason::EmptyBoard,
            BoardError::NonSquareBoard { .. } => InvalidReason::NonSquareBoard,
            BoardError::NoKing => InvalidReason::NoKing,
            BoardError::MultipleKings { .. } => InvalidReason::MultipleKings,
        }
    }
}

/// Coarse classification of a [`BoardError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvalidReason {
    /// No rows were supplied.
    EmptyBoard,
    /// Some row's length differs from the number of rows.
    NonSquareBoard,
    /// No king marker on the board.
    NoKing,
    /// More than one king marker on the board.
    MultipleKings,
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InvalidReason::EmptyBoard => "EmptyBoard",
            InvalidReason::NonSquareBoard => "NonSquareBoard",
            InvalidReason::NoKing => "NoKing",
            InvalidReason::MultipleKings => "MultipleKings",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::{BoardError, InvalidReason};

    #[test]
    fn board_error_display() {
        let err = BoardError::NonSquareBoard {
            row: 2,
            length: 5,
            expected: 4,
        };
        assert_eq!(format!("{err}"), "row 2 has 5 cells, expected 4");
        assert_eq!(
            format!("{}", BoardError::MultipleKings { count: 3 }),
            "expected 1 king, found 3"
        );
    }

    #[test]
    fn reason_tags() {
        assert_eq!(BoardError::EmptyBoard.reason(), InvalidReason::EmptyBoard);
        assert_eq!(BoardError::NoKing.reason(), InvalidReason::NoKing);
        assert_eq!(
            BoardError::MultipleKings { count: 2 }.reason(),
            InvalidReason::MultipleKings
        );
        assert_eq!(format!("{}", InvalidReason::NonSquareBoard), "NonSquareBoard");
    }
}
