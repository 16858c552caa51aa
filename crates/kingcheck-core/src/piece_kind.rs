//! Piece kinds and their single-character board codes.

use std::fmt;

/// The kind of a piece on the grid.
///
/// There is no color model: every piece other than the king is hostile to it.
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
    /// All piece kinds.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Return the board code for this piece kind (uppercase).
    #[inline]
    pub const fn code(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    /// Parse a board code into a piece kind.
    ///
    /// Only uppercase codes are pieces; anything else returns `None`.
    #[inline]
    pub fn from_code(c: char) -> Option<PieceKind> {
        PieceKind::ALL.into_iter().find(|kind| kind.code() == c)
    }

    /// Rooks and queens attack along ranks and files.
    #[inline]
    pub const fn is_orthogonal_slider(self) -> bool {
        matches!(self, PieceKind::Rook | PieceKind::Queen)
    }

    /// Bishops and queens attack along diagonals.
    #[inline]
    pub const fn is_diagonal_slider(self) -> bool {
        matches!(self, PieceKind::Bishop | PieceKind::Queen)
    }

    /// Lowercase English name, used in reports and log fields.
    pub const fn name(self) -> &'static str {
        match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
