//! The square grid: shape validation, cell lookup, and king location.

use std::fmt;

use crate::cell::{Cell, DEFAULT_EMPTY_MARKER};
use crate::error::BoardError;
use crate::piece_kind::PieceKind;
use crate::position::Position;

/// An immutable `size x size` grid of cells, stored row-major.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
    /// Character that marked empty cells in the input, kept for rendering.
    empty_marker: char,
}

impl Board {
    /// Build a board from rows using the default `.` empty marker.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Board, BoardError> {
        Board::parse(rows, DEFAULT_EMPTY_MARKER)
    }

    /// Build a board from rows with a caller-chosen empty marker.
    ///
    /// Fails with [`BoardError::EmptyBoard`] when `rows` is empty and with
    /// [`BoardError::NonSquareBoard`] at the first row whose character count
    /// differs from the number of rows. King count is not checked here; see
    /// [`Board::king_position`].
    pub fn parse<S: AsRef<str>>(rows: &[S], empty_marker: char) -> Result<Board, BoardError> {
        if rows.is_empty() {
            return Err(BoardError::EmptyBoard);
        }

        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);

        for (row_index, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let length = row.chars().count();
            if length != size {
                return Err(BoardError::NonSquareBoard {
                    row: row_index,
                    length,
                    expected: size,
                });
            }
            cells.extend(row.chars().map(|c| Cell::from_char(c, empty_marker)));
        }

        Ok(Board {
            size,
            cells,
            empty_marker,
        })
    }

    /// Return the side length.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Return the cell at `pos`, or `None` if it is off the board.
    #[inline]
    pub fn cell(&self, pos: Position) -> Option<Cell> {
        if pos.row() < self.size && pos.col() < self.size {
            Some(self.cells[pos.index(self.size)])
        } else {
            None
        }
    }

    /// Return the piece kind at `pos`, if any.
    #[inline]
    pub fn piece_on(&self, pos: Position) -> Option<PieceKind> {
        self.cell(pos).and_then(Cell::piece)
    }

    /// Iterate over every position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let size = self.size;
        (0..size * size).map(move |i| Position::new(i / size, i % size))
    }

    /// Iterate over every occupied position with its cell.
    pub fn occupied(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        self.positions()
            .zip(self.cells.iter().copied())
            .filter(|(_, cell)| cell.is_occupied())
    }

    /// Locate the single king.
    ///
    /// Every cell is scanned so the full count is reported on failure.
    pub fn king_position(&self) -> Result<Position, BoardError> {
        let mut kings = self
            .occupied()
            .filter(|(_, cell)| cell.piece() == Some(PieceKind::King))
            .map(|(pos, _)| pos);

        let first = kings.next().ok_or(BoardError::NoKing)?;
        let extra = kings.count();
        if extra > 0 {
            return Err(BoardError::MultipleKings { count: extra + 1 });
        }
        Ok(first)
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }

    fn row_string(&self, row: usize) -> String {
        self.cells[row * self.size..(row + 1) * self.size]
            .iter()
            .map(|cell| cell.to_char(self.empty_marker))
            .collect()
    }
}

/// One line per row, exactly as the rows were given.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            if row > 0 {
                writeln!(f)?;
            }
            f.write_str(&self.row_string(row))?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({}x{})", self.size, self.size)
    }
}

/// Wrapper for pretty-printing a board as a spaced grid with row and column labels.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        let width = board.size.saturating_sub(1).to_string().len();
        for row in 0..board.size {
            write!(f, "{row:>width$}  ")?;
            let line: Vec<String> = board.row_string(row).chars().map(String::from).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        write!(f, "{:>width$}  ", "")?;
        let labels: Vec<String> = (0..board.size).map(|c| (c % 10).to_string()).collect();
        write!(f, "{}", labels.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::Board;
    use crate::cell::Cell;
    use crate::error::BoardError;
    use crate::piece_kind::PieceKind;
    use crate::position::Position;

    #[test]
    fn parse_square_board() {
        let board = Board::from_rows(&["K..", ".R.", "..x"]).unwrap();
        assert_eq!(board.size(), 3);
        assert_eq!(board.piece_on(Position::new(0, 0)), Some(PieceKind::King));
        assert_eq!(board.piece_on(Position::new(1, 1)), Some(PieceKind::Rook));
        assert_eq!(board.cell(Position::new(2, 2)), Some(Cell::Unknown('x')));
        assert_eq!(board.cell(Position::new(0, 1)), Some(Cell::Empty));
        assert_eq!(board.cell(Position::new(3, 0)), None);
    }

    #[test]
    fn empty_rows_rejected() {
        let rows: [&str; 0] = [];
        assert_eq!(Board::from_rows(&rows), Err(BoardError::EmptyBoard));
    }

    #[test]
    fn ragged_rows_rejected_at_first_offender() {
        let err = Board::from_rows(&["....", "....", "....K", "...."]).unwrap_err();
        assert_eq!(
            err,
            BoardError::NonSquareBoard {
                row: 2,
                length: 5,
                expected: 4,
            }
        );
    }

    #[test]
    fn wide_rows_rejected() {
        let err = Board::from_rows(&["........", "........", "....K...", "........"]).unwrap_err();
        assert!(matches!(err, BoardError::NonSquareBoard { row: 0, .. }));
    }

    #[test]
    fn row_length_counts_chars_not_bytes() {
        let board = Board::from_rows(&["Ké", ".."]).unwrap();
        assert_eq!(board.cell(Position::new(0, 1)), Some(Cell::Unknown('é')));
    }

    #[test]
    fn king_position_single() {
        let board = Board::from_rows(&["...", ".K.", "..."]).unwrap();
        assert_eq!(board.king_position(), Ok(Position::new(1, 1)));
    }

    #[test]
    fn king_position_none_or_many() {
        let none = Board::from_rows(&["..", ".."]).unwrap();
        assert_eq!(none.king_position(), Err(BoardError::NoKing));

        let many = Board::from_rows(&["K.K", "...", "..K"]).unwrap();
        assert_eq!(
            many.king_position(),
            Err(BoardError::MultipleKings { count: 3 })
        );
    }

    #[test]
    fn lowercase_king_is_not_counted() {
        let board = Board::from_rows(&["k.", ".K"]).unwrap();
        assert_eq!(board.king_position(), Ok(Position::new(1, 1)));
    }

    #[test]
    fn custom_empty_marker() {
        let board = Board::parse(&["K_", "_."], '_').unwrap();
        assert_eq!(board.cell(Position::new(0, 1)), Some(Cell::Empty));
        assert_eq!(board.cell(Position::new(1, 1)), Some(Cell::Unknown('.')));
        assert_eq!(format!("{board}"), "K_\n_.");
    }

    #[test]
    fn display_reproduces_rows() {
        let board = Board::from_rows(&["K.", ".Q"]).unwrap();
        assert_eq!(format!("{board}"), "K.\n.Q");
        assert_eq!(format!("{board:?}"), "Board(2x2)");
    }

    #[test]
    fn pretty_print() {
        let board = Board::from_rows(&["K..", "...", "..R"]).unwrap();
        let output = format!("{}", board.pretty());
        assert!(output.contains("0  K . ."));
        assert!(output.contains("2  . . R"));
        assert!(output.ends_with("   0 1 2"));
    }

    #[test]
    fn occupied_iterates_non_empty() {
        let board = Board::from_rows(&["K.", ".#"]).unwrap();
        let occupied: Vec<Position> = board.occupied().map(|(pos, _)| pos).collect();
        assert_eq!(occupied, vec![Position::new(0, 0), Position::new(1, 1)]);
    }
}
