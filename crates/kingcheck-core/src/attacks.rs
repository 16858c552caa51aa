//! Direction and offset tables, plus the ray and leaper scans built on them.

use crate::board::Board;
use crate::cell::Cell;
use crate::piece_kind::PieceKind;
use crate::position::Position;

/// A `(row delta, column delta)` step.
pub type Delta = (isize, isize);

/// Up, down, left, right.
pub const ORTHOGONAL: [Delta; 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Up-left, up-right, down-left, down-right.
pub const DIAGONAL: [Delta; 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// The eight L-shaped knight jumps.
pub const KNIGHT_OFFSETS: [Delta; 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Pawns have no color here, so all four diagonal neighbours threaten.
pub const PAWN_OFFSETS: [Delta; 4] = DIAGONAL;

/// Successive in-bounds positions from `from` in direction `dir`, excluding `from` itself.
pub fn ray(from: Position, dir: Delta, size: usize) -> impl Iterator<Item = Position> {
    std::iter::successors(from.offset(dir.0, dir.1, size), move |pos| {
        pos.offset(dir.0, dir.1, size)
    })
}

/// Find the first sliding attacker along any of `dirs`.
///
/// Each ray stops at its first occupied cell. That cell is the attacker if
/// `is_attacker` accepts its piece kind; otherwise it blocks the ray and the
/// scan moves on to the next direction.
pub fn slider_attacker(
    board: &Board,
    target: Position,
    dirs: &[Delta],
    is_attacker: impl Fn(PieceKind) -> bool,
) -> Option<(Position, PieceKind)> {
    for &dir in dirs {
        let first_occupied = ray(target, dir, board.size()).find_map(|pos| {
            board
                .cell(pos)
                .filter(|cell| cell.is_occupied())
                .map(|cell| (pos, cell))
        });

        if let Some((pos, Cell::Piece(kind))) = first_occupied {
            if is_attacker(kind) {
                return Some((pos, kind));
            }
        }
    }
    None
}

/// Find the first in-bounds `offsets` cell around `target` holding `kind`.
pub fn leaper_attacker(
    board: &Board,
    target: Position,
    offsets: &[Delta],
    kind: PieceKind,
) -> Option<Position> {
    offsets
        .iter()
        .filter_map(|&(dr, dc)| target.offset(dr, dc, board.size()))
        .find(|&pos| board.piece_on(pos) == Some(kind))
}
