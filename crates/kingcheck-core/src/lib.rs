//! Core types for king-in-check detection: the square grid, its cells, and the attack scans.

mod attacks;
mod board;
mod cell;
mod detect;
mod error;
mod piece_kind;
mod position;

pub use attacks::{DIAGONAL, Delta, KNIGHT_OFFSETS, ORTHOGONAL, PAWN_OFFSETS, ray};
pub use board::{Board, PrettyBoard};
pub use cell::{Cell, DEFAULT_EMPTY_MARKER};
pub use detect::{CheckStatus, Threat, detect, detect_with, find_threat};
pub use error::{BoardError, InvalidReason};
pub use piece_kind::PieceKind;
pub use position::Position;
