//! King-in-check detection.

use tracing::{debug, trace};

use crate::attacks::{DIAGONAL, KNIGHT_OFFSETS, ORTHOGONAL, PAWN_OFFSETS};
use crate::attacks::{leaper_attacker, slider_attacker};
use crate::board::Board;
use crate::cell::DEFAULT_EMPTY_MARKER;
use crate::error::BoardError;
use crate::piece_kind::PieceKind;
use crate::position::Position;

/// Outcome of a detection call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckStatus {
    /// At least one piece attacks the king.
    InCheck,
    /// No piece attacks the king.
    NotInCheck,
    /// The input was rejected before any threat scan ran.
    Invalid(BoardError),
}

impl CheckStatus {
    /// Return `true` for [`CheckStatus::InCheck`].
    #[inline]
    pub fn is_in_check(&self) -> bool {
        matches!(self, CheckStatus::InCheck)
    }

    /// Return `false` for [`CheckStatus::Invalid`].
    #[inline]
    pub fn is_valid(&self) -> bool {
        !matches!(self, CheckStatus::Invalid(_))
    }
}

impl From<BoardError> for CheckStatus {
    fn from(err: BoardError) -> Self {
        CheckStatus::Invalid(err)
    }
}

/// A piece attacking the king, and where it stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Threat {
    /// Kind of the attacking piece.
    pub attacker: PieceKind,
    /// Square the attacker stands on.
    pub from: Position,
}

/// Find the first piece attacking the king at `king`.
///
/// Rook/queen rays are scanned first, then bishop/queen rays, then knight
/// offsets, then pawn offsets; the first hit wins.
pub fn find_threat(board: &Board, king: Position) -> Option<Threat> {
    let sliding = slider_attacker(board, king, &ORTHOGONAL, PieceKind::is_orthogonal_slider)
        .or_else(|| slider_attacker(board, king, &DIAGONAL, PieceKind::is_diagonal_slider))
        .map(|(from, attacker)| Threat { attacker, from });

    sliding
        .or_else(|| {
            leaper_attacker(board, king, &KNIGHT_OFFSETS, PieceKind::Knight).map(|from| Threat {
                attacker: PieceKind::Knight,
                from,
            })
        })
        .or_else(|| {
            leaper_attacker(board, king, &PAWN_OFFSETS, PieceKind::Pawn).map(|from| Threat {
                attacker: PieceKind::Pawn,
                from,
            })
        })
}

impl Board {
    /// Locate the king and look for a threat to it.
    ///
    /// Returns `Ok(None)` when the king is safe.
    pub fn threat(&self) -> Result<Option<Threat>, BoardError> {
        let king = self.king_position()?;
        trace!(size = self.size(), %king, "scanning for threats\n{}", self.pretty());
        let threat = find_threat(self, king);
        match threat {
            Some(t) => {
                debug!(%king, attacker = t.attacker.name(), from = %t.from, "king in check");
            }
            None => debug!(%king, "king not in check"),
        }
        Ok(threat)
    }

    /// Run the king-count validation and threat scan on an already-parsed board.
    pub fn status(&self) -> CheckStatus {
        match self.threat() {
            Ok(Some(_)) => CheckStatus::InCheck,
            Ok(None) => CheckStatus::NotInCheck,
            Err(err) => CheckStatus::Invalid(err),
        }
    }
}

/// Decide whether the single king on `rows` is in check, using `.` for empty cells.
pub fn detect<S: AsRef<str>>(rows: &[S]) -> CheckStatus {
    detect_with(rows, DEFAULT_EMPTY_MARKER)
}

/// Same as [`detect`] with a caller-chosen empty marker.
pub fn detect_with<S: AsRef<str>>(rows: &[S], empty_marker: char) -> CheckStatus {
    match Board::parse(rows, empty_marker) {
        Ok(board) => board.status(),
        Err(err) => {
            debug!(error = %err, "board rejected");
            CheckStatus::Invalid(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn threat_of(rows: &[&str]) -> Option<Threat> {
        Board::from_rows(rows).unwrap().threat().unwrap()
    }

    #[test]
    fn queen_on_open_file() {
        let rows = [
            ".......", "...Q...", ".......", "...K...", ".......", ".......", ".......",
        ];
        assert_eq!(detect(&rows), CheckStatus::InCheck);
        assert_eq!(
            threat_of(&rows),
            Some(Threat {
                attacker: PieceKind::Queen,
                from: Position::new(1, 3),
            })
        );
    }

    #[test]
    fn rook_adjacent_diagonal_does_not_attack() {
        let rows = ["....", ".K..", "..R.", "...."];
        assert_eq!(detect(&rows), CheckStatus::NotInCheck);
    }

    #[test]
    fn bishop_on_file_does_not_attack() {
        let rows = ["B...", "....", "B...", "K..."];
        assert_eq!(detect(&rows), CheckStatus::NotInCheck);
    }

    #[test]
    fn knight_jumps_over_blockers() {
        let rows = ["xxx.", "xKx.", "xxx.", "..N."];
        assert_eq!(
            threat_of(&rows),
            Some(Threat {
                attacker: PieceKind::Knight,
                from: Position::new(3, 2),
            })
        );
    }

    #[test]
    fn knight_only_threat() {
        let rows = ["...", "K..", "..N"];
        assert_eq!(
            threat_of(&rows),
            Some(Threat {
                attacker: PieceKind::Knight,
                from: Position::new(2, 2),
            })
        );
        assert_eq!(detect(&rows), CheckStatus::InCheck);
    }

    #[test]
    fn pawn_attacks_from_any_diagonal() {
        for rows in [
            ["P..", ".K.", "..."],
            ["..P", ".K.", "..."],
            ["...", ".K.", "P.."],
            ["...", ".K.", "..P"],
        ] {
            assert_eq!(detect(&rows), CheckStatus::InCheck, "{rows:?}");
        }
    }

    #[test]
    fn pawn_straight_ahead_is_harmless() {
        let rows = [".P.", "PKP", ".P."];
        assert_eq!(detect(&rows), CheckStatus::NotInCheck);
    }

    #[test]
    fn sliders_take_priority_over_pawns() {
        let rows = ["P...", ".K.R", "....", "...."];
        assert_eq!(threat_of(&rows).map(|t| t.attacker), Some(PieceKind::Rook));
    }

    #[test]
    fn invalid_inputs_are_distinguishable() {
        let empty: [&str; 0] = [];
        assert_eq!(detect(&empty), CheckStatus::Invalid(BoardError::EmptyBoard));
        assert_eq!(detect(&["..", ".."]), CheckStatus::Invalid(BoardError::NoKing));
        assert!(!detect(&["K", "."]).is_valid());
        assert!(detect(&["K"]).is_valid());
        assert!(!detect(&["K"]).is_in_check());
    }

    #[test]
    fn shape_errors_win_over_king_errors() {
        let status = detect(&["KK.", "..."]);
        assert!(matches!(
            status,
            CheckStatus::Invalid(BoardError::NonSquareBoard { .. })
        ));
    }

    #[test]
    fn custom_marker() {
        let rows = ["K__", "___", "R__"];
        assert_eq!(detect_with(&rows, '_'), CheckStatus::InCheck);
        // With the default marker every underscore is an unknown blocker.
        assert_eq!(detect(&rows), CheckStatus::NotInCheck);
    }

    #[test]
    fn board_error_converts_to_status() {
        let status: CheckStatus = BoardError::NoKing.into();
        assert_eq!(status, CheckStatus::Invalid(BoardError::NoKing));
    }
}
