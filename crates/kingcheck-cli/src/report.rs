//! Turning detection results into output lines.

use std::fmt;

use kingcheck_core::{Board, BoardError, CheckStatus, InvalidReason, Threat};

/// How much detail each result line carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportStyle {
    /// `Success`, `Fail`, or `Error: <message>`.
    #[default]
    Plain,
    /// Plain text followed by the attacker or the validation detail.
    Verbose,
}

/// A status together with the threat that produced it, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub status: CheckStatus,
    pub threat: Option<Threat>,
}

impl Outcome {
    /// Parse and scan one board.
    pub fn evaluate<S: AsRef<str>>(rows: &[S], empty_marker: char) -> Outcome {
        let threat = Board::parse(rows, empty_marker).and_then(|board| board.threat());
        match threat {
            Ok(Some(threat)) => Outcome {
                status: CheckStatus::InCheck,
                threat: Some(threat),
            },
            Ok(None) => Outcome {
                status: CheckStatus::NotInCheck,
                threat: None,
            },
            Err(err) => Outcome {
                status: CheckStatus::Invalid(err),
                threat: None,
            },
        }
    }

    /// Render this outcome as a single line, without a trailing newline.
    pub fn render(&self, style: ReportStyle) -> String {
        let plain = render(&self.status);
        match (style, &self.status, self.threat) {
            (ReportStyle::Plain, _, _) => plain,
            (ReportStyle::Verbose, CheckStatus::InCheck, Some(threat)) => {
                format!("{plain} ({} at {})", threat.attacker.name(), threat.from)
            }
            (ReportStyle::Verbose, CheckStatus::Invalid(err), _) => format!("{plain} ({err})"),
            (ReportStyle::Verbose, _, _) => plain,
        }
    }
}

/// Human message for a rejected board.
pub fn invalid_message(err: &BoardError) -> &'static str {
    match err.reason() {
        InvalidReason::EmptyBoard => "Empty board provided.",
        InvalidReason::NonSquareBoard => "Board is not square or has invalid dimensions.",
        InvalidReason::NoKing => "No King ('K') found on the board.",
        InvalidReason::MultipleKings => {
            "Multiple Kings ('K') found on the board. Only one is allowed."
        }
    }
}

/// `Success` for a king in check, `Fail` for a safe king, `Error: ...` otherwise.
pub fn render(status: &CheckStatus) -> String {
    match status {
        CheckStatus::InCheck => "Success".to_string(),
        CheckStatus::NotInCheck => "Fail".to_string(),
        CheckStatus::Invalid(err) => format!("Error: {}", invalid_message(err)),
    }
}

/// Running totals over a batch of boards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    pub in_check: usize,
    pub not_in_check: usize,
    pub invalid: usize,
}

impl Summary {
    /// Count one result.
    pub fn record(&mut self, status: &CheckStatus) {
        match status {
            CheckStatus::InCheck => self.in_check += 1,
            CheckStatus::NotInCheck => self.not_in_check += 1,
            CheckStatus::Invalid(_) => self.invalid += 1,
        }
    }

    /// Total boards seen.
    pub fn total(&self) -> usize {
        self.in_check + self.not_in_check + self.invalid
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} board(s): {} in check, {} not in check, {} invalid",
            self.total(),
            self.in_check,
            self.not_in_check,
            self.invalid
        )
    }
}
