//! Run configuration for the text front end.

use kingcheck_core::{DEFAULT_EMPTY_MARKER, PieceKind};

use crate::error::CliError;
use crate::report::ReportStyle;

/// Knobs set from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Character that marks an empty cell.
    pub empty_marker: char,
    /// How each result line is rendered.
    pub style: ReportStyle,
    /// Turn any invalid board into a run failure.
    pub fail_on_invalid: bool,
}

impl Config {
    /// Check that the settings can be applied to board input.
    ///
    /// The empty marker must not collide with the reader's framing (blank
    /// lines and `#` comments) or with a piece code.
    pub fn validate(&self) -> Result<(), CliError> {
        let marker = self.empty_marker;
        if marker.is_whitespace() || marker == '#' || PieceKind::from_code(marker).is_some() {
            return Err(CliError::InvalidEmptyMarker { marker });
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            empty_marker: DEFAULT_EMPTY_MARKER,
            style: ReportStyle::Plain,
            fail_on_invalid: false,
        }
    }
}
