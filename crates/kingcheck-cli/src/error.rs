//! Errors raised by the text front end.

use std::path::PathBuf;

/// Errors that can occur while reading boards or writing reports.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The board file could not be opened.
    #[error("cannot open {path}: {source}")]
    Open {
        /// The path that failed to open.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The empty-cell marker would be read as something else.
    #[error("invalid empty marker {marker:?}: must not be whitespace, '#', or a piece code")]
    InvalidEmptyMarker {
        /// The rejected marker.
        marker: char,
    },

    /// Strict mode is on and at least one board was rejected.
    #[error("{count} invalid board(s) in input")]
    InvalidBoards {
        /// Number of rejected boards.
        count: usize,
    },

    /// An I/O error occurred while reading input or writing output.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
