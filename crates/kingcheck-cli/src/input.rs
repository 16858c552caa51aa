//! Splitting a text stream into boards.
//!
//! Rows of one board are consecutive lines. One or more blank lines end a
//! board. Lines whose first non-space character is `#` are comments.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

use tracing::trace;

use crate::error::CliError;

/// Iterator over the boards in a text stream.
pub struct BoardReader<R> {
    lines: Lines<R>,
    /// 1-based number of the last line read, for log context.
    line_no: usize,
}

impl<R: BufRead> BoardReader<R> {
    /// Wrap a buffered reader.
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_no: 0,
        }
    }

    /// Return the number of lines consumed so far.
    pub fn line_no(&self) -> usize {
        self.line_no
    }
}

/// Open `path` and read boards from it.
pub fn read_board_file(path: &Path) -> Result<BoardReader<BufReader<File>>, CliError> {
    let file = File::open(path).map_err(|source| CliError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BoardReader::new(BufReader::new(file)))
}

impl<R: BufRead> Iterator for BoardReader<R> {
    type Item = Result<Vec<String>, CliError>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut rows = Vec::new();
        for line in self.lines.by_ref() {
            let line = match line {
                Ok(line) => line,
                Err(e) => return Some(Err(e.into())),
            };
            self.line_no += 1;

            let row = line.trim_end_matches('\r');
            if row.trim().is_empty() {
                if rows.is_empty() {
                    continue;
                }
                break;
            }
            if row.trim_start().starts_with('#') {
                trace!(line = self.line_no, "skipping comment");
                continue;
            }
            rows.push(row.to_string());
        }

        if rows.is_empty() { None } else { Some(Ok(rows)) }
    }
}
