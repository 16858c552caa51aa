//! Batch driver: read boards, detect, write one line per board.

use std::io::{BufRead, Write};

use tracing::{debug, warn};

use crate::config::Config;
use crate::error::CliError;
use crate::input::BoardReader;
use crate::report::{Outcome, Summary};

/// Drives detection over every board in a stream.
pub struct Runner {
    config: Config,
}

impl Runner {
    /// Create a runner, rejecting a configuration that cannot be applied.
    pub fn new(config: Config) -> Result<Self, CliError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Process every board from `input`.
    ///
    /// `Success`/`Fail` lines go to `out`, `Error:` lines go to `err`. In
    /// strict mode the run fails after all boards are processed if any was
    /// rejected.
    pub fn run<R, W, E>(&self, input: R, out: &mut W, err: &mut E) -> Result<Summary, CliError>
    where
        R: BufRead,
        W: Write,
        E: Write,
    {
        self.run_boards(BoardReader::new(input), out, err)
    }

    /// Same as [`Runner::run`] for an already-wrapped board stream.
    pub fn run_boards<R, W, E>(
        &self,
        mut boards: BoardReader<R>,
        out: &mut W,
        err: &mut E,
    ) -> Result<Summary, CliError>
    where
        R: BufRead,
        W: Write,
        E: Write,
    {
        let mut summary = Summary::default();

        while let Some(rows) = boards.next() {
            let rows = rows?;
            let index = summary.total() + 1;
            debug!(board = index, rows = rows.len(), line = boards.line_no(), "checking board");

            let outcome = Outcome::evaluate(&rows, self.config.empty_marker);
            summary.record(&outcome.status);
            let line = outcome.render(self.config.style);

            if outcome.status.is_valid() {
                debug!(board = index, in_check = outcome.status.is_in_check(), "board checked");
                writeln!(out, "{line}")?;
            } else {
                warn!(board = index, status = ?outcome.status, "board rejected");
                writeln!(err, "{line}")?;
            }
        }

        out.flush()?;
        err.flush()?;
        debug!(%summary, "run finished");

        if self.config.fail_on_invalid && summary.invalid > 0 {
            return Err(CliError::InvalidBoards {
                count: summary.invalid,
            });
        }
        Ok(summary)
    }
}
