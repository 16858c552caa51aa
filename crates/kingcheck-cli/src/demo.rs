//! Built-in example boards, printed with their expected and actual results.

use std::io::{self, Write};

use tracing::warn;

use kingcheck_core::DEFAULT_EMPTY_MARKER;

use crate::report::{Outcome, ReportStyle};

/// A named example board and the result it should produce.
#[derive(Debug, Clone, Copy)]
pub struct Scenario {
    pub name: &'static str,
    /// One row per line.
    pub board: &'static str,
    /// `Success`, `Fail`, or `Error`.
    pub expected: &'static str,
}

impl Scenario {
    /// Split the board text into rows.
    pub fn rows(&self) -> Vec<&'static str> {
        self.board.lines().collect()
    }
}

const SCENARIOS: [Scenario; 10] = [
    Scenario {
        name: "King in check by a Rook",
        board: "\
........
........
...K....
........
........
...R....
........
........",
        expected: "Success",
    },
    Scenario {
        name: "King not in check",
        board: "\
........
........
....K...
........
........
........
........
........",
        expected: "Fail",
    },
    Scenario {
        name: "King in check by a Queen (diagonal)",
        board: "\
Q.......
........
..K.....
........
........
........
........
........",
        expected: "Success",
    },
    Scenario {
        name: "King not in check (Bishop blocked)",
        board: "\
B.......
.N......
..K.....
........
........
........
........
........",
        expected: "Fail",
    },
    Scenario {
        name: "King in check by a Pawn",
        board: "\
........
........
....K...
...P....
........
........
........
........",
        expected: "Success",
    },
    Scenario {
        name: "King in check by a Knight",
        board: "\
........
........
...N....
........
....K...
........
........
........",
        expected: "Success",
    },
    Scenario {
        name: "Empty board",
        board: "",
        expected: "Error",
    },
    Scenario {
        name: "Board with multiple Kings",
        board: "\
K...K...
........
........
........
........
........
........
........",
        expected: "Error",
    },
    Scenario {
        name: "Board with no King",
        board: "\
........
........
........
........
........
........
........
........",
        expected: "Error",
    },
    Scenario {
        name: "Non-square board",
        board: "\
....
....
....K
....",
        expected: "Error",
    },
];

/// Return the built-in scenarios.
pub fn scenarios() -> &'static [Scenario] {
    &SCENARIOS
}

/// Print every scenario and its result, returning how many disagreed with their expectation.
pub fn run_demo<W: Write>(out: &mut W, style: ReportStyle) -> io::Result<usize> {
    writeln!(out, "--- Test Cases ---")?;
    let mut mismatches = 0;

    for (i, scenario) in scenarios().iter().enumerate() {
        writeln!(out)?;
        writeln!(
            out,
            "Test Case {}: {} (Expected: {})",
            i + 1,
            scenario.name,
            scenario.expected
        )?;

        let outcome = Outcome::evaluate(&scenario.rows(), DEFAULT_EMPTY_MARKER);
        let line = outcome.render(style);
        if !line.starts_with(scenario.expected) {
            warn!(case = i + 1, expected = scenario.expected, got = %line, "unexpected result");
            mismatches += 1;
        }
        writeln!(out, "{line}")?;
    }

    out.flush()?;
    Ok(mismatches)
}
