//! Text front end for king-in-check detection: board input, result lines, and the demo harness.

pub mod config;
pub mod demo;
pub mod error;
pub mod input;
pub mod report;
pub mod runner;

pub use config::Config;
pub use demo::{Scenario, run_demo, scenarios};
pub use error::CliError;
pub use input::{BoardReader, read_board_file};
pub use report::{Outcome, ReportStyle, Summary, render};
pub use runner::Runner;
