use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use kingcheck_cli::{Config, ReportStyle, Runner, read_board_file, run_demo};

/// Report whether the single king on each board is in check.
///
/// Boards are read one row per line; blank lines separate boards and lines
/// starting with `#` are ignored. Prints `Success` when the king is in check
/// and `Fail` when it is not. Invalid boards are reported on stderr.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Board file to read (stdin when omitted)
    input: Option<PathBuf>,

    /// Character marking an empty cell
    #[arg(long, default_value_t = kingcheck_core::DEFAULT_EMPTY_MARKER)]
    empty: char,

    /// Name the attacking piece and the reason for rejected boards
    #[arg(short, long)]
    verbose: bool,

    /// Exit with an error if any board is invalid
    #[arg(long)]
    strict: bool,

    /// Run the built-in example boards instead of reading input
    #[arg(long, conflicts_with = "input")]
    demo: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    info!(?args, "kingcheck starting");

    let config = Config {
        empty_marker: args.empty,
        style: if args.verbose {
            ReportStyle::Verbose
        } else {
            ReportStyle::Plain
        },
        fail_on_invalid: args.strict,
    };

    let runner = Runner::new(config).context("invalid options")?;
    let mut out = io::stdout().lock();

    if args.demo {
        let mismatches = run_demo(&mut out, config.style)?;
        if mismatches > 0 {
            bail!("{mismatches} example board(s) gave an unexpected result");
        }
        return Ok(());
    }

    let mut err = io::stderr().lock();
    let summary = match &args.input {
        Some(path) => {
            let reader = read_board_file(path)?;
            runner.run_boards(reader, &mut out, &mut err)
        }
        None => runner.run(io::stdin().lock(), &mut out, &mut err),
    }
    .context("board check failed")?;

    info!(%summary, "done");
    Ok(())
}
