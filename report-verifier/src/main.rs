// These Clippy lints are disabled because this is a CLI binary, not a library:
// - print_stdout/print_stderr: the report is written to stdout, failures to stderr.
// - exit: the exit status is the autograder contract.
#![allow(clippy::print_stdout, clippy::print_stderr, clippy::exit)]

mod logging;

use std::io::Write;

use anyhow::Context;
use clap::Parser;
use report_verifier::{VerifierConfig, output, persist, verify};

/// Exit status for I/O failures, distinct from 1 ("checks failed").
const EXIT_RUNTIME_ERROR: i32 = 2;

/// Verify the ML tool installation report in the current directory.
///
/// Reads `installation_report.txt`, prints one line per check and writes
/// `verification_result.json`. Exits 0 when every check passes, 1 otherwise.
#[derive(Parser, Debug)]
#[command(name = "verify-installation", version, about, long_about = None)]
struct Cli {
    /// Increase diagnostic logging on stderr (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn run(config: &VerifierConfig) -> anyhow::Result<i32> {
    let verification = verify(config).context("verification aborted")?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    output::write_checks(&verification, &mut out)?;
    out.flush()?;

    persist(config, &verification.results).context("could not save verification result")?;

    output::write_summary(&verification.results, &mut out)?;
    out.flush()?;

    Ok(verification.exit_code())
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(&VerifierConfig::default()) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(EXIT_RUNTIME_ERROR);
        }
    }
}
