//! Main entry point for the cuegen CLI application.
//!
//! This handles command-line argument parsing, logging setup, and dispatching
//! to the generate command. Errors are printed to stderr and turn into a
//! non-zero exit code.

use cuegen_cli::logging::init_logging;
use cuegen_cli::{GenerateOutcome, parse_cli, run_generate};

use std::process::ExitCode;

fn main() -> ExitCode {
    let cli_args = parse_cli();
    init_logging(cli_args.verbose);

    log::debug!("cuegen v{} starting", env!("CARGO_PKG_VERSION"));

    match run_generate(&cli_args) {
        Ok(GenerateOutcome::Written(path)) => {
            log::debug!("Finished, CUE sheet at {}", path.display());
            ExitCode::SUCCESS
        }
        Ok(GenerateOutcome::Printed) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("cuegen failed: {e:?}");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
