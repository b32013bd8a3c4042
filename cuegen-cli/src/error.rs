//! Result type shared by the CLI commands.
//!
//! The CLI adds no error variants of its own: every failure, including
//! reading a captured probe output file, is a [`CoreError`] so `main` can
//! print it the same way.

use cuegen_core::{CoreError, CoreResult};

use std::io;
use std::path::Path;

/// Result of a CLI command.
pub type CliResult<T> = CoreResult<T>;

/// Wraps a failed read of a `--probe-output` file.
pub fn probe_output_read_error(path: &Path, source: io::Error) -> CoreError {
    CoreError::ProbeOutputRead {
        path: path.display().to_string(),
        source,
    }
}
