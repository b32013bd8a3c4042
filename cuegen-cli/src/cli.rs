// cuegen-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::config::{DEFAULT_FFPROBE, FFPROBE_ENV_VAR};

// --- CLI Argument Definition ---

#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "cuegen: Generate a `.cue` file from the chapter metadata of a media file",
    long_about = "Reads the chapters of INPUT_FILE with ffprobe and writes a CUE sheet \
                  with one track per chapter next to it."
)]
pub struct Cli {
    /// The input file to read the chapter metadata from
    #[arg(required = true, value_name = "INPUT_FILE")]
    pub input_path: PathBuf,

    /// Optional: Where to write the CUE sheet (defaults to INPUT_FILE with a .cue extension)
    #[arg(short = 'o', long = "output", value_name = "CUE_PATH")]
    pub output_path: Option<PathBuf>,

    /// Optional: Read captured `ffprobe -show_chapters -pretty` output from a file
    /// instead of running ffprobe
    #[arg(long, value_name = "FILE")]
    pub probe_output: Option<PathBuf>,

    /// The ffprobe binary to run.
    /// Can also be set via the CUEGEN_FFPROBE environment variable.
    #[arg(long, value_name = "PATH", env = FFPROBE_ENV_VAR, default_value = DEFAULT_FFPROBE)]
    pub ffprobe: String,

    /// Print the CUE sheet to stdout instead of writing a file
    #[arg(long, conflicts_with = "output_path")]
    pub stdout: bool,

    /// Print the parsed chapters, sorted by start time, as JSON instead of a CUE sheet
    #[arg(long, conflicts_with_all = ["output_path", "stdout"])]
    pub json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses the process arguments.
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Parses the given arguments; used by tests.
pub fn parse_cli_from<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(args)
}
