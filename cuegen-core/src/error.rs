// ============================================================================
// cuegen-core/src/error.rs
// ============================================================================
//
// ERROR HANDLING: Error Types for cuegen-core
//
// Two layers of errors live here:
// - ParseError: failures while turning ffprobe chapter text into chapters.
//   Every parsing function returns these explicitly, never panics.
// - CoreError: failures of the surrounding shell (running ffprobe, reading
//   and writing files) plus the aggregated chapter parse failures.

use std::fmt;
use std::io;
use std::num::ParseIntError;
use std::process::ExitStatus;

use thiserror::Error;

/// Errors produced while parsing timestamps and chapter blocks.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A timestamp did not match `H*:MM:SS.MICROS`.
    #[error("Timestamp::parse argument '{input}' is not in the correct format: H*:MM:SS.MICROS")]
    TimestampFormat { input: String },

    /// A chapter block is not enclosed in `[CHAPTER]` / `[/CHAPTER]`.
    #[error("Chapter::parse argument has wrong structure.\n{block}")]
    Structure { block: String },

    /// A required property (`id`, `start_time`, `end_time`) is absent.
    #[error("Chapter::parse failed: missing required property '{field}'")]
    MissingField { field: &'static str },

    #[error("Chapter::parse failed: invalid id '{value}': {source}")]
    InvalidId {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Chapter::parse failed: duplicate key '{key}'")]
    DuplicateKey { key: String },

    /// A `TAG:` line without a `=` separator.
    #[error("Chapter::parse failed: malformed tag line '{line}'")]
    MalformedTag { line: String },
}

/// Result type for parsing operations.
pub type ParseResult<T> = std::result::Result<T, ParseError>;

/// A parse failure together with the position of the block that caused it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockError {
    /// Position of the block among all blocks, not among the failures.
    pub index: usize,
    pub error: ParseError,
}

impl fmt::Display for BlockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ERROR: {}: {}", self.index, self.error)
    }
}

/// Every chapter block that failed to parse, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterErrors(pub Vec<BlockError>);

impl ChapterErrors {
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &BlockError> {
        self.0.iter()
    }
}

impl fmt::Display for ChapterErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        write!(f, "{}", lines.join("\n\n"))
    }
}

impl std::error::Error for ChapterErrors {}

/// Errors of the shell around the parser: process execution and file I/O.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to start {command}: {source}")]
    CommandStart {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error(
        "{command} returned with exit code: {}{}",
        exit_code_label(.status),
        stderr_excerpt(.stderr)
    )]
    CommandFailed {
        command: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error(
        "Could not find `{0}` on your system.\n\
         Ensure the `ffmpeg` package is installed and added to your path.\n\
         (ffmpeg download: https://ffmpeg.org/download.html)"
    )]
    DependencyNotFound(String),

    #[error("Path error: {0}")]
    PathError(String),

    #[error("Input file not found: {0}")]
    InputNotFound(String),

    #[error("Error while writing `.cue` file {path}: {source}")]
    CueWrite {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read ffprobe output from {path}: {source}")]
    ProbeOutputRead {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Errors while parsing `ffprobe` output:\n\n{0}")]
    ChapterParse(#[from] ChapterErrors),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("{0}")]
    OperationFailed(String),
}

/// Result type for cuegen-core shell operations.
pub type CoreResult<T> = std::result::Result<T, CoreError>;

fn exit_code_label(status: &ExitStatus) -> String {
    status
        .code()
        .map_or_else(|| "terminated by signal".to_string(), |code| code.to_string())
}

const STDERR_EXCERPT_LINES: usize = 5;

/// Last few non-empty stderr lines, prefixed with a newline, or nothing.
fn stderr_excerpt(stderr: &str) -> String {
    let lines: Vec<&str> = stderr
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.trim().is_empty())
        .collect();
    if lines.is_empty() {
        return String::new();
    }
    let tail = &lines[lines.len().saturating_sub(STDERR_EXCERPT_LINES)..];
    format!("\n{}", tail.join("\n"))
}

/// Builds the error for a command that could not be spawned.
pub fn command_start_error(command: impl Into<String>, source: io::Error) -> CoreError {
    CoreError::CommandStart {
        command: command.into(),
        source,
    }
}

/// Builds the error for a command that ran but exited unsuccessfully.
pub fn command_failed_error(
    command: impl Into<String>,
    status: ExitStatus,
    stderr: impl Into<String>,
) -> CoreError {
    CoreError::CommandFailed {
        command: command.into(),
        status,
        stderr: stderr.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_error_names_input_and_format() {
        let err = ParseError::TimestampFormat {
            input: "12:34".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("'12:34'"));
        assert!(msg.contains("H*:MM:SS.MICROS"));
    }

    #[test]
    fn test_chapter_errors_display_lists_every_block() {
        let errors = ChapterErrors(vec![
            BlockError {
                index: 0,
                error: ParseError::MissingField { field: "id" },
            },
            BlockError {
                index: 3,
                error: ParseError::MissingField { field: "end_time" },
            },
        ]);

        let msg = errors.to_string();
        assert!(msg.contains("ERROR: 0: "));
        assert!(msg.contains("ERROR: 3: "));
        assert!(msg.contains("'end_time'"));
        assert_eq!(errors.len(), 2);
    }

    #[cfg(unix)]
    fn exit_status(code: i32) -> ExitStatus {
        use std::os::unix::process::ExitStatusExt;
        ExitStatus::from_raw(code << 8)
    }

    #[cfg(unix)]
    #[test]
    fn test_command_failed_shows_stderr_tail() {
        let stderr = (1..=7)
            .map(|n| format!("line {n}"))
            .collect::<Vec<_>>()
            .join("\n");
        let err = command_failed_error("ffprobe", exit_status(1), stderr);
        assert_eq!(
            err.to_string(),
            "ffprobe returned with exit code: 1\nline 3\nline 4\nline 5\nline 6\nline 7"
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_command_failed_without_stderr() {
        let err = command_failed_error("ffprobe", exit_status(2), "  \n");
        assert_eq!(err.to_string(), "ffprobe returned with exit code: 2");
    }

    #[test]
    fn test_dependency_not_found_mentions_download() {
        let err = CoreError::DependencyNotFound("ffprobe".to_string());
        let msg = err.to_string();
        assert!(msg.contains("`ffprobe`"));
        assert!(msg.contains("https://ffmpeg.org/download.html"));
    }
}
