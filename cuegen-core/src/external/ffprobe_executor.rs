//! FFprobe integration for reading chapter metadata.
//!
//! Chapters are read with `ffprobe -v error -show_chapters -pretty <file>`,
//! whose text output is what [`crate::chapters`] parses.

use crate::error::{CoreResult, command_failed_error, command_start_error};
use std::path::Path;
use std::process::Command;
use std::time::Instant;

use super::{DEFAULT_FFPROBE, check_dependency};

/// Runs ffprobe on behalf of the CUE pipeline.
pub trait FfprobeExecutor {
    /// Checks that ffprobe can be run.
    fn check_available(&self) -> CoreResult<()>;

    /// Returns the trimmed `-show_chapters -pretty` output for `input`.
    fn probe_chapters(&self, input: &Path) -> CoreResult<String>;
}

/// [`FfprobeExecutor`] that spawns the ffprobe binary.
#[derive(Debug, Clone)]
pub struct CommandFfprobeExecutor {
    program: String,
}

impl CommandFfprobeExecutor {
    /// Uses `ffprobe` from `PATH`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_program(DEFAULT_FFPROBE)
    }

    /// Uses a specific ffprobe binary.
    #[must_use]
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for CommandFfprobeExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl FfprobeExecutor for CommandFfprobeExecutor {
    fn check_available(&self) -> CoreResult<()> {
        check_dependency(&self.program)
    }

    fn probe_chapters(&self, input: &Path) -> CoreResult<String> {
        let mut cmd = Command::new(&self.program);
        cmd.args(["-v", "error", "-show_chapters", "-pretty"]).arg(input);

        log::info!("Starting '{}'", self.program);
        log::debug!("cmd: {cmd:?}");

        let started = Instant::now();
        let output = cmd
            .output()
            .map_err(|e| command_start_error(self.program.as_str(), e))?;
        log::info!(
            "Process took {:.3}s to finish.",
            started.elapsed().as_secs_f64()
        );

        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();

        if !output.status.success() {
            log::debug!("[STD OUT]\n{stdout}\n[/STD OUT]");
            log::debug!("[STD ERR]\n{stderr}\n[/STD ERR]");
            log::error!(
                "ffprobe failed for {}: {}",
                input.display(),
                output.status
            );
            return Err(command_failed_error(self.program.as_str(), output.status, stderr));
        }

        if !stderr.is_empty() {
            log::warn!("ffprobe reported: {stderr}");
        }

        Ok(stdout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    #[test]
    fn test_default_program() {
        assert_eq!(CommandFfprobeExecutor::default().program(), "ffprobe");
        assert_eq!(
            CommandFfprobeExecutor::with_program("/opt/ffprobe").program(),
            "/opt/ffprobe"
        );
    }

    #[test]
    fn test_missing_program_fails_to_start() {
        let executor = CommandFfprobeExecutor::with_program("cuegen-no-such-ffprobe");
        let err = executor.probe_chapters(Path::new("in.mp3")).unwrap_err();
        assert!(matches!(err, CoreError::CommandStart { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_zero_exit_is_command_failed() {
        let executor = CommandFfprobeExecutor::with_program("false");
        let err = executor.probe_chapters(Path::new("in.mp3")).unwrap_err();
        assert!(matches!(err, CoreError::CommandFailed { ref command, .. } if command == "false"));
        assert!(err.to_string().contains("exit code: 1"));
    }

    #[cfg(unix)]
    #[test]
    fn test_successful_run_returns_stdout() {
        let executor = CommandFfprobeExecutor::with_program("true");
        assert_eq!(executor.probe_chapters(Path::new("in.mp3")).unwrap(), "");
    }

    #[cfg(unix)]
    #[test]
    fn test_probe_passes_chapter_arguments() {
        use std::fs;
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("fake-ffprobe");
        fs::write(&script, "#!/bin/sh\nprintf '%s\\n' \"$@\"\n").unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();

        let executor = CommandFfprobeExecutor::with_program(script.to_string_lossy());
        let input = dir.path().join("My Book.m4b");
        let output = executor.probe_chapters(&input).unwrap();

        let args: Vec<&str> = output.lines().collect();
        assert_eq!(
            args,
            [
                "-v",
                "error",
                "-show_chapters",
                "-pretty",
                input.to_str().unwrap()
            ]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_failure_carries_stderr() {
        use std::fs;
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("failing-ffprobe");
        fs::write(&script, "#!/bin/sh\necho 'in.mp3: Invalid data' >&2\nexit 1\n").unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();

        let executor = CommandFfprobeExecutor::with_program(script.to_string_lossy());
        let err = executor.probe_chapters(Path::new("in.mp3")).unwrap_err();
        assert!(matches!(err, CoreError::CommandFailed { ref stderr, .. } if stderr == "in.mp3: Invalid data"));
        assert!(err.to_string().ends_with("exit code: 1\nin.mp3: Invalid data"));
    }
}
