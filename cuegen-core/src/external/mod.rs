// ============================================================================
// cuegen-core/src/external/mod.rs
// ============================================================================
//
// EXTERNAL TOOLS: Interactions with ffprobe
//
// This module encapsulates running ffprobe to obtain chapter metadata. The
// FfprobeExecutor trait is the seam: production code uses the command-backed
// implementation, tests substitute their own.
//
// KEY COMPONENTS:
// - FfprobeExecutor trait and CommandFfprobeExecutor implementation
// - Dependency checking

// ---- Internal crate imports ----
use crate::error::{CoreError, CoreResult, command_start_error};

// ---- Standard library imports ----
use std::io;
use std::process::{Command, Stdio};

// ============================================================================
// SUBMODULES
// ============================================================================

/// Contains the trait and implementation for executing ffprobe commands
pub mod ffprobe_executor;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use ffprobe_executor::{CommandFfprobeExecutor, FfprobeExecutor};

/// Name of the ffprobe binary looked up on `PATH` by default.
pub const DEFAULT_FFPROBE: &str = "ffprobe";

// ============================================================================
// DEPENDENCY CHECKING
// ============================================================================

/// Checks that an external command can be run.
///
/// Runs `cmd_name -L` (print license), which ffprobe answers with exit code 0.
///
/// # Returns
///
/// * `Ok(())` - The command ran and exited successfully
/// * `Err(CoreError::DependencyNotFound)` - The command is missing or exited with an error
/// * `Err(CoreError::CommandStart)` - The command exists but could not be started
pub fn check_dependency(cmd_name: &str) -> CoreResult<()> {
    let result = Command::new(cmd_name)
        .arg("-L")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match result {
        Ok(status) if status.success() => {
            log::debug!("Found dependency: {cmd_name}");
            Ok(())
        }
        Ok(status) => {
            log::warn!("Dependency check '{cmd_name} -L' exited with {status}");
            Err(CoreError::DependencyNotFound(cmd_name.to_string()))
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::warn!("Dependency '{cmd_name}' not found.");
            Err(CoreError::DependencyNotFound(cmd_name.to_string()))
        }
        Err(e) => {
            log::error!("Failed to start dependency check command '{cmd_name}': {e}");
            Err(command_start_error(cmd_name, e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_dependency_is_reported() {
        let err = check_dependency("cuegen-surely-not-an-installed-binary").unwrap_err();
        assert!(matches!(err, CoreError::DependencyNotFound(ref name)
            if name == "cuegen-surely-not-an-installed-binary"));
    }
}
