// cuegen-cli/src/config.rs
//
// Defines default configuration constants for the `cuegen` CLI.

/// ffprobe binary used when neither `--ffprobe` nor the environment names one.
pub const DEFAULT_FFPROBE: &str = cuegen_core::external::DEFAULT_FFPROBE;

/// Environment variable overriding the ffprobe binary.
pub const FFPROBE_ENV_VAR: &str = "CUEGEN_FFPROBE";
