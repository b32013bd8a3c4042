//! Library component for the cuegen CLI application.
//!
//! This contains the argument definitions and command logic that the binary
//! crate uses.

/// Command-line interface definitions using clap
pub mod cli;

/// Command implementations
pub mod commands;

/// Default configuration constants
pub mod config;

/// Error handling utilities for the CLI
pub mod error;

/// Logging setup
pub mod logging;

// Re-exports for convenience
pub use cli::{Cli, parse_cli, parse_cli_from};
pub use commands::generate::{GenerateOutcome, run_generate, run_generate_with};
