// ============================================================================
// cuegen-cli/src/logging.rs
// ============================================================================
//
// LOGGING: env_logger setup for the CLI
//
// The application logs through the `log` crate with `env_logger` as backend:
// - default level is info, `--verbose` raises it to debug
// - RUST_LOG, when set, overrides both

use log::LevelFilter;

/// Log level selected by the `--verbose` flag.
#[must_use]
pub fn level_for(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Initializes env_logger on stderr. Safe to call more than once.
pub fn init_logging(verbose: bool) {
    let _ = env_logger::Builder::new()
        .filter_level(level_for(verbose))
        .parse_default_env()
        .format_timestamp(None)
        .format_target(false)
        .target(env_logger::Target::Stderr)
        .try_init();

    log::debug!("Logger initialized with level: {}", level_for(verbose));
}
