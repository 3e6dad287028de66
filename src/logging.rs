//! Logger initialization
//!
//! `env_logger` backend for the `log` facade used throughout the crate.

use log::LevelFilter;
use std::env;

/// Initialize logging at `Info`, or `Debug` when `verbose` is set
///
/// `RUST_LOG`, when present, overrides the default filter. Calling this more
/// than once keeps the first logger.
pub fn init_logger(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    if let Ok(spec) = env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    if builder.try_init().is_ok() {
        log::debug!("Logger initialized at {level:?} level");
    }
}
