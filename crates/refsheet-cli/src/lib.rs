//! CLI driver for the refsheet cheatsheet parser.
//!
//! Provides the `refsheet` binary: `single <file>` parses one markdown
//! file to JSON, `batch <pattern>` glob-expands and parses many. Both are
//! thin wrappers over [`refsheet_content`]; all parsing semantics live
//! there.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod handlers;

use tracing_subscriber::EnvFilter;

/// Initialise tracing-based logging.
///
/// Uses `RUST_LOG` env var if set, otherwise defaults based on verbosity
/// flags. Library `log` records are picked up through the subscriber's
/// log bridge.
pub fn init_logging(verbose: bool, quiet: bool) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if quiet {
        EnvFilter::new("warn")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    // Ignore error if a subscriber is already set (e.g. in tests).
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_does_not_panic() {
        init_logging(false, false);
        init_logging(true, false);
        init_logging(false, true);
    }
}
