// file: src/logging/logger.rs
// version: 1.0.0
// guid: 0b9e4c71-5d2a-4f36-8c1e-7a3b6d9e2f58

//! Logger initialization and configuration
//!
//! Diagnostics go to stderr so that stdout stays reserved for the colored
//! status lines printed by [`crate::console`].

use crate::Result;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Pick the filter directive for the given verbosity flags.
///
/// `RUST_LOG` wins when set; otherwise the bundler stays quiet unless asked,
/// since progress is already reported on stdout.
pub fn filter_directive(verbose: bool, quiet: bool) -> &'static str {
    if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    }
}

/// Initialize the logging system
pub fn init_logger(verbose: bool, quiet: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(verbose, quiet)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init()
        .map_err(|e| {
            crate::error::BundlerError::ConfigError(format!("Failed to initialize logger: {}", e))
        })?;

    Ok(())
}
