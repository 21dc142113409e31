//! Tracing subscriber setup for the CLI.

use tracing_subscriber::prelude::*;

const DEFAULT_LOG_CONFIG: &str = "warn";
const VERBOSE_LOG_CONFIG: &str = "matform=debug,info";

/// Initialize logging to stderr.
/// - `RUST_LOG` wins when set.
/// - Else `verbose` turns on debug events from matform.
/// - Else only warnings and errors are shown.
pub fn init(verbose: bool) {
    let fallback = if verbose {
        VERBOSE_LOG_CONFIG
    } else {
        DEFAULT_LOG_CONFIG
    };
    let env_filter =
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback.into());

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .try_init();
}
