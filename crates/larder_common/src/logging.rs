//! Logging bootstrap
//!
//! Diagnostics go to stderr so they never interleave with rendered pages.
//! Level comes from $LARDER_LOG, then $RUST_LOG, then the caller's default.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "LARDER_LOG";

/// Build the filter without installing anything
pub fn env_filter(default_level: &str) -> EnvFilter {
    std::env::var(LOG_ENV)
        .ok()
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new(default_level))
}

/// Install the global subscriber. Safe to call more than once.
pub fn init(default_level: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
