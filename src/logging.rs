//! Logging setup for the command-line tools.
//!
//! Installs a global tracing subscriber that writes to stderr so trace
//! output never mixes with the report on stdout. The debug flag raises the
//! default level to `debug`, which surfaces the walker's per-chunk events.

use std::io;

use tracing_subscriber::EnvFilter;

/// Initialize the global subscriber. Safe to call once per process;
/// a second call is ignored.
pub fn init(debug: bool) {
    let default = if debug { "wavemeta=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
