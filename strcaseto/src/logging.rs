//! Diagnostic logging to stderr.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `STRCASETO_LOG=debug`.
pub(crate) const LOG_ENV: &str = "STRCASETO_LOG";

/// Install the stderr subscriber. Logging is off unless [`LOG_ENV`] is set.
pub(crate) fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("off"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .try_init();
}
