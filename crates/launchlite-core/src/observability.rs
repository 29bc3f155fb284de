//! Tracing setup for launcher binaries and tests.

use tracing_subscriber::EnvFilter;

/// Log filter environment variable, e.g. `LAUNCHLITE_LOG_LEVEL=launchlite=debug`.
pub const LOG_LEVEL_ENV: &str = "LAUNCHLITE_LOG_LEVEL";

/// Install the global tracing subscriber. Safe to call more than once;
/// later calls are no-ops.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_LEVEL_ENV)
        .unwrap_or_else(|_| EnvFilter::new("launchlite=info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        init();
        init();
    }
}
