//! Logging setup for the service binary.

use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber.
///
/// `RUST_LOG` wins when set. Otherwise production logs at `info` without colours and
/// every other environment at `debug`.
pub fn init(production: bool) {
    let default_level = if production { "info" } else { "debug" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // A second call (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(!production)
        .with_target(false)
        .try_init();
}
