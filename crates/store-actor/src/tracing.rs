//! Tracing setup shared by every binary built on the store.

/// Initializes structured logging for the process.
///
/// Verbosity is controlled through the `RUST_LOG` environment variable:
/// `info` for lifecycle events, `debug` to see every dispatched command.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}
