//! Diagnostics go to standard error through `tracing`, so standard output only ever carries the
//! answer.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or can't be parsed.
const DEFAULT_FILTER: &str = "warn";

/// Installs a global `fmt` subscriber writing to standard error, filtered by `RUST_LOG`.
///
/// Only the first call installs anything. Later calls (or a subscriber installed by someone else)
/// leave the existing one in place.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
