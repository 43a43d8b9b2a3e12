//! Structured JSON logging for processes embedding the engine.
//!
//! Each initializer runs at most once. Whichever installs a global
//! subscriber first wins; later calls from either function are no-ops.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

static ENV_INIT: Once = Once::new();
static FILTER_INIT: Once = Once::new();

/// Install a JSON subscriber filtered by `LORE_LOG`, defaulting to `info`.
///
/// Idempotent. Does nothing if another global subscriber is already set.
pub fn init_tracing() {
    ENV_INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("LORE_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .json()
            .try_init();
    });
}

/// Same as [`init_tracing`] with an explicit filter string (tests, embedding).
///
/// Has no effect once [`init_tracing`] or an outside subscriber is installed.
pub fn init_tracing_with_filter(filter: &str) {
    FILTER_INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(filter))
            .with_target(true)
            .json()
            .try_init();
    });
}
