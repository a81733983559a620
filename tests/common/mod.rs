//! Shared test helpers

use tracing_subscriber::EnvFilter;

/// Install a test-writer subscriber once; later calls are no-ops.
///
/// Run with `RUST_LOG=depot=debug` to see store and codec events.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
