//! Quiet tracing for test runs.
//!
//! Instead of mutating a process-global diagnostic channel, suites install a
//! subscriber that writes to a discard sink. Setting `RUST_LOG` turns
//! diagnostics back on when a failing run needs them.

use std::io;
use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Install the quiet subscriber for this test process.
///
/// Idempotent; later calls are no-ops. Installation uses `try_init`, so a
/// subscriber already registered by the test binary silently wins.
pub fn init_quiet_tracing() {
    INIT.call_once(|| {
        if std::env::var("RUST_LOG").is_ok() {
            // Debugging escape hatch: honor the requested filter and let
            // output reach the test writer.
            let _ = tracing_subscriber::fmt()
                .with_env_filter(EnvFilter::from_default_env())
                .with_test_writer()
                .try_init();
        } else {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(EnvFilter::new("off"))
                .with_writer(io::sink)
                .try_init();
        }
    });
}
