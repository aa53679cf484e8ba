//! Development-time tracing for debugging the adapter.
//!
//! Tracing goes to stderr, gated by `RUST_LOG`. Product output — the
//! diagnostic line and workflow commands — is written to stdout and never
//! routed through tracing, so the host always sees it.

use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for development logging.
///
/// Reads `RUST_LOG` env var. Defaults to `warn` if unset.
/// Output: stderr, compact format.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
