//! Diagnostic tracing for the push utility.
//!
//! Tracing goes to stderr and is controlled by `RUST_LOG`. Operator-facing
//! messages and relayed git output go to stdout through the console and are
//! unaffected by the filter.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG`. Defaults to `warn` if unset, which surfaces ignored remote
/// removals and rejected pushes without drowning the menu.
///
/// # Example
/// ```bash
/// RUST_LOG=gitpush=debug gitpush --workdir ./project
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
