//! Diagnostic tracing for the CLI binaries.
//!
//! Answers and scaffolding reports go to stdout; tracing goes to stderr so it
//! never mixes with them.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG`, defaulting to `warn`, e.g. `RUST_LOG=aoc_cli=debug aoc 2025 2`.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
