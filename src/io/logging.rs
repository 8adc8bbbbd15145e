//! Tracing subscriber setup for the binary

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Build the filter: `RUST_LOG` directives on top of a default `level`
pub fn filter(level: Level) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy()
}

/// Install a stderr `fmt` subscriber
///
/// Calling it again once a subscriber is installed has no effect.
pub fn init(level: Level) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
