//! Logging setup for the searchbox front end.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize tracing with searchbox defaults.
///
/// `RUST_LOG` takes precedence over `default_filter`. Output goes to stderr
/// so that stdout carries only query results.
pub fn init_with_filter(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}
