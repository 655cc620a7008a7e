//! Tracing setup for the `medtrack` binary.
//!
//! Stdout carries the rendered calendar, list and checklist views, so log
//! lines always go to stderr and can be filtered without touching the output.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the global subscriber once at startup.
///
/// `default_level` comes from `[logging] level` in the config file; a set
/// `RUST_LOG` takes precedence over it.
pub fn init_with_level(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

/// Debug-level subscriber for unit tests, safe to call more than once
#[cfg(test)]
pub fn init_test() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(EnvFilter::new("debug"))
        .try_init();
}
