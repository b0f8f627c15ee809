//! Logging setup for binaries and demos
//!
//! The library only emits `tracing` events; applications call [`init`] once
//! to print them. The filter comes from `RUST_LOG` and defaults to `info`.

use tracing_subscriber::fmt::{self, format::FmtSpan};
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber
///
/// Span close events are printed when the filter enables `debug`. Calling
/// this twice is harmless: the second call leaves the first subscriber in
/// place.
pub fn init() {
    init_with_default("info");
}

/// Install the global subscriber with a fallback filter for when `RUST_LOG`
/// is unset
pub fn init_with_default(default_filter: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let is_debug = env_filter.to_string().contains("debug")
        || env_filter.to_string().contains("trace");

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_timer(fmt::time::uptime())
        .with_writer(std::io::stderr)
        .with_span_events(if is_debug {
            FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        });

    // Fails only if a subscriber is already installed
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init();
}
