//! # Logging
//!
//! `tracing` subscriber initialization for binaries and tests.
//!
//! The library itself only emits events; embedding applications own the
//! subscriber. These helpers cover the common cases with an `EnvFilter`
//! honoring `RUST_LOG` and defaulting to `multiship=info`.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("multiship=info"))
}

/// Initializes a compact human-readable subscriber.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init() {
    tracing_subscriber::registry()
        .with(env_filter())
        .with(tracing_subscriber::fmt::layer().with_target(false).compact())
        .try_init()
        .ok();
}

/// Initializes a JSON subscriber for structured log shipping.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_json() {
    tracing_subscriber::registry()
        .with(env_filter())
        .with(tracing_subscriber::fmt::layer().json())
        .try_init()
        .ok();
}
