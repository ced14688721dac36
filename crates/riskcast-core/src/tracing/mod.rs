//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the Riskcast tracing/logging system.
///
/// Reads the `RISKCAST_LOG` environment variable for per-subsystem log
/// levels, e.g. `RISKCAST_LOG=riskcast_engine=debug`. Falls back to
/// `riskcast=info` when unset or invalid.
///
/// Idempotent — calling it multiple times is safe.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("RISKCAST_LOG")
            .unwrap_or_else(|_| EnvFilter::new("riskcast=info"));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true))
            .with(filter)
            .init();
    });
}
