//! Tracing initialization.

use std::sync::Once;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

static INIT: Once = Once::new();

/// Default filter when `REVISE_LOG` is unset or invalid.
const DEFAULT_FILTER: &str = "revise=warn";

/// Initialize logging to stderr.
///
/// Reads the `REVISE_LOG` environment variable for the filter, e.g.
/// `REVISE_LOG=revise=debug`. Stdout is left to the quiz itself.
///
/// Safe to call more than once.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("REVISE_LOG")
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .with(filter)
            .init();
    });
}
