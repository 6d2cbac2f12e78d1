//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::ObservabilityConfig;
use crate::constants::{DEFAULT_LOG_FILTER, LOG_ENV_VAR};

static INIT: Once = Once::new();

/// Initialize the engine's tracing/logging system.
///
/// Reads the `CBM_LOG` environment variable for per-crate log levels.
/// Format: `CBM_LOG=cbm_redundancy=debug,cbm_noise=info`
///
/// Falls back to `cbm=info` if `CBM_LOG` is not set or is invalid.
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    install(filter);
}

/// Initialize tracing with a custom filter string (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str) {
    install(EnvFilter::new(filter));
}

/// Initialize tracing at the level named in `config`, scoped to engine crates.
pub fn init_tracing_from_config(config: &ObservabilityConfig) {
    init_tracing_with_filter(&format!("cbm={}", config.log_level));
}

fn install(filter: EnvFilter) {
    INIT.call_once(|| {
        // Another subscriber may already be installed by the host; keep it.
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
