/// Engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable holding the tracing filter.
pub const LOG_ENV_VAR: &str = "CBM_LOG";

/// Fallback tracing filter when `CBM_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "cbm=info";

/// Prefix for configuration environment overrides (`CBM_K`, `CBM_PERIOD`, ...).
pub const ENV_PREFIX: &str = "CBM_";

/// Smallest accuracy register that can produce a confidence interval.
pub const MIN_REGISTER_LENGTH: usize = 2;
