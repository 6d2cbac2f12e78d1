// Single source of truth for all default values.

// --- Maintenance ---
pub const DEFAULT_K: usize = 3;
pub const DEFAULT_PERIOD: usize = 100;
pub const DEFAULT_SIZE_LIMIT: usize = 250;

// --- Context switching ---
pub const DEFAULT_REGISTER_LENGTH: usize = 10;
pub const DEFAULT_P_MIN: f64 = 0.5;
pub const DEFAULT_P_MAX: f64 = 0.5;
pub const DEFAULT_WILSON_Z: f64 = 0.5;

// --- Drift ---
pub const DEFAULT_DRIFT_ENABLED: bool = true;
pub const DEFAULT_DRIFT_MASS_FRACTION: f64 = 0.10;

// --- Oracle ---
pub const DEFAULT_DISTANCE_TIME_WEIGHT: f64 = 0.0;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";

// --- Files ---
pub const DEFAULT_CONFIG_FILENAME: &str = "cbm.toml";
pub const DEFAULT_USER_CONFIG_DIR: &str = ".cbm";
