use serde::{Deserialize, Serialize};

use super::defaults;

/// Windowed drift detection configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DriftConfig {
    /// Exempt drift-relevant new cases from noise removal.
    pub enabled: bool,
    /// Share of the total positive drift mass whose related sets are marked
    /// drift-affected.
    pub mass_fraction: f64,
}

impl Default for DriftConfig {
    fn default() -> Self {
        Self {
            enabled: defaults::DEFAULT_DRIFT_ENABLED,
            mass_fraction: defaults::DEFAULT_DRIFT_MASS_FRACTION,
        }
    }
}
