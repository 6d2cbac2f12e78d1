use serde::{Deserialize, Serialize};

use super::defaults;

/// Settings for the reference similarity oracle.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OracleConfig {
    /// Weight of the arrival-index gap added to the feature distance.
    /// Zero disables time weighting.
    pub distance_time_weight: f64,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            distance_time_weight: defaults::DEFAULT_DISTANCE_TIME_WEIGHT,
        }
    }
}
