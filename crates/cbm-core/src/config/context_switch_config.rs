use serde::{Deserialize, Serialize};

use super::defaults;

/// Confidence-interval driven activation/deactivation of cases.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextSwitchConfig {
    /// Capacity `l` of each case's accuracy register.
    pub register_length: usize,
    /// A deactivated case is reactivated once its lower bound exceeds this.
    pub p_min: f64,
    /// An active case is deactivated once its upper bound falls below this.
    pub p_max: f64,
    /// Wilson interval z-coefficient.
    pub z: f64,
}

impl ContextSwitchConfig {
    /// A register must hold more than this many outcomes before it is judged.
    pub fn min_predictions(&self) -> usize {
        self.register_length / 2
    }
}

impl Default for ContextSwitchConfig {
    fn default() -> Self {
        Self {
            register_length: defaults::DEFAULT_REGISTER_LENGTH,
            p_min: defaults::DEFAULT_P_MIN,
            p_max: defaults::DEFAULT_P_MAX,
            z: defaults::DEFAULT_WILSON_Z,
        }
    }
}
