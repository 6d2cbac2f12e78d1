use serde::{Deserialize, Serialize};

use super::defaults;

/// Which noise/redundancy reducer pair the scheduler runs each cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// NEFCS noise reduction followed by SRR when over budget.
    #[default]
    NefcsSrr,
    /// Classic blame-based noise reduction followed by SRR.
    BbnrSrr,
    /// SRR only.
    SrrOnly,
    /// NEFCS only; the size limit is not enforced.
    NoiseOnly,
    /// Accumulate without maintenance.
    Disabled,
}

impl StrategyKind {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "nefcs_srr" => Some(Self::NefcsSrr),
            "bbnr_srr" => Some(Self::BbnrSrr),
            "srr_only" => Some(Self::SrrOnly),
            "noise_only" => Some(Self::NoiseOnly),
            "disabled" => Some(Self::Disabled),
            _ => None,
        }
    }
}

/// Maintenance scheduling configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MaintenanceConfig {
    /// Neighbor count for the k-NN oracle.
    pub k: usize,
    /// Number of instances between maintenance cycles.
    pub period: usize,
    /// Target case-base size for redundancy reduction.
    pub size_limit: usize,
    /// Reducer pair run each cycle.
    pub strategy: StrategyKind,
}

impl MaintenanceConfig {
    /// Neighbors locked around a removed case: `ceil((k + 1) / 2)`.
    pub fn lock_count(&self) -> usize {
        (self.k + 2) / 2
    }
}

impl Default for MaintenanceConfig {
    fn default() -> Self {
        Self {
            k: defaults::DEFAULT_K,
            period: defaults::DEFAULT_PERIOD,
            size_limit: defaults::DEFAULT_SIZE_LIMIT,
            strategy: StrategyKind::default(),
        }
    }
}
