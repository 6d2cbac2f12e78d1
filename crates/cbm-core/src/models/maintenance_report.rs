use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ConvergenceShortfall;
use crate::case::CaseId;
use crate::errors::CbmResult;

/// Record of one completed maintenance cycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaintenanceReport {
    /// 1-based cycle number.
    pub cycle: u64,
    pub completed_at: DateTime<Utc>,
    /// Active cases before the cycle.
    pub size_before: usize,
    /// Active cases after the cycle.
    pub size_after: usize,
    pub noise_removed: Vec<CaseId>,
    pub redundancy_removed: Vec<CaseId>,
    pub deactivated: Vec<CaseId>,
    pub reactivated: Vec<CaseId>,
    pub novel: Vec<CaseId>,
    pub shortfall: Option<ConvergenceShortfall>,
}

impl MaintenanceReport {
    /// Cases permanently evicted this cycle.
    pub fn evicted_count(&self) -> usize {
        self.noise_removed.len() + self.redundancy_removed.len()
    }

    pub fn to_json(&self) -> CbmResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}
