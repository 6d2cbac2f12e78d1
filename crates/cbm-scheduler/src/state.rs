use serde::{Deserialize, Serialize};

use cbm_core::{Label, MaintenanceReport};

/// Scheduler lifecycle: `Accumulating → Maintaining → Accumulating`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchedulerState {
    #[default]
    Accumulating,
    Maintaining,
}

/// What happened to one ingested instance.
#[derive(Debug, Clone)]
pub struct InstanceOutcome {
    /// Label predicted against the active case base before storing.
    pub predicted: Option<Label>,
    pub correct: bool,
    /// Report of the cycle this instance triggered, if any.
    pub cycle: Option<MaintenanceReport>,
}
