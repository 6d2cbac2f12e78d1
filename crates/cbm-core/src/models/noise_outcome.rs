use crate::case::{Case, CaseId};

/// Result of a noise-reduction pass.
#[derive(Debug, Clone, Default)]
pub struct NoiseOutcome {
    /// Active cases after removals and activation changes.
    pub retained: Vec<Case>,
    /// Cases confirmed as noise and evicted.
    pub removed: Vec<CaseId>,
    /// Cases moved out of the active case base this cycle.
    pub deactivated: Vec<CaseId>,
    /// Cases moved back into the active case base this cycle.
    pub reactivated: Vec<CaseId>,
    /// New-window cases exempted from removal by drift detection.
    pub novel: Vec<CaseId>,
}

impl NoiseOutcome {
    /// An outcome that keeps every case.
    pub fn unchanged(cases: Vec<Case>) -> Self {
        Self {
            retained: cases,
            ..Default::default()
        }
    }
}
