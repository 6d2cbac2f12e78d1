use std::fmt;

use serde::{Deserialize, Serialize};

use crate::case::{Case, CaseId};

/// Redundancy reduction stopped above its size limit because no further
/// removal was safe. A warning, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvergenceShortfall {
    /// Size reached when reduction stopped.
    pub achieved: usize,
    /// Requested size limit.
    pub limit: usize,
}

impl ConvergenceShortfall {
    /// Cases still above the limit.
    pub fn excess(&self) -> usize {
        self.achieved.saturating_sub(self.limit)
    }
}

impl fmt::Display for ConvergenceShortfall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "reduced to {} cases, {} above limit {}",
            self.achieved,
            self.excess(),
            self.limit
        )
    }
}

/// Result of a redundancy-reduction pass.
#[derive(Debug, Clone, Default)]
pub struct RedundancyOutcome {
    /// Cases kept, in input order.
    pub retained: Vec<Case>,
    /// Cases removed, in removal order.
    pub removed: Vec<CaseId>,
    pub shortfall: Option<ConvergenceShortfall>,
}

impl RedundancyOutcome {
    /// An outcome that keeps every case.
    pub fn unchanged(cases: Vec<Case>) -> Self {
        Self {
            retained: cases,
            ..Default::default()
        }
    }
}
