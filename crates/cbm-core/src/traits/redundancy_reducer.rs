use crate::case::Case;
use crate::errors::CbmResult;
use crate::models::RedundancyOutcome;
use crate::traits::ISimilarityOracle;

/// Size-bounded condensation of a case set.
pub trait IRedundancyReducer: Send + Sync {
    fn name(&self) -> &str;

    /// Shrink `cases` toward `size_limit` without losing solvability.
    fn reduce(
        &self,
        oracle: &dyn ISimilarityOracle,
        cases: &[Case],
        size_limit: usize,
    ) -> CbmResult<RedundancyOutcome>;
}
