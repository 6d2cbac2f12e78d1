use crate::case::{Case, CaseId};
use crate::errors::CbmResult;
use crate::models::{NoiseOutcome, WindowPair};
use crate::traits::ISimilarityOracle;

/// Noise reduction over the merged window population.
///
/// Implementations may keep state across cycles (deactivated cases,
/// accuracy registers); the scheduler owns the reducer exclusively.
pub trait INoiseReducer: Send {
    fn name(&self) -> &str;

    /// Decide which cases of `windows ∪ case_base` survive this cycle.
    fn reduce(
        &mut self,
        oracle: &dyn ISimilarityOracle,
        windows: &WindowPair,
        case_base: &[Case],
    ) -> CbmResult<NoiseOutcome>;

    /// Keep the state changes made by `reduce` since the last commit. Called
    /// once the cycle's result has been written to the store.
    fn commit(&mut self) {}

    /// Undo the state changes made by `reduce` since the last commit. Called
    /// when the cycle fails after noise reduction ran.
    fn rollback(&mut self) {}

    /// Drop any per-case state held for permanently evicted cases.
    fn forget(&mut self, _evicted: &[CaseId]) {}

    /// Cases currently held out of the active case base.
    fn deactivated_count(&self) -> usize {
        0
    }
}
