//! SrrReducer: implements IRedundancyReducer with per-pass neighbor locking.

use std::collections::HashSet;

use cbm_competence::{is_solved, CompetenceModel, LinkLedger};
use cbm_core::config::MaintenanceConfig;
use cbm_core::errors::CbmResult;
use cbm_core::models::{ConvergenceShortfall, RedundancyOutcome};
use cbm_core::{Case, CaseId, IRedundancyReducer, ISimilarityOracle};
use tracing::{debug, info, warn};

use crate::ordering::removal_order;
use crate::working_set::WorkingSet;

/// Stepwise Redundancy Removal.
///
/// Walks cases in descending reachability order. A case is removed only if it
/// and every removed case linked to it are still classified correctly without
/// it. Each removal locks the nearest `lock_count` neighbors of the cases it
/// re-links; locks last until the pass ends. Passes repeat until the size
/// limit is met or every remaining case has been decided.
#[derive(Debug, Clone, Copy)]
pub struct SrrReducer {
    k: usize,
}

/// Per-call state for one reduction.
struct Reduction<'a> {
    set: WorkingSet<'a>,
    ledger: LinkLedger,
    preserved: Vec<bool>,
    removed: Vec<CaseId>,
}

impl SrrReducer {
    pub fn new(k: usize) -> Self {
        Self { k }
    }

    pub fn from_config(config: &MaintenanceConfig) -> Self {
        Self::new(config.k)
    }

    pub fn k(&self) -> usize {
        self.k
    }

    /// Neighbors locked around each re-linked case: `⌈(k+1)/2⌉`.
    pub fn lock_count(&self) -> usize {
        (self.k + 2) / 2
    }

    /// Try to remove the case at `pos`. Returns the re-linked neighborhoods on
    /// success, `None` if the removal would break a classification.
    fn try_remove<'a>(
        &self,
        oracle: &dyn ISimilarityOracle,
        state: &Reduction<'a>,
        pos: usize,
    ) -> Option<Vec<(CaseId, Vec<&'a Case>)>> {
        let candidate = state.set.case(pos);
        let remaining = state.set.without(pos);

        if !is_solved(oracle, candidate, &remaining, self.k) {
            return None;
        }

        let mut relinked = Vec::new();
        for dep_id in state.ledger.dependents_of(candidate.id()) {
            let dependent = state.set.lookup(dep_id)?;
            if !is_solved(oracle, dependent, &remaining, self.k) {
                return None;
            }
            relinked.push((dep_id, oracle.k_nearest(dependent, &remaining, self.k)));
        }
        relinked.push((
            candidate.id(),
            oracle.k_nearest(candidate, &remaining, self.k),
        ));
        Some(relinked)
    }
}

impl IRedundancyReducer for SrrReducer {
    fn name(&self) -> &str {
        "srr"
    }

    fn reduce(
        &self,
        oracle: &dyn ISimilarityOracle,
        cases: &[Case],
        size_limit: usize,
    ) -> CbmResult<RedundancyOutcome> {
        if cases.len() <= size_limit {
            return Ok(RedundancyOutcome::unchanged(cases.to_vec()));
        }

        let model = CompetenceModel::build(oracle, cases, self.k);
        let order = removal_order(&model, cases);

        let mut state = Reduction {
            set: WorkingSet::new(cases),
            ledger: LinkLedger::new(),
            preserved: vec![false; cases.len()],
            removed: Vec::new(),
        };

        let mut passes = 0usize;
        'passes: loop {
            passes += 1;
            let mut locked: HashSet<CaseId> = HashSet::new();
            let mut decided = 0usize;

            for &pos in &order {
                if state.set.len() <= size_limit {
                    break 'passes;
                }
                let id = cases[pos].id();
                if !state.set.is_present(pos) || state.preserved[pos] || locked.contains(&id) {
                    continue;
                }
                decided += 1;

                match self.try_remove(oracle, &state, pos) {
                    Some(relinked) => {
                        state.set.remove(pos);
                        state.removed.push(id);
                        for (owner, neighbors) in relinked {
                            locked.extend(neighbors.iter().take(self.lock_count()).map(|c| c.id()));
                            state.ledger.link(owner, neighbors.iter().map(|c| c.id()));
                        }
                        debug!(case = %id, remaining = state.set.len(), "srr removed case");
                    }
                    None => state.preserved[pos] = true,
                }
            }

            // Locks reset every pass, so the first undecided case of a pass is
            // always decided. A pass deciding nothing means none remain.
            if decided == 0 {
                break;
            }
        }

        let retained = state.set.retained();
        let shortfall = (retained.len() > size_limit).then(|| ConvergenceShortfall {
            achieved: retained.len(),
            limit: size_limit,
        });
        if let Some(shortfall) = &shortfall {
            warn!(%shortfall, passes, "srr stopped: no further safe removal");
        }

        info!(
            input = cases.len(),
            retained = retained.len(),
            removed = state.removed.len(),
            passes,
            "srr complete"
        );

        Ok(RedundancyOutcome {
            retained,
            removed: state.removed,
            shortfall,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cbm_oracle::EuclideanOracle;

    fn line(points: &[(f64, u32)]) -> Vec<Case> {
        points
            .iter()
            .enumerate()
            .map(|(i, &(x, label))| Case::new(i as u64, vec![x], label))
            .collect()
    }

    #[test]
    fn lock_count_is_majority_of_neighbors_plus_one() {
        assert_eq!(SrrReducer::new(1).lock_count(), 1);
        assert_eq!(SrrReducer::new(3).lock_count(), 2);
        assert_eq!(SrrReducer::new(4).lock_count(), 3);
        assert_eq!(SrrReducer::new(5).lock_count(), 3);
    }

    #[test]
    fn at_or_below_limit_is_untouched() {
        let cases = line(&[(0.0, 0), (1.0, 0), (2.0, 1)]);
        let outcome = SrrReducer::new(1)
            .reduce(&EuclideanOracle::new(), &cases, 3)
            .unwrap();
        assert_eq!(outcome.retained.len(), 3);
        assert!(outcome.removed.is_empty());
        assert!(outcome.shortfall.is_none());
    }

    #[test]
    fn dense_same_label_run_collapses_to_limit() {
        let points: Vec<(f64, u32)> = (0..10).map(|i| (f64::from(i) * 0.1, 0)).collect();
        let cases = line(&points);
        let outcome = SrrReducer::new(1)
            .reduce(&EuclideanOracle::new(), &cases, 4)
            .unwrap();
        assert_eq!(outcome.retained.len(), 4);
        assert_eq!(outcome.removed.len(), 6);
        assert!(outcome.shortfall.is_none());
    }

    #[test]
    fn locked_neighbor_waits_for_the_next_pass() {
        // Equal reachability everywhere, so cases are tried in input order.
        let points: Vec<(f64, u32)> = (0..6).map(|i| (f64::from(i), 0)).collect();
        let cases = line(&points);
        let outcome = SrrReducer::new(1)
            .reduce(&EuclideanOracle::new(), &cases, 1)
            .unwrap();

        // Removing 0 locks 1 and removing 3 locks 4 for the first pass. Case 1
        // is reconsidered and removed in the second pass.
        let removed: Vec<u64> = outcome.removed.iter().map(|id| id.value()).collect();
        assert_eq!(removed, vec![0, 2, 3, 5, 1]);
        let retained: Vec<u64> = outcome.retained.iter().map(|c| c.id().value()).collect();
        assert_eq!(retained, vec![4]);
        assert!(outcome.shortfall.is_none());
    }

    #[test]
    fn retained_keeps_input_order() {
        let points: Vec<(f64, u32)> = (0..8).map(|i| (f64::from(i), 0)).collect();
        let cases = line(&points);
        let outcome = SrrReducer::new(1)
            .reduce(&EuclideanOracle::new(), &cases, 3)
            .unwrap();
        let ids: Vec<u64> = outcome.retained.iter().map(|c| c.id().value()).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
    }
}
