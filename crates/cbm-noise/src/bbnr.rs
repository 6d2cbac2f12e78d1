//! BbnrReducer: classic Blame-Based Noise Reduction.

use std::cmp::Reverse;
use std::collections::HashSet;

use cbm_competence::{is_solved, CompetenceModel};
use cbm_core::errors::CbmResult;
use cbm_core::models::NoiseOutcome;
use cbm_core::{Case, CaseId, INoiseReducer, ISimilarityOracle, WindowPair};
use tracing::{debug, info};

use crate::population;

/// Removes cases that cause misclassifications, most liable first, as long as
/// every case they help classify still is classified correctly without them.
/// No drift detection and no context switching.
#[derive(Debug, Clone, Copy)]
pub struct BbnrReducer {
    k: usize,
}

impl BbnrReducer {
    pub fn new(k: usize) -> Self {
        Self { k }
    }
}

impl INoiseReducer for BbnrReducer {
    fn name(&self) -> &str {
        "bbnr"
    }

    fn reduce(
        &mut self,
        oracle: &dyn ISimilarityOracle,
        windows: &WindowPair,
        case_base: &[Case],
    ) -> CbmResult<NoiseOutcome> {
        let population = population::merge(windows, case_base);
        let model = CompetenceModel::build(oracle, &population, self.k);
        let lookup = population::index(&population);

        let mut candidates: Vec<&Case> = population
            .iter()
            .filter(|c| !model.liability(c.id()).is_empty())
            .collect();
        candidates.sort_by_key(|c| Reverse(model.liability(c.id()).len()));

        let mut removed: HashSet<CaseId> = HashSet::new();
        let mut order: Vec<CaseId> = Vec::new();
        for candidate in candidates {
            let id = candidate.id();
            let remaining: Vec<&Case> = population
                .iter()
                .filter(|c| c.id() != id && !removed.contains(&c.id()))
                .collect();
            let keeps_coverage = model
                .coverage(id)
                .iter()
                .filter(|covered| !removed.contains(*covered))
                .filter_map(|covered| lookup.get(covered))
                .all(|covered| is_solved(oracle, covered, &remaining, self.k));
            if keeps_coverage {
                removed.insert(id);
                order.push(id);
                debug!(case = %id, "bbnr removed case");
            }
        }

        let retained: Vec<Case> = population
            .iter()
            .filter(|c| !removed.contains(&c.id()))
            .cloned()
            .collect();
        info!(
            population = population.len(),
            removed = order.len(),
            "bbnr complete"
        );

        Ok(NoiseOutcome {
            retained,
            removed: order,
            ..Default::default()
        })
    }
}
