//! Modified Blame-Based Noise Reduction.
//!
//! A candidate blamed for misclassifications is tentatively removed. The
//! removal is confirmed only if every live case it was liable for is then
//! classified correctly, and every case protected by an earlier confirmed
//! removal still is. The liability cases of a confirmed removal become
//! protected in turn.

use std::collections::{BTreeSet, HashMap, HashSet};

use cbm_competence::{is_solved, CompetenceModel};
use cbm_core::{Case, CaseId, ISimilarityOracle};
use tracing::debug;

use crate::population;

/// Removal state for one noise pass over a fixed population.
pub struct MbbnrPass<'a> {
    oracle: &'a dyn ISimilarityOracle,
    population: &'a [Case],
    lookup: HashMap<CaseId, &'a Case>,
    model: &'a CompetenceModel,
    k: usize,
    removed: HashSet<CaseId>,
    /// Confirmed removals, in order.
    removal_order: Vec<CaseId>,
    protected: BTreeSet<CaseId>,
}

impl<'a> MbbnrPass<'a> {
    pub fn new(
        oracle: &'a dyn ISimilarityOracle,
        population: &'a [Case],
        model: &'a CompetenceModel,
        k: usize,
    ) -> Self {
        Self {
            oracle,
            population,
            lookup: population::index(population),
            model,
            k,
            removed: HashSet::new(),
            removal_order: Vec::new(),
            protected: BTreeSet::new(),
        }
    }

    pub fn is_removed(&self, id: CaseId) -> bool {
        self.removed.contains(&id)
    }

    /// Liability cases of `id` not yet removed.
    pub fn live_liability(&self, id: CaseId) -> Vec<&'a Case> {
        self.model
            .liability(id)
            .iter()
            .filter(|l| !self.removed.contains(*l))
            .filter_map(|l| self.lookup.get(l).copied())
            .collect()
    }

    /// Cases protected by confirmed removals.
    pub fn protected(&self) -> &BTreeSet<CaseId> {
        &self.protected
    }

    /// Population minus confirmed removals, in population order.
    pub fn live(&self) -> Vec<&'a Case> {
        self.population
            .iter()
            .filter(|c| !self.removed.contains(&c.id()))
            .collect()
    }

    /// Apply the rule to `candidate`. Returns whether it was removed.
    pub fn try_remove(&mut self, candidate: &Case) -> bool {
        let id = candidate.id();
        if self.removed.contains(&id) {
            return false;
        }
        let liable_for = self.live_liability(id);
        if liable_for.is_empty() {
            return false;
        }

        let remaining: Vec<&Case> = self
            .population
            .iter()
            .filter(|c| c.id() != id && !self.removed.contains(&c.id()))
            .collect();

        let repaired = liable_for
            .iter()
            .all(|victim| is_solved(self.oracle, victim, &remaining, self.k));
        if !repaired {
            return false;
        }

        let still_protected = self
            .protected
            .iter()
            .filter(|p| **p != id && !self.removed.contains(*p))
            .filter_map(|p| self.lookup.get(p))
            .all(|p| is_solved(self.oracle, p, &remaining, self.k));
        if !still_protected {
            return false;
        }

        self.removed.insert(id);
        self.removal_order.push(id);
        self.protected.extend(liable_for.iter().map(|c| c.id()));
        debug!(case = %id, repaired = liable_for.len(), "m-bbnr removed case");
        true
    }

    /// Confirmed removals, in order.
    pub fn removed(&self) -> &[CaseId] {
        &self.removal_order
    }
}
