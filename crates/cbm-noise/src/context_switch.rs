//! Confidence-driven soft activation and deactivation of cases.
//!
//! Every time a case votes on a new case, its accuracy register records
//! whether its label agreed. Once the register holds enough outcomes, the
//! Wilson interval around its accuracy decides whether the case leaves the
//! active case base or comes back to it. Deactivated cases keep voting here
//! but no longer take part in predictions.

use std::collections::{BTreeMap, HashMap};

use cbm_core::config::ContextSwitchConfig;
use cbm_core::{Case, CaseId, ISimilarityOracle};
use tracing::debug;

use crate::accuracy_register::AccuracyRegister;
use crate::wilson::WilsonInterval;

/// A change of activation state caused by one observation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivationChange {
    Deactivated(CaseId),
    Reactivated(CaseId),
}

/// Accuracy registers and the deactivated set, kept across cycles.
#[derive(Debug, Clone)]
pub struct ContextSwitcher {
    config: ContextSwitchConfig,
    registers: HashMap<CaseId, AccuracyRegister>,
    deactivated: BTreeMap<CaseId, Case>,
}

impl ContextSwitcher {
    pub fn new(config: ContextSwitchConfig) -> Self {
        Self {
            config,
            registers: HashMap::new(),
            deactivated: BTreeMap::new(),
        }
    }

    pub fn config(&self) -> &ContextSwitchConfig {
        &self.config
    }

    pub fn is_deactivated(&self, id: CaseId) -> bool {
        self.deactivated.contains_key(&id)
    }

    /// Deactivated cases, in id order.
    pub fn deactivated(&self) -> impl Iterator<Item = &Case> {
        self.deactivated.values()
    }

    pub fn deactivated_count(&self) -> usize {
        self.deactivated.len()
    }

    pub fn register(&self, id: CaseId) -> Option<&AccuracyRegister> {
        self.registers.get(&id)
    }

    /// Drop all state held for `id`.
    pub fn forget(&mut self, id: CaseId) {
        self.registers.remove(&id);
        self.deactivated.remove(&id);
    }

    /// Let the `k` nearest cases of `pool` vote on `candidate` and update
    /// their activation state. `pool` is the union of active and deactivated
    /// cases.
    pub fn observe(
        &mut self,
        oracle: &dyn ISimilarityOracle,
        candidate: &Case,
        pool: &[&Case],
        k: usize,
    ) -> Vec<ActivationChange> {
        let neighbors = oracle.k_nearest(candidate, pool, k);
        neighbors
            .into_iter()
            .filter_map(|neighbor| self.record(neighbor, neighbor.label() == candidate.label()))
            .collect()
    }

    /// Record one vote outcome for `case` and apply the resulting decision.
    pub fn record(&mut self, case: &Case, agreed: bool) -> Option<ActivationChange> {
        let capacity = self.config.register_length;
        let register = self
            .registers
            .entry(case.id())
            .or_insert_with(|| AccuracyRegister::new(capacity));
        register.push(agreed);

        if register.len() <= self.config.min_predictions() {
            return None;
        }
        let ci = WilsonInterval::from_counts(register.successes(), register.len(), self.config.z)?;

        let id = case.id();
        if self.deactivated.contains_key(&id) {
            if ci.lower > self.config.p_min {
                self.deactivated.remove(&id);
                debug!(case = %id, lower = ci.lower, "case reactivated");
                return Some(ActivationChange::Reactivated(id));
            }
        } else if ci.upper < self.config.p_max {
            self.deactivated.insert(id, case.clone());
            debug!(case = %id, upper = ci.upper, "case deactivated");
            return Some(ActivationChange::Deactivated(id));
        }
        None
    }
}
