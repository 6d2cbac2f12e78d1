//! NefcsReducer: implements INoiseReducer with drift detection, M-BBNR, and
//! context switching.

use std::cmp::Reverse;
use std::collections::{BTreeSet, HashSet};

use cbm_competence::CompetenceModel;
use cbm_core::config::{CbmConfig, ContextSwitchConfig, DriftConfig};
use cbm_core::errors::CbmResult;
use cbm_core::models::NoiseOutcome;
use cbm_core::{Case, CaseId, INoiseReducer, ISimilarityOracle, WindowPair};
use tracing::{debug, info};

use crate::context_switch::ContextSwitcher;
use crate::drift::{detect_novel, DriftReport};
use crate::mbbnr::MbbnrPass;
use crate::population;

/// Noise reduction over the merged windows.
///
/// Per cycle:
/// 1. Merge `old ∪ new ∪ case_base` and build its competence model.
/// 2. Mark novel new cases by drift detection.
/// 3. Run M-BBNR on every non-novel new case that is liable for something.
/// 4. Run M-BBNR on the old cases liable for surviving new cases, most
///    liable first.
/// 5. Let every surviving new case drive context switching.
///
/// Accuracy registers and deactivated cases persist across cycles. Changes
/// made by `reduce` apply at once; `rollback` restores the switcher as it was
/// at the last `commit`.
pub struct NefcsReducer {
    k: usize,
    drift: DriftConfig,
    switcher: ContextSwitcher,
    checkpoint: Option<ContextSwitcher>,
}

impl NefcsReducer {
    pub fn new(k: usize, context_switch: ContextSwitchConfig, drift: DriftConfig) -> Self {
        Self {
            k,
            drift,
            switcher: ContextSwitcher::new(context_switch),
            checkpoint: None,
        }
    }

    pub fn from_config(config: &CbmConfig) -> Self {
        Self::new(
            config.maintenance.k,
            config.context_switch.clone(),
            config.drift.clone(),
        )
    }

    pub fn switcher(&self) -> &ContextSwitcher {
        &self.switcher
    }

    fn detect_drift(
        &self,
        model: &CompetenceModel,
        population: &[Case],
        windows: &WindowPair,
    ) -> DriftReport {
        if !self.drift.enabled || windows.new_window().is_empty() {
            return DriftReport::default();
        }
        detect_novel(
            model,
            population,
            &windows.old_ids(),
            &windows.new_ids(),
            self.drift.mass_fraction,
        )
    }
}

impl INoiseReducer for NefcsReducer {
    fn name(&self) -> &str {
        "nefcs"
    }

    fn reduce(
        &mut self,
        oracle: &dyn ISimilarityOracle,
        windows: &WindowPair,
        case_base: &[Case],
    ) -> CbmResult<NoiseOutcome> {
        if self.checkpoint.is_none() {
            self.checkpoint = Some(self.switcher.clone());
        }

        let population = population::merge(windows, case_base);
        let model = CompetenceModel::build(oracle, &population, self.k);
        let drift = self.detect_drift(&model, &population, windows);
        let new_ids = windows.new_ids();

        let mut pass = MbbnrPass::new(oracle, &population, &model, self.k);

        for case in windows.new_window() {
            if !drift.is_novel(case.id()) {
                pass.try_remove(case);
            }
        }

        let surviving_new: HashSet<CaseId> = new_ids
            .iter()
            .copied()
            .filter(|id| !pass.is_removed(*id))
            .collect();
        let mut conflicting: Vec<(&Case, usize)> = population
            .iter()
            .filter(|c| !new_ids.contains(&c.id()))
            .filter(|c| {
                model
                    .liability(c.id())
                    .iter()
                    .any(|l| surviving_new.contains(l))
            })
            .map(|c| (c, pass.live_liability(c.id()).len()))
            .collect();
        conflicting.sort_by_key(|&(_, liable)| Reverse(liable));

        for (case, _) in conflicting {
            if pass.live_liability(case.id()).is_empty() {
                break;
            }
            pass.try_remove(case);
        }

        // Union of active and deactivated. Moves between the two never change
        // it, so one pool serves every observation.
        let deactivated_before: BTreeSet<CaseId> =
            self.switcher.deactivated().map(Case::id).collect();
        let dormant: Vec<Case> = self.switcher.deactivated().cloned().collect();
        let live = pass.live();
        let in_population: HashSet<CaseId> = live.iter().map(|c| c.id()).collect();
        let pool: Vec<&Case> = live
            .iter()
            .copied()
            .chain(dormant.iter().filter(|c| !in_population.contains(&c.id())))
            .collect();

        let mut changes = 0usize;
        for case in windows.new_window() {
            if pass.is_removed(case.id()) {
                continue;
            }
            changes += self.switcher.observe(oracle, case, &pool, self.k).len();
        }

        let removed = pass.removed().to_vec();
        for &id in &removed {
            self.switcher.forget(id);
        }

        let mut retained: Vec<Case> = live
            .iter()
            .filter(|c| !self.switcher.is_deactivated(c.id()))
            .map(|c| (*c).clone())
            .collect();
        let deactivated: Vec<CaseId> = live
            .iter()
            .map(|c| c.id())
            .filter(|id| !deactivated_before.contains(id) && self.switcher.is_deactivated(*id))
            .collect();
        let reactivated: Vec<CaseId> = dormant
            .iter()
            .filter(|c| !self.switcher.is_deactivated(c.id()))
            .map(Case::id)
            .collect();
        retained.extend(
            dormant
                .iter()
                .filter(|c| reactivated.contains(&c.id()) && !in_population.contains(&c.id()))
                .cloned(),
        );

        info!(
            population = population.len(),
            removed = removed.len(),
            novel = drift.novel.len(),
            deactivated = deactivated.len(),
            reactivated = reactivated.len(),
            switches = changes,
            "nefcs complete"
        );

        Ok(NoiseOutcome {
            retained,
            removed,
            deactivated,
            reactivated,
            novel: drift.novel.into_iter().collect(),
        })
    }

    fn commit(&mut self) {
        self.checkpoint = None;
    }

    fn rollback(&mut self) {
        if let Some(saved) = self.checkpoint.take() {
            debug!(
                discarded = self.switcher.deactivated_count(),
                restored = saved.deactivated_count(),
                "context switching rolled back"
            );
            self.switcher = saved;
        }
    }

    fn forget(&mut self, evicted: &[CaseId]) {
        for &id in evicted {
            self.switcher.forget(id);
        }
    }

    fn deactivated_count(&self) -> usize {
        self.switcher.deactivated_count()
    }
}
