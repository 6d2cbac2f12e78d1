//! MaintenanceScheduler: prequential ingestion and periodic maintenance.

use chrono::Utc;
use tracing::{debug, info, warn};

use cbm_core::errors::CbmResult;
use cbm_core::models::{NoiseOutcome, RedundancyOutcome};
use cbm_core::{Case, CbmConfig, ISimilarityOracle, Label, MaintenanceReport, WindowPair};
use cbm_oracle::EuclideanOracle;
use cbm_store::CaseStore;

use crate::monitoring::MaintenanceDashboard;
use crate::plan::MaintenancePlan;
use crate::state::{InstanceOutcome, SchedulerState};

/// Owns the case store, the windows, and the reducers.
///
/// Every instance is predicted against the active case base, stored, and
/// appended to a window: to `old` during the initial fill phase (the first
/// `period` instances), to `new` afterwards. Every `period` instances a
/// maintenance cycle runs to completion before the next instance is accepted.
pub struct MaintenanceScheduler {
    config: CbmConfig,
    oracle: Box<dyn ISimilarityOracle>,
    plan: MaintenancePlan,
    store: CaseStore,
    windows: WindowPair,
    state: SchedulerState,
    instances: u64,
    cycles: u64,
    dashboard: MaintenanceDashboard,
}

impl MaintenanceScheduler {
    pub fn new(
        config: CbmConfig,
        oracle: Box<dyn ISimilarityOracle>,
        plan: MaintenancePlan,
    ) -> Self {
        Self {
            config,
            oracle,
            plan,
            store: CaseStore::new(),
            windows: WindowPair::new(),
            state: SchedulerState::Accumulating,
            instances: 0,
            cycles: 0,
            dashboard: MaintenanceDashboard::new(),
        }
    }

    /// Euclidean oracle and the reducer pair named by the config.
    pub fn from_config(config: CbmConfig) -> Self {
        let oracle = Box::new(EuclideanOracle::from_config(&config.oracle));
        let plan = MaintenancePlan::from_config(&config);
        Self::new(config, oracle, plan)
    }

    /// Predict, store, and window one instance; run a cycle when due.
    ///
    /// A case whose identity is already stored is rejected and nothing else
    /// changes. A failing cycle keeps the instance stored and returns the
    /// cycle's error.
    pub fn process(&mut self, case: Case) -> CbmResult<InstanceOutcome> {
        let predicted = self.predict(&case);
        let correct = self.oracle.is_correct(predicted, &case);

        self.store.add([case.clone()])?;
        self.dashboard.record_prediction(correct);
        self.instances += 1;

        let period = self.config.maintenance.period.max(1) as u64;
        if self.instances <= period {
            self.windows.push_old(case);
        } else {
            self.windows.push_new(case);
        }

        let cycle = if self.instances % period == 0 {
            Some(self.run_cycle()?)
        } else {
            None
        };

        Ok(InstanceOutcome {
            predicted,
            correct,
            cycle,
        })
    }

    /// Run one maintenance cycle now.
    ///
    /// On error the store keeps its pre-cycle contents, the noise reducer's
    /// activation state is rolled back, and the error is returned. Nothing is
    /// retried.
    pub fn run_cycle(&mut self) -> CbmResult<MaintenanceReport> {
        self.state = SchedulerState::Maintaining;
        let result = self.maintain();
        self.state = SchedulerState::Accumulating;

        if let Err(e) = &result {
            if let Some(reducer) = self.plan.noise.as_mut() {
                reducer.rollback();
            }
            warn!(error = %e, cycle = self.cycles + 1, "maintenance cycle failed");
        }
        result
    }

    fn maintain(&mut self) -> CbmResult<MaintenanceReport> {
        let size_limit = self.config.maintenance.size_limit;
        let snapshot = self.store.snapshot();
        let size_before = snapshot.len();

        let noise = match self.plan.noise.as_mut() {
            Some(reducer) if !self.windows.new_window().is_empty() => {
                reducer.reduce(self.oracle.as_ref(), &self.windows, &snapshot)?
            }
            _ => NoiseOutcome::unchanged(snapshot),
        };

        let redundancy = match self.plan.redundancy.as_ref() {
            Some(reducer) if noise.retained.len() > size_limit => {
                reducer.reduce(self.oracle.as_ref(), &noise.retained, size_limit)?
            }
            _ => RedundancyOutcome::unchanged(noise.retained.clone()),
        };

        self.store.replace_all(redundancy.retained)?;

        let store = &self.store;
        self.windows.retain_resident(|id| store.contains(id));
        self.windows.rotate();

        let evicted: Vec<_> = noise
            .removed
            .iter()
            .chain(&redundancy.removed)
            .copied()
            .collect();
        if let Some(reducer) = self.plan.noise.as_mut() {
            reducer.commit();
            reducer.forget(&evicted);
        }

        self.cycles += 1;
        let report = MaintenanceReport {
            cycle: self.cycles,
            completed_at: Utc::now(),
            size_before,
            size_after: self.store.len(),
            noise_removed: noise.removed,
            redundancy_removed: redundancy.removed,
            deactivated: noise.deactivated,
            reactivated: noise.reactivated,
            novel: noise.novel,
            shortfall: redundancy.shortfall,
        };

        info!(
            cycle = report.cycle,
            plan = %self.plan.describe(),
            size_before = report.size_before,
            size_after = report.size_after,
            noise_removed = report.noise_removed.len(),
            redundancy_removed = report.redundancy_removed.len(),
            deactivated = report.deactivated.len(),
            reactivated = report.reactivated.len(),
            "maintenance cycle complete"
        );
        if let Some(shortfall) = &report.shortfall {
            debug!(cycle = report.cycle, %shortfall, "size limit not reached");
        }

        self.dashboard.record_cycle(report.clone());
        Ok(report)
    }

    /// Classify `query` against the active case base.
    pub fn predict(&self, query: &Case) -> Option<Label> {
        self.oracle
            .predict(query, &self.store.as_refs(), self.config.maintenance.k)
    }

    /// Active cases in the store.
    pub fn current_case_count(&self) -> usize {
        self.store.len()
    }

    /// Cases held out of the active case base by context switching.
    pub fn deactivated_count(&self) -> usize {
        self.plan
            .noise
            .as_ref()
            .map_or(0, |reducer| reducer.deactivated_count())
    }

    pub fn state(&self) -> SchedulerState {
        self.state
    }

    /// Every cycle report, oldest first.
    pub fn reports(&self) -> &[MaintenanceReport] {
        self.dashboard.reports()
    }

    pub fn dashboard(&self) -> &MaintenanceDashboard {
        &self.dashboard
    }

    pub fn store(&self) -> &CaseStore {
        &self.store
    }

    pub fn windows(&self) -> &WindowPair {
        &self.windows
    }

    pub fn config(&self) -> &CbmConfig {
        &self.config
    }

    /// Instances accepted so far.
    pub fn instances(&self) -> u64 {
        self.instances
    }
}
