//! Surface maintenance history and accuracy through observability.

use cbm_core::MaintenanceReport;

/// Running view of scheduler health.
#[derive(Debug, Clone, Default)]
pub struct MaintenanceDashboard {
    reports: Vec<MaintenanceReport>,
    /// Instances predicted before being stored.
    pub predictions: u64,
    /// Of those, predicted correctly.
    pub correct_predictions: u64,
    pub total_noise_removed: usize,
    pub total_redundancy_removed: usize,
    /// Cycles whose redundancy stage stopped above the size limit.
    pub shortfall_cycles: usize,
}

impl MaintenanceDashboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one prequential prediction.
    pub fn record_prediction(&mut self, correct: bool) {
        self.predictions += 1;
        if correct {
            self.correct_predictions += 1;
        }
    }

    /// Record a completed maintenance cycle.
    pub fn record_cycle(&mut self, report: MaintenanceReport) {
        self.total_noise_removed += report.noise_removed.len();
        self.total_redundancy_removed += report.redundancy_removed.len();
        if report.shortfall.is_some() {
            self.shortfall_cycles += 1;
        }
        self.reports.push(report);
    }

    /// Share of correct prequential predictions, `None` before any.
    pub fn accuracy(&self) -> Option<f64> {
        (self.predictions > 0).then(|| self.correct_predictions as f64 / self.predictions as f64)
    }

    /// Every cycle report, oldest first.
    pub fn reports(&self) -> &[MaintenanceReport] {
        &self.reports
    }

    pub fn latest(&self) -> Option<&MaintenanceReport> {
        self.reports.last()
    }

    pub fn cycles(&self) -> usize {
        self.reports.len()
    }
}
