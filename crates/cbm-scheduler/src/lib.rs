//! # cbm-scheduler
//!
//! Drives online case-base maintenance: every instance is predicted, stored,
//! and windowed; every `period` instances a maintenance cycle runs the
//! configured noise and redundancy reducers and swaps the result in.

pub mod engine;
pub mod monitoring;
pub mod plan;
pub mod state;

pub use engine::MaintenanceScheduler;
pub use monitoring::MaintenanceDashboard;
pub use plan::MaintenancePlan;
pub use state::{InstanceOutcome, SchedulerState};
