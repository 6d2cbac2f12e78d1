pub mod maintenance_report;
pub mod noise_outcome;
pub mod redundancy_outcome;
pub mod window_pair;

pub use maintenance_report::MaintenanceReport;
pub use noise_outcome::NoiseOutcome;
pub use redundancy_outcome::{ConvergenceShortfall, RedundancyOutcome};
pub use window_pair::WindowPair;
