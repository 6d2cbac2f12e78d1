//! Maintenance monitoring: cycle history and prequential accuracy.

pub mod dashboard;

pub use dashboard::MaintenanceDashboard;
