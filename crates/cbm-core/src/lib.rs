//! # cbm-core
//!
//! Foundation crate for the case-base maintenance engine.
//! Defines cases, traits, errors, config, outcome models, and tracing setup.
//! Every other crate in the workspace depends on this.

pub mod case;
pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod tracing_setup;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use case::{Case, CaseId, Label};
pub use config::CbmConfig;
pub use errors::{CbmError, CbmResult};
pub use models::{
    ConvergenceShortfall, MaintenanceReport, NoiseOutcome, RedundancyOutcome, WindowPair,
};
pub use traits::{INoiseReducer, IRedundancyReducer, ISimilarityOracle};
