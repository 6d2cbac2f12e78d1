use super::{ConfigError, StoreError};

/// Top-level engine error. Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum CbmError {
    /// The oracle cannot evaluate the population, e.g. fewer than `k + 1` cases.
    /// Recovered by the competence model; never fatal to a cycle.
    #[error("competence model cannot be initialized: {available} cases available, {required} required")]
    Initialization { available: usize, required: usize },

    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type CbmResult<T> = Result<T, CbmError>;
