//! Error handling for the maintenance engine.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod cbm_error;
pub mod config_error;
pub mod store_error;

pub use cbm_error::{CbmError, CbmResult};
pub use config_error::ConfigError;
pub use store_error::StoreError;
