//! Configuration system for the maintenance engine.
//! TOML-based, layered resolution: overrides > env > project > user > defaults.

pub mod cbm_config;
pub mod context_switch_config;
pub mod defaults;
pub mod drift_config;
pub mod maintenance_config;
pub mod observability_config;
pub mod oracle_config;

pub use cbm_config::{CbmConfig, ConfigOverrides};
pub use context_switch_config::ContextSwitchConfig;
pub use drift_config::DriftConfig;
pub use maintenance_config::{MaintenanceConfig, StrategyKind};
pub use observability_config::ObservabilityConfig;
pub use oracle_config::OracleConfig;
