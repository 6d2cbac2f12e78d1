//! Top-level engine configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{
    defaults, ContextSwitchConfig, DriftConfig, MaintenanceConfig, ObservabilityConfig,
    OracleConfig, StrategyKind,
};
use crate::constants::{ENV_PREFIX, MIN_REGISTER_LENGTH};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Programmatic overrides (`ConfigOverrides`)
/// 2. Environment variables (`CBM_*`)
/// 3. Project config (`cbm.toml` in the project root)
/// 4. User config (`~/.cbm/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CbmConfig {
    pub maintenance: MaintenanceConfig,
    pub context_switch: ContextSwitchConfig,
    pub drift: DriftConfig,
    pub oracle: OracleConfig,
    pub observability: ObservabilityConfig,
}

/// Programmatic overrides applied after file and environment layers.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub k: Option<usize>,
    pub period: Option<usize>,
    pub size_limit: Option<usize>,
    pub strategy: Option<StrategyKind>,
}

impl CbmConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut merged = toml::Table::new();

        // Layer 4 (lowest priority): user config
        if let Some(user_path) = Self::user_config_path() {
            if user_path.exists() {
                let table = Self::read_table(&user_path)?;
                merge_tables(&mut merged, table);
            }
        }

        // Layer 3: project config
        let project_path = root.join(defaults::DEFAULT_CONFIG_FILENAME);
        if project_path.exists() {
            let table = Self::read_table(&project_path)?;
            merge_tables(&mut merged, table);
        }

        let mut config = toml::Value::Table(merged)
            .try_into::<CbmConfig>()
            .map_err(|e| ConfigError::ParseError {
                path: root.display().to_string(),
                message: e.to_string(),
            })?;

        // Layer 2: environment variables
        config.apply_env_overrides();

        // Layer 1 (highest priority): programmatic overrides
        if let Some(overrides) = overrides {
            config.apply_overrides(overrides);
        }

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing and embedding).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: CbmConfig = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let m = &self.maintenance;
        if m.k == 0 {
            return Err(invalid("maintenance.k", "must be at least 1"));
        }
        if m.period == 0 {
            return Err(invalid("maintenance.period", "must be at least 1"));
        }
        if m.size_limit == 0 {
            return Err(invalid("maintenance.size_limit", "must be at least 1"));
        }

        let cs = &self.context_switch;
        if cs.register_length < MIN_REGISTER_LENGTH {
            return Err(invalid(
                "context_switch.register_length",
                &format!("must be at least {MIN_REGISTER_LENGTH}"),
            ));
        }
        if !(0.0..=1.0).contains(&cs.p_min) {
            return Err(invalid("context_switch.p_min", "must be between 0.0 and 1.0"));
        }
        if !(0.0..=1.0).contains(&cs.p_max) {
            return Err(invalid("context_switch.p_max", "must be between 0.0 and 1.0"));
        }
        if !(cs.z.is_finite() && cs.z > 0.0) {
            return Err(invalid("context_switch.z", "must be a positive number"));
        }

        let fraction = self.drift.mass_fraction;
        if !(fraction > 0.0 && fraction <= 1.0) {
            return Err(invalid("drift.mass_fraction", "must be in (0.0, 1.0]"));
        }

        let weight = self.oracle.distance_time_weight;
        if !(weight.is_finite() && weight >= 0.0) {
            return Err(invalid(
                "oracle.distance_time_weight",
                "must be a non-negative number",
            ));
        }
        Ok(())
    }

    /// Apply environment variable overrides.
    /// Pattern: `CBM_K`, `CBM_PERIOD`, `CBM_SIZE_LIMIT`, `CBM_P_MIN`, etc.
    fn apply_env_overrides(&mut self) {
        if let Some(v) = env_parse::<usize>("K") {
            self.maintenance.k = v;
        }
        if let Some(v) = env_parse::<usize>("PERIOD") {
            self.maintenance.period = v;
        }
        if let Some(v) = env_parse::<usize>("SIZE_LIMIT") {
            self.maintenance.size_limit = v;
        }
        if let Some(v) = env_var("STRATEGY").and_then(|s| StrategyKind::parse(&s)) {
            self.maintenance.strategy = v;
        }
        if let Some(v) = env_parse::<usize>("REGISTER_LENGTH") {
            self.context_switch.register_length = v;
        }
        if let Some(v) = env_parse::<f64>("P_MIN") {
            self.context_switch.p_min = v;
        }
        if let Some(v) = env_parse::<f64>("P_MAX") {
            self.context_switch.p_max = v;
        }
        if let Some(v) = env_parse::<bool>("DRIFT_ENABLED") {
            self.drift.enabled = v;
        }
        if let Some(v) = env_parse::<f64>("DISTANCE_TIME_WEIGHT") {
            self.oracle.distance_time_weight = v;
        }
        if let Some(v) = env_var("LOG_LEVEL") {
            self.observability.log_level = v;
        }
    }

    /// Apply programmatic overrides (highest priority).
    fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(v) = overrides.k {
            self.maintenance.k = v;
        }
        if let Some(v) = overrides.period {
            self.maintenance.period = v;
        }
        if let Some(v) = overrides.size_limit {
            self.maintenance.size_limit = v;
        }
        if let Some(v) = overrides.strategy {
            self.maintenance.strategy = v;
        }
    }

    /// Returns the user config path: `~/.cbm/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(defaults::DEFAULT_USER_CONFIG_DIR).join("config.toml"))
    }

    fn read_table(path: &Path) -> Result<toml::Table, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        content
            .parse::<toml::Table>()
            .map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })
    }
}

/// Merge `other` into `base`. Nested tables merge key by key; any other value
/// in `other` replaces the one in `base`. Unknown keys are carried along and
/// ignored at deserialization (forward-compatible).
fn merge_tables(base: &mut toml::Table, other: toml::Table) {
    for (key, value) in other {
        if let toml::Value::Table(incoming) = value {
            if let Some(toml::Value::Table(existing)) = base.get_mut(&key) {
                merge_tables(existing, incoming);
                continue;
            }
            base.insert(key, toml::Value::Table(incoming));
        } else {
            base.insert(key, value);
        }
    }
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}

fn env_var(suffix: &str) -> Option<String> {
    std::env::var(format!("{ENV_PREFIX}{suffix}")).ok()
}

fn env_parse<T: std::str::FromStr>(suffix: &str) -> Option<T> {
    env_var(suffix).and_then(|v| v.trim().parse::<T>().ok())
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
