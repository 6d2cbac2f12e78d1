//! The noise/redundancy reducer pair a scheduler runs each cycle.

use cbm_core::config::{CbmConfig, StrategyKind};
use cbm_core::{INoiseReducer, IRedundancyReducer};
use cbm_noise::{BbnrReducer, NefcsReducer};
use cbm_redundancy::SrrReducer;

/// Reducers run by a maintenance cycle. A missing reducer skips its stage.
pub struct MaintenancePlan {
    pub noise: Option<Box<dyn INoiseReducer>>,
    pub redundancy: Option<Box<dyn IRedundancyReducer>>,
}

impl MaintenancePlan {
    pub fn new(
        noise: Option<Box<dyn INoiseReducer>>,
        redundancy: Option<Box<dyn IRedundancyReducer>>,
    ) -> Self {
        Self { noise, redundancy }
    }

    /// A plan that never evicts.
    pub fn none() -> Self {
        Self::new(None, None)
    }

    /// Build the reducer pair named by `config.maintenance.strategy`.
    pub fn from_config(config: &CbmConfig) -> Self {
        let k = config.maintenance.k;
        let nefcs = || -> Box<dyn INoiseReducer> { Box::new(NefcsReducer::from_config(config)) };
        let srr = || -> Box<dyn IRedundancyReducer> {
            Box::new(SrrReducer::from_config(&config.maintenance))
        };

        match config.maintenance.strategy {
            StrategyKind::NefcsSrr => Self::new(Some(nefcs()), Some(srr())),
            StrategyKind::BbnrSrr => Self::new(Some(Box::new(BbnrReducer::new(k))), Some(srr())),
            StrategyKind::SrrOnly => Self::new(None, Some(srr())),
            StrategyKind::NoiseOnly => Self::new(Some(nefcs()), None),
            StrategyKind::Disabled => Self::none(),
        }
    }

    /// `"<noise>+<redundancy>"`, with `-` for a skipped stage.
    pub fn describe(&self) -> String {
        let noise = self.noise.as_ref().map_or("-", |n| n.name());
        let redundancy = self.redundancy.as_ref().map_or("-", |r| r.name());
        format!("{noise}+{redundancy}")
    }
}

impl Default for MaintenancePlan {
    fn default() -> Self {
        Self::from_config(&CbmConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan_for(strategy: StrategyKind) -> MaintenancePlan {
        let mut config = CbmConfig::default();
        config.maintenance.strategy = strategy;
        MaintenancePlan::from_config(&config)
    }

    #[test]
    fn strategies_map_to_reducer_pairs() {
        assert_eq!(plan_for(StrategyKind::NefcsSrr).describe(), "nefcs+srr");
        assert_eq!(plan_for(StrategyKind::BbnrSrr).describe(), "bbnr+srr");
        assert_eq!(plan_for(StrategyKind::SrrOnly).describe(), "-+srr");
        assert_eq!(plan_for(StrategyKind::NoiseOnly).describe(), "nefcs+-");
        assert_eq!(plan_for(StrategyKind::Disabled).describe(), "-+-");
    }

    #[test]
    fn default_plan_is_nefcs_then_srr() {
        assert_eq!(MaintenancePlan::default().describe(), "nefcs+srr");
    }
}
