use std::cmp::Ordering;

use cbm_core::config::OracleConfig;
use cbm_core::{Case, ISimilarityOracle, Label};

use crate::distance;
use crate::vote;

/// Linear-scan k-NN oracle over Euclidean feature distance.
///
/// With a non-zero `distance_time_weight`, cases that arrived far apart in the
/// stream are pushed away from each other, favouring recent neighbors.
#[derive(Debug, Clone, Default)]
pub struct EuclideanOracle {
    distance_time_weight: f64,
}

impl EuclideanOracle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_time_weight(distance_time_weight: f64) -> Self {
        Self {
            distance_time_weight,
        }
    }

    pub fn from_config(config: &OracleConfig) -> Self {
        Self::with_time_weight(config.distance_time_weight)
    }

    pub fn distance(&self, a: &Case, b: &Case) -> f64 {
        distance::time_weighted(
            a.features(),
            b.features(),
            a.arrival(),
            b.arrival(),
            self.distance_time_weight,
        )
    }
}

impl ISimilarityOracle for EuclideanOracle {
    fn k_nearest<'a>(&self, query: &Case, population: &[&'a Case], k: usize) -> Vec<&'a Case> {
        if k == 0 {
            return Vec::new();
        }
        let mut scored: Vec<(f64, &'a Case)> = population
            .iter()
            .filter(|c| c.id() != query.id())
            .map(|&c| (self.distance(query, c), c))
            .collect();
        // Stable sort keeps population order among equal distances.
        scored.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));
        scored.truncate(k);
        scored.into_iter().map(|(_, c)| c).collect()
    }

    fn classify(&self, neighbors: &[&Case]) -> Option<Label> {
        vote::majority_vote(neighbors)
    }
}
