//! Windowed drift detection over competence neighborhoods.
//!
//! Each case's related set (itself, its coverage, its reachability) is a
//! local neighborhood. A neighborhood whose share of the new window exceeds
//! its share of the old window has gained mass; the neighborhoods carrying
//! the top `mass_fraction` of the total gain are drift-affected, and their
//! new-window representatives are exempt from noise removal this cycle.

use std::collections::{BTreeSet, HashSet};

use cbm_competence::CompetenceModel;
use cbm_core::{Case, CaseId};
use tracing::debug;

/// Outcome of one drift check.
#[derive(Debug, Clone, Default)]
pub struct DriftReport {
    /// New-window cases exempted from removal.
    pub novel: BTreeSet<CaseId>,
    /// Representatives of the drift-affected neighborhoods, largest gain first.
    pub affected: Vec<CaseId>,
    /// Sum of all positive deltas.
    pub total_mass: f64,
}

impl DriftReport {
    pub fn is_novel(&self, id: CaseId) -> bool {
        self.novel.contains(&id)
    }
}

/// Mark drift-affected neighborhoods.
///
/// `delta = |R ∩ new| / |new| − |R ∩ old| / |old|`, the old term being zero
/// for an empty old window. Nothing is marked when `new` is empty.
pub fn detect_novel(
    model: &CompetenceModel,
    population: &[Case],
    old: &HashSet<CaseId>,
    new: &HashSet<CaseId>,
    mass_fraction: f64,
) -> DriftReport {
    if new.is_empty() {
        return DriftReport::default();
    }
    let new_len = new.len() as f64;
    let old_len = old.len() as f64;

    let mut gains: Vec<(CaseId, f64)> = population
        .iter()
        .filter_map(|case| {
            let related = model.related_set(case.id());
            let in_new = related.iter().filter(|id| new.contains(*id)).count() as f64;
            let in_old = related.iter().filter(|id| old.contains(*id)).count() as f64;
            let old_share = if old.is_empty() { 0.0 } else { in_old / old_len };
            let delta = in_new / new_len - old_share;
            (delta > 0.0).then_some((case.id(), delta))
        })
        .collect();

    // Stable: equal gains keep population order.
    gains.sort_by(|a, b| b.1.total_cmp(&a.1));

    let total_mass: f64 = gains.iter().map(|&(_, d)| d).sum();
    let threshold = total_mass * mass_fraction;

    let mut report = DriftReport {
        total_mass,
        ..Default::default()
    };
    let mut cumulative = 0.0;
    for (id, delta) in gains {
        report.affected.push(id);
        if new.contains(&id) {
            report.novel.insert(id);
        }
        cumulative += delta;
        if cumulative >= threshold {
            break;
        }
    }

    debug!(
        total_mass,
        affected = report.affected.len(),
        novel = report.novel.len(),
        "drift check"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use cbm_oracle::EuclideanOracle;

    fn ids(values: &[u64]) -> HashSet<CaseId> {
        values.iter().map(|&v| CaseId::new(v)).collect()
    }

    #[test]
    fn empty_new_window_marks_nothing() {
        let cases: Vec<Case> = (0..4u64).map(|i| Case::new(i, vec![i as f64], 0)).collect();
        let model = CompetenceModel::build(&EuclideanOracle::new(), &cases, 1);
        let report = detect_novel(&model, &cases, &ids(&[0, 1, 2, 3]), &HashSet::new(), 0.1);
        assert!(report.novel.is_empty());
        assert_eq!(report.total_mass, 0.0);
    }

    #[test]
    fn far_new_cluster_is_novel() {
        // Old cluster near 0, new cluster near 100.
        let cases: Vec<Case> = [0.0, 0.5, 1.0, 1.5, 100.0, 100.5, 101.0]
            .iter()
            .enumerate()
            .map(|(i, &x)| Case::new(i as u64, vec![x], 0))
            .collect();
        let model = CompetenceModel::build(&EuclideanOracle::new(), &cases, 1);
        let report = detect_novel(&model, &cases, &ids(&[0, 1, 2, 3]), &ids(&[4, 5, 6]), 0.1);

        assert!(!report.novel.is_empty());
        assert!(report.novel.iter().all(|id| id.value() >= 4));
        assert!(report.total_mass > 0.0);
    }

    #[test]
    fn full_mass_fraction_marks_every_gaining_new_case() {
        let cases: Vec<Case> = [0.0, 0.5, 100.0, 100.5]
            .iter()
            .enumerate()
            .map(|(i, &x)| Case::new(i as u64, vec![x], 0))
            .collect();
        let model = CompetenceModel::build(&EuclideanOracle::new(), &cases, 1);
        let report = detect_novel(&model, &cases, &ids(&[0, 1]), &ids(&[2, 3]), 1.0);
        assert_eq!(report.novel, BTreeSet::from([CaseId::new(2), CaseId::new(3)]));
    }
}
