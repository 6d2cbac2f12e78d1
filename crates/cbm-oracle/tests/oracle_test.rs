//! Integration tests for the reference oracle.

use proptest::prelude::*;

use cbm_core::{Case, CaseId, ISimilarityOracle, Label};
use cbm_oracle::EuclideanOracle;

fn line(points: &[(f64, u32)]) -> Vec<Case> {
    points
        .iter()
        .enumerate()
        .map(|(i, &(x, label))| Case::new(i as u64, vec![x], label))
        .collect()
}

#[test]
fn nearest_first_and_self_excluded() {
    let cases = line(&[(0.0, 0), (1.0, 0), (5.0, 1), (2.5, 1)]);
    let refs: Vec<&Case> = cases.iter().collect();
    let oracle = EuclideanOracle::new();

    let nn = oracle.k_nearest(&cases[1], &refs, 3);
    let ids: Vec<u64> = nn.iter().map(|c| c.id().value()).collect();
    assert_eq!(ids, vec![0, 3, 2]);
}

#[test]
fn equal_distances_keep_population_order() {
    let cases = line(&[(1.0, 0), (-1.0, 1), (1.0, 1), (-1.0, 0)]);
    let refs: Vec<&Case> = cases.iter().collect();
    let query = Case::new(99, vec![0.0], 0);
    let nn = EuclideanOracle::new().k_nearest(&query, &refs, 4);
    let ids: Vec<u64> = nn.iter().map(|c| c.id().value()).collect();
    assert_eq!(ids, vec![0, 1, 2, 3]);
}

#[test]
fn predict_uses_majority_of_neighbors() {
    let cases = line(&[(0.0, 0), (0.2, 0), (0.4, 1), (9.0, 1), (9.5, 1)]);
    let refs: Vec<&Case> = cases.iter().collect();
    let oracle = EuclideanOracle::new();
    let query = Case::new(50, vec![0.1], 1);
    let predicted = oracle.predict(&query, &refs, 3);
    assert_eq!(predicted, Some(Label::new(0)));
    assert!(!oracle.is_correct(predicted, &query));
}

#[test]
fn k_larger_than_population_returns_everything_else() {
    let cases = line(&[(0.0, 0), (1.0, 0)]);
    let refs: Vec<&Case> = cases.iter().collect();
    let nn = EuclideanOracle::new().k_nearest(&cases[0], &refs, 5);
    assert_eq!(nn.len(), 1);
    assert_eq!(nn[0].id(), CaseId::new(1));
}

#[test]
fn time_weight_prefers_recent_cases() {
    let old = Case::new(1, vec![0.0], 0).with_arrival(0);
    let recent = Case::new(2, vec![0.5], 1).with_arrival(99);
    let refs = vec![&old, &recent];
    let query = Case::new(3, vec![0.2], 1).with_arrival(100);

    let plain = EuclideanOracle::new().k_nearest(&query, &refs, 1);
    assert_eq!(plain[0].id(), CaseId::new(1));

    let weighted = EuclideanOracle::with_time_weight(0.01).k_nearest(&query, &refs, 1);
    assert_eq!(weighted[0].id(), CaseId::new(2));
}

proptest! {
    #[test]
    fn prop_neighbors_sorted_and_bounded(
        xs in prop::collection::vec(-100.0f64..100.0, 1..40),
        q in -100.0f64..100.0,
        k in 1usize..10,
    ) {
        let cases: Vec<Case> = xs.iter().enumerate()
            .map(|(i, &x)| Case::new(i as u64, vec![x], 0)).collect();
        let refs: Vec<&Case> = cases.iter().collect();
        let query = Case::new(1_000, vec![q], 0);
        let oracle = EuclideanOracle::new();
        let nn = oracle.k_nearest(&query, &refs, k);
        prop_assert_eq!(nn.len(), k.min(cases.len()));
        for pair in nn.windows(2) {
            prop_assert!(oracle.distance(&query, pair[0]) <= oracle.distance(&query, pair[1]));
        }
    }
}
