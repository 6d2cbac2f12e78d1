//! Integration tests for stepwise redundancy removal.

use std::collections::HashSet;

use proptest::prelude::*;

use cbm_competence::is_solved;
use cbm_core::{Case, CaseId, IRedundancyReducer};
use cbm_oracle::EuclideanOracle;
use cbm_redundancy::SrrReducer;
use test_fixtures::{two_class_stream, StreamSpec};

fn stream(len: usize, seed: u64) -> Vec<Case> {
    two_class_stream(&StreamSpec {
        len,
        seed,
        label_noise: 0.0,
        separation: 2.5,
        ..Default::default()
    })
}

/// Every removed case is still classified correctly by what was kept.
fn assert_removed_still_solved(input: &[Case], retained: &[Case], removed: &[CaseId], k: usize) {
    let oracle = EuclideanOracle::new();
    let kept: Vec<&Case> = retained.iter().collect();
    for id in removed {
        let case = input.iter().find(|c| c.id() == *id).unwrap();
        assert!(
            is_solved(&oracle, case, &kept, k),
            "{id} lost its classification"
        );
    }
}

#[test]
fn separable_stream_condenses_to_limit() {
    let cases = stream(200, 11);
    let reducer = SrrReducer::new(3);
    let outcome = reducer.reduce(&EuclideanOracle::new(), &cases, 80).unwrap();

    assert_eq!(outcome.retained.len(), 80);
    assert!(outcome.shortfall.is_none());
    assert_eq!(outcome.retained.len() + outcome.removed.len(), cases.len());
    assert_removed_still_solved(&cases, &outcome.retained, &outcome.removed, 3);
}

#[test]
fn alternating_labels_cannot_shrink() {
    // Every case's nearest neighbor carries the other label, so nothing is
    // solvable and nothing may go.
    let cases: Vec<Case> = (0..12u64)
        .map(|i| Case::new(i, vec![i as f64], (i % 2) as u32))
        .collect();
    let outcome = SrrReducer::new(1)
        .reduce(&EuclideanOracle::new(), &cases, 4)
        .unwrap();

    assert!(outcome.removed.is_empty());
    assert_eq!(outcome.retained.len(), 12);
    let shortfall = outcome.shortfall.unwrap();
    assert_eq!(shortfall.achieved, 12);
    assert_eq!(shortfall.limit, 4);
    assert_eq!(shortfall.excess(), 8);
}

#[test]
fn converged_output_is_a_fixed_point() {
    let cases = stream(150, 4);
    let reducer = SrrReducer::new(3);
    let oracle = EuclideanOracle::new();
    let first = reducer.reduce(&oracle, &cases, 60).unwrap();
    assert!(first.shortfall.is_none());

    let second = reducer.reduce(&oracle, &first.retained, 60).unwrap();
    assert!(second.removed.is_empty());
    assert_eq!(second.retained.len(), first.retained.len());
}

#[test]
fn removed_and_retained_partition_the_input() {
    let cases = stream(120, 9);
    let outcome = SrrReducer::new(3)
        .reduce(&EuclideanOracle::new(), &cases, 40)
        .unwrap();

    let kept: HashSet<CaseId> = outcome.retained.iter().map(Case::id).collect();
    let gone: HashSet<CaseId> = outcome.removed.iter().copied().collect();
    assert!(kept.is_disjoint(&gone));
    assert_eq!(kept.len() + gone.len(), cases.len());
    assert_eq!(gone.len(), outcome.removed.len());
}

#[test]
fn reducer_is_deterministic() {
    let cases = stream(120, 21);
    let reducer = SrrReducer::new(3);
    let oracle = EuclideanOracle::new();
    let a = reducer.reduce(&oracle, &cases, 40).unwrap();
    let b = reducer.reduce(&oracle, &cases, 40).unwrap();
    assert_eq!(a.removed, b.removed);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn prop_removals_never_break_classification(
        seed in 0u64..500,
        len in 20usize..70,
        limit in 4usize..40,
        k in prop::sample::select(vec![1usize, 3, 5]),
        noise in 0.0f64..0.2,
    ) {
        let cases = two_class_stream(&StreamSpec {
            len,
            seed,
            label_noise: noise,
            ..Default::default()
        });
        let outcome = SrrReducer::new(k)
            .reduce(&EuclideanOracle::new(), &cases, limit)
            .unwrap();

        prop_assert!(outcome.retained.len() <= cases.len());
        prop_assert_eq!(outcome.retained.len() + outcome.removed.len(), cases.len());
        prop_assert_eq!(
            outcome.shortfall.is_some(),
            outcome.retained.len() > limit
        );
        if cases.len() > limit {
            prop_assert!(outcome.retained.len() >= limit);
        }
        assert_removed_still_solved(&cases, &outcome.retained, &outcome.removed, k);
    }
}
