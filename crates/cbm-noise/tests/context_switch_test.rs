//! Activation decisions at the edge of the register threshold.

use proptest::prelude::*;

use cbm_core::config::ContextSwitchConfig;
use cbm_core::Case;
use cbm_noise::{ActivationChange, ContextSwitcher, WilsonInterval};

fn config(register_length: usize) -> ContextSwitchConfig {
    ContextSwitchConfig {
        register_length,
        ..Default::default()
    }
}

#[test]
fn shortest_register_decides_both_ways() {
    // l = 2: decisions start at MIN_PREDICTIONS + 1 = 2 samples.
    let mut cs = ContextSwitcher::new(config(2));
    let case = Case::new(1, vec![0.0], 0);

    assert_eq!(cs.record(&case, false), None);
    assert_eq!(
        cs.record(&case, false),
        Some(ActivationChange::Deactivated(case.id()))
    );

    // [false, true]: p = 0.5, no decision.
    assert_eq!(cs.record(&case, true), None);
    // [true, true]: p = 1.0 over two samples.
    assert_eq!(
        cs.record(&case, true),
        Some(ActivationChange::Reactivated(case.id()))
    );
}

#[test]
fn active_case_with_perfect_record_stays_active() {
    let mut cs = ContextSwitcher::new(config(10));
    let case = Case::new(2, vec![0.0], 0);
    for _ in 0..20 {
        assert_eq!(cs.record(&case, true), None);
    }
    assert!(!cs.is_deactivated(case.id()));
    assert_eq!(cs.register(case.id()).map(|r| r.len()), Some(10));
}

proptest! {
    #[test]
    fn prop_threshold_sample_count_is_decisive(register_length in 2usize..200) {
        let cs = config(register_length);
        let n = cs.min_predictions() + 1;

        let perfect = WilsonInterval::compute(1.0, n, cs.z).unwrap();
        prop_assert!(perfect.lower > cs.p_min);

        let failing = WilsonInterval::compute(0.0, n, cs.z).unwrap();
        prop_assert!(failing.upper < cs.p_max);
    }

    #[test]
    fn prop_interval_is_ordered_and_bounded(successes in 0usize..50, extra in 0usize..50) {
        let n = successes + extra + 1;
        let ci = WilsonInterval::from_counts(successes, n, 0.5).unwrap();
        prop_assert!(ci.lower <= ci.upper);
        prop_assert!(ci.lower >= -1e-12);
        prop_assert!(ci.upper <= 1.0 + 1e-12);
    }
}
