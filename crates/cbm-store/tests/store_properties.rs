//! Property tests for the case store: identities stay unique under any
//! sequence of adds and replacements.

use std::collections::HashSet;

use proptest::prelude::*;

use cbm_core::Case;
use cbm_store::CaseStore;

fn cases(ids: &[u64]) -> Vec<Case> {
    ids.iter().map(|&id| Case::new(id, vec![id as f64], 0)).collect()
}

fn assert_unique(store: &CaseStore) {
    let ids: HashSet<_> = store.iter().map(Case::id).collect();
    assert_eq!(ids.len(), store.len());
}

proptest! {
    #[test]
    fn prop_store_never_holds_duplicates(
        batches in prop::collection::vec(prop::collection::vec(0u64..40, 0..8), 1..12),
        replace_at in 0usize..12,
    ) {
        let mut store = CaseStore::new();
        for (i, batch) in batches.iter().enumerate() {
            let before = store.len();
            let unique_batch: HashSet<_> = batch.iter().collect();
            let collides = unique_batch.len() != batch.len()
                || batch.iter().any(|&id| store.contains(id.into()));

            if i == replace_at {
                let result = store.replace_all(cases(batch));
                prop_assert_eq!(result.is_ok(), unique_batch.len() == batch.len());
            } else {
                let result = store.add(cases(batch));
                prop_assert_eq!(result.is_err(), collides);
                if collides {
                    prop_assert_eq!(store.len(), before);
                }
            }
            assert_unique(&store);
        }
    }

    #[test]
    fn prop_snapshot_matches_store(ids in prop::collection::hash_set(0u64..100, 0..30)) {
        let ids: Vec<u64> = ids.into_iter().collect();
        let store = CaseStore::from_cases(cases(&ids)).unwrap();
        let snapshot = store.snapshot();
        prop_assert_eq!(snapshot.len(), ids.len());
        for (case, id) in snapshot.iter().zip(&ids) {
            prop_assert_eq!(case.id().value(), *id);
        }
    }
}
