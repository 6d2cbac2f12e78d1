//! The local population a noise pass works on.

use std::collections::{HashMap, HashSet};

use cbm_core::{Case, CaseId, WindowPair};

/// `case_base ∪ old ∪ new`, deduplicated by identity. Case-base order first,
/// then window cases the case base does not hold.
pub fn merge(windows: &WindowPair, case_base: &[Case]) -> Vec<Case> {
    let mut seen: HashSet<CaseId> = HashSet::with_capacity(case_base.len() + windows.len());
    case_base
        .iter()
        .chain(windows.old_window())
        .chain(windows.new_window())
        .filter(|c| seen.insert(c.id()))
        .cloned()
        .collect()
}

/// Identity lookup into a population slice.
pub fn index(population: &[Case]) -> HashMap<CaseId, &Case> {
    population.iter().map(|c| (c.id(), c)).collect()
}
