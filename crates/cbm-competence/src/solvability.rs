//! Solvability checks against a working population.

use std::collections::HashSet;

use cbm_core::{Case, CaseId, ISimilarityOracle};

/// Whether `population` classifies `case` correctly. The case itself is never
/// one of its own neighbors.
pub fn is_solved(
    oracle: &dyn ISimilarityOracle,
    case: &Case,
    population: &[&Case],
    k: usize,
) -> bool {
    oracle.is_correct(oracle.predict(case, population, k), case)
}

/// `population` without the cases in `excluded`, order preserved.
pub fn without<'a>(population: &[&'a Case], excluded: &HashSet<CaseId>) -> Vec<&'a Case> {
    population
        .iter()
        .copied()
        .filter(|c| !excluded.contains(&c.id()))
        .collect()
}
