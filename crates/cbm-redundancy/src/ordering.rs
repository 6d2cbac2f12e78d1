//! Removal order for SRR.

use std::cmp::Reverse;

use cbm_competence::CompetenceModel;
use cbm_core::Case;

/// Positions of `cases` ordered by descending reachability-set size.
/// Equal sizes keep input order.
pub fn removal_order(model: &CompetenceModel, cases: &[Case]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..cases.len()).collect();
    order.sort_by_key(|&pos| Reverse(model.reachability(cases[pos].id()).len()));
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use cbm_oracle::EuclideanOracle;

    #[test]
    fn most_reachable_first_with_stable_ties() {
        // A dense run of class 0 and an isolated class 1 point.
        let cases: Vec<Case> = [0.0, 0.1, 0.2, 0.3, 5.0]
            .iter()
            .enumerate()
            .map(|(i, &x)| Case::new(i as u64, vec![x], u32::from(x > 1.0)))
            .collect();
        let model = CompetenceModel::build(&EuclideanOracle::new(), &cases, 1);
        let order = removal_order(&model, &cases);

        assert_eq!(order.len(), 5);
        let sizes: Vec<usize> = order
            .iter()
            .map(|&p| model.reachability(cases[p].id()).len())
            .collect();
        assert!(sizes.windows(2).all(|w| w[0] >= w[1]));
        // The isolated point is misclassified, reaches nothing, and goes last.
        assert_eq!(order[4], 4);
    }
}
