use crate::case::{Case, Label};

/// k-NN similarity and majority-vote classification.
///
/// Consumed by every maintenance algorithm; implemented outside the core.
pub trait ISimilarityOracle: Send + Sync {
    /// The `k` cases of `population` nearest to `query`, nearest first.
    ///
    /// Equal distances keep population order. Cases sharing `query`'s identity
    /// are never returned, so a case can be queried against a population that
    /// contains it.
    fn k_nearest<'a>(&self, query: &Case, population: &[&'a Case], k: usize) -> Vec<&'a Case>;

    /// Majority vote over `neighbors`; ties go to the first-seen label.
    /// `None` when there are no neighbors.
    fn classify(&self, neighbors: &[&Case]) -> Option<Label>;

    fn is_correct(&self, predicted: Option<Label>, actual: &Case) -> bool {
        predicted == Some(actual.label())
    }

    /// Classify `query` against `population`.
    fn predict(&self, query: &Case, population: &[&Case], k: usize) -> Option<Label> {
        let neighbors = self.k_nearest(query, population, k);
        self.classify(&neighbors)
    }
}
