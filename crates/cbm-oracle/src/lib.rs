//! # cbm-oracle
//!
//! Reference `ISimilarityOracle`: Euclidean distance over feature vectors,
//! optionally widened by the arrival gap between two cases, with a linear
//! scan for neighbors and majority-vote classification.

pub mod distance;
pub mod euclidean;
pub mod vote;

pub use euclidean::EuclideanOracle;
pub use vote::majority_vote;
