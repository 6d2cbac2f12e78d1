//! Seams between the scheduler and its collaborators.

pub mod noise_reducer;
pub mod oracle;
pub mod redundancy_reducer;

pub use noise_reducer::INoiseReducer;
pub use oracle::ISimilarityOracle;
pub use redundancy_reducer::IRedundancyReducer;
