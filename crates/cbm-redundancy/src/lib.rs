//! # cbm-redundancy
//!
//! Stepwise Redundancy Removal: condenses a case set toward a size limit,
//! removing a case only while it and every removed case relying on it stay
//! correctly classified. Neighbors of each removal are locked for the rest of
//! the pass so removals cannot cascade.

pub mod engine;
pub mod ordering;
mod working_set;

pub use engine::SrrReducer;
