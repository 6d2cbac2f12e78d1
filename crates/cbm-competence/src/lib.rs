//! # cbm-competence
//!
//! Competence model over a fixed population: for every case, the cases it
//! helps solve (coverage), the cases that solve it (reachability), and the
//! cases it causes to be misclassified (liability). Plus the solvability
//! checks and id-keyed link bookkeeping the reducers share.

pub mod links;
pub mod model;
pub mod solvability;

pub use links::LinkLedger;
pub use model::{CompetenceModel, CompetenceSets};
pub use solvability::{is_solved, without};
