//! # cbm-store
//!
//! The resident case base. Mutated only through `add` and `replace_all`;
//! both reject identity collisions and leave the store untouched on failure.

pub mod case_store;

pub use case_store::CaseStore;
