//! # cbm-noise
//!
//! Noise reduction over the windowed case population.
//!
//! - [`NefcsReducer`]: drift-aware M-BBNR removal plus confidence-driven
//!   soft activation and deactivation of cases.
//! - [`BbnrReducer`]: classic blame-based noise reduction.

pub mod accuracy_register;
pub mod bbnr;
pub mod context_switch;
pub mod drift;
pub mod mbbnr;
pub mod nefcs;
pub mod population;
pub mod wilson;

pub use accuracy_register::AccuracyRegister;
pub use bbnr::BbnrReducer;
pub use context_switch::{ActivationChange, ContextSwitcher};
pub use drift::{detect_novel, DriftReport};
pub use nefcs::NefcsReducer;
pub use wilson::WilsonInterval;
