use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Stable identity of a case. Maintenance bookkeeping is keyed by this,
/// never by feature values or references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CaseId(u64);

impl CaseId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for CaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "case#{}", self.0)
    }
}

impl From<u64> for CaseId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// Solution label (class value) of a case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Label(u32);

impl Label {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for Label {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// One stored example: identity, feature description, and solution label.
///
/// Immutable after creation. Features are reference-counted so snapshots and
/// working sets clone cheaply. Equality and hashing use the identity only: two
/// cases with identical features are still distinct entities.
#[derive(Debug, Clone)]
pub struct Case {
    id: CaseId,
    features: Arc<[f64]>,
    label: Label,
    /// Position in the stream. Defaults to the id value.
    arrival: u64,
}

impl Case {
    /// Create a case whose arrival index equals its id.
    pub fn new(id: impl Into<CaseId>, features: Vec<f64>, label: impl Into<Label>) -> Self {
        let id = id.into();
        Self {
            id,
            features: Arc::from(features),
            label: label.into(),
            arrival: id.value(),
        }
    }

    /// Override the arrival index.
    pub fn with_arrival(mut self, arrival: u64) -> Self {
        self.arrival = arrival;
        self
    }

    pub fn id(&self) -> CaseId {
        self.id
    }

    pub fn features(&self) -> &[f64] {
        &self.features
    }

    pub fn label(&self) -> Label {
        self.label
    }

    pub fn arrival(&self) -> u64 {
        self.arrival
    }
}

impl PartialEq for Case {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Case {}

impl Hash for Case {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
