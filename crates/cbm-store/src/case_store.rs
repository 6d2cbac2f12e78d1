use std::collections::{HashMap, HashSet};

use cbm_core::errors::StoreError;
use cbm_core::{Case, CaseId};
use tracing::debug;

/// Ordered, identity-unique collection of resident cases.
#[derive(Debug, Clone, Default)]
pub struct CaseStore {
    cases: Vec<Case>,
    /// Position of each resident case in `cases`.
    index: HashMap<CaseId, usize>,
}

impl CaseStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from `cases`, rejecting duplicate identities.
    pub fn from_cases(cases: Vec<Case>) -> Result<Self, StoreError> {
        let mut store = Self::new();
        store.replace_all(cases)?;
        Ok(store)
    }

    /// Insert `cases` in order. All or nothing: a collision with a resident
    /// case or within the batch rejects the whole batch.
    pub fn add(&mut self, cases: impl IntoIterator<Item = Case>) -> Result<(), StoreError> {
        let batch: Vec<Case> = cases.into_iter().collect();
        let mut seen = HashSet::with_capacity(batch.len());
        for case in &batch {
            if self.index.contains_key(&case.id()) || !seen.insert(case.id()) {
                return Err(StoreError::DuplicateCase { id: case.id() });
            }
        }
        for case in batch {
            self.index.insert(case.id(), self.cases.len());
            self.cases.push(case);
        }
        Ok(())
    }

    /// Atomically swap the resident set for `cases`.
    pub fn replace_all(&mut self, cases: Vec<Case>) -> Result<(), StoreError> {
        let mut index = HashMap::with_capacity(cases.len());
        for (pos, case) in cases.iter().enumerate() {
            if index.insert(case.id(), pos).is_some() {
                return Err(StoreError::DuplicateCase { id: case.id() });
            }
        }
        debug!(before = self.cases.len(), after = cases.len(), "case store replaced");
        self.cases = cases;
        self.index = index;
        Ok(())
    }

    /// Owned view of the resident cases, in store order.
    pub fn snapshot(&self) -> Vec<Case> {
        self.cases.clone()
    }

    /// Borrowed view of the resident cases, in store order.
    pub fn as_refs(&self) -> Vec<&Case> {
        self.cases.iter().collect()
    }

    pub fn get(&self, id: CaseId) -> Option<&Case> {
        self.index.get(&id).map(|&pos| &self.cases[pos])
    }

    pub fn contains(&self, id: CaseId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Case> {
        self.cases.iter()
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }
}
