use std::collections::HashSet;

use crate::case::{Case, CaseId};

/// Time-ordered, disjoint windows over the stream.
///
/// `new` holds the cases received since the last maintenance cycle, `old` the
/// still-resident cases preceding them.
#[derive(Debug, Clone, Default)]
pub struct WindowPair {
    old: Vec<Case>,
    new: Vec<Case>,
}

impl WindowPair {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from explicit windows. Cases present in both keep only their
    /// `new` membership.
    pub fn from_parts(old: Vec<Case>, new: Vec<Case>) -> Self {
        let new_ids: HashSet<CaseId> = new.iter().map(Case::id).collect();
        let old = old.into_iter().filter(|c| !new_ids.contains(&c.id())).collect();
        Self { old, new }
    }

    pub fn old_window(&self) -> &[Case] {
        &self.old
    }

    pub fn new_window(&self) -> &[Case] {
        &self.new
    }

    pub fn push_old(&mut self, case: Case) {
        self.old.push(case);
    }

    pub fn push_new(&mut self, case: Case) {
        self.new.push(case);
    }

    /// `old := old ∪ new`, `new := ∅`.
    pub fn rotate(&mut self) {
        self.old.append(&mut self.new);
    }

    /// Keep only cases for which `is_resident` holds.
    pub fn retain_resident(&mut self, is_resident: impl Fn(CaseId) -> bool) {
        self.old.retain(|c| is_resident(c.id()));
        self.new.retain(|c| is_resident(c.id()));
    }

    pub fn old_ids(&self) -> HashSet<CaseId> {
        self.old.iter().map(Case::id).collect()
    }

    pub fn new_ids(&self) -> HashSet<CaseId> {
        self.new.iter().map(Case::id).collect()
    }

    pub fn len(&self) -> usize {
        self.old.len() + self.new.len()
    }

    pub fn is_empty(&self) -> bool {
        self.old.is_empty() && self.new.is_empty()
    }
}
