use std::collections::HashMap;

use cbm_core::{Case, CaseId};

/// The shrinking case set SRR works on. Positions index the input slice.
pub(crate) struct WorkingSet<'a> {
    cases: &'a [Case],
    present: Vec<bool>,
    positions: HashMap<CaseId, usize>,
    len: usize,
}

impl<'a> WorkingSet<'a> {
    pub(crate) fn new(cases: &'a [Case]) -> Self {
        Self {
            cases,
            present: vec![true; cases.len()],
            positions: cases.iter().enumerate().map(|(i, c)| (c.id(), i)).collect(),
            len: cases.len(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn case(&self, pos: usize) -> &'a Case {
        &self.cases[pos]
    }

    pub(crate) fn is_present(&self, pos: usize) -> bool {
        self.present[pos]
    }

    /// Any input case, present or removed.
    pub(crate) fn lookup(&self, id: CaseId) -> Option<&'a Case> {
        self.positions.get(&id).map(|&pos| &self.cases[pos])
    }

    pub(crate) fn remove(&mut self, pos: usize) {
        if self.present[pos] {
            self.present[pos] = false;
            self.len -= 1;
        }
    }

    /// Present cases other than the one at `excluded`, in input order.
    pub(crate) fn without(&self, excluded: usize) -> Vec<&'a Case> {
        self.cases
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != excluded && self.present[i])
            .map(|(_, c)| c)
            .collect()
    }

    /// Present cases, in input order.
    pub(crate) fn retained(&self) -> Vec<Case> {
        self.cases
            .iter()
            .zip(&self.present)
            .filter(|(_, &present)| present)
            .map(|(c, _)| c.clone())
            .collect()
    }
}
