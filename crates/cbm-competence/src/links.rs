//! Id-keyed dependency bookkeeping between removed cases and the cases they
//! rely on.

use std::collections::{BTreeMap, BTreeSet};

use cbm_core::CaseId;

/// Adjacency between removed cases and the resident cases protecting them.
///
/// `linked` maps a removed case to the neighbors it relies on; `dependents`
/// is the reverse index. Both are keyed by identity so removing a case can
/// never leave a dangling reference.
#[derive(Debug, Clone, Default)]
pub struct LinkLedger {
    linked: BTreeMap<CaseId, BTreeSet<CaseId>>,
    dependents: BTreeMap<CaseId, BTreeSet<CaseId>>,
}

impl LinkLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `removed` now relies on `neighbors`, replacing any earlier
    /// link for it.
    pub fn link(&mut self, removed: CaseId, neighbors: impl IntoIterator<Item = CaseId>) {
        self.unlink(removed);
        let neighbors: BTreeSet<CaseId> = neighbors.into_iter().collect();
        for &n in &neighbors {
            self.dependents.entry(n).or_default().insert(removed);
        }
        self.linked.insert(removed, neighbors);
    }

    /// Drop the link held by `removed`.
    pub fn unlink(&mut self, removed: CaseId) {
        if let Some(old) = self.linked.remove(&removed) {
            for n in old {
                if let Some(deps) = self.dependents.get_mut(&n) {
                    deps.remove(&removed);
                    if deps.is_empty() {
                        self.dependents.remove(&n);
                    }
                }
            }
        }
    }

    /// Removed cases relying on `id`, in id order.
    pub fn dependents_of(&self, id: CaseId) -> Vec<CaseId> {
        self.dependents
            .get(&id)
            .map(|deps| deps.iter().copied().collect())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.linked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.linked.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(v: u64) -> CaseId {
        CaseId::new(v)
    }

    #[test]
    fn link_builds_reverse_index() {
        let mut ledger = LinkLedger::new();
        ledger.link(id(1), [id(10), id(11)]);
        ledger.link(id(2), [id(11)]);
        assert_eq!(ledger.dependents_of(id(11)), vec![id(1), id(2)]);
        assert_eq!(ledger.dependents_of(id(10)), vec![id(1)]);
        assert!(ledger.dependents_of(id(12)).is_empty());
    }

    #[test]
    fn relinking_replaces_old_neighbors() {
        let mut ledger = LinkLedger::new();
        ledger.link(id(1), [id(10), id(11)]);
        ledger.link(id(1), [id(12)]);
        assert!(ledger.dependents_of(id(10)).is_empty());
        assert_eq!(ledger.dependents_of(id(12)), vec![id(1)]);
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn unlink_clears_both_directions() {
        let mut ledger = LinkLedger::new();
        ledger.link(id(1), [id(10)]);
        ledger.unlink(id(1));
        assert!(ledger.is_empty());
        assert!(ledger.dependents_of(id(10)).is_empty());
    }
}
