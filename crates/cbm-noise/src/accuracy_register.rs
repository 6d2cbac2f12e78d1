//! Fixed-capacity ring buffer of recent correctness outcomes.

/// The last `capacity` outcomes of one case's votes, oldest overwritten first.
#[derive(Debug, Clone)]
pub struct AccuracyRegister {
    slots: Box<[bool]>,
    /// Index of the next write.
    head: usize,
    len: usize,
}

impl AccuracyRegister {
    /// A register of at least one slot.
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![false; capacity.max(1)].into_boxed_slice(),
            head: 0,
            len: 0,
        }
    }

    pub fn push(&mut self, correct: bool) {
        self.slots[self.head] = correct;
        self.head = (self.head + 1) % self.slots.len();
        self.len = (self.len + 1).min(self.slots.len());
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.slots.len()
    }

    /// Correct outcomes currently held.
    pub fn successes(&self) -> usize {
        self.iter().filter(|&correct| correct).count()
    }

    /// Share of correct outcomes, `None` when empty.
    pub fn accuracy(&self) -> Option<f64> {
        (self.len > 0).then(|| self.successes() as f64 / self.len as f64)
    }

    /// Outcomes from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        let cap = self.slots.len();
        let start = (self.head + cap - self.len) % cap;
        (0..self.len).map(move |i| self.slots[(start + i) % cap])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_then_overwrites_oldest() {
        let mut reg = AccuracyRegister::new(3);
        reg.push(true);
        reg.push(true);
        assert_eq!(reg.len(), 2);
        assert!(!reg.is_full());

        reg.push(false);
        reg.push(false);
        assert!(reg.is_full());
        assert_eq!(reg.len(), 3);
        assert_eq!(reg.iter().collect::<Vec<_>>(), vec![true, false, false]);
        assert_eq!(reg.successes(), 1);
    }

    #[test]
    fn accuracy_of_empty_register_is_none() {
        let reg = AccuracyRegister::new(4);
        assert!(reg.is_empty());
        assert_eq!(reg.accuracy(), None);
    }

    #[test]
    fn accuracy_tracks_window() {
        let mut reg = AccuracyRegister::new(2);
        reg.push(false);
        reg.push(true);
        assert_eq!(reg.accuracy(), Some(0.5));
        reg.push(true);
        assert_eq!(reg.accuracy(), Some(1.0));
    }

    #[test]
    fn zero_capacity_is_clamped() {
        let mut reg = AccuracyRegister::new(0);
        assert_eq!(reg.capacity(), 1);
        reg.push(true);
        reg.push(false);
        assert_eq!(reg.iter().collect::<Vec<_>>(), vec![false]);
    }
}
