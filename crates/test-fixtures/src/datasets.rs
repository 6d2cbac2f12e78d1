//! Seeded synthetic case streams.

use cbm_core::Case;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Shape of a two-class stream over the plane.
#[derive(Debug, Clone)]
pub struct StreamSpec {
    pub len: usize,
    pub seed: u64,
    /// Fraction of cases whose label is flipped.
    pub label_noise: f64,
    /// Offset between the two class squares along each axis. Each class
    /// occupies a 2x2 square, so offsets below 2.0 overlap.
    pub separation: f64,
    /// First case id; ids are consecutive.
    pub first_id: u64,
}

impl Default for StreamSpec {
    fn default() -> Self {
        Self {
            len: 500,
            seed: 7,
            label_noise: 0.02,
            separation: 1.6,
            first_id: 0,
        }
    }
}

/// Two classes drawn uniformly from offset squares, labels chosen at random,
/// with a fraction of labels flipped.
pub fn two_class_stream(spec: &StreamSpec) -> Vec<Case> {
    let mut rng = StdRng::seed_from_u64(spec.seed);
    (0..spec.len)
        .map(|i| {
            let class: u32 = rng.gen_range(0..2);
            let offset = if class == 1 { spec.separation } else { 0.0 };
            let x = rng.gen_range(0.0..2.0) + offset;
            let y = rng.gen_range(0.0..2.0) + offset;
            let label = if rng.gen_bool(spec.label_noise) {
                1 - class
            } else {
                class
            };
            Case::new(spec.first_id + i as u64, vec![x, y], label)
        })
        .collect()
}

/// An old window over the unit square and a new window over a square far
/// away, each split into two classes by its vertical midline.
pub fn disjoint_drift_windows(seed: u64, old_len: usize, new_len: usize) -> (Vec<Case>, Vec<Case>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut region = |origin: f64, len: usize, first_id: u64| -> Vec<Case> {
        (0..len)
            .map(|i| {
                let x = origin + rng.gen_range(0.0..1.0);
                let y = origin + rng.gen_range(0.0..1.0);
                let label = u32::from(x >= origin + 0.5);
                Case::new(first_id + i as u64, vec![x, y], label)
            })
            .collect()
    };
    let old = region(0.0, old_len, 0);
    let new = region(10.0, new_len, 10_000);
    (old, new)
}
