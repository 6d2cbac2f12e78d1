//! Distance helpers.

/// Euclidean distance between two feature vectors.
/// Missing trailing dimensions count as zero.
pub fn euclidean(a: &[f64], b: &[f64]) -> f64 {
    let len = a.len().max(b.len());
    let mut sum = 0.0f64;
    for i in 0..len {
        let x = a.get(i).copied().unwrap_or(0.0);
        let y = b.get(i).copied().unwrap_or(0.0);
        sum += (x - y) * (x - y);
    }
    sum.sqrt()
}

/// Feature distance plus `weight` times the arrival gap.
pub fn time_weighted(a: &[f64], b: &[f64], arrival_a: u64, arrival_b: u64, weight: f64) -> f64 {
    let base = euclidean(a, b);
    if weight == 0.0 {
        return base;
    }
    base + weight * arrival_a.abs_diff(arrival_b) as f64
}
