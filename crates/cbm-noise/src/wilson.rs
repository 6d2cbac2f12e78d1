//! Wilson score interval for a binomial proportion.

/// Two-sided Wilson bounds around an observed accuracy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WilsonInterval {
    pub lower: f64,
    pub upper: f64,
}

impl WilsonInterval {
    /// Interval for `p` observed over `n` trials with coefficient `z`.
    /// `None` when `n` is zero.
    ///
    /// ```text
    /// denom = 1 + z²/n
    /// ci    = (p + z²/2n ± z·sqrt(p(1-p)/n + z²/4n²)) / denom
    /// ```
    pub fn compute(p: f64, n: usize, z: f64) -> Option<Self> {
        if n == 0 {
            return None;
        }
        let n = n as f64;
        let z2 = z * z;
        let denom = 1.0 + z2 / n;
        let center = p + z2 / (2.0 * n);
        let spread = z * (p * (1.0 - p) / n + z2 / (4.0 * n * n)).sqrt();
        Some(Self {
            lower: (center - spread) / denom,
            upper: (center + spread) / denom,
        })
    }

    /// Interval for `successes` out of `n` trials.
    pub fn from_counts(successes: usize, n: usize, z: f64) -> Option<Self> {
        if n == 0 {
            return None;
        }
        Self::compute(successes as f64 / n as f64, n, z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const Z: f64 = 0.5;

    #[test]
    fn empty_sample_has_no_interval() {
        assert!(WilsonInterval::compute(0.5, 0, Z).is_none());
        assert!(WilsonInterval::from_counts(0, 0, Z).is_none());
    }

    #[test]
    fn perfect_record_over_six_samples() {
        let ci = WilsonInterval::compute(1.0, 6, Z).unwrap();
        assert!((ci.lower - 0.96).abs() < 1e-9);
        assert!((ci.upper - 1.0).abs() < 1e-9);
    }

    #[test]
    fn failing_record_over_six_samples() {
        let ci = WilsonInterval::compute(0.0, 6, Z).unwrap();
        assert!(ci.lower.abs() < 1e-9);
        assert!((ci.upper - 0.04).abs() < 1e-9);
    }

    #[test]
    fn bounds_bracket_the_observed_rate() {
        let ci = WilsonInterval::from_counts(3, 5, Z).unwrap();
        assert!(ci.lower < 0.6 && 0.6 < ci.upper);
    }
}
