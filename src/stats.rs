//! Moments of the weight sample against the uniform law.

/// Map a weight onto `[0, 1)` for floating-point analysis.
///
/// Scales the top 53 bits rather than the full value: `u128::MAX as
/// f64` rounds up to 2^128, so a direct division can return exactly
/// 1.0 at the top of the range. The top bits are exact in an f64
/// mantissa and keep the result strictly below one.
pub fn unit_scale(w: u128) -> f64 {
    (w >> 75) as f64 / 2f64.powi(53)
}

pub fn mean(x: &[f64]) -> f64 {
    if x.is_empty() {
        return 0.0;
    }
    x.iter().sum::<f64>() / x.len() as f64
}

/// Sample variance (n-1 divisor).
pub fn variance(x: &[f64]) -> f64 {
    if x.len() < 2 {
        return 0.0;
    }
    let m = mean(x);
    x.iter().map(|v| (v - m) * (v - m)).sum::<f64>() / (x.len() - 1) as f64
}

/// Empirical moments of a unit-scaled weight sample, with the uniform
/// expectations they are compared against (mean 1/2, variance 1/12).
pub struct DistSummary {
    pub n: usize,
    pub mean: f64,
    pub variance: f64,
    /// Z-score of the sample mean under the uniform null.
    pub mean_z: f64,
}

impl DistSummary {
    pub fn from_weights(weights: &[u128]) -> Self {
        let scaled: Vec<f64> = weights.iter().map(|&w| unit_scale(w)).collect();
        let m = mean(&scaled);
        let v = variance(&scaled);
        let se = (1.0 / (12.0 * scaled.len().max(1) as f64)).sqrt();
        DistSummary {
            n: scaled.len(),
            mean: m,
            variance: v,
            mean_z: (m - 0.5) / se,
        }
    }

    pub fn print(&self) {
        println!("\nWeight distribution summary ({} samples, unit scale)", self.n);
        println!("  mean     = {:.6}   (uniform expects 0.500000)", self.mean);
        println!("  variance = {:.6}   (uniform expects {:.6})", self.variance, 1.0 / 12.0);
        println!("  mean z-score vs uniform = {:.3}", self.mean_z);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_variance() {
        let x = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        assert!((mean(&x) - 3.0).abs() < 1e-12);
        assert!((variance(&x) - 2.5).abs() < 1e-12);
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(variance(&[1.0]), 0.0);
    }

    #[test]
    fn test_unit_scale_bounds() {
        assert_eq!(unit_scale(0), 0.0);
        assert!(unit_scale(u128::MAX) < 1.0);
        assert!(unit_scale(u128::MAX - (1u128 << 74)) < 1.0);
        assert!((unit_scale(1u128 << 127) - 0.5).abs() < 1e-12);
        assert!((unit_scale(1u128 << 126) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_summary_of_symmetric_sample() {
        // Two points symmetric about 2^127 give mean exactly 0.5.
        let weights = vec![1u128 << 126, 3u128 << 126];
        let s = DistSummary::from_weights(&weights);
        assert_eq!(s.n, 2);
        assert!((s.mean - 0.5).abs() < 1e-12);
        assert!(s.mean_z.abs() < 1e-9);
    }
}
