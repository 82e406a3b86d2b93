use statrs::distribution::{ContinuousCDF, Normal};

/// Percentile (0–100) of a z-score under the standard normal distribution.
pub fn percentile(z_score: f64) -> f64 {
    (Normal::standard().cdf(z_score) * 100.0).clamp(0.0, 100.0)
}
