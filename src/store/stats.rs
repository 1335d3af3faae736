//! Descriptive statistics over value sequences
//!
//! Pure functions of their input slice; no external state. The spread
//! measure is the population standard deviation (denominator N, not N-1),
//! which makes a single-sample sequence report spread 0 rather than an
//! undefined value.

use serde::Serialize;

/// Summary statistics for one metric's flattened value sequence
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricStats {
    pub mean: f64,
    /// Population standard deviation (denominator N)
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    /// Conventional median: middle element, or average of the two middle
    /// elements for even-length sequences
    pub median: f64,
    pub sum: f64,
}

impl MetricStats {
    /// Compute statistics over a value sequence, `None` when empty
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let sum: f64 = values.iter().sum();
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Some(Self {
            mean: sum / values.len() as f64,
            std_dev: population_std_dev(values),
            min,
            max,
            median: median(values),
            sum,
        })
    }
}

/// Arithmetic mean; 0.0 for an empty slice
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation (denominator N); 0.0 for fewer than
/// two samples
pub fn population_std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let m = mean(values);
    let variance = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// Median with even/odd-count averaging; 0.0 for an empty slice
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-6,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_stats_empty_is_none() {
        assert_eq!(MetricStats::from_values(&[]), None);
    }

    #[test]
    fn test_stats_two_values() {
        let stats = MetricStats::from_values(&[5.0, 7.0]).unwrap();

        assert_close(stats.mean, 6.0);
        assert_close(stats.std_dev, 1.0);
        assert_close(stats.min, 5.0);
        assert_close(stats.max, 7.0);
        assert_close(stats.median, 6.0);
        assert_close(stats.sum, 12.0);
    }

    #[test]
    fn test_std_dev_uses_population_denominator() {
        // Population std-dev of [2,4,6] is sqrt(8/3) ≈ 1.632993;
        // the sample std-dev would be 2.0
        let sd = population_std_dev(&[2.0, 4.0, 6.0]);
        assert_close(sd, (8.0f64 / 3.0).sqrt());
        assert!((sd - 2.0).abs() > 0.3);
    }

    #[test]
    fn test_single_sample_spread_is_zero() {
        assert_eq!(population_std_dev(&[42.0]), 0.0);
        let stats = MetricStats::from_values(&[42.0]).unwrap();
        assert_eq!(stats.std_dev, 0.0);
        assert_eq!(stats.median, 42.0);
    }

    #[test]
    fn test_median_odd_and_even() {
        assert_close(median(&[3.0, 1.0, 2.0]), 2.0);
        assert_close(median(&[4.0, 1.0, 3.0, 2.0]), 2.5);
    }

    #[test]
    fn test_stats_all_zero_values_is_not_absent() {
        // Distinguishable from "no data": zeros are a real statistics record
        let stats = MetricStats::from_values(&[0.0, 0.0]).unwrap();
        assert_eq!(stats.mean, 0.0);
        assert_eq!(stats.sum, 0.0);
    }
}
