//! Descriptive statistics for a single sample

use crate::percentiles::nearest_rank;
use crate::utils::{mean, median_sorted, min_max, sorted, std_dev, variance};
use serde::{Deserialize, Serialize};

/// Location, spread and nearest-rank percentiles of a sample
///
/// Variance-family fields (`stddev`, `variance`, `coefficient_of_variation`,
/// `std_error`) are 0 for samples with fewer than two values. An empty
/// sample reports zeros everywhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DescriptiveStats {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
    pub range: f64,
    pub stddev: f64,
    pub variance: f64,
    /// Standard deviation as a percentage of the mean, 0 when the mean is 0
    pub coefficient_of_variation: f64,
    pub std_error: f64,
    pub p50: f64,
    pub p90: f64,
    pub p95: f64,
    pub p99: f64,
}

impl DescriptiveStats {
    /// Compute all descriptive fields for `sample`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use netperf_core::DescriptiveStats;
    ///
    /// let stats = DescriptiveStats::from_sample(&[2.0, 4.0, 6.0, 8.0]);
    /// assert_eq!(stats.count, 4);
    /// assert_eq!(stats.mean, 5.0);
    /// assert_eq!(stats.median, 5.0);
    /// assert_eq!(stats.range, 6.0);
    /// ```
    pub fn from_sample(sample: &[f64]) -> Self {
        let n = sample.len();
        let sorted = sorted(sample);
        let (min, max) = min_max(sample).unwrap_or((0.0, 0.0));
        let mean = mean(sample);

        let (stddev, variance, coefficient_of_variation, std_error) = if n >= 2 {
            let sd = std_dev(sample);
            let cv = if mean != 0.0 { sd / mean * 100.0 } else { 0.0 };
            (sd, variance(sample), cv, sd / (n as f64).sqrt())
        } else {
            (0.0, 0.0, 0.0, 0.0)
        };

        Self {
            count: n,
            mean,
            median: median_sorted(&sorted),
            min,
            max,
            range: max - min,
            stddev,
            variance,
            coefficient_of_variation,
            std_error,
            p50: nearest_rank(&sorted, 0.50),
            p90: nearest_rank(&sorted, 0.90),
            p95: nearest_rank(&sorted, 0.95),
            p99: nearest_rank(&sorted, 0.99),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_basic_fields() {
        let stats = DescriptiveStats::from_sample(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(stats.count, 5);
        assert_eq!(stats.mean, 3.0);
        assert_eq!(stats.median, 3.0);
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.max, 5.0);
        assert_eq!(stats.range, 4.0);
        assert_relative_eq!(stats.variance, 2.5, epsilon = 1e-12);
        assert_relative_eq!(stats.stddev, 2.5f64.sqrt(), epsilon = 1e-12);
        assert_relative_eq!(stats.std_error, 2.5f64.sqrt() / 5f64.sqrt(), epsilon = 1e-12);
        assert_relative_eq!(
            stats.coefficient_of_variation,
            2.5f64.sqrt() / 3.0 * 100.0,
            epsilon = 1e-10
        );
        // floor(5 * q) => indices 2, 4, 4, 4
        assert_eq!(stats.p50, 3.0);
        assert_eq!(stats.p90, 5.0);
        assert_eq!(stats.p95, 5.0);
        assert_eq!(stats.p99, 5.0);
    }

    #[test]
    fn test_singleton_sample() {
        let stats = DescriptiveStats::from_sample(&[7.5]);
        assert_eq!(stats.count, 1);
        assert_eq!(stats.mean, 7.5);
        assert_eq!(stats.range, 0.0);
        assert_eq!(stats.stddev, 0.0);
        assert_eq!(stats.variance, 0.0);
        assert_eq!(stats.coefficient_of_variation, 0.0);
        assert_eq!(stats.std_error, 0.0);
        assert_eq!((stats.p50, stats.p90, stats.p95, stats.p99), (7.5, 7.5, 7.5, 7.5));
    }

    #[test]
    fn test_empty_sample_is_all_zero() {
        let stats = DescriptiveStats::from_sample(&[]);
        assert_eq!(stats.count, 0);
        assert_eq!(stats.mean, 0.0);
        assert_eq!(stats.max, 0.0);
        assert_eq!(stats.p99, 0.0);
    }

    #[test]
    fn test_zero_mean_coefficient_of_variation() {
        let stats = DescriptiveStats::from_sample(&[-1.0, 1.0]);
        assert_eq!(stats.mean, 0.0);
        assert!(stats.stddev > 0.0);
        assert_eq!(stats.coefficient_of_variation, 0.0);
    }

    #[test]
    fn test_input_order_does_not_matter() {
        let a = DescriptiveStats::from_sample(&[5.0, 1.0, 4.0, 2.0, 3.0]);
        let b = DescriptiveStats::from_sample(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(a.p90, b.p90);
        assert_eq!(a.median, b.median);
        assert_relative_eq!(a.mean, b.mean);
    }

    proptest! {
        #[test]
        fn prop_percentiles_are_ordered(sample in prop::collection::vec(-1e6f64..1e6, 1..200)) {
            let s = DescriptiveStats::from_sample(&sample);
            prop_assert!(s.min <= s.p50);
            prop_assert!(s.p50 <= s.p90);
            prop_assert!(s.p90 <= s.p95);
            prop_assert!(s.p95 <= s.p99);
            prop_assert!(s.p99 <= s.max);
        }
    }
}
