//! Utility functions for working with data slices
//!
//! Every function here takes the sample by shared reference and never
//! reorders it; sorting happens on a private copy.

use statrs::statistics::Statistics;
use std::cmp::Ordering;

/// Sort data and return a new vector
///
/// Handles NaN values by placing them at the end.
///
/// # Examples
///
/// ```rust
/// use netperf_core::utils::sorted;
///
/// let data = vec![3.0, 1.0, 5.0, 2.0, 4.0];
/// assert_eq!(sorted(&data), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
/// ```
pub fn sorted(data: &[f64]) -> Vec<f64> {
    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
    });
    sorted
}

/// Calculate the mean of a slice
///
/// Returns 0.0 for empty slices.
///
/// # Examples
///
/// ```rust
/// use netperf_core::utils::mean;
///
/// assert_eq!(mean(&[1.0, 2.0, 3.0]), 2.0);
/// assert_eq!(mean(&[]), 0.0);
/// ```
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    data.iter().mean()
}

/// Calculate the Bessel-corrected sample variance (divisor n - 1)
///
/// Returns 0.0 for slices with less than 2 elements.
pub fn variance(data: &[f64]) -> f64 {
    if data.len() < 2 {
        return 0.0;
    }
    data.iter().variance()
}

/// Calculate the sample standard deviation
///
/// Returns 0.0 for slices with less than 2 elements.
///
/// # Examples
///
/// ```rust
/// use netperf_core::utils::std_dev;
///
/// let data = [1.0, 2.0, 3.0, 4.0, 5.0];
/// let sd = std_dev(&data);
/// assert!((sd - 1.58113883).abs() < 1e-6);
/// ```
pub fn std_dev(data: &[f64]) -> f64 {
    variance(data).sqrt()
}

/// Median of a slice, averaging the two middle values for even lengths
///
/// Returns 0.0 for empty slices.
pub fn median(data: &[f64]) -> f64 {
    median_sorted(&sorted(data))
}

/// Median of an already sorted slice
pub fn median_sorted(sorted_data: &[f64]) -> f64 {
    let n = sorted_data.len();
    if n == 0 {
        return 0.0;
    }
    if n % 2 == 1 {
        sorted_data[n / 2]
    } else {
        (sorted_data[n / 2 - 1] + sorted_data[n / 2]) / 2.0
    }
}

/// Smallest and largest value of a slice, `None` when empty
pub fn min_max(data: &[f64]) -> Option<(f64, f64)> {
    let first = *data.first()?;
    Some(
        data.iter()
            .fold((first, first), |(lo, hi), &x| (lo.min(x), hi.max(x))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sorted_basic() {
        let data = vec![3.0, 1.0, 5.0, 2.0, 4.0];
        assert_eq!(sorted(&data), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_sorted_empty() {
        assert_eq!(sorted(&[]), Vec::<f64>::new());
    }

    #[test]
    fn test_sorted_with_nan() {
        let data = vec![3.0, f64::NAN, 1.0, 2.0];
        let sorted_data = sorted(&data);

        assert_eq!(&sorted_data[..3], &[1.0, 2.0, 3.0]);
        assert!(sorted_data[3].is_nan());
    }

    #[test]
    fn test_sorted_preserves_original() {
        let data = vec![3.0, 1.0, 5.0, 2.0, 4.0];
        let original = data.clone();
        let _ = sorted(&data);
        assert_eq!(data, original);
    }

    #[test]
    fn test_mean_basic() {
        assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0, 5.0]), 3.0);
        assert_eq!(mean(&[-10.0, 10.0]), 0.0);
        assert_eq!(mean(&[42.0]), 42.0);
    }

    #[test]
    fn test_mean_empty() {
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn test_variance_and_std_dev() {
        let data = [1.0, 2.0, 3.0, 4.0, 5.0];
        // sum of squared deviations = 10, n - 1 = 4
        assert_relative_eq!(variance(&data), 2.5, epsilon = 1e-12);
        assert_relative_eq!(std_dev(&data), 2.5f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_std_dev_short_slices() {
        assert_eq!(std_dev(&[]), 0.0);
        assert_eq!(std_dev(&[42.0]), 0.0);
        assert_eq!(variance(&[42.0]), 0.0);
    }

    #[test]
    fn test_std_dev_identical_values() {
        assert_eq!(std_dev(&[5.0, 5.0, 5.0, 5.0]), 0.0);
    }

    #[test]
    fn test_numerical_stability() {
        let data = [1e10, 1e10 + 1.0, 1e10 + 2.0];
        assert_relative_eq!(std_dev(&data), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_median_odd_and_even() {
        assert_eq!(median(&[3.0, 1.0, 2.0]), 2.0);
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), 2.5);
        assert_eq!(median(&[7.0]), 7.0);
        assert_eq!(median(&[]), 0.0);
    }

    #[test]
    fn test_min_max() {
        assert_eq!(min_max(&[3.0, -1.0, 8.0, 2.0]), Some((-1.0, 8.0)));
        assert_eq!(min_max(&[4.0]), Some((4.0, 4.0)));
        assert_eq!(min_max(&[]), None);
    }
}
