//! Nearest-rank percentiles and quartiles
//!
//! All positions are taken at `floor(n * q)` in the ascending-sorted sample,
//! without interpolation. The box plot and the IQR outlier detector share
//! [`nearest_rank_quartiles`] so their fences always agree.

use serde::{Deserialize, Serialize};

/// Value at sorted position `floor(n * q)`
///
/// Samples of length 0 return 0.0 and samples of length 1 return their
/// only value for every `q`. The index is clamped to the last element so
/// `q = 1.0` yields the maximum.
///
/// # Examples
///
/// ```rust
/// use netperf_core::percentiles::nearest_rank;
///
/// let sorted = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
/// assert_eq!(nearest_rank(&sorted, 0.5), 6.0);
/// assert_eq!(nearest_rank(&sorted, 0.9), 10.0);
/// ```
pub fn nearest_rank(sorted: &[f64], q: f64) -> f64 {
    match sorted.len() {
        0 => 0.0,
        1 => sorted[0],
        n => sorted[rank_index(n, q)],
    }
}

#[inline]
fn rank_index(n: usize, q: f64) -> usize {
    ((n as f64 * q) as usize).min(n - 1)
}

/// First, second and third quartile of a sorted sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quartiles {
    pub q1: f64,
    pub q2: f64,
    pub q3: f64,
}

impl Quartiles {
    /// Interquartile range, `q3 - q1`
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }

    /// Tukey fences `(q1 - factor * iqr, q3 + factor * iqr)`
    pub fn fences(&self, factor: f64) -> (f64, f64) {
        let iqr = self.iqr();
        (self.q1 - factor * iqr, self.q3 + factor * iqr)
    }
}

/// Quartiles at sorted positions `n / 4`, `n / 2` and `3n / 4`
///
/// Returns `None` for an empty sample.
pub fn nearest_rank_quartiles(sorted: &[f64]) -> Option<Quartiles> {
    let n = sorted.len();
    if n == 0 {
        return None;
    }
    Some(Quartiles {
        q1: sorted[n / 4],
        q2: sorted[n / 2],
        q3: sorted[((3 * n) / 4).min(n - 1)],
    })
}
