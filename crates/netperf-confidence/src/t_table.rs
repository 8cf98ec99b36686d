//! Tabulated two-tailed t-critical values
//!
//! A coarse lookup of the t-distribution's inverse CDF: three confidence
//! tiers by six degrees-of-freedom buckets, with the normal 1.96 for any
//! level below the 90% tier. The table and its bucket boundaries are part
//! of the public contract; results must not drift towards exact quantiles.

/// Degrees-of-freedom lower bounds, largest first
const DF_BUCKETS: [usize; 5] = [30, 20, 15, 10, 5];

/// Critical values for levels >= 0.98 (99% intervals)
const T_99: [f64; 6] = [2.750, 2.845, 2.947, 3.169, 4.032, 5.841];
/// Critical values for levels >= 0.94 (95% intervals)
const T_95: [f64; 6] = [2.042, 2.086, 2.131, 2.228, 2.571, 4.303];
/// Critical values for levels >= 0.89 (90% intervals)
const T_90: [f64; 6] = [1.697, 1.725, 1.753, 1.812, 2.015, 2.920];

/// z-value used below the 90% tier
pub const Z_FALLBACK: f64 = 1.96;

/// Look up the t-critical value for `df` degrees of freedom at `confidence`
///
/// # Examples
///
/// ```rust
/// use netperf_confidence::t_critical;
///
/// assert_eq!(t_critical(4, 0.95), 4.303);
/// assert_eq!(t_critical(9, 0.95), 2.571);
/// assert_eq!(t_critical(100, 0.99), 2.750);
/// assert_eq!(t_critical(3, 0.80), 1.96);
/// ```
pub fn t_critical(df: usize, confidence: f64) -> f64 {
    let row = if confidence >= 0.98 {
        &T_99
    } else if confidence >= 0.94 {
        &T_95
    } else if confidence >= 0.89 {
        &T_90
    } else {
        return Z_FALLBACK;
    };

    let bucket = DF_BUCKETS
        .iter()
        .position(|&lower| df >= lower)
        .unwrap_or(DF_BUCKETS.len());
    row[bucket]
}
