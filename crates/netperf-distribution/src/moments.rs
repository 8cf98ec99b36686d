//! Standardized third and fourth moments

/// Skewness and excess kurtosis of `sample`
///
/// Population central moments `m3` and `m4` are divided by powers of the
/// supplied (sample) standard deviation: skewness = m3 / s³ and excess
/// kurtosis = m4 / s⁴ - 3. The caller guarantees a non-empty sample and a
/// non-zero `stddev`.
pub fn standardized_moments(sample: &[f64], mean: f64, stddev: f64) -> (f64, f64) {
    let n = sample.len() as f64;
    let (sum3, sum4) = sample.iter().fold((0.0, 0.0), |(s3, s4), &x| {
        let d = x - mean;
        let d2 = d * d;
        (s3 + d2 * d, s4 + d2 * d2)
    });
    let m3 = sum3 / n;
    let m4 = sum4 / n;

    let skewness = m3 / stddev.powi(3);
    let kurtosis = m4 / stddev.powi(4) - 3.0;
    (skewness, kurtosis)
}
