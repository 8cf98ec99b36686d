//! Empirical-rule normality check
//!
//! Compares the share of values within one, two and three standard
//! deviations of the mean against the normal 68.27 / 95.45 / 99.73%
//! and turns the weighted gap into a pseudo p-value. This is a coarse
//! screen, not a goodness-of-fit test.

use serde::{Deserialize, Serialize};

/// Expected coverage of ±1σ, ±2σ and ±3σ under a normal distribution
pub const EXPECTED_COVERAGE: [f64; 3] = [0.6827, 0.9545, 0.9973];

/// Weight of each band's gap in the deviation score
const BAND_WEIGHTS: [f64; 3] = [2.0, 1.5, 1.0];

/// Smallest p-value reported
pub const P_VALUE_FLOOR: f64 = 0.001;

/// A sample is considered normal when its p-value exceeds this
pub const NORMALITY_ALPHA: f64 = 0.05;

/// Outcome of the empirical-rule check
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalityCheck {
    pub is_normal: bool,
    pub p_value: f64,
    /// Observed share of values within 1, 2 and 3 standard deviations
    pub coverage: [f64; 3],
}

impl NormalityCheck {
    /// Result used when the check cannot run
    pub fn assumed_normal() -> Self {
        Self {
            is_normal: true,
            p_value: 1.0,
            coverage: EXPECTED_COVERAGE,
        }
    }
}

/// Run the empirical-rule check with a precomputed `mean` and `stddev`
///
/// Band membership is inclusive (`|x - mean| <= k * stddev`). Samples
/// with fewer than three values are assumed normal.
pub fn empirical_rule_test(sample: &[f64], mean: f64, stddev: f64) -> NormalityCheck {
    let n = sample.len();
    if n < 3 {
        return NormalityCheck::assumed_normal();
    }

    let mut coverage = [0.0; 3];
    for (k, share) in coverage.iter_mut().enumerate() {
        let limit = (k + 1) as f64 * stddev;
        let within = sample.iter().filter(|&&x| (x - mean).abs() <= limit).count();
        *share = within as f64 / n as f64;
    }

    let deviation: f64 = coverage
        .iter()
        .zip(EXPECTED_COVERAGE.iter())
        .zip(BAND_WEIGHTS.iter())
        .map(|((observed, expected), weight)| (observed - expected).abs() * weight)
        .sum();

    let p_value = (1.0 - deviation).max(P_VALUE_FLOOR);
    NormalityCheck {
        is_normal: p_value > NORMALITY_ALPHA,
        p_value,
        coverage,
    }
}
