//! Standard score detection

use crate::types::{OutlierDiagnostics, OutlierMethod, OutlierReport};
use netperf_core::utils::{mean, std_dev};
use tracing::debug;

/// Smallest sample the z-score rule runs on
pub const ZSCORE_MIN_SAMPLES: usize = 3;

pub(crate) const ZSCORE_INSUFFICIENT: &str = "Insufficient data for Z-score method (need >= 3 values)";
pub(crate) const ZSCORE_NO_VARIATION: &str = "Zero standard deviation (all values identical)";

/// Flag values whose `|x - mean| / stddev` exceeds `threshold`
///
/// Uses the sample (n - 1) standard deviation. A constant sample is
/// reported as skipped rather than dividing by zero.
pub fn detect_zscore(sample: &[f64], threshold: f64) -> OutlierReport {
    let method = OutlierMethod::ZScore { threshold };
    if sample.len() < ZSCORE_MIN_SAMPLES {
        debug!(n = sample.len(), "z-score detection skipped");
        return OutlierReport::skipped(sample, &method, ZSCORE_INSUFFICIENT);
    }

    let mean = mean(sample);
    let stddev = std_dev(sample);
    if stddev == 0.0 {
        debug!("z-score detection skipped, zero standard deviation");
        return OutlierReport::skipped(sample, &method, ZSCORE_NO_VARIATION);
    }

    let z_scores: Vec<f64> = sample.iter().map(|&v| (v - mean) / stddev).collect();
    let max_z_score = z_scores.iter().fold(0.0f64, |acc, z| acc.max(z.abs()));

    debug!(mean, stddev, max_z_score, "z-scores computed");

    let diagnostics = OutlierDiagnostics::ZScore {
        threshold,
        mean,
        stddev,
        z_scores,
        max_z_score,
    };
    OutlierReport::partition(sample, diagnostics, |v| ((v - mean) / stddev).abs() > threshold)
}
