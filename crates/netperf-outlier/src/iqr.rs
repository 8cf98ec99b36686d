//! Tukey fence detection

use crate::types::{OutlierDiagnostics, OutlierMethod, OutlierReport};
use netperf_core::nearest_rank_quartiles;
use netperf_core::utils::sorted;
use tracing::debug;

/// Smallest sample the IQR rule runs on
pub const IQR_MIN_SAMPLES: usize = 4;

pub(crate) const IQR_INSUFFICIENT: &str = "Insufficient data for IQR method (need >= 4 values)";

/// Flag values strictly outside `[Q1 - factor * IQR, Q3 + factor * IQR]`
pub fn detect_iqr(sample: &[f64], factor: f64) -> OutlierReport {
    if sample.len() < IQR_MIN_SAMPLES {
        debug!(n = sample.len(), "IQR detection skipped");
        return OutlierReport::skipped(sample, &OutlierMethod::Iqr { factor }, IQR_INSUFFICIENT);
    }

    let Some(quartiles) = nearest_rank_quartiles(&sorted(sample)) else {
        return OutlierReport::skipped(sample, &OutlierMethod::Iqr { factor }, IQR_INSUFFICIENT);
    };
    let (lower_fence, upper_fence) = quartiles.fences(factor);

    let below_lower = sample.iter().filter(|&&v| v < lower_fence).count();
    let above_upper = sample.iter().filter(|&&v| v > upper_fence).count();

    debug!(lower_fence, upper_fence, below_lower, above_upper, "IQR fences");

    let diagnostics = OutlierDiagnostics::Iqr {
        factor,
        q1: quartiles.q1,
        q3: quartiles.q3,
        iqr: quartiles.iqr(),
        lower_fence,
        upper_fence,
        below_lower,
        above_upper,
    };

    OutlierReport::partition(sample, diagnostics, |v| v < lower_fence || v > upper_fence)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_high_outlier() {
        let report = detect_iqr(&[10.0, 12.0, 11.0, 13.0, 12.0, 100.0], 1.5);

        assert_eq!(report.outliers, vec![100.0]);
        assert_eq!(report.indices, vec![5]);
        assert_eq!(report.clean_values, vec![10.0, 12.0, 11.0, 13.0, 12.0]);

        match report.diagnostics {
            OutlierDiagnostics::Iqr {
                q1,
                q3,
                iqr,
                lower_fence,
                upper_fence,
                below_lower,
                above_upper,
                ..
            } => {
                // sorted: [10, 11, 12, 12, 13, 100]; Q1 = s[1], Q3 = s[4]
                assert_eq!(q1, 11.0);
                assert_eq!(q3, 13.0);
                assert_eq!(iqr, 2.0);
                assert_eq!(lower_fence, 8.0);
                assert_eq!(upper_fence, 16.0);
                assert_eq!(below_lower, 0);
                assert_eq!(above_upper, 1);
            }
            other => panic!("unexpected diagnostics: {other:?}"),
        }
    }

    #[test]
    fn test_fences_are_strict() {
        // sorted: [1, 2, 3, 4]; Q1 = 2, Q3 = 4, IQR = 2; factor 0 puts fences at 2 and 4
        let report = detect_iqr(&[4.0, 2.0, 3.0, 1.0], 0.0);
        assert_eq!(report.outliers, vec![1.0]);
        assert_eq!(report.indices, vec![3]);
    }

    #[test]
    fn test_low_and_high_sides() {
        let report = detect_iqr(&[-50.0, 10.0, 11.0, 12.0, 11.0, 10.0, 12.0, 80.0], 1.5);
        assert_eq!(report.outliers, vec![-50.0, 80.0]);
        match report.diagnostics {
            OutlierDiagnostics::Iqr {
                below_lower,
                above_upper,
                ..
            } => assert_eq!((below_lower, above_upper), (1, 1)),
            other => panic!("unexpected diagnostics: {other:?}"),
        }
    }

    #[test]
    fn test_insufficient_data() {
        let report = detect_iqr(&[1.0, 2.0, 300.0], 1.5);
        assert!(!report.has_outliers());
        assert_eq!(report.clean_values, vec![1.0, 2.0, 300.0]);
        assert_eq!(report.message(), Some(IQR_INSUFFICIENT));
    }
}
