//! Outlier detection for benchmark samples
//!
//! Two rules are provided:
//!
//! - **IQR** (Tukey fences): robust, needs at least 4 values
//! - **z-score**: distance from the mean in standard deviations, needs at
//!   least 3 values with some variation
//!
//! Both return an [`OutlierReport`] that splits the sample into outliers
//! and clean values without reordering either. When a rule cannot run, the
//! report keeps every value and carries the reason in
//! [`OutlierDiagnostics::Skipped`].
//!
//! # Examples
//!
//! ```rust
//! use netperf_outlier::{detect_outliers, OutlierMethod};
//!
//! let latencies = [10.0, 12.0, 11.0, 13.0, 12.0, 100.0];
//! let report = detect_outliers(&latencies, OutlierMethod::iqr());
//!
//! assert_eq!(report.outliers, vec![100.0]);
//! assert_eq!(report.clean_values, vec![10.0, 12.0, 11.0, 13.0, 12.0]);
//! ```

mod iqr;
mod types;
mod zscore;

pub use iqr::{detect_iqr, IQR_MIN_SAMPLES};
pub use types::{
    OutlierDiagnostics, OutlierMethod, OutlierReport, DEFAULT_IQR_FACTOR, DEFAULT_ZSCORE_THRESHOLD,
};
pub use zscore::{detect_zscore, ZSCORE_MIN_SAMPLES};

use tracing::instrument;

/// Run the detector selected by `method` over `sample`
#[instrument(skip(sample), fields(n = sample.len()))]
pub fn detect_outliers(sample: &[f64], method: OutlierMethod) -> OutlierReport {
    match method {
        OutlierMethod::Iqr { factor } => detect_iqr(sample, factor),
        OutlierMethod::ZScore { threshold } => detect_zscore(sample, threshold),
    }
}
