//! # netperf-stats
//!
//! Statistics engine for benchmark measurements such as latencies and
//! throughputs. Every function takes a plain `&[f64]` sample and never
//! mutates it.
//!
//! ## Crates
//!
//! - **netperf-core**: error type, slice utilities, [`DescriptiveStats`]
//! - **netperf-confidence**: t-distribution and seeded bootstrap intervals
//!   for the mean
//! - **netperf-outlier**: IQR and z-score outlier detection
//! - **netperf-distribution**: skewness, kurtosis and a normality screen
//! - **netperf-hypothesis**: t-tests, Mann-Whitney U and Cohen's d
//! - **netperf-viz**: ASCII histograms and box plots
//!
//! This crate ties them together in [`calculate_comprehensive_stats`],
//! which computes every section the sample size allows.
//!
//! ## Quick Start
//!
//! ```rust
//! use netperf_stats::prelude::*;
//!
//! let latencies = vec![10.2, 10.8, 9.9, 10.4, 10.1, 10.6, 10.3, 42.0];
//! let stats = calculate_comprehensive_stats(&latencies, &ComprehensiveConfig::default()).unwrap();
//!
//! println!("mean {:.2} over {} samples", stats.descriptive.mean, stats.descriptive.count);
//! if let Some(outliers) = &stats.outliers {
//!     println!("{} outliers ({:.1}%)", outliers.outlier_count, outliers.outlier_percentage);
//! }
//!
//! // Compare two runs
//! let baseline = [10.0, 10.2, 9.9, 10.1, 10.0];
//! let current = [11.0, 11.3, 10.9, 11.2, 11.1];
//! let result = t_test(&baseline, &current, false);
//! assert!(result.significant);
//! ```

mod comprehensive;
mod config;

pub use comprehensive::{
    calculate_comprehensive_stats, CleanSection, ComprehensiveStats, ConfidenceSection,
    DistributionSection, NormalitySection, OutlierSection, MIN_SAMPLES_CONFIDENCE,
    MIN_SAMPLES_DISTRIBUTION, MIN_SAMPLES_NORMALITY, MIN_SAMPLES_OUTLIERS,
};
pub use config::ComprehensiveConfig;

pub use netperf_confidence::{confidence_interval, CiMethod, ConfidenceInterval, MeanBootstrap};
pub use netperf_core::{DescriptiveStats, Error, Result};
pub use netperf_distribution::{
    analyze_distribution, DistributionProfile, KurtosisInterpretation, SkewnessInterpretation,
};
pub use netperf_hypothesis::{
    cohens_d, mann_whitney_u, t_test, EffectSizeMagnitude, TestDetails, TestKind, TestResult,
};
pub use netperf_outlier::{detect_outliers, OutlierDiagnostics, OutlierMethod, OutlierReport};
pub use netperf_viz::{generate_boxplot, generate_histogram};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        analyze_distribution, calculate_comprehensive_stats, cohens_d, confidence_interval,
        detect_outliers, generate_boxplot, generate_histogram, mann_whitney_u, t_test, CiMethod,
        ComprehensiveConfig, ComprehensiveStats, ConfidenceInterval, DescriptiveStats,
        DistributionProfile, EffectSizeMagnitude, OutlierMethod, OutlierReport, TestResult,
    };
    pub use netperf_viz::{DEFAULT_BINS, DEFAULT_WIDTH};
}
