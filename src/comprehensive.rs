//! One-call statistical summary of a benchmark sample

use crate::config::ComprehensiveConfig;
use netperf_confidence::confidence_interval;
use netperf_core::utils::{mean, median, std_dev};
use netperf_core::DescriptiveStats;
use netperf_distribution::{analyze_distribution, KurtosisInterpretation, SkewnessInterpretation};
use netperf_outlier::detect_outliers;
use serde::Serialize;
use tracing::{debug, instrument};

/// Smallest sample given a confidence interval
pub const MIN_SAMPLES_CONFIDENCE: usize = 2;
/// Smallest sample given outlier detection
pub const MIN_SAMPLES_OUTLIERS: usize = 4;
/// Smallest sample given skewness and kurtosis
pub const MIN_SAMPLES_DISTRIBUTION: usize = 3;
/// Smallest sample given the normality screen
pub const MIN_SAMPLES_NORMALITY: usize = 8;

/// Interval around the mean
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConfidenceSection {
    pub ci_lower: f64,
    pub ci_upper: f64,
    /// Half the interval width
    pub ci_margin: f64,
    pub ci_level: f64,
    /// Full interval width
    pub ci_range: f64,
}

/// Statistics recomputed after dropping outliers
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CleanSection {
    pub mean_clean: f64,
    pub median_clean: f64,
    pub stddev_clean: f64,
    /// Change of the mean in percent, `(mean_clean - mean) / mean * 100`
    pub improvement_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutlierSection {
    pub outliers: Vec<f64>,
    pub outlier_count: usize,
    pub outlier_indices: Vec<usize>,
    pub outlier_percentage: f64,
    #[serde(flatten)]
    pub clean: Option<CleanSection>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NormalitySection {
    pub is_normal: bool,
    pub normality_p_value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DistributionSection {
    pub skewness: f64,
    pub kurtosis: f64,
    pub skewness_interpretation: SkewnessInterpretation,
    pub kurtosis_interpretation: KurtosisInterpretation,
    #[serde(flatten)]
    pub normality: Option<NormalitySection>,
}

/// Everything computable for one sample
///
/// Serializes to a single flat map. Sections that were not computed are
/// left out of the map entirely rather than written as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComprehensiveStats {
    #[serde(flatten)]
    pub descriptive: DescriptiveStats,
    #[serde(flatten)]
    pub confidence: Option<ConfidenceSection>,
    #[serde(flatten)]
    pub outliers: Option<OutlierSection>,
    #[serde(flatten)]
    pub distribution: Option<DistributionSection>,
}

impl ComprehensiveStats {
    /// Flat JSON object of every computed field
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

/// Descriptive statistics plus every section the sample size allows
///
/// Returns `None` for an empty sample. Sections are gated on sample size:
/// the confidence interval needs 2 values, distribution shape 3, outlier
/// detection 4 (and `detect_outliers`), the normality screen 8. The clean
/// block appears only when outliers were found and at least two values
/// remain.
///
/// # Examples
///
/// ```rust
/// use netperf_stats::{calculate_comprehensive_stats, ComprehensiveConfig};
///
/// let sample = [10.0, 12.0, 11.0, 13.0, 12.0, 100.0];
/// let stats = calculate_comprehensive_stats(&sample, &ComprehensiveConfig::default()).unwrap();
///
/// let outliers = stats.outliers.as_ref().unwrap();
/// assert_eq!(outliers.outlier_indices, vec![5]);
/// assert!(stats.distribution.unwrap().normality.is_none());
/// ```
#[instrument(skip(sample, config), fields(n = sample.len()))]
pub fn calculate_comprehensive_stats(
    sample: &[f64],
    config: &ComprehensiveConfig,
) -> Option<ComprehensiveStats> {
    let n = sample.len();
    if n == 0 {
        debug!("empty sample");
        return None;
    }

    let descriptive = DescriptiveStats::from_sample(sample);

    let confidence = (n >= MIN_SAMPLES_CONFIDENCE).then(|| {
        let ci = confidence_interval(sample, config.confidence_level, config.ci_method);
        ConfidenceSection {
            ci_lower: ci.lower,
            ci_upper: ci.upper,
            ci_margin: ci.margin(),
            ci_level: config.confidence_level,
            ci_range: ci.width(),
        }
    });

    let outliers = (config.detect_outliers && n >= MIN_SAMPLES_OUTLIERS).then(|| {
        let report = detect_outliers(sample, config.outlier_method);
        let clean = (report.has_outliers() && report.clean_values.len() >= 2).then(|| {
            let mean_clean = mean(&report.clean_values);
            let improvement_pct = if descriptive.mean != 0.0 {
                (mean_clean - descriptive.mean) / descriptive.mean * 100.0
            } else {
                0.0
            };
            CleanSection {
                mean_clean,
                median_clean: median(&report.clean_values),
                stddev_clean: std_dev(&report.clean_values),
                improvement_pct,
            }
        });
        OutlierSection {
            outlier_count: report.outlier_count(),
            outlier_percentage: report.outlier_percentage(n),
            outliers: report.outliers,
            outlier_indices: report.indices,
            clean,
        }
    });

    let distribution = (n >= MIN_SAMPLES_DISTRIBUTION).then(|| {
        let profile = analyze_distribution(sample);
        DistributionSection {
            skewness: profile.skewness,
            kurtosis: profile.kurtosis,
            skewness_interpretation: profile.skewness_interpretation,
            kurtosis_interpretation: profile.kurtosis_interpretation,
            normality: (n >= MIN_SAMPLES_NORMALITY).then_some(NormalitySection {
                is_normal: profile.is_normal,
                normality_p_value: profile.p_value,
            }),
        }
    });

    debug!(
        confidence = confidence.is_some(),
        outliers = outliers.is_some(),
        distribution = distribution.is_some(),
        "sections computed"
    );

    Some(ComprehensiveStats {
        descriptive,
        confidence,
        outliers,
        distribution,
    })
}
