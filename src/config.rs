//! Configuration for [`calculate_comprehensive_stats`](crate::calculate_comprehensive_stats)

use netperf_confidence::CiMethod;
use netperf_core::{Error, Result};
use netperf_outlier::OutlierMethod;
use serde::{Deserialize, Serialize};

/// What the aggregator computes and how
///
/// Missing JSON fields fall back to the defaults: 95% confidence, automatic
/// interval method, IQR outlier detection with factor 1.5.
///
/// # Examples
///
/// ```rust
/// use netperf_stats::{ComprehensiveConfig, OutlierMethod};
///
/// let config = ComprehensiveConfig::from_json(r#"{"confidence_level": 0.99}"#).unwrap();
/// assert_eq!(config.confidence_level, 0.99);
/// assert_eq!(config.outlier_method, OutlierMethod::iqr());
///
/// let strict = ComprehensiveConfig::default().with_outlier_method(OutlierMethod::Iqr { factor: 3.0 });
/// assert!(strict.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComprehensiveConfig {
    /// Confidence level of the interval around the mean, in (0, 1)
    pub confidence_level: f64,
    pub ci_method: CiMethod,
    /// Run outlier detection at all
    pub detect_outliers: bool,
    pub outlier_method: OutlierMethod,
}

impl Default for ComprehensiveConfig {
    fn default() -> Self {
        Self {
            confidence_level: 0.95,
            ci_method: CiMethod::Auto,
            detect_outliers: true,
            outlier_method: OutlierMethod::iqr(),
        }
    }
}

impl ComprehensiveConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_confidence_level(mut self, confidence_level: f64) -> Self {
        self.confidence_level = confidence_level;
        self
    }

    pub fn with_ci_method(mut self, ci_method: CiMethod) -> Self {
        self.ci_method = ci_method;
        self
    }

    pub fn with_outlier_detection(mut self, enabled: bool) -> Self {
        self.detect_outliers = enabled;
        self
    }

    pub fn with_outlier_method(mut self, method: OutlierMethod) -> Self {
        self.outlier_method = method;
        self
    }

    /// Check parameter ranges
    pub fn validate(&self) -> Result<()> {
        let level = self.confidence_level;
        if !(level > 0.0 && level < 1.0) {
            return Err(Error::invalid_confidence_level(level));
        }
        self.outlier_method.validate()
    }

    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
