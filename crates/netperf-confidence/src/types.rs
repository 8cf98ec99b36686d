//! Common types for confidence intervals

use netperf_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sample size from which `CiMethod::Auto` switches to the bootstrap
pub const AUTO_BOOTSTRAP_THRESHOLD: usize = 30;

/// How the interval around the mean is constructed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CiMethod {
    /// t-distribution below 30 values, bootstrap from 30 on
    #[default]
    #[serde(rename = "auto")]
    Auto,
    /// Tabulated t-critical value times the standard error
    #[serde(rename = "t-dist")]
    TDistribution,
    /// Percentile bootstrap of the resampled means
    #[serde(rename = "bootstrap")]
    Bootstrap,
}

impl CiMethod {
    /// Resolve `Auto` for a sample of `n` values; other methods are returned as-is
    pub fn resolve(self, n: usize) -> Self {
        match self {
            Self::Auto if n < AUTO_BOOTSTRAP_THRESHOLD => Self::TDistribution,
            Self::Auto => Self::Bootstrap,
            other => other,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::TDistribution => "t-dist",
            Self::Bootstrap => "bootstrap",
        }
    }
}

impl FromStr for CiMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "auto" => Ok(Self::Auto),
            "t-dist" => Ok(Self::TDistribution),
            "bootstrap" => Ok(Self::Bootstrap),
            other => Err(Error::unknown_ci_method(other)),
        }
    }
}

impl fmt::Display for CiMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A confidence interval around the sample mean
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    /// Lower bound of the interval
    pub lower: f64,
    /// Upper bound of the interval
    pub upper: f64,
    /// The point estimate (sample mean, or the sole value for n < 2)
    pub estimate: f64,
    /// Confidence level (e.g., 0.95 for 95% CI)
    pub confidence_level: f64,
    /// Method actually used, with `Auto` already resolved
    pub method: CiMethod,
}

impl ConfidenceInterval {
    /// Create a new confidence interval
    pub fn new(lower: f64, upper: f64, estimate: f64, confidence_level: f64, method: CiMethod) -> Self {
        Self {
            lower,
            upper,
            estimate,
            confidence_level,
            method,
        }
    }

    /// Zero-width interval at `value`
    pub fn degenerate(value: f64, confidence_level: f64, method: CiMethod) -> Self {
        Self::new(value, value, value, confidence_level, method)
    }

    /// Width of the confidence interval
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Margin of error (half-width)
    pub fn margin(&self) -> f64 {
        self.width() / 2.0
    }

    /// Check if a value is contained in the interval
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }

    /// Check if intervals overlap
    pub fn overlaps(&self, other: &ConfidenceInterval) -> bool {
        self.lower <= other.upper && other.lower <= self.upper
    }

    /// The `(lower, upper)` pair
    pub fn bounds(&self) -> (f64, f64) {
        (self.lower, self.upper)
    }
}

impl fmt::Display for ConfidenceInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.1}% CI ({}): [{:.4}, {:.4}], estimate: {:.4}",
            self.confidence_level * 100.0,
            self.method,
            self.lower,
            self.upper,
            self.estimate
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_interval() {
        let ci = ConfidenceInterval::new(2.0, 8.0, 5.0, 0.95, CiMethod::TDistribution);

        assert_eq!(ci.width(), 6.0);
        assert_eq!(ci.margin(), 3.0);
        assert!(ci.contains(5.0));
        assert!(!ci.contains(1.0));
        assert!(!ci.contains(9.0));
        assert_eq!(ci.bounds(), (2.0, 8.0));
    }

    #[test]
    fn test_overlap() {
        let ci1 = ConfidenceInterval::new(2.0, 6.0, 4.0, 0.95, CiMethod::TDistribution);
        let ci2 = ConfidenceInterval::new(4.0, 8.0, 6.0, 0.95, CiMethod::TDistribution);
        let ci3 = ConfidenceInterval::new(7.0, 9.0, 8.0, 0.95, CiMethod::Bootstrap);

        assert!(ci1.overlaps(&ci2));
        assert!(ci2.overlaps(&ci1));
        assert!(!ci1.overlaps(&ci3));
    }

    #[test]
    fn test_method_from_str() {
        assert_eq!("auto".parse::<CiMethod>().unwrap(), CiMethod::Auto);
        assert_eq!("t-dist".parse::<CiMethod>().unwrap(), CiMethod::TDistribution);
        assert_eq!("bootstrap".parse::<CiMethod>().unwrap(), CiMethod::Bootstrap);

        let err = "jackknife".parse::<CiMethod>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown CI method: jackknife");
    }

    #[test]
    fn test_auto_resolution() {
        assert_eq!(CiMethod::Auto.resolve(2), CiMethod::TDistribution);
        assert_eq!(CiMethod::Auto.resolve(29), CiMethod::TDistribution);
        assert_eq!(CiMethod::Auto.resolve(30), CiMethod::Bootstrap);
        assert_eq!(CiMethod::Bootstrap.resolve(3), CiMethod::Bootstrap);
        assert_eq!(CiMethod::TDistribution.resolve(500), CiMethod::TDistribution);
    }

    #[test]
    fn test_method_serde_names() {
        assert_eq!(serde_json::to_string(&CiMethod::TDistribution).unwrap(), "\"t-dist\"");
        let parsed: CiMethod = serde_json::from_str("\"bootstrap\"").unwrap();
        assert_eq!(parsed, CiMethod::Bootstrap);
    }

    #[test]
    fn test_confidence_interval_display() {
        let ci = ConfidenceInterval::new(2.5, 7.5, 5.0, 0.95, CiMethod::TDistribution);
        let display = format!("{}", ci);
        assert!(display.contains("95.0%"));
        assert!(display.contains("t-dist"));
        assert!(display.contains("2.5000"));
        assert!(display.contains("7.5000"));
        assert!(display.contains("5.0000"));
    }
}
