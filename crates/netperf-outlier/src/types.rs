//! Outlier detection methods and reports

use netperf_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default Tukey fence multiplier
pub const DEFAULT_IQR_FACTOR: f64 = 1.5;

/// Default absolute z-score above which a value is flagged
pub const DEFAULT_ZSCORE_THRESHOLD: f64 = 3.0;

/// Outlier detection rule and its parameter
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "lowercase")]
pub enum OutlierMethod {
    /// Values outside `[Q1 - factor * IQR, Q3 + factor * IQR]`
    Iqr { factor: f64 },
    /// Values with `|z| > threshold`
    #[serde(rename = "zscore")]
    ZScore { threshold: f64 },
}

impl Default for OutlierMethod {
    fn default() -> Self {
        Self::iqr()
    }
}

impl OutlierMethod {
    /// IQR rule with the standard 1.5 factor
    pub fn iqr() -> Self {
        Self::Iqr {
            factor: DEFAULT_IQR_FACTOR,
        }
    }

    /// z-score rule with the standard 3.0 threshold
    pub fn zscore() -> Self {
        Self::ZScore {
            threshold: DEFAULT_ZSCORE_THRESHOLD,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Iqr { .. } => "iqr",
            Self::ZScore { .. } => "zscore",
        }
    }

    /// Reject negative or non-finite parameters
    pub fn validate(&self) -> Result<()> {
        let (label, value) = match *self {
            Self::Iqr { factor } => ("IQR factor", factor),
            Self::ZScore { threshold } => ("z-score threshold", threshold),
        };
        if !value.is_finite() || value < 0.0 {
            return Err(Error::InvalidParameter(format!(
                "{label} must be a non-negative number, got {value}"
            )));
        }
        Ok(())
    }
}

impl FromStr for OutlierMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "iqr" => Ok(Self::iqr()),
            "zscore" | "z-score" => Ok(Self::zscore()),
            other => Err(Error::unknown_outlier_method(other)),
        }
    }
}

impl fmt::Display for OutlierMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Iqr { factor } => write!(f, "iqr (factor {factor})"),
            Self::ZScore { threshold } => write!(f, "zscore (threshold {threshold})"),
        }
    }
}

/// Method-specific detail behind an [`OutlierReport`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OutlierDiagnostics {
    Iqr {
        factor: f64,
        q1: f64,
        q3: f64,
        iqr: f64,
        lower_fence: f64,
        upper_fence: f64,
        below_lower: usize,
        above_upper: usize,
    },
    #[serde(rename = "zscore")]
    ZScore {
        threshold: f64,
        mean: f64,
        stddev: f64,
        /// One z-score per input value, in input order
        z_scores: Vec<f64>,
        max_z_score: f64,
    },
    /// Detection did not run; every value is kept
    Skipped { method: String, message: String },
}

/// Result of running a detector over a sample
///
/// `outliers` and `clean_values` partition the input and both keep input
/// order; `indices` are the original positions of `outliers`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutlierReport {
    pub outliers: Vec<f64>,
    pub indices: Vec<usize>,
    pub clean_values: Vec<f64>,
    pub diagnostics: OutlierDiagnostics,
}

impl OutlierReport {
    /// A report that flags nothing and explains why
    pub fn skipped(sample: &[f64], method: &OutlierMethod, message: &str) -> Self {
        Self {
            outliers: Vec::new(),
            indices: Vec::new(),
            clean_values: sample.to_vec(),
            diagnostics: OutlierDiagnostics::Skipped {
                method: method.name().to_string(),
                message: message.to_string(),
            },
        }
    }

    /// Split `sample` by `is_outlier`, keeping input order on both sides
    pub(crate) fn partition<F>(sample: &[f64], diagnostics: OutlierDiagnostics, is_outlier: F) -> Self
    where
        F: Fn(f64) -> bool,
    {
        let mut outliers = Vec::new();
        let mut indices = Vec::new();
        let mut clean_values = Vec::with_capacity(sample.len());

        for (i, &value) in sample.iter().enumerate() {
            if is_outlier(value) {
                outliers.push(value);
                indices.push(i);
            } else {
                clean_values.push(value);
            }
        }

        Self {
            outliers,
            indices,
            clean_values,
            diagnostics,
        }
    }

    pub fn outlier_count(&self) -> usize {
        self.outliers.len()
    }

    pub fn has_outliers(&self) -> bool {
        !self.outliers.is_empty()
    }

    /// Share of a sample of `sample_len` values that was flagged, in percent
    pub fn outlier_percentage(&self, sample_len: usize) -> f64 {
        if sample_len == 0 {
            0.0
        } else {
            self.outlier_count() as f64 / sample_len as f64 * 100.0
        }
    }

    /// Why detection was skipped, if it was
    pub fn message(&self) -> Option<&str> {
        match &self.diagnostics {
            OutlierDiagnostics::Skipped { message, .. } => Some(message),
            _ => None,
        }
    }
}
