//! Cohen's d and its conventional magnitude bands

use netperf_core::utils::{mean, variance};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Standardized mean difference `(mean1 - mean2) / pooled_sd`
///
/// Returns 0 when either sample has fewer than two values or the pooled
/// standard deviation is zero.
pub fn cohens_d(sample1: &[f64], sample2: &[f64]) -> f64 {
    let (n1, n2) = (sample1.len(), sample2.len());
    if n1 < 2 || n2 < 2 {
        return 0.0;
    }

    let pooled_var = ((n1 - 1) as f64 * variance(sample1) + (n2 - 1) as f64 * variance(sample2))
        / (n1 + n2 - 2) as f64;
    let pooled_sd = pooled_var.sqrt();
    if pooled_sd == 0.0 {
        return 0.0;
    }

    (mean(sample1) - mean(sample2)) / pooled_sd
}

/// Interpretation of |d| following Cohen's conventions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EffectSizeMagnitude {
    /// |d| < 0.2
    Negligible,
    /// 0.2 <= |d| < 0.5
    Small,
    /// 0.5 <= |d| < 0.8
    Medium,
    /// |d| >= 0.8
    Large,
}

impl EffectSizeMagnitude {
    pub fn from_d(d: f64) -> Self {
        let abs_d = d.abs();
        if abs_d < 0.2 {
            Self::Negligible
        } else if abs_d < 0.5 {
            Self::Small
        } else if abs_d < 0.8 {
            Self::Medium
        } else {
            Self::Large
        }
    }

    /// Medium or large
    pub fn is_practically_significant(&self) -> bool {
        matches!(self, Self::Medium | Self::Large)
    }
}

impl fmt::Display for EffectSizeMagnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Negligible => "negligible",
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_cohens_d_shifted_ramps() {
        let d = cohens_d(&[1.0, 2.0, 3.0, 4.0, 5.0], &[10.0, 11.0, 12.0, 13.0, 14.0]);
        assert_relative_eq!(d, -9.0 / 2.5f64.sqrt(), epsilon = 1e-12);
        assert_eq!(EffectSizeMagnitude::from_d(d), EffectSizeMagnitude::Large);
    }

    #[test]
    fn test_cohens_d_degenerate() {
        assert_eq!(cohens_d(&[1.0], &[1.0, 2.0]), 0.0);
        assert_eq!(cohens_d(&[3.0, 3.0], &[5.0, 5.0, 5.0]), 0.0);
    }

    #[test]
    fn test_magnitude_bands() {
        assert_eq!(EffectSizeMagnitude::from_d(0.19), EffectSizeMagnitude::Negligible);
        assert_eq!(EffectSizeMagnitude::from_d(-0.2), EffectSizeMagnitude::Small);
        assert_eq!(EffectSizeMagnitude::from_d(0.5), EffectSizeMagnitude::Medium);
        assert_eq!(EffectSizeMagnitude::from_d(-0.8), EffectSizeMagnitude::Large);
        assert!(!EffectSizeMagnitude::Small.is_practically_significant());
        assert!(EffectSizeMagnitude::Medium.is_practically_significant());
    }
}
