//! Distribution shape analysis
//!
//! [`analyze_distribution`] reports skewness, excess kurtosis, a verbal
//! band for each, and an empirical-rule normality screen. Samples that are
//! too small or constant get zero moments, are treated as normal with
//! p = 1.0, and carry "insufficient data" or "no variation" as their
//! interpretation.
//!
//! # Examples
//!
//! ```rust
//! use netperf_distribution::{analyze_distribution, SkewnessInterpretation};
//!
//! let profile = analyze_distribution(&[1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 10.0]);
//! assert_eq!(profile.skewness_interpretation, SkewnessInterpretation::HighlyPositivelySkewed);
//! ```

mod interpretation;
mod moments;
mod normality;

pub use interpretation::{KurtosisInterpretation, SkewnessInterpretation};
pub use moments::standardized_moments;
pub use normality::{
    empirical_rule_test, NormalityCheck, EXPECTED_COVERAGE, NORMALITY_ALPHA, P_VALUE_FLOOR,
};

use netperf_core::utils::{mean, std_dev};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Smallest sample with defined moments
pub const MIN_SAMPLES: usize = 3;

/// Shape of a sample's distribution
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistributionProfile {
    pub skewness: f64,
    /// Excess kurtosis (0 for a normal distribution)
    pub kurtosis: f64,
    pub is_normal: bool,
    pub p_value: f64,
    pub skewness_interpretation: SkewnessInterpretation,
    pub kurtosis_interpretation: KurtosisInterpretation,
}

impl DistributionProfile {
    fn undetermined(skewness: SkewnessInterpretation, kurtosis: KurtosisInterpretation) -> Self {
        Self {
            skewness: 0.0,
            kurtosis: 0.0,
            is_normal: true,
            p_value: 1.0,
            skewness_interpretation: skewness,
            kurtosis_interpretation: kurtosis,
        }
    }
}

/// Skewness, kurtosis and normality screen for `sample`
#[instrument(skip(sample), fields(n = sample.len()))]
pub fn analyze_distribution(sample: &[f64]) -> DistributionProfile {
    if sample.len() < MIN_SAMPLES {
        debug!("too few values for moments");
        return DistributionProfile::undetermined(
            SkewnessInterpretation::InsufficientData,
            KurtosisInterpretation::InsufficientData,
        );
    }

    let mean = mean(sample);
    let stddev = std_dev(sample);
    if stddev == 0.0 {
        debug!("constant sample");
        return DistributionProfile::undetermined(
            SkewnessInterpretation::NoVariation,
            KurtosisInterpretation::NoVariation,
        );
    }

    let (skewness, kurtosis) = standardized_moments(sample, mean, stddev);
    let normality = empirical_rule_test(sample, mean, stddev);

    debug!(skewness, kurtosis, p_value = normality.p_value, "distribution shape");

    DistributionProfile {
        skewness,
        kurtosis,
        is_normal: normality.is_normal,
        p_value: normality.p_value,
        skewness_interpretation: SkewnessInterpretation::from_value(skewness),
        kurtosis_interpretation: KurtosisInterpretation::from_value(kurtosis),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_constant_sample() {
        let profile = analyze_distribution(&[5.0, 5.0, 5.0, 5.0, 5.0]);
        assert_eq!(profile.skewness, 0.0);
        assert_eq!(profile.kurtosis, 0.0);
        assert!(profile.is_normal);
        assert_eq!(profile.p_value, 1.0);
        assert_eq!(profile.skewness_interpretation.as_str(), "no variation");
        assert_eq!(profile.kurtosis_interpretation.as_str(), "no variation");
    }

    #[test]
    fn test_too_small() {
        for sample in [&[][..], &[1.0][..], &[1.0, 9.0][..]] {
            let profile = analyze_distribution(sample);
            assert_eq!(profile.skewness_interpretation, SkewnessInterpretation::InsufficientData);
            assert_eq!(profile.kurtosis_interpretation, KurtosisInterpretation::InsufficientData);
            assert!(profile.is_normal);
        }
    }

    #[test]
    fn test_ramp() {
        let profile = analyze_distribution(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_relative_eq!(profile.skewness, 0.0, epsilon = 1e-12);
        assert_eq!(profile.skewness_interpretation, SkewnessInterpretation::ApproximatelySymmetric);
        assert_eq!(profile.kurtosis_interpretation, KurtosisInterpretation::Platykurtic);
        assert!(profile.is_normal);
    }

    #[test]
    fn test_right_tail() {
        let mut sample = vec![1.0; 9];
        sample.push(10.0);
        let profile = analyze_distribution(&sample);
        assert!(profile.skewness > 2.0);
        assert_eq!(profile.skewness_interpretation, SkewnessInterpretation::HighlyPositivelySkewed);
        assert_eq!(profile.kurtosis_interpretation, KurtosisInterpretation::HighlyLeptokurtic);
    }

    #[test]
    fn test_left_tail() {
        let mut sample = vec![10.0; 9];
        sample.push(1.0);
        let profile = analyze_distribution(&sample);
        assert!(profile.skewness < -2.0);
        assert_eq!(profile.skewness_interpretation, SkewnessInterpretation::HighlyNegativelySkewed);
    }

    #[test]
    fn test_profile_serializes_interpretations_as_text() {
        let profile = analyze_distribution(&[5.0, 5.0, 5.0]);
        let json = serde_json::to_value(profile).unwrap();
        assert_eq!(json["skewness_interpretation"], "no variation");
        assert_eq!(json["is_normal"], true);
    }
}
