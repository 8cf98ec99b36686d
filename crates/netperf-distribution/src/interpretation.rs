//! Verbal bands for skewness and excess kurtosis

use serde::{Deserialize, Serialize};
use std::fmt;

/// |skewness| below this is symmetric
const SKEW_MODERATE: f64 = 0.5;
/// |skewness| at or above this is highly skewed
const SKEW_HIGH: f64 = 1.0;
/// |excess kurtosis| below this is mesokurtic
const KURT_MODERATE: f64 = 0.5;
/// |excess kurtosis| at or above this is highly lepto/platykurtic
const KURT_HIGH: f64 = 2.0;

/// Description of a skewness value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkewnessInterpretation {
    #[serde(rename = "approximately symmetric")]
    ApproximatelySymmetric,
    #[serde(rename = "positively skewed (right tail)")]
    PositivelySkewed,
    #[serde(rename = "negatively skewed (left tail)")]
    NegativelySkewed,
    #[serde(rename = "highly positively skewed")]
    HighlyPositivelySkewed,
    #[serde(rename = "highly negatively skewed")]
    HighlyNegativelySkewed,
    #[serde(rename = "insufficient data")]
    InsufficientData,
    #[serde(rename = "no variation")]
    NoVariation,
}

impl SkewnessInterpretation {
    /// Band for `skewness`
    ///
    /// ```rust
    /// use netperf_distribution::SkewnessInterpretation;
    ///
    /// assert_eq!(SkewnessInterpretation::from_value(0.2).as_str(), "approximately symmetric");
    /// assert_eq!(SkewnessInterpretation::from_value(0.5).as_str(), "positively skewed (right tail)");
    /// assert_eq!(SkewnessInterpretation::from_value(-1.0).as_str(), "highly negatively skewed");
    /// ```
    pub fn from_value(skewness: f64) -> Self {
        let magnitude = skewness.abs();
        if magnitude < SKEW_MODERATE {
            Self::ApproximatelySymmetric
        } else if skewness > 0.0 {
            if magnitude < SKEW_HIGH {
                Self::PositivelySkewed
            } else {
                Self::HighlyPositivelySkewed
            }
        } else if magnitude < SKEW_HIGH {
            Self::NegativelySkewed
        } else {
            Self::HighlyNegativelySkewed
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ApproximatelySymmetric => "approximately symmetric",
            Self::PositivelySkewed => "positively skewed (right tail)",
            Self::NegativelySkewed => "negatively skewed (left tail)",
            Self::HighlyPositivelySkewed => "highly positively skewed",
            Self::HighlyNegativelySkewed => "highly negatively skewed",
            Self::InsufficientData => "insufficient data",
            Self::NoVariation => "no variation",
        }
    }
}

impl fmt::Display for SkewnessInterpretation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Description of an excess kurtosis value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KurtosisInterpretation {
    #[serde(rename = "mesokurtic (normal-like)")]
    Mesokurtic,
    #[serde(rename = "leptokurtic (heavy tails)")]
    Leptokurtic,
    #[serde(rename = "platykurtic (light tails)")]
    Platykurtic,
    #[serde(rename = "highly leptokurtic")]
    HighlyLeptokurtic,
    #[serde(rename = "highly platykurtic")]
    HighlyPlatykurtic,
    #[serde(rename = "insufficient data")]
    InsufficientData,
    #[serde(rename = "no variation")]
    NoVariation,
}

impl KurtosisInterpretation {
    /// Band for excess `kurtosis`
    pub fn from_value(kurtosis: f64) -> Self {
        let magnitude = kurtosis.abs();
        if magnitude < KURT_MODERATE {
            Self::Mesokurtic
        } else if kurtosis > 0.0 {
            if magnitude < KURT_HIGH {
                Self::Leptokurtic
            } else {
                Self::HighlyLeptokurtic
            }
        } else if magnitude < KURT_HIGH {
            Self::Platykurtic
        } else {
            Self::HighlyPlatykurtic
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mesokurtic => "mesokurtic (normal-like)",
            Self::Leptokurtic => "leptokurtic (heavy tails)",
            Self::Platykurtic => "platykurtic (light tails)",
            Self::HighlyLeptokurtic => "highly leptokurtic",
            Self::HighlyPlatykurtic => "highly platykurtic",
            Self::InsufficientData => "insufficient data",
            Self::NoVariation => "no variation",
        }
    }
}

impl fmt::Display for KurtosisInterpretation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
