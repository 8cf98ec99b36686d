//! Result records for two-sample tests

use serde::{Deserialize, Serialize};
use std::fmt;

/// p-value below which a difference is significant
pub const SIGNIFICANCE_LEVEL: f64 = 0.05;

/// p-value below which a difference is highly significant
pub const HIGH_SIGNIFICANCE_LEVEL: f64 = 0.01;

/// Which test produced a [`TestResult`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TestKind {
    /// Student's t-test with pooled variance
    StudentT,
    /// Welch's t-test with unpooled variance
    WelchT,
    MannWhitneyU,
}

impl TestKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::StudentT => "Student's t-test",
            Self::WelchT => "Welch's t-test",
            Self::MannWhitneyU => "Mann-Whitney U test",
        }
    }
}

impl fmt::Display for TestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Test-specific values behind a [`TestResult`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TestDetails {
    TTest {
        mean1: f64,
        mean2: f64,
        mean_diff: f64,
        /// Cohen's d of sample 1 against sample 2
        effect_size: f64,
    },
    MannWhitney {
        u1: f64,
        u2: f64,
        n1: usize,
        n2: usize,
    },
    /// The test could not be carried out
    Unavailable { reason: String },
}

/// Outcome of a two-sample test
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestResult {
    pub test: TestKind,
    /// t for the t-tests, min(U1, U2) for Mann-Whitney
    pub statistic: f64,
    /// Degrees of freedom, t-tests only
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub df: Option<usize>,
    pub p_value: f64,
    pub significant: bool,
    pub highly_significant: bool,
    pub interpretation: String,
    pub details: TestDetails,
}

impl TestResult {
    /// A non-significant result for a test that could not run
    pub(crate) fn unavailable(
        test: TestKind,
        df: Option<usize>,
        interpretation: &str,
        reason: &str,
    ) -> Self {
        Self {
            test,
            statistic: 0.0,
            df,
            p_value: 1.0,
            significant: false,
            highly_significant: false,
            interpretation: interpretation.to_string(),
            details: TestDetails::Unavailable {
                reason: reason.to_string(),
            },
        }
    }

    /// Why the test could not run, if it could not
    pub fn reason(&self) -> Option<&str> {
        match &self.details {
            TestDetails::Unavailable { reason } => Some(reason),
            _ => None,
        }
    }

    pub fn is_available(&self) -> bool {
        self.reason().is_none()
    }
}

impl fmt::Display for TestResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: statistic={:.4}", self.test, self.statistic)?;
        if let Some(df) = self.df {
            write!(f, ", df={df}")?;
        }
        write!(f, ", p={} ({})", self.p_value, self.interpretation)
    }
}
