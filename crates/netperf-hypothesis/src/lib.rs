//! Two-sample hypothesis tests for benchmark comparisons
//!
//! - [`t_test`]: Student's (pooled) or Welch's t-test on the means
//! - [`mann_whitney_u`]: rank-based test that makes no normality assumption
//! - [`cohens_d`]: standardized mean difference, with
//!   [`EffectSizeMagnitude`] bands
//!
//! p-values come from small lookup tables, so they are coarse buckets
//! (0.10, 0.05, 0.01, 0.001) rather than exact tail probabilities.
//! Tests that cannot run return a non-significant [`TestResult`] whose
//! details explain why.
//!
//! # Examples
//!
//! ```rust
//! use netperf_hypothesis::{mann_whitney_u, t_test, EffectSizeMagnitude};
//!
//! let before = [12.1, 12.4, 11.9, 12.3, 12.0, 12.2];
//! let after = [10.2, 10.5, 10.1, 10.4, 10.3, 10.0];
//!
//! let welch = t_test(&before, &after, false);
//! assert!(welch.significant);
//!
//! let ranks = mann_whitney_u(&before, &after);
//! assert!(ranks.significant);
//! ```

mod effect;
mod mann_whitney;
mod p_values;
mod types;

pub use effect::{cohens_d, EffectSizeMagnitude};
pub use mann_whitney::{mann_whitney_u, LARGE_SAMPLE_THRESHOLD};
pub use p_values::{t_to_p_value, z_to_p_value};
pub use t_test::t_test;
pub use types::{TestDetails, TestKind, TestResult, HIGH_SIGNIFICANCE_LEVEL, SIGNIFICANCE_LEVEL};
