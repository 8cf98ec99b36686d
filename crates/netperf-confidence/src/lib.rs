//! Confidence intervals for the mean of a benchmark sample
//!
//! Two constructions are available:
//!
//! - **t-distribution**: mean ± tabulated t-critical value times the
//!   standard error, for small samples
//! - **Bootstrap**: percentile interval over resampled means, drawn from a
//!   seeded ChaCha generator so results are reproducible
//!
//! [`CiMethod::Auto`] picks the t-distribution below 30 values and the
//! bootstrap from 30 on.
//!
//! # Examples
//!
//! ```rust
//! use netperf_confidence::{confidence_interval, CiMethod, MeanBootstrap};
//!
//! let latencies: Vec<f64> = (0..40).map(|i| 10.0 + (i % 5) as f64).collect();
//!
//! let ci = confidence_interval(&latencies, 0.95, CiMethod::Auto);
//! assert_eq!(ci.method, CiMethod::Bootstrap);
//!
//! // Same interval, different seed
//! let other = MeanBootstrap::new().with_seed(7).interval(&latencies, 0.95);
//! assert!(other.contains(ci.estimate));
//! ```

mod bootstrap;
mod interval;
mod t_table;
mod types;

pub use bootstrap::{MeanBootstrap, DEFAULT_RESAMPLES, DEFAULT_SEED};
pub use interval::confidence_interval;
pub use t_table::{t_critical, Z_FALLBACK};
pub use types::{CiMethod, ConfidenceInterval, AUTO_BOOTSTRAP_THRESHOLD};
