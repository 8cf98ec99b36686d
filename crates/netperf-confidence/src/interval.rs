//! Confidence interval for the sample mean

use crate::bootstrap::MeanBootstrap;
use crate::t_table::t_critical;
use crate::{CiMethod, ConfidenceInterval};
use netperf_core::utils::{mean, std_dev};
use tracing::{debug, instrument};

/// Confidence interval for the mean of `sample` at `confidence_level`
///
/// Samples with fewer than two values give a zero-width interval at the sole
/// value (or at 0 when empty). `CiMethod::Auto` is resolved against the
/// sample size first; the returned interval records the method actually used.
/// The bootstrap path uses [`MeanBootstrap::default`]; build a
/// `MeanBootstrap` directly to pick another seed or resample count.
///
/// # Examples
///
/// ```rust
/// use netperf_confidence::{confidence_interval, CiMethod};
///
/// let sample = [1.0, 2.0, 3.0, 4.0, 5.0];
/// let ci = confidence_interval(&sample, 0.95, CiMethod::Auto);
///
/// assert_eq!(ci.method, CiMethod::TDistribution);
/// assert!(ci.contains(3.0));
/// ```
#[instrument(skip(sample), fields(n = sample.len()))]
pub fn confidence_interval(sample: &[f64], confidence_level: f64, method: CiMethod) -> ConfidenceInterval {
    let n = sample.len();
    let method = method.resolve(n);

    if n < 2 {
        let value = sample.first().copied().unwrap_or(0.0);
        debug!(value, "fewer than two values, degenerate interval");
        return ConfidenceInterval::degenerate(value, confidence_level, method);
    }

    debug!(%method, "resolved interval method");
    match method {
        CiMethod::Bootstrap => MeanBootstrap::default().interval(sample, confidence_level),
        _ => t_interval(sample, confidence_level),
    }
}

/// mean ± t(n - 1, level) · SE
fn t_interval(sample: &[f64], confidence_level: f64) -> ConfidenceInterval {
    let n = sample.len();
    let estimate = mean(sample);
    let std_error = std_dev(sample) / (n as f64).sqrt();
    let t = t_critical(n - 1, confidence_level);
    let margin = t * std_error;

    ConfidenceInterval::new(
        estimate - margin,
        estimate + margin,
        estimate,
        confidence_level,
        CiMethod::TDistribution,
    )
}
