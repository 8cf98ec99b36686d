//! Mann-Whitney U rank test

use crate::p_values::z_to_p_value;
use crate::types::{TestDetails, TestKind, TestResult, HIGH_SIGNIFICANCE_LEVEL, SIGNIFICANCE_LEVEL};
use std::cmp::Ordering;
use tracing::{debug, instrument};

/// Both samples must be larger than this for the normal approximation
pub const LARGE_SAMPLE_THRESHOLD: usize = 20;

/// Share of n1·n2 below which a small-sample U counts as significant
const SMALL_SAMPLE_CRITICAL_RATIO: f64 = 0.3;

const NO_DIFFERENCE: &str = "No significant difference";

/// 1-based ranks of `sample1` within the pooled samples, ties averaged
fn group_one_rank_sum(sample1: &[f64], sample2: &[f64]) -> f64 {
    let mut pooled: Vec<(f64, bool)> = sample1
        .iter()
        .map(|&v| (v, true))
        .chain(sample2.iter().map(|&v| (v, false)))
        .collect();
    pooled.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));

    let mut rank_sum = 0.0;
    let mut i = 0;
    while i < pooled.len() {
        let mut j = i;
        while j < pooled.len() && pooled[j].0 == pooled[i].0 {
            j += 1;
        }
        // positions i..j hold ranks i+1..=j
        let avg_rank = (i + j + 1) as f64 / 2.0;
        rank_sum += avg_rank * pooled[i..j].iter().filter(|(_, first)| *first).count() as f64;
        i = j;
    }
    rank_sum
}

/// Rank-based test of whether two samples come from the same distribution
///
/// U1 = R1 - n1(n1 + 1)/2 and U2 = n1·n2 - U1, with the reported statistic
/// min(U1, U2). When both samples have more than 20 values the p-value
/// comes from a normal approximation; otherwise U is compared against
/// 0.3·n1·n2 and p is 0.05 or 0.10. An empty sample yields U = 0, p = 1.0.
///
/// # Examples
///
/// ```rust
/// use netperf_hypothesis::mann_whitney_u;
///
/// let result = mann_whitney_u(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]);
/// assert_eq!(result.statistic, 0.0);
/// assert!(result.significant);
/// ```
#[instrument(skip(sample1, sample2), fields(n1 = sample1.len(), n2 = sample2.len()))]
pub fn mann_whitney_u(sample1: &[f64], sample2: &[f64]) -> TestResult {
    let (n1, n2) = (sample1.len(), sample2.len());
    if n1 == 0 || n2 == 0 {
        debug!("Mann-Whitney U needs non-empty samples");
        return TestResult::unavailable(TestKind::MannWhitneyU, None, NO_DIFFERENCE, "Empty samples");
    }

    let (n1f, n2f) = (n1 as f64, n2 as f64);
    let r1 = group_one_rank_sum(sample1, sample2);
    let u1 = r1 - n1f * (n1f + 1.0) / 2.0;
    let u2 = n1f * n2f - u1;
    let u = u1.min(u2);

    let (p_value, significant) = if n1 > LARGE_SAMPLE_THRESHOLD && n2 > LARGE_SAMPLE_THRESHOLD {
        let mean_u = n1f * n2f / 2.0;
        let std_u = (n1f * n2f * (n1f + n2f + 1.0) / 12.0).sqrt();
        let z = if std_u > 0.0 { (u - mean_u) / std_u } else { 0.0 };
        let p = z_to_p_value(z);
        debug!(z, p, "normal approximation");
        (p, p < SIGNIFICANCE_LEVEL)
    } else {
        let critical = n1.min(n2) as f64 * n1.max(n2) as f64 * SMALL_SAMPLE_CRITICAL_RATIO;
        let significant = u < critical;
        debug!(critical, significant, "small-sample critical value");
        (if significant { 0.05 } else { 0.10 }, significant)
    };

    let interpretation = if significant {
        let direction = if u1 > u2 { "higher" } else { "lower" };
        format!("Samples differ significantly: Sample 1 tends to be {direction}")
    } else {
        NO_DIFFERENCE.to_string()
    };

    TestResult {
        test: TestKind::MannWhitneyU,
        statistic: u,
        df: None,
        p_value,
        significant,
        highly_significant: p_value < HIGH_SIGNIFICANCE_LEVEL,
        interpretation,
        details: TestDetails::MannWhitney { u1, u2, n1, n2 },
    }
}
