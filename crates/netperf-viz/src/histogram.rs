//! Fixed-width ASCII histogram

use crate::{bar, bar_rule, constant_message, DEFAULT_WIDTH, NO_DATA};
use netperf_core::utils::min_max;
use std::fmt;
use tracing::{instrument, trace};

/// Equal-width bucket counts over `[min, max]`
#[derive(Debug, Clone, PartialEq)]
pub struct FixedWidthBins {
    pub min: f64,
    pub bin_width: f64,
    pub counts: Vec<usize>,
}

impl FixedWidthBins {
    /// Count `sample` into `bins` buckets
    ///
    /// A value falls in bucket `floor((x - min) / bin_width)`, with the
    /// maximum folded into the last bucket. Returns `None` when the sample
    /// is empty, `bins` is zero, or every value is the same.
    pub fn build(sample: &[f64], bins: usize) -> Option<Self> {
        let (min, max) = min_max(sample)?;
        let range = max - min;
        if bins == 0 || range == 0.0 {
            return None;
        }

        let bin_width = range / bins as f64;
        let mut counts = vec![0usize; bins];
        for &value in sample {
            let idx = (((value - min) / bin_width) as usize).min(bins - 1);
            counts[idx] += 1;
        }

        Some(Self {
            min,
            bin_width,
            counts,
        })
    }

    /// Lower edge of bucket `i`
    pub fn lower_edge(&self, i: usize) -> f64 {
        self.min + i as f64 * self.bin_width
    }

    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }
}

/// Bar chart framed by rules; the formatter width sets the longest bar
/// (`{:40}`), defaulting to [`DEFAULT_WIDTH`].
impl fmt::Display for FixedWidthBins {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = f.width().unwrap_or(DEFAULT_WIDTH);
        let max_count = self.max_count();
        let rule = bar_rule(width);

        writeln!(f, "Histogram:")?;
        writeln!(f, "{rule}")?;
        for (i, &count) in self.counts.iter().enumerate() {
            let bar_len = if max_count > 0 {
                (count as f64 / max_count as f64 * width as f64) as usize
            } else {
                0
            };
            trace!(bucket = i, count, bar_len, "histogram bucket");
            writeln!(f, "{:10.2} | {} {}", self.lower_edge(i), bar(bar_len), count)?;
        }
        write!(f, "{rule}")
    }
}

/// Render `sample` as a horizontal bar histogram
///
/// Each bucket gets a line `"{lower:10.2} | {bar} {count}"` where the bar
/// is scaled so the fullest bucket spans `width` characters.
///
/// # Examples
///
/// ```rust
/// use netperf_viz::generate_histogram;
///
/// assert_eq!(generate_histogram(&[1.0, 1.0, 1.0, 1.0], 5, 60), "All values equal to 1.00");
/// assert_eq!(generate_histogram(&[], 5, 60), "No data to display");
/// ```
#[instrument(skip(sample), fields(n = sample.len()))]
pub fn generate_histogram(sample: &[f64], bins: usize, width: usize) -> String {
    let Some((min, max)) = min_max(sample) else {
        return NO_DATA.to_string();
    };
    if bins == 0 {
        return NO_DATA.to_string();
    }
    if max == min {
        return constant_message(min);
    }
    let Some(histogram) = FixedWidthBins::build(sample, bins) else {
        return NO_DATA.to_string();
    };

    format!("{histogram:width$}")
}
