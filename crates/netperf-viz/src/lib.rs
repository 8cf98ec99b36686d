//! ASCII rendering of benchmark samples
//!
//! [`generate_histogram`] draws fixed-width buckets as horizontal bars and
//! [`generate_boxplot`] draws a one-line Tukey box plot. Both frame their
//! output with a rule of `width + 20` dashes and return plain messages
//! instead of a plot for empty or constant samples.
//!
//! ```rust
//! use netperf_viz::{generate_boxplot, generate_histogram, DEFAULT_BINS, DEFAULT_WIDTH};
//!
//! let latencies = [10.0, 12.0, 11.0, 13.0, 12.0, 100.0];
//! println!("{}", generate_histogram(&latencies, DEFAULT_BINS, DEFAULT_WIDTH));
//! println!("{}", generate_boxplot(&latencies, DEFAULT_WIDTH));
//! ```

mod boxplot;
mod histogram;

pub use boxplot::{generate_boxplot, BoxPlotSummary, WHISKER_FACTOR};
pub use histogram::{generate_histogram, FixedWidthBins};

/// Histogram bucket count used by report callers
pub const DEFAULT_BINS: usize = 10;

/// Plot width in characters used by report callers
pub const DEFAULT_WIDTH: usize = 60;

pub(crate) const NO_DATA: &str = "No data to display";

pub(crate) const BAR: char = '█';

pub(crate) fn bar(len: usize) -> String {
    std::iter::repeat(BAR).take(len).collect()
}

pub(crate) fn bar_rule(width: usize) -> String {
    "-".repeat(width + 20)
}

pub(crate) fn constant_message(value: f64) -> String {
    format!("All values equal to {value:.2}")
}
