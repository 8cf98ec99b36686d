//! Single-row ASCII box plot

use crate::{bar_rule, constant_message, BAR, DEFAULT_WIDTH, NO_DATA};
use netperf_core::utils::sorted;
use netperf_core::{nearest_rank_quartiles, Quartiles};
use std::fmt;
use tracing::{debug, instrument};

/// Tukey fence multiplier used for whiskers and outliers
pub const WHISKER_FACTOR: f64 = 1.5;

const WHISKER: char = '-';
const MEDIAN: char = '|';
const OUTLIER: char = '●';

/// Five-number summary behind a box plot
#[derive(Debug, Clone, PartialEq)]
pub struct BoxPlotSummary {
    pub min: f64,
    pub max: f64,
    pub quartiles: Quartiles,
    /// Most extreme values inside the fences
    pub whiskers: (f64, f64),
    /// Values outside the fences, in input order
    pub outliers: Vec<f64>,
}

impl BoxPlotSummary {
    /// Summarize `sample`; `None` when it is empty
    pub fn from_sample(sample: &[f64]) -> Option<Self> {
        let sorted = sorted(sample);
        let quartiles = nearest_rank_quartiles(&sorted)?;
        let (min, max) = (sorted[0], sorted[sorted.len() - 1]);
        let (lower_fence, upper_fence) = quartiles.fences(WHISKER_FACTOR);

        let inside = || sample.iter().copied().filter(|&v| v >= lower_fence && v <= upper_fence);
        let whiskers = (
            inside().fold(quartiles.q1, f64::min),
            inside().fold(quartiles.q3, f64::max),
        );
        let outliers = sample
            .iter()
            .copied()
            .filter(|&v| v < lower_fence || v > upper_fence)
            .collect();

        Some(Self {
            min,
            max,
            quartiles,
            whiskers,
            outliers,
        })
    }

    /// Lay the summary out on `width + 1` cells between min and max
    fn plot_row(&self, width: usize) -> String {
        let range = self.max - self.min;
        let scale = |v: f64| ((v - self.min) / range * width as f64) as usize;
        let mut cells = vec![' '; width + 1];
        let mut fill = |from: usize, to: usize, glyph: char| {
            for cell in cells.iter_mut().take(to + 1).skip(from) {
                *cell = glyph;
            }
        };

        fill(scale(self.whiskers.0), scale(self.whiskers.1), WHISKER);
        fill(scale(self.quartiles.q1), scale(self.quartiles.q3), BAR);

        let median = scale(self.quartiles.q2);
        fill(median, median, MEDIAN);
        for &outlier in &self.outliers {
            let pos = scale(outlier);
            fill(pos, pos, OUTLIER);
        }

        cells.into_iter().collect()
    }
}

/// Plot row with min/max labels and the quartile line, framed by rules; the
/// formatter width sets the plot width (`{:40}`), defaulting to
/// [`DEFAULT_WIDTH`].
impl fmt::Display for BoxPlotSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = f.width().unwrap_or(DEFAULT_WIDTH);
        let Quartiles { q1, q2, q3 } = self.quartiles;
        let rule = bar_rule(width);

        writeln!(f, "Box Plot:")?;
        writeln!(f, "{rule}")?;
        writeln!(f, "{:10.2} {} {:.2}", self.min, self.plot_row(width), self.max)?;
        writeln!(f, "{:10} Q1={q1:.2} | Q2={q2:.2} | Q3={q3:.2}", "")?;
        if !self.outliers.is_empty() {
            writeln!(f, "{:10} Outliers: {}", "", self.outliers.len())?;
        }
        write!(f, "{rule}")
    }
}

/// Render `sample` as a horizontal box plot
///
/// The whiskers span the most extreme values within 1.5·IQR of the box, the
/// box runs from Q1 to Q3 with the median marked `|`, and values beyond the
/// fences are drawn as `●` and counted below the plot.
#[instrument(skip(sample), fields(n = sample.len()))]
pub fn generate_boxplot(sample: &[f64], width: usize) -> String {
    let Some(summary) = BoxPlotSummary::from_sample(sample) else {
        return NO_DATA.to_string();
    };
    if summary.max == summary.min {
        return constant_message(summary.min);
    }

    debug!(outliers = summary.outliers.len(), "box plot summary");

    format!("{summary:width$}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary() {
        let summary = BoxPlotSummary::from_sample(&[10.0, 12.0, 11.0, 13.0, 12.0, 100.0]).unwrap();
        assert_eq!(summary.quartiles, Quartiles { q1: 11.0, q2: 12.0, q3: 13.0 });
        assert_eq!(summary.whiskers, (10.0, 13.0));
        assert_eq!(summary.outliers, vec![100.0]);
        assert_eq!((summary.min, summary.max), (10.0, 100.0));
    }

    #[test]
    fn test_render_without_outliers() {
        let sample: Vec<f64> = (0..=8).map(f64::from).collect();
        let text = generate_boxplot(&sample, 8);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "Box Plot:");
        assert_eq!(lines[1], "-".repeat(28));
        assert_eq!(lines[2], "      0.00 --██|██-- 8.00");
        assert_eq!(lines[3], "           Q1=2.00 | Q2=4.00 | Q3=6.00");
        assert_eq!(lines[4], "-".repeat(28));
    }

    #[test]
    fn test_render_with_outliers() {
        let text = generate_boxplot(&[0.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 16.0], 16);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[2], format!("      0.00 ●|{}● 16.00", " ".repeat(14)));
        assert_eq!(lines[4], "           Outliers: 2");
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn test_display_matches_generate() {
        let sample = [0.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 16.0];
        let summary = BoxPlotSummary::from_sample(&sample).unwrap();
        assert_eq!(format!("{summary:16}"), generate_boxplot(&sample, 16));
        assert_eq!(summary.to_string(), generate_boxplot(&sample, DEFAULT_WIDTH));
    }

    #[test]
    fn test_degenerate_inputs() {
        assert_eq!(generate_boxplot(&[], 60), "No data to display");
        assert_eq!(generate_boxplot(&[3.5, 3.5], 60), "All values equal to 3.50");
    }
}
