//! Percentile bootstrap for the sample mean
//!
//! The random source is built inside every call from an explicit seed, so
//! two calls with the same seed and sample always return the same interval
//! and concurrent callers never share generator state.

use crate::{CiMethod, ConfidenceInterval};
use netperf_core::utils::{mean, sorted};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, instrument};

/// Number of bootstrap resamples used by default
pub const DEFAULT_RESAMPLES: usize = 10_000;

/// Seed used when the caller does not pick one
pub const DEFAULT_SEED: u64 = 42;

/// Percentile bootstrap of the mean with a per-call seeded generator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeanBootstrap {
    n_resamples: usize,
    seed: u64,
}

impl Default for MeanBootstrap {
    fn default() -> Self {
        Self {
            n_resamples: DEFAULT_RESAMPLES,
            seed: DEFAULT_SEED,
        }
    }
}

impl MeanBootstrap {
    /// Bootstrap with 10,000 resamples and seed 42
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of bootstrap resamples (at least one is always drawn)
    pub fn with_resamples(mut self, n_resamples: usize) -> Self {
        self.n_resamples = n_resamples.max(1);
        self
    }

    /// Set random seed for reproducibility
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn n_resamples(&self) -> usize {
        self.n_resamples
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Means of `n_resamples` resamples of `sample`, each drawn with replacement
    ///
    /// Returned in draw order. An empty sample yields no means.
    pub fn resample_means(&self, sample: &[f64]) -> Vec<f64> {
        let n = sample.len();
        if n == 0 {
            return Vec::new();
        }

        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        (0..self.n_resamples)
            .map(|_| {
                let total: f64 = (0..n).map(|_| sample[rng.gen_range(0..n)]).sum();
                total / n as f64
            })
            .collect()
    }

    /// Two-tailed percentile interval at `confidence_level`
    ///
    /// Bounds are read from the sorted resampled means at
    /// `floor(B * alpha / 2)` and `floor(B * (1 - alpha / 2))`, clamped to
    /// the last index.
    #[instrument(skip(self, sample), fields(n = sample.len(), n_resamples = self.n_resamples, seed = self.seed))]
    pub fn interval(&self, sample: &[f64], confidence_level: f64) -> ConfidenceInterval {
        let estimate = mean(sample);
        let means = sorted(&self.resample_means(sample));
        if means.is_empty() {
            return ConfidenceInterval::degenerate(estimate, confidence_level, CiMethod::Bootstrap);
        }

        let b = means.len();
        let alpha = 1.0 - confidence_level;
        let lower_idx = ((b as f64 * (alpha / 2.0)) as usize).min(b - 1);
        let upper_idx = ((b as f64 * (1.0 - alpha / 2.0)) as usize).min(b - 1);

        debug!(lower_idx, upper_idx, "bootstrap percentile indices");

        ConfidenceInterval::new(
            means[lower_idx],
            means[upper_idx],
            estimate,
            confidence_level,
            CiMethod::Bootstrap,
        )
    }
}
