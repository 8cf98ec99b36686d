//! Core types and descriptive statistics for benchmark samples
//!
//! This crate holds the pieces every other netperf-stats crate builds on:
//!
//! - [`Error`] and [`Result`], the shared error type
//! - [`utils`], slice helpers (sorting, mean, median, variance)
//! - [`percentiles`], nearest-rank percentiles and quartiles
//! - [`DescriptiveStats`], the descriptive summary of one sample
//!
//! A sample is always a plain `&[f64]` and is never modified.
//!
//! # Example
//!
//! ```rust
//! use netperf_core::DescriptiveStats;
//!
//! let latencies = vec![10.2, 11.0, 9.8, 10.5, 10.1, 30.0];
//! let stats = DescriptiveStats::from_sample(&latencies);
//!
//! println!("mean={:.2} p99={:.2} cv={:.1}%", stats.mean, stats.p99, stats.coefficient_of_variation);
//! assert_eq!(stats.count, 6);
//! ```

pub mod descriptive;
pub mod error;
pub mod percentiles;
pub mod utils;

pub use descriptive::DescriptiveStats;
pub use error::{Error, Result};
pub use percentiles::{nearest_rank, nearest_rank_quartiles, Quartiles};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
