//! Runs the full report over a synthetic latency sample and compares it
//! against a slower second run.
//!
//! ```text
//! RUST_LOG=debug cargo run --example sample_report
//! ```

use anyhow::Result;
use netperf_stats::prelude::*;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use rand_distr::Normal;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn draw(rng: &mut ChaCha8Rng, mean: f64, sd: f64, n: usize) -> Result<Vec<f64>> {
    let normal = Normal::new(mean, sd)?;
    Ok((0..n).map(|_| normal.sample(rng)).collect())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let mut baseline = draw(&mut rng, 100.0, 15.0, 50)?;
    baseline.push(200.0);
    let candidate = draw(&mut rng, 108.0, 15.0, 50)?;

    let config = ComprehensiveConfig::default();
    config.validate()?;
    info!(n = baseline.len(), "analyzing baseline run");

    let Some(stats) = calculate_comprehensive_stats(&baseline, &config) else {
        anyhow::bail!("empty sample");
    };

    println!("=== Baseline ===");
    let d = &stats.descriptive;
    println!("count    {}", d.count);
    println!("mean     {:.2}  (median {:.2})", d.mean, d.median);
    println!("stddev   {:.2}  (cv {:.2}%)", d.stddev, d.coefficient_of_variation);
    println!("p90/p99  {:.2} / {:.2}", d.p90, d.p99);

    if let Some(ci) = &stats.confidence {
        println!(
            "{:.0}% CI  [{:.2}, {:.2}]  ±{:.2}",
            ci.ci_level * 100.0,
            ci.ci_lower,
            ci.ci_upper,
            ci.ci_margin
        );
    }
    if let Some(outliers) = &stats.outliers {
        println!(
            "outliers {} ({:.1}%) at {:?}",
            outliers.outlier_count, outliers.outlier_percentage, outliers.outlier_indices
        );
        if let Some(clean) = &outliers.clean {
            println!("clean    mean {:.2}, stddev {:.2}", clean.mean_clean, clean.stddev_clean);
        }
    }
    if let Some(shape) = &stats.distribution {
        println!(
            "shape    {} / {}",
            shape.skewness_interpretation, shape.kurtosis_interpretation
        );
    }

    println!();
    println!("{}", generate_histogram(&baseline, DEFAULT_BINS, DEFAULT_WIDTH));
    println!();
    println!("{}", generate_boxplot(&baseline, DEFAULT_WIDTH));

    println!();
    println!("=== Baseline vs candidate ===");
    let welch = t_test(&baseline, &candidate, false);
    println!("{welch}");
    let ranks = mann_whitney_u(&baseline, &candidate);
    println!("{ranks}");

    println!();
    println!("{}", serde_json::to_string_pretty(&stats)?);
    Ok(())
}
