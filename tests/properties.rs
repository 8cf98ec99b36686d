//! Property tests over random samples

use netperf_stats::prelude::*;
use netperf_stats::TestDetails;
use proptest::prelude::*;

fn sample(min_len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1e4f64..1e4, min_len..80)
}

proptest! {
    #[test]
    fn percentiles_are_monotone(values in sample(1)) {
        let stats = DescriptiveStats::from_sample(&values);
        prop_assert!(stats.min <= stats.p50);
        prop_assert!(stats.p50 <= stats.p90);
        prop_assert!(stats.p90 <= stats.p95);
        prop_assert!(stats.p95 <= stats.p99);
        prop_assert!(stats.p99 <= stats.max);
    }

    #[test]
    fn iqr_partitions_every_value(values in sample(4)) {
        let report = detect_outliers(&values, OutlierMethod::iqr());
        prop_assert_eq!(report.outliers.len() + report.clean_values.len(), values.len());

        let mut rebuilt = report.clean_values.clone();
        rebuilt.extend(&report.outliers);
        let mut expected = values.clone();
        rebuilt.sort_by(|a, b| a.partial_cmp(b).unwrap());
        expected.sort_by(|a, b| a.partial_cmp(b).unwrap());
        prop_assert_eq!(rebuilt, expected);
    }

    #[test]
    fn t_test_is_antisymmetric(a in sample(2), b in sample(2), equal_var in any::<bool>()) {
        let ab = t_test(&a, &b, equal_var);
        let ba = t_test(&b, &a, equal_var);

        prop_assert!((ab.statistic + ba.statistic).abs() <= 1e-9 * (1.0 + ab.statistic.abs()));
        prop_assert_eq!(ab.p_value, ba.p_value);
        prop_assert_eq!(ab.significant, ba.significant);
        prop_assert_eq!(ab.df, ba.df);
    }

    #[test]
    fn mann_whitney_u_sums_to_product(a in sample(1), b in sample(1)) {
        let result = mann_whitney_u(&a, &b);
        match result.details {
            TestDetails::MannWhitney { u1, u2, n1, n2 } => {
                prop_assert!((u1 + u2 - (n1 * n2) as f64).abs() < 1e-6);
                prop_assert_eq!(result.statistic, u1.min(u2));
            }
            other => prop_assert!(false, "unexpected details: {:?}", other),
        }
    }

    #[test]
    fn confidence_interval_brackets_mean(values in sample(2), level in 0.80f64..0.99) {
        let ci = confidence_interval(&values, level, CiMethod::TDistribution);
        prop_assert!(ci.lower <= ci.estimate + 1e-9);
        prop_assert!(ci.estimate <= ci.upper + 1e-9);
    }
}
