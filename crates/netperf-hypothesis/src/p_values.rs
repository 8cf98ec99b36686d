//! Tabulated two-tailed p-values
//!
//! Both lookups return one of a handful of bucket values instead of an exact
//! tail probability. Callers compare against 0.05 and 0.01, so the bucket
//! edges are the contract.

/// p-value bucket for `|t|` at `df` degrees of freedom
///
/// ```rust
/// use netperf_hypothesis::t_to_p_value;
///
/// assert_eq!(t_to_p_value(1.5, 40), 0.10);
/// assert_eq!(t_to_p_value(2.3, 12), 0.01);
/// assert_eq!(t_to_p_value(9.0, 8), 0.001);
/// ```
pub fn t_to_p_value(t: f64, df: usize) -> f64 {
    let t = t.abs();
    if df >= 30 {
        if t < 1.96 {
            0.10
        } else if t < 2.042 {
            0.05
        } else if t < 2.750 {
            0.01
        } else {
            0.001
        }
    } else {
        let (p05, p01) = if df >= 20 {
            (2.086, 2.845)
        } else if df >= 10 {
            (2.228, 3.169)
        } else {
            (2.5, 4.0)
        };
        if t < p05 {
            0.05
        } else if t < p01 {
            0.01
        } else {
            0.001
        }
    }
}

/// p-value bucket for `|z|` under the standard normal
pub fn z_to_p_value(z: f64) -> f64 {
    let z = z.abs();
    if z < 1.645 {
        0.10
    } else if z < 1.96 {
        0.05
    } else if z < 2.576 {
        0.01
    } else {
        0.001
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_large_df_buckets() {
        assert_eq!(t_to_p_value(0.0, 30), 0.10);
        assert_eq!(t_to_p_value(1.959, 30), 0.10);
        assert_eq!(t_to_p_value(1.96, 30), 0.05);
        assert_eq!(t_to_p_value(2.042, 100), 0.01);
        assert_eq!(t_to_p_value(2.75, 100), 0.001);
    }

    #[test]
    fn test_small_df_never_reports_ten_percent() {
        assert_eq!(t_to_p_value(0.0, 29), 0.05);
        assert_eq!(t_to_p_value(0.0, 0), 0.05);
        assert_eq!(t_to_p_value(2.086, 20), 0.01);
        assert_eq!(t_to_p_value(2.845, 20), 0.001);
        assert_eq!(t_to_p_value(2.227, 10), 0.05);
        assert_eq!(t_to_p_value(3.169, 10), 0.001);
        assert_eq!(t_to_p_value(2.5, 9), 0.01);
        assert_eq!(t_to_p_value(4.0, 9), 0.001);
    }

    #[test]
    fn test_sign_is_ignored() {
        assert_eq!(t_to_p_value(-9.0, 8), t_to_p_value(9.0, 8));
        assert_eq!(z_to_p_value(-2.0), z_to_p_value(2.0));
    }

    #[test]
    fn test_z_buckets() {
        assert_eq!(z_to_p_value(1.644), 0.10);
        assert_eq!(z_to_p_value(1.645), 0.05);
        assert_eq!(z_to_p_value(1.96), 0.01);
        assert_eq!(z_to_p_value(2.576), 0.001);
    }
}
