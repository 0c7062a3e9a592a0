//! Cohen's d effect sizes.
//!
//! Standardized mean differences, independent of sample size. Computed
//! separately from the test records; report builders merge the two.

use crate::statistics::{differences, mean, std_dev, variance};

/// Cohen's d for two independent samples, using the pooled standard deviation:
///
/// ```text
/// pooled_sd = sqrt(((n_a - 1) var_a + (n_b - 1) var_b) / (n_a + n_b - 2))
/// d = (mean_a - mean_b) / pooled_sd
/// ```
///
/// Undefined (NaN or infinite) when `n_a + n_b <= 2` or both samples are constant.
pub fn cohen_d_independent(sample_a: &[f64], sample_b: &[f64]) -> f64 {
    let n_a = sample_a.len() as f64;
    let n_b = sample_b.len() as f64;
    let pooled_var = ((n_a - 1.0) * variance(sample_a, 1) + (n_b - 1.0) * variance(sample_b, 1))
        / (n_a + n_b - 2.0);

    (mean(sample_a) - mean(sample_b)) / pooled_var.sqrt()
}

/// Cohen's d for paired samples: `mean(d) / sd(d)` with `d = before - after`
/// and the ddof = 1 standard deviation. Undefined when n <= 1.
///
/// # Panics
///
/// Panics if `before` and `after` differ in length.
pub fn cohen_d_paired(before: &[f64], after: &[f64]) -> f64 {
    let diffs = differences(before, after);
    mean(&diffs) / std_dev(&diffs, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cohen_d_independent_reference() {
        let a = [70.0, 75.0, 80.0, 85.0, 90.0];
        let b = [60.0, 65.0, 70.0, 75.0, 80.0];
        let d = cohen_d_independent(&a, &b);
        // 10 / sqrt(62.5)
        assert!((d - 1.264_911_064_067).abs() < 1e-10);
        assert!((cohen_d_independent(&b, &a) + d).abs() < 1e-12);
    }

    #[test]
    fn test_cohen_d_identical_groups_is_zero() {
        let a = [3.2, 4.8, 1.1, 9.6];
        assert_eq!(cohen_d_independent(&a, &a), 0.0);
    }

    #[test]
    fn test_cohen_d_paired_reference() {
        let before = [200.0, 210.0, 190.0, 220.0, 205.0, 215.0, 198.0, 230.0];
        let after = [190.0, 205.0, 185.0, 210.0, 200.0, 212.0, 195.0, 220.0];
        let d = cohen_d_paired(&before, &after);
        assert!((d - 6.375 / 3.113_908_889_391).abs() < 1e-9);
    }

    #[test]
    fn test_cohen_d_undefined_for_tiny_samples() {
        assert!(!cohen_d_independent(&[1.0], &[2.0]).is_finite());
        assert!(cohen_d_paired(&[1.0], &[2.0]).is_nan());
    }
}
