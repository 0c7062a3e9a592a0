//! Tests for equality of variances.
//!
//! The F-test is exact for normal data but sensitive to non-normality;
//! Levene's test (median-centred, i.e. Brown-Forsythe) is the robust
//! alternative. Callers are expected to look at both.

use crate::config::LeveneCenter;
use crate::result::{Anova, FTest, LeveneTest};
use crate::statistics::{clamp_probability, fisher_f_cdf, fisher_f_sf, mean, median, variance};

/// Variance-ratio F-test, `F = var_a / var_b` with `(n_a - 1, n_b - 1)` df.
///
/// "Two-sided" here means symmetric around a ratio of 1:
///
/// ```text
/// F > 1:  p = 2 * (1 - CDF(F))
/// F <= 1: p = 2 * CDF(F)
/// ```
///
/// The upper branch reads the survival function directly, so a tiny upper
/// tail keeps its precision and swapping the samples gives the same p-value.
///
/// This branch is kept as-is rather than replaced by a generic two-sided
/// transform. When the F distribution's median is not 1 the doubled tail
/// can exceed 1, so the result is clamped into [0, 1].
///
/// A zero `var_b` gives an infinite statistic and a zero-over-zero ratio gives
/// NaN; both are reported through [`FTest::is_degenerate`].
pub fn f_test_variance_ratio(sample_a: &[f64], sample_b: &[f64]) -> FTest {
    let var_a = variance(sample_a, 1);
    let var_b = variance(sample_b, 1);
    let statistic = var_a / var_b;
    let dfn = sample_a.len() as f64 - 1.0;
    let dfd = sample_b.len() as f64 - 1.0;

    let p_value = if statistic > 1.0 {
        2.0 * fisher_f_sf(statistic, dfn, dfd)
    } else {
        2.0 * fisher_f_cdf(statistic, dfn, dfd)
    };

    FTest {
        statistic,
        p_value: clamp_probability(p_value),
        var_a,
        var_b,
        dfn,
        dfd,
    }
}

/// Levene's test for two samples, centred on the group medians.
pub fn levene_test(sample_a: &[f64], sample_b: &[f64]) -> LeveneTest {
    levene_test_groups(&[sample_a, sample_b], LeveneCenter::Median)
}

/// Levene's test for k groups.
///
/// Replaces each observation by its absolute deviation from the group
/// centre, then runs a one-way ANOVA on those deviations. The W statistic
/// is the ANOVA F statistic.
pub fn levene_test_groups(groups: &[&[f64]], center: LeveneCenter) -> LeveneTest {
    let deviations: Vec<Vec<f64>> = groups
        .iter()
        .map(|group| {
            let c = group_center(group, center);
            group.iter().map(|x| (x - c).abs()).collect()
        })
        .collect();

    let refs: Vec<&[f64]> = deviations.iter().map(Vec::as_slice).collect();
    let anova = one_way_anova(&refs);

    LeveneTest {
        statistic: anova.statistic,
        p_value: anova.p_value,
    }
}

fn group_center(group: &[f64], center: LeveneCenter) -> f64 {
    if group.is_empty() {
        return f64::NAN;
    }
    match center {
        LeveneCenter::Median => median(group),
        LeveneCenter::Mean => mean(group),
    }
}

/// One-way ANOVA across k groups.
///
/// `F = (SSB / (k - 1)) / (SSW / (N - k))`, upper-tail p-value from
/// F(k - 1, N - k). Fewer than two groups yields NaN.
pub fn one_way_anova(groups: &[&[f64]]) -> Anova {
    let k = groups.len() as f64;
    let total: usize = groups.iter().map(|g| g.len()).sum();
    let n = total as f64;
    let grand_mean = groups.iter().flat_map(|g| g.iter()).sum::<f64>() / n;

    let mut ss_between = 0.0;
    let mut ss_within = 0.0;
    for group in groups {
        let m = mean(group);
        ss_between += group.len() as f64 * (m - grand_mean).powi(2);
        ss_within += group.iter().map(|x| (x - m).powi(2)).sum::<f64>();
    }

    let df_between = k - 1.0;
    let df_within = n - k;
    let statistic = (ss_between / df_between) / (ss_within / df_within);

    Anova {
        statistic,
        p_value: fisher_f_sf(statistic, df_between, df_within),
        df_between,
        df_within,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDE: [f64; 8] = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
    const NARROW: [f64; 6] = [2.0, 3.0, 3.0, 4.0, 4.0, 5.0];

    #[test]
    fn test_f_test_reference_values() {
        let r = f_test_variance_ratio(&WIDE, &NARROW);
        assert!((r.var_a - 6.0).abs() < 1e-12);
        assert!((r.var_b - 1.1).abs() < 1e-12);
        assert!((r.statistic - 6.0 / 1.1).abs() < 1e-12);
        assert_eq!((r.dfn, r.dfd), (7.0, 5.0));
        assert!((r.p_value - 0.080_000_359_5).abs() < 1e-8, "p = {}", r.p_value);
        assert!(!r.is_degenerate());
    }

    #[test]
    fn test_f_test_swap_is_reciprocal() {
        let ab = f_test_variance_ratio(&WIDE, &NARROW);
        let ba = f_test_variance_ratio(&NARROW, &WIDE);
        assert!((ab.statistic * ba.statistic - 1.0).abs() < 1e-12);
        assert!((ab.p_value - ba.p_value).abs() < 1e-10);
    }

    #[test]
    fn test_f_test_tiny_upper_tail_matches_swap() {
        let a: Vec<f64> = (0..40).map(|i| i as f64 * 100.0).collect();
        let b: Vec<f64> = (0..40).map(|i| if i % 2 == 0 { 0.0 } else { 0.001 }).collect();
        let ab = f_test_variance_ratio(&a, &b);
        let ba = f_test_variance_ratio(&b, &a);

        assert!(ab.statistic > 1.0);
        assert!(ab.p_value > 0.0, "upper tail underflowed to {}", ab.p_value);
        let rel = (ab.p_value - ba.p_value).abs() / ba.p_value;
        assert!(rel < 1e-6, "ab = {:e}, ba = {:e}", ab.p_value, ba.p_value);
    }

    #[test]
    fn test_f_test_zero_variance_is_flagged() {
        let r = f_test_variance_ratio(&[1.0, 2.0, 3.0, 4.0, 5.0], &[1.0, 1.0, 1.0, 1.0, 1.0]);
        assert_eq!(r.var_b, 0.0);
        assert!(r.statistic.is_infinite());
        assert!(r.is_degenerate());
    }

    #[test]
    fn test_f_test_both_constant_is_nan() {
        let r = f_test_variance_ratio(&[2.0, 2.0, 2.0], &[1.0, 1.0, 1.0]);
        assert!(r.statistic.is_nan());
        assert!(r.p_value.is_nan());
        assert!(r.is_degenerate());
    }

    #[test]
    fn test_f_test_p_value_never_exceeds_one() {
        // F(30, 2) has its median above 1, so the doubled upper tail exceeds 1
        let a: Vec<f64> = (0..31).map(|i| if i % 2 == 0 { 0.0 } else { 1.0 }).collect();
        let b = [0.0, 0.5, 0.9];
        let r = f_test_variance_ratio(&a, &b);
        assert!(r.statistic > 1.0);
        assert!((0.0..=1.0).contains(&r.p_value), "p = {}", r.p_value);
    }

    #[test]
    fn test_levene_unequal_spread() {
        let r = levene_test(&[4.5, 4.8, 5.0, 5.2, 5.5], &[0.0, 2.0, 5.0, 8.0, 10.0]);
        assert!((r.statistic - 10.038_144_572_6).abs() < 1e-8);
        assert!((r.p_value - 0.013_228_419_9).abs() < 1e-8);
    }

    #[test]
    fn test_levene_equal_spread() {
        let r = levene_test(&[1.0, 2.0, 3.0, 4.0, 5.0], &[6.0, 7.0, 8.0, 9.0, 10.0]);
        assert!(r.statistic.abs() < 1e-12);
        assert!((r.p_value - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_levene_three_groups() {
        let g1 = [1.0, 2.0, 3.0, 4.0, 5.0];
        let g2 = [0.0, 3.0, 5.0, 7.0, 10.0];
        let g3 = [-5.0, 0.0, 5.0, 10.0, 15.0];
        let r = levene_test_groups(&[&g1, &g2, &g3], LeveneCenter::Median);
        assert!((r.statistic - 3.912_663_755_5).abs() < 1e-8);
        assert!((r.p_value - 0.049_177_364_8).abs() < 1e-8);
    }

    #[test]
    fn test_levene_mean_center_symmetric_groups() {
        // Symmetric groups: mean and median coincide
        let a = [4.5, 4.8, 5.0, 5.2, 5.5];
        let b = [0.0, 2.0, 5.0, 8.0, 10.0];
        let by_median = levene_test_groups(&[&a, &b], LeveneCenter::Median);
        let by_mean = levene_test_groups(&[&a, &b], LeveneCenter::Mean);
        assert!((by_median.statistic - by_mean.statistic).abs() < 1e-10);
    }

    #[test]
    fn test_anova_single_group_is_nan() {
        let r = one_way_anova(&[&[1.0, 2.0, 3.0]]);
        assert_eq!(r.df_between, 0.0);
        assert!(r.statistic.is_nan());
        assert!(r.p_value.is_nan());
    }
}
