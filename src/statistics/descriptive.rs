//! Descriptive statistics over sample slices.
//!
//! These helpers never validate their input. An empty slice, or a slice
//! shorter than `ddof + 1`, yields NaN (or an infinity) rather than a panic,
//! so degenerate samples surface as numeric anomalies in the test records.

/// Arithmetic mean. NaN for an empty slice.
pub fn mean(sample: &[f64]) -> f64 {
    sample.iter().sum::<f64>() / sample.len() as f64
}

/// Variance with `ddof` delta degrees of freedom.
///
/// `ddof = 1` gives the unbiased sample variance, `ddof = 0` the
/// population variance.
pub fn variance(sample: &[f64], ddof: usize) -> f64 {
    let m = mean(sample);
    let ss: f64 = sample.iter().map(|x| (x - m).powi(2)).sum();
    ss / (sample.len() as f64 - ddof as f64)
}

/// Standard deviation with `ddof` delta degrees of freedom.
pub fn std_dev(sample: &[f64], ddof: usize) -> f64 {
    variance(sample, ddof).sqrt()
}

/// Pairwise differences `a_i - b_i`.
///
/// # Panics
///
/// Panics if the slices have different lengths. Pairs are never silently
/// truncated; callers align them first (see [`crate::data::Table::paired_columns`]).
pub fn differences(a: &[f64], b: &[f64]) -> Vec<f64> {
    assert_eq!(
        a.len(),
        b.len(),
        "Paired samples must have equal length"
    );
    a.iter().zip(b).map(|(x, y)| x - y).collect()
}
