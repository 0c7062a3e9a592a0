//! Quantiles by linear interpolation between order statistics.
//!
//! This is the R-7 definition, the default of most statistics packages.

/// Quantile of pre-sorted data (R-7).
///
/// The caller must ensure `sorted` is in ascending order; no verification
/// is performed.
///
/// # Panics
///
/// Panics if `sorted` is empty.
pub fn quantile_sorted(sorted: &[f64], p: f64) -> f64 {
    assert!(!sorted.is_empty(), "Cannot compute quantile of empty slice");

    let n = sorted.len();
    let h = (n - 1) as f64 * p;
    let h_floor = h.floor() as usize;
    let h_frac = h - h.floor();

    if h_floor >= n - 1 {
        sorted[n - 1]
    } else if h_frac == 0.0 {
        sorted[h_floor]
    } else {
        sorted[h_floor] + h_frac * (sorted[h_floor + 1] - sorted[h_floor])
    }
}

/// Median of a sample. The input is copied, not reordered.
///
/// # Panics
///
/// Panics if `sample` is empty.
pub fn median(sample: &[f64]) -> f64 {
    let mut sorted = sample.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    quantile_sorted(&sorted, 0.5)
}
