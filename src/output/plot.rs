//! Plot-ready summaries.
//!
//! These compute the numbers behind the standard charts (histograms, box
//! plots, the paired-scatter reference line) so any renderer can draw them.

use serde::{Deserialize, Serialize};

use crate::statistics::quantile_sorted;

/// Whisker reach, in interquartile ranges beyond the quartiles.
const WHISKER_IQR: f64 = 1.5;

/// Equal-width histogram.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    /// Bin edges, `counts.len() + 1` values in increasing order.
    pub edges: Vec<f64>,
    /// Observations per bin. The last bin includes its right edge.
    pub counts: Vec<usize>,
}

/// Box-plot summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxSummary {
    /// First quartile.
    pub q1: f64,
    /// Median.
    pub median: f64,
    /// Third quartile.
    pub q3: f64,
    /// Smallest observation within 1.5 IQR below `q1`.
    pub whisker_low: f64,
    /// Largest observation within 1.5 IQR above `q3`.
    pub whisker_high: f64,
    /// Observations beyond the whiskers, ascending.
    pub fliers: Vec<f64>,
}

/// Bin the finite values of `sample` into `bins` equal-width bins spanning
/// its range. A constant sample is centred in a unit-wide range.
///
/// Returns `None` if `bins` is zero or no value is finite.
pub fn histogram(sample: &[f64], bins: usize) -> Option<Histogram> {
    if bins == 0 {
        return None;
    }
    let (mut lo, mut hi) = finite_range(sample)?;
    if lo == hi {
        lo -= 0.5;
        hi += 0.5;
    }

    let width = (hi - lo) / bins as f64;
    let edges: Vec<f64> = (0..=bins)
        .map(|i| if i == bins { hi } else { lo + width * i as f64 })
        .collect();

    let mut counts = vec![0usize; bins];
    for &x in sample.iter().filter(|x| x.is_finite()) {
        let idx = (((x - lo) / width) as usize).min(bins - 1);
        counts[idx] += 1;
    }

    Some(Histogram { edges, counts })
}

/// Quartiles, whiskers and fliers of the finite values of `sample`.
///
/// Quartiles use linear interpolation. Returns `None` for a sample with no
/// finite values.
pub fn box_summary(sample: &[f64]) -> Option<BoxSummary> {
    let mut sorted: Vec<f64> = sample.iter().copied().filter(|x| x.is_finite()).collect();
    if sorted.is_empty() {
        return None;
    }
    sorted.sort_by(|a, b| a.total_cmp(b));

    let q1 = quantile_sorted(&sorted, 0.25);
    let median = quantile_sorted(&sorted, 0.5);
    let q3 = quantile_sorted(&sorted, 0.75);
    let reach = WHISKER_IQR * (q3 - q1);
    let (low_fence, high_fence) = (q1 - reach, q3 + reach);

    let inside = |x: &&f64| **x >= low_fence && **x <= high_fence;
    let whisker_low = sorted.iter().find(inside).copied().unwrap_or(q1);
    let whisker_high = sorted.iter().rev().find(inside).copied().unwrap_or(q3);
    let fliers = sorted
        .iter()
        .copied()
        .filter(|x| *x < low_fence || *x > high_fence)
        .collect();

    Some(BoxSummary {
        q1,
        median,
        q3,
        whisker_low,
        whisker_high,
        fliers,
    })
}

/// Endpoints `(lo, hi)` of the `y = x` reference line for a before/after
/// scatter: the smallest and largest finite value across both samples.
pub fn identity_line(before: &[f64], after: &[f64]) -> Option<(f64, f64)> {
    let (lo_b, hi_b) = finite_range(before).unwrap_or((f64::INFINITY, f64::NEG_INFINITY));
    let (lo_a, hi_a) = finite_range(after).unwrap_or((f64::INFINITY, f64::NEG_INFINITY));
    let (lo, hi) = (lo_b.min(lo_a), hi_b.max(hi_a));
    (lo <= hi).then_some((lo, hi))
}

fn finite_range(sample: &[f64]) -> Option<(f64, f64)> {
    sample
        .iter()
        .copied()
        .filter(|x| x.is_finite())
        .fold(None, |acc, x| match acc {
            None => Some((x, x)),
            Some((lo, hi)) => Some((lo.min(x), hi.max(x))),
        })
}
