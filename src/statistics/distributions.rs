//! Tail probabilities of the reference distributions.
//!
//! Thin wrappers over `statrs`. Invalid parameters (a non-positive or NaN
//! degree of freedom, as produced by a sample of size one) and NaN
//! arguments both yield NaN instead of an error, so degenerate inputs
//! propagate as numeric anomalies.

use statrs::distribution::{ContinuousCDF, FisherSnedecor, Normal, StudentsT};

/// Survival function `P(Z > x)` of the standard normal distribution.
pub fn normal_sf(x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    match Normal::new(0.0, 1.0) {
        Ok(dist) => dist.sf(x),
        Err(_) => f64::NAN,
    }
}

/// Survival function `P(T > t)` of Student's t with `df` degrees of freedom.
///
/// `df` may be fractional (Welch-Satterthwaite).
pub fn students_t_sf(t: f64, df: f64) -> f64 {
    if t.is_nan() {
        return f64::NAN;
    }
    match StudentsT::new(0.0, 1.0, df) {
        Ok(dist) => dist.sf(t),
        Err(_) => f64::NAN,
    }
}

/// CDF of the Fisher-Snedecor F distribution with `(dfn, dfd)` degrees of freedom.
pub fn fisher_f_cdf(f: f64, dfn: f64, dfd: f64) -> f64 {
    if f.is_nan() {
        return f64::NAN;
    }
    match FisherSnedecor::new(dfn, dfd) {
        Ok(dist) => dist.cdf(f),
        Err(_) => f64::NAN,
    }
}

/// Survival function of the F distribution.
pub fn fisher_f_sf(f: f64, dfn: f64, dfd: f64) -> f64 {
    if f.is_nan() {
        return f64::NAN;
    }
    match FisherSnedecor::new(dfn, dfd) {
        Ok(dist) => dist.sf(f),
        Err(_) => f64::NAN,
    }
}

/// Two-sided p-value `2 * P(Z > |z|)` for a standard-normal statistic.
pub fn two_sided_normal(z: f64) -> f64 {
    clamp_probability(2.0 * normal_sf(z.abs()))
}

/// Two-sided p-value `2 * P(T > |t|)` for a Student-t statistic.
pub fn two_sided_t(t: f64, df: f64) -> f64 {
    clamp_probability(2.0 * students_t_sf(t.abs(), df))
}

/// Clamp a doubled tail probability into [0, 1], keeping NaN as NaN.
///
/// `f64::min` would turn NaN into the bound, hiding a degenerate input.
pub fn clamp_probability(p: f64) -> f64 {
    if p > 1.0 {
        1.0
    } else if p < 0.0 {
        0.0
    } else {
        p
    }
}
