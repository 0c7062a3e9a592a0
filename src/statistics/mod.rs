//! Numeric foundations for the hypothesis tests.
//!
//! - Descriptive statistics (mean, variance with delta degrees of freedom)
//! - Quantiles using O(n) selection, R-7 interpolation
//! - Tail probabilities of the normal, Student's t and F distributions

mod descriptive;
mod distributions;
mod quantile;

pub use descriptive::{differences, mean, std_dev, variance};
pub use distributions::{
    clamp_probability, fisher_f_cdf, fisher_f_sf, normal_sf, students_t_sf, two_sided_normal,
    two_sided_t,
};
pub use quantile::{median, quantile_sorted};
