//! The statistical test library.
//!
//! Every function here is pure: it takes samples as explicit arguments,
//! never reads shared state and performs no I/O. Inputs are not validated.
//! A sample that is too small or has zero spread produces NaN or an
//! infinity in the returned record instead of an error; use
//! [`crate::Analyzer`] for validated dispatch.
//!
//! - t-tests: one-sample, Welch, pooled and paired
//! - z-tests: normal approximations (one-sample, paired, two means)
//! - variance tests: F-test, Levene's test, one-way ANOVA
//! - effect sizes: Cohen's d for independent and paired samples

mod effect;
mod variance;

pub use effect::{cohen_d_independent, cohen_d_paired};
pub use t_test::{one_sample_t_test, paired_t_test, student_t_test, two_sample_t_test};
pub use variance::{f_test_variance_ratio, levene_test, levene_test_groups, one_way_anova};
pub use z_test::{one_sample_z_test, paired_z_test, z_test_two_means, z_test_two_means_with};
