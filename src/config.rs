//! Configuration for test dispatch and reporting.

use std::env;

use serde::{Deserialize, Serialize};

/// Configuration options for [`crate::Analyzer`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Significance level used when judging and displaying p-values (default: 0.05).
    pub alpha: f64,

    /// Pool variances in the two-sample t-test (default: false, i.e. Welch).
    pub equal_var: bool,

    /// Standard error used by the two-sample z-test (default: pooled).
    pub z_variance: VarianceAssumption,

    /// Centre for Levene's absolute deviations (default: median).
    pub levene_center: LeveneCenter,
}

/// How the two-sample z-test combines the group variances.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VarianceAssumption {
    /// Pooled variance, assuming equal population variances.
    #[default]
    Pooled,
    /// Separate variances per group.
    Unequal,
}

/// Centre used by Levene's test.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeveneCenter {
    /// Group median (Brown-Forsythe). Robust to skewed data.
    #[default]
    Median,
    /// Group mean (Levene's original proposal).
    Mean,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            alpha: 0.05,
            equal_var: false,
            z_variance: VarianceAssumption::Pooled,
            levene_center: LeveneCenter::Median,
        }
    }
}

impl Config {
    /// Overlay settings from environment variables.
    ///
    /// - `HYPOTEST_ALPHA`: significance level in (0, 1)
    /// - `HYPOTEST_EQUAL_VAR`: `1`/`true` to pool variances in the t-test
    /// - `HYPOTEST_Z_VARIANCE`: `pooled` or `unequal`
    /// - `HYPOTEST_LEVENE_CENTER`: `median` or `mean`
    ///
    /// Unparseable values are ignored.
    pub fn from_env(mut self) -> Self {
        if let Some(alpha) = parse_f64_env("HYPOTEST_ALPHA") {
            if alpha > 0.0 && alpha < 1.0 {
                self.alpha = alpha;
            }
        }
        if let Some(equal_var) = parse_bool_env("HYPOTEST_EQUAL_VAR") {
            self.equal_var = equal_var;
        }
        if let Some(assumption) = parse_variance_env("HYPOTEST_Z_VARIANCE") {
            self.z_variance = assumption;
        }
        if let Some(center) = parse_center_env("HYPOTEST_LEVENE_CENTER") {
            self.levene_center = center;
        }
        self
    }
}

fn parse_f64_env(key: &str) -> Option<f64> {
    env::var(key).ok()?.trim().parse().ok()
}

fn parse_bool_env(key: &str) -> Option<bool> {
    match env::var(key).ok()?.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}

fn parse_variance_env(key: &str) -> Option<VarianceAssumption> {
    match env::var(key).ok()?.trim().to_ascii_lowercase().as_str() {
        "pooled" => Some(VarianceAssumption::Pooled),
        "unequal" | "separate" => Some(VarianceAssumption::Unequal),
        _ => None,
    }
}

fn parse_center_env(key: &str) -> Option<LeveneCenter> {
    match env::var(key).ok()?.trim().to_ascii_lowercase().as_str() {
        "median" => Some(LeveneCenter::Median),
        "mean" => Some(LeveneCenter::Mean),
        _ => None,
    }
}
