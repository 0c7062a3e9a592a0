//! Test result records and analysis reports.
//!
//! Every record is an immutable bag of named real numbers. Degenerate input
//! (zero variance, too few observations) is never hidden: the statistic is
//! reported as NaN or infinite and `is_degenerate()` flags it.

use serde::{Deserialize, Serialize};

use crate::types::TestKind;

/// Serde adapter for statistics that may be NaN or infinite.
///
/// JSON has no literal for those values and `serde_json` writes both as
/// `null`, losing which one occurred. Finite values stay plain numbers; the
/// others are written as the strings `"NaN"`, `"inf"` and `"-inf"`.
mod non_finite {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_f64(*value)
        } else if value.is_nan() {
            serializer.serialize_str("NaN")
        } else if *value > 0.0 {
            serializer.serialize_str("inf")
        } else {
            serializer.serialize_str("-inf")
        }
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(f64),
        Text(String),
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match Repr::deserialize(deserializer)? {
            Repr::Number(value) => Ok(value),
            Repr::Text(text) => match text.as_str() {
                "NaN" => Ok(f64::NAN),
                "inf" => Ok(f64::INFINITY),
                "-inf" => Ok(f64::NEG_INFINITY),
                other => Err(de::Error::invalid_value(
                    de::Unexpected::Str(other),
                    &"a number, \"NaN\", \"inf\" or \"-inf\"",
                )),
            },
        }
    }
}

/// A z statistic with its two-sided p-value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZTest {
    /// Standardized statistic.
    #[serde(with = "non_finite")]
    pub statistic: f64,
    /// Two-sided p-value under the standard normal.
    #[serde(with = "non_finite")]
    pub p_value: f64,
}

/// One-sample Student's t-test.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OneSampleTTest {
    /// t statistic.
    #[serde(with = "non_finite")]
    pub statistic: f64,
    /// Two-sided p-value.
    #[serde(with = "non_finite")]
    pub p_value: f64,
    /// Degrees of freedom (n - 1).
    #[serde(with = "non_finite")]
    pub df: f64,
}

/// Two-sample t-test (Welch by default).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TwoSampleTTest {
    /// t statistic, positive when `mean_a > mean_b`.
    #[serde(with = "non_finite")]
    pub statistic: f64,
    /// Two-sided p-value.
    #[serde(with = "non_finite")]
    pub p_value: f64,
    /// Degrees of freedom (Welch-Satterthwaite, or n_a + n_b - 2 when pooled).
    #[serde(with = "non_finite")]
    pub df: f64,
    /// Mean of the first sample.
    #[serde(with = "non_finite")]
    pub mean_a: f64,
    /// Mean of the second sample.
    #[serde(with = "non_finite")]
    pub mean_b: f64,
}

/// Paired t-test over `before - after` differences.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PairedTTest {
    /// t statistic.
    #[serde(with = "non_finite")]
    pub statistic: f64,
    /// Two-sided p-value with n - 1 degrees of freedom.
    #[serde(with = "non_finite")]
    pub p_value: f64,
    /// Mean of the differences.
    #[serde(with = "non_finite")]
    pub mean_diff: f64,
    /// Sample standard deviation of the differences (ddof = 1).
    #[serde(with = "non_finite")]
    pub sd_diff: f64,
    /// Number of pairs.
    pub n: usize,
}

/// Two-sample z-test for a difference of means.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TwoMeansZTest {
    /// z statistic.
    #[serde(with = "non_finite")]
    pub statistic: f64,
    /// Two-sided p-value.
    #[serde(with = "non_finite")]
    pub p_value: f64,
    /// Mean of the first sample.
    #[serde(with = "non_finite")]
    pub mean_a: f64,
    /// Mean of the second sample.
    #[serde(with = "non_finite")]
    pub mean_b: f64,
}

/// Variance-ratio F-test.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FTest {
    /// `var_a / var_b`.
    #[serde(with = "non_finite")]
    pub statistic: f64,
    /// Two-sided p-value (ratio symmetric around 1).
    #[serde(with = "non_finite")]
    pub p_value: f64,
    /// Sample variance of the first sample (ddof = 1).
    #[serde(with = "non_finite")]
    pub var_a: f64,
    /// Sample variance of the second sample (ddof = 1).
    #[serde(with = "non_finite")]
    pub var_b: f64,
    /// Numerator degrees of freedom.
    #[serde(with = "non_finite")]
    pub dfn: f64,
    /// Denominator degrees of freedom.
    #[serde(with = "non_finite")]
    pub dfd: f64,
}

impl FTest {
    /// True when the ratio is not a finite number (a zero variance, or
    /// samples too small to estimate one).
    pub fn is_degenerate(&self) -> bool {
        !self.statistic.is_finite() || !self.p_value.is_finite()
    }
}

/// Levene's test for equality of variances.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LeveneTest {
    /// W statistic (an F statistic on absolute deviations).
    #[serde(with = "non_finite")]
    pub statistic: f64,
    /// Upper-tail p-value.
    #[serde(with = "non_finite")]
    pub p_value: f64,
}

/// One-way ANOVA table summary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Anova {
    /// F statistic.
    #[serde(with = "non_finite")]
    pub statistic: f64,
    /// Upper-tail p-value.
    #[serde(with = "non_finite")]
    pub p_value: f64,
    /// k - 1.
    #[serde(with = "non_finite")]
    pub df_between: f64,
    /// N - k.
    #[serde(with = "non_finite")]
    pub df_within: f64,
}

/// Result of a dispatched test, tagged with its kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "test", rename_all = "snake_case")]
pub enum TestOutcome {
    /// [`TestKind::OneSampleZ`].
    OneSampleZ(ZTest),
    /// [`TestKind::OneSampleT`].
    OneSampleT(OneSampleTTest),
    /// [`TestKind::TwoSampleT`].
    TwoSampleT(TwoSampleTTest),
    /// [`TestKind::PairedT`].
    PairedT(PairedTTest),
    /// [`TestKind::PairedZ`].
    PairedZ(ZTest),
    /// [`TestKind::FTest`].
    FTest(FTest),
    /// [`TestKind::Levene`].
    Levene(LeveneTest),
    /// [`TestKind::TwoMeansZ`].
    TwoMeansZ(TwoMeansZTest),
}

impl TestOutcome {
    /// The kind of test that produced this outcome.
    pub fn kind(&self) -> TestKind {
        match self {
            TestOutcome::OneSampleZ(_) => TestKind::OneSampleZ,
            TestOutcome::OneSampleT(_) => TestKind::OneSampleT,
            TestOutcome::TwoSampleT(_) => TestKind::TwoSampleT,
            TestOutcome::PairedT(_) => TestKind::PairedT,
            TestOutcome::PairedZ(_) => TestKind::PairedZ,
            TestOutcome::FTest(_) => TestKind::FTest,
            TestOutcome::Levene(_) => TestKind::Levene,
            TestOutcome::TwoMeansZ(_) => TestKind::TwoMeansZ,
        }
    }

    /// Human-readable test name.
    pub fn name(&self) -> &'static str {
        self.kind().label()
    }

    /// The test statistic.
    pub fn statistic(&self) -> f64 {
        match self {
            TestOutcome::OneSampleZ(r) | TestOutcome::PairedZ(r) => r.statistic,
            TestOutcome::OneSampleT(r) => r.statistic,
            TestOutcome::TwoSampleT(r) => r.statistic,
            TestOutcome::PairedT(r) => r.statistic,
            TestOutcome::FTest(r) => r.statistic,
            TestOutcome::Levene(r) => r.statistic,
            TestOutcome::TwoMeansZ(r) => r.statistic,
        }
    }

    /// The p-value.
    pub fn p_value(&self) -> f64 {
        match self {
            TestOutcome::OneSampleZ(r) | TestOutcome::PairedZ(r) => r.p_value,
            TestOutcome::OneSampleT(r) => r.p_value,
            TestOutcome::TwoSampleT(r) => r.p_value,
            TestOutcome::PairedT(r) => r.p_value,
            TestOutcome::FTest(r) => r.p_value,
            TestOutcome::Levene(r) => r.p_value,
            TestOutcome::TwoMeansZ(r) => r.p_value,
        }
    }

    /// True when the statistic or p-value is not finite.
    pub fn is_degenerate(&self) -> bool {
        !self.statistic().is_finite() || !self.p_value().is_finite()
    }

    /// True when the p-value is below `alpha`. Degenerate outcomes are never significant.
    pub fn is_significant(&self, alpha: f64) -> bool {
        !self.is_degenerate() && self.p_value() < alpha
    }
}

/// Two independent groups: Welch t-test plus Cohen's d.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndependentReport {
    /// Analysis title.
    pub test: String,
    /// Welch t statistic.
    #[serde(with = "non_finite")]
    pub t_stat: f64,
    /// Two-sided p-value.
    #[serde(with = "non_finite")]
    pub p_value: f64,
    /// Mean of group A.
    #[serde(with = "non_finite")]
    pub mean_a: f64,
    /// Mean of group B.
    #[serde(with = "non_finite")]
    pub mean_b: f64,
    /// Cohen's d (pooled standard deviation).
    #[serde(with = "non_finite")]
    pub cohens_d: f64,
    /// Size of group A.
    pub n_a: usize,
    /// Size of group B.
    pub n_b: usize,
}

/// Matched pairs: paired t and its normal approximation side by side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairedReport {
    /// Analysis title.
    pub test: String,
    /// Paired t statistic.
    #[serde(with = "non_finite")]
    pub paired_t_stat: f64,
    /// Paired t p-value.
    #[serde(with = "non_finite")]
    pub paired_t_p: f64,
    /// Paired z statistic (large-sample approximation).
    #[serde(with = "non_finite")]
    pub paired_z_stat: f64,
    /// Paired z p-value.
    #[serde(with = "non_finite")]
    pub paired_z_p: f64,
    /// Mean of `before - after`.
    #[serde(with = "non_finite")]
    pub mean_diff: f64,
    /// Standard deviation of `before - after` (ddof = 1).
    #[serde(with = "non_finite")]
    pub sd_diff: f64,
    /// Cohen's d for paired samples.
    #[serde(with = "non_finite")]
    pub cohens_d_paired: f64,
    /// Number of complete pairs.
    pub n: usize,
}

/// Two groups compared on spread: F-test and Levene's test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VarianceReport {
    /// Analysis title.
    pub test: String,
    /// Variance ratio `var_a / var_b`.
    #[serde(with = "non_finite")]
    pub f_stat: f64,
    /// Two-sided F-test p-value.
    #[serde(with = "non_finite")]
    pub f_p_two_sided: f64,
    /// Variance of group A.
    #[serde(with = "non_finite")]
    pub var_a: f64,
    /// Variance of group B.
    #[serde(with = "non_finite")]
    pub var_b: f64,
    /// Size of group A.
    pub n_a: usize,
    /// Size of group B.
    pub n_b: usize,
    /// Levene W statistic.
    #[serde(with = "non_finite")]
    pub levene_stat: f64,
    /// Levene p-value.
    #[serde(with = "non_finite")]
    pub levene_p: f64,
}

/// One entry of a batch run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnalysisReport {
    /// Independent-groups analysis.
    Independent(IndependentReport),
    /// Paired analysis.
    Paired(PairedReport),
    /// Variance comparison.
    Variance(VarianceReport),
    /// The analysis could not be completed.
    Failed {
        /// Analysis name.
        test: String,
        /// Error message.
        error: String,
    },
}

impl From<IndependentReport> for AnalysisReport {
    fn from(report: IndependentReport) -> Self {
        AnalysisReport::Independent(report)
    }
}

impl From<PairedReport> for AnalysisReport {
    fn from(report: PairedReport) -> Self {
        AnalysisReport::Paired(report)
    }
}

impl From<VarianceReport> for AnalysisReport {
    fn from(report: VarianceReport) -> Self {
        AnalysisReport::Variance(report)
    }
}

impl AnalysisReport {
    /// The analysis title.
    pub fn test_name(&self) -> &str {
        match self {
            AnalysisReport::Independent(r) => &r.test,
            AnalysisReport::Paired(r) => &r.test,
            AnalysisReport::Variance(r) => &r.test,
            AnalysisReport::Failed { test, .. } => test,
        }
    }

    /// True for [`AnalysisReport::Failed`].
    pub fn is_failed(&self) -> bool {
        matches!(self, AnalysisReport::Failed { .. })
    }

    /// The headline p-value of the analysis, if it completed.
    ///
    /// Paired reports use the t-test p-value and variance reports the F-test one.
    pub fn primary_p_value(&self) -> Option<f64> {
        match self {
            AnalysisReport::Independent(r) => Some(r.p_value),
            AnalysisReport::Paired(r) => Some(r.paired_t_p),
            AnalysisReport::Variance(r) => Some(r.f_p_two_sided),
            AnalysisReport::Failed { .. } => None,
        }
    }

    /// True when any reported statistic is NaN or infinite.
    pub fn is_degenerate(&self) -> bool {
        let values = match self {
            AnalysisReport::Independent(r) => vec![r.t_stat, r.p_value, r.cohens_d],
            AnalysisReport::Paired(r) => vec![
                r.paired_t_stat,
                r.paired_t_p,
                r.paired_z_stat,
                r.paired_z_p,
                r.cohens_d_paired,
            ],
            AnalysisReport::Variance(r) => {
                vec![r.f_stat, r.f_p_two_sided, r.levene_stat, r.levene_p]
            }
            AnalysisReport::Failed { .. } => return false,
        };
        values.iter().any(|v| !v.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_accessors() {
        let outcome = TestOutcome::TwoSampleT(TwoSampleTTest {
            statistic: 2.0,
            p_value: 0.04,
            df: 7.5,
            mean_a: 80.0,
            mean_b: 70.0,
        });
        assert_eq!(outcome.kind(), TestKind::TwoSampleT);
        assert_eq!(outcome.statistic(), 2.0);
        assert!(outcome.is_significant(0.05));
        assert!(!outcome.is_significant(0.01));
    }

    #[test]
    fn test_degenerate_outcome_is_never_significant() {
        let outcome = TestOutcome::FTest(FTest {
            statistic: f64::INFINITY,
            p_value: 0.0,
            var_a: 2.5,
            var_b: 0.0,
            dfn: 4.0,
            dfd: 4.0,
        });
        assert!(outcome.is_degenerate());
        assert!(!outcome.is_significant(0.05));
    }

    #[test]
    fn test_failed_report() {
        let report = AnalysisReport::Failed {
            test: "heart".to_string(),
            error: "missing column".to_string(),
        };
        assert!(report.is_failed());
        assert_eq!(report.test_name(), "heart");
        assert_eq!(report.primary_p_value(), None);
        assert!(!report.is_degenerate());
    }

    #[test]
    fn test_outcome_serializes_with_tag() {
        let outcome = TestOutcome::Levene(LeveneTest {
            statistic: 1.5,
            p_value: 0.25,
        });
        let json = serde_json::to_string(&outcome).unwrap();
        assert!(json.contains("\"test\":\"levene\""));
        assert!(json.contains("\"p_value\":0.25"));
    }

    #[test]
    fn test_non_finite_statistics_keep_their_identity() {
        let outcome = TestOutcome::FTest(FTest {
            statistic: f64::INFINITY,
            p_value: f64::NAN,
            var_a: 2.5,
            var_b: 0.0,
            dfn: 4.0,
            dfd: f64::NEG_INFINITY,
        });
        let json = serde_json::to_string(&outcome).unwrap();
        assert!(json.contains("\"statistic\":\"inf\""), "{}", json);
        assert!(json.contains("\"p_value\":\"NaN\""), "{}", json);
        assert!(json.contains("\"dfd\":\"-inf\""), "{}", json);
        assert!(json.contains("\"var_a\":2.5"), "{}", json);

        let back: TestOutcome = serde_json::from_str(&json).unwrap();
        match back {
            TestOutcome::FTest(f) => {
                assert_eq!(f.statistic, f64::INFINITY);
                assert!(f.p_value.is_nan());
                assert_eq!(f.dfd, f64::NEG_INFINITY);
                assert_eq!(f.var_b, 0.0);
            }
            other => panic!("unexpected outcome {:?}", other),
        }
    }
}
