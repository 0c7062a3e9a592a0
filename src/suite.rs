//! Main `Analyzer` entry point and the standard analysis reports.

use tracing::{debug, warn};

use crate::analysis::{
    cohen_d_independent, cohen_d_paired, f_test_variance_ratio, levene_test_groups,
    one_sample_t_test, one_sample_z_test, paired_t_test, paired_z_test, student_t_test,
    two_sample_t_test, z_test_two_means_with,
};
use crate::config::{Config, LeveneCenter, VarianceAssumption};
use crate::error::AnalysisError;
use crate::result::{IndependentReport, PairedReport, TestOutcome, TwoSampleTTest, VarianceReport};
use crate::types::{TestInput, TestKind};

/// Validated dispatch of hypothesis tests.
///
/// The free functions in [`crate::analysis`] assume well-formed input.
/// `Analyzer` checks every precondition first (required samples present,
/// matched pair lengths, minimum sample size, finite values) and reports a
/// typed [`AnalysisError`] instead of computing on bad data.
///
/// # Example
///
/// ```ignore
/// use hypotest::{Analyzer, TestInput, TestKind};
///
/// let outcome = Analyzer::new()
///     .alpha(0.01)
///     .run(TestKind::TwoSampleT, &TestInput::two_samples(&a, &b))?;
/// println!("{}: p = {:.4}", outcome.name(), outcome.p_value());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: Config,
}

impl Analyzer {
    /// Create with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from an explicit configuration.
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Default configuration overlaid with `HYPOTEST_*` environment variables.
    pub fn from_env() -> Self {
        Self::with_config(Config::default().from_env())
    }

    /// Set the significance level.
    pub fn alpha(mut self, alpha: f64) -> Self {
        self.config.alpha = alpha;
        self
    }

    /// Pool variances in the two-sample t-test.
    pub fn equal_var(mut self, yes: bool) -> Self {
        self.config.equal_var = yes;
        self
    }

    /// Set the two-sample z-test variance assumption.
    pub fn z_variance(mut self, assumption: VarianceAssumption) -> Self {
        self.config.z_variance = assumption;
        self
    }

    /// Set the Levene centre.
    pub fn levene_center(mut self, center: LeveneCenter) -> Self {
        self.config.levene_center = center;
        self
    }

    /// Get the current configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Validate `input` for `kind`, then run the test.
    pub fn run(&self, kind: TestKind, input: &TestInput<'_>) -> Result<TestOutcome, AnalysisError> {
        validate(kind, input)?;
        let a = input.sample_a;

        let outcome = match kind {
            TestKind::OneSampleZ => {
                TestOutcome::OneSampleZ(one_sample_z_test(a, hypothesized_mean(kind, input)?))
            }
            TestKind::OneSampleT => {
                TestOutcome::OneSampleT(one_sample_t_test(a, hypothesized_mean(kind, input)?))
            }
            TestKind::TwoSampleT => {
                TestOutcome::TwoSampleT(self.two_sample_t(a, second_sample(kind, input)?))
            }
            TestKind::PairedT => {
                TestOutcome::PairedT(paired_t_test(a, second_sample(kind, input)?))
            }
            TestKind::PairedZ => {
                TestOutcome::PairedZ(paired_z_test(a, second_sample(kind, input)?))
            }
            TestKind::FTest => {
                TestOutcome::FTest(f_test_variance_ratio(a, second_sample(kind, input)?))
            }
            TestKind::Levene => {
                let b = second_sample(kind, input)?;
                TestOutcome::Levene(levene_test_groups(&[a, b], self.config.levene_center))
            }
            TestKind::TwoMeansZ => {
                let b = second_sample(kind, input)?;
                TestOutcome::TwoMeansZ(z_test_two_means_with(a, b, self.config.z_variance))
            }
        };

        debug!(
            test = kind.as_str(),
            statistic = outcome.statistic(),
            p_value = outcome.p_value(),
            "test completed"
        );
        if outcome.is_degenerate() {
            warn!(
                test = kind.as_str(),
                "degenerate statistic (zero variance or too few observations)"
            );
        }

        Ok(outcome)
    }

    fn two_sample_t(&self, sample_a: &[f64], sample_b: &[f64]) -> TwoSampleTTest {
        if self.config.equal_var {
            student_t_test(sample_a, sample_b)
        } else {
            two_sample_t_test(sample_a, sample_b)
        }
    }

    /// Two-sample t-test and Cohen's d for two independent groups.
    ///
    /// Welch's test unless the analyzer is configured with `equal_var`.
    pub fn independent_groups(
        &self,
        test: &str,
        sample_a: &[f64],
        sample_b: &[f64],
    ) -> Result<IndependentReport, AnalysisError> {
        validate(TestKind::TwoSampleT, &TestInput::two_samples(sample_a, sample_b))?;
        let t = self.two_sample_t(sample_a, sample_b);

        Ok(IndependentReport {
            test: test.to_string(),
            t_stat: t.statistic,
            p_value: t.p_value,
            mean_a: t.mean_a,
            mean_b: t.mean_b,
            cohens_d: cohen_d_independent(sample_a, sample_b),
            n_a: sample_a.len(),
            n_b: sample_b.len(),
        })
    }

    /// Paired t-test, paired z approximation and paired Cohen's d.
    pub fn paired_groups(
        &self,
        test: &str,
        before: &[f64],
        after: &[f64],
    ) -> Result<PairedReport, AnalysisError> {
        validate(TestKind::PairedT, &TestInput::two_samples(before, after))?;

        let t = paired_t_test(before, after);
        let z = paired_z_test(before, after);

        Ok(PairedReport {
            test: test.to_string(),
            paired_t_stat: t.statistic,
            paired_t_p: t.p_value,
            paired_z_stat: z.statistic,
            paired_z_p: z.p_value,
            mean_diff: t.mean_diff,
            sd_diff: t.sd_diff,
            cohens_d_paired: cohen_d_paired(before, after),
            n: t.n,
        })
    }

    /// F-test and Levene's test for two groups.
    pub fn variance_groups(
        &self,
        test: &str,
        sample_a: &[f64],
        sample_b: &[f64],
    ) -> Result<VarianceReport, AnalysisError> {
        validate(TestKind::FTest, &TestInput::two_samples(sample_a, sample_b))?;

        let f = f_test_variance_ratio(sample_a, sample_b);
        let levene = levene_test_groups(&[sample_a, sample_b], self.config.levene_center);
        if f.is_degenerate() {
            warn!(test = test, var_a = f.var_a, var_b = f.var_b, "variance ratio is not finite");
        }

        Ok(VarianceReport {
            test: test.to_string(),
            f_stat: f.statistic,
            f_p_two_sided: f.p_value,
            var_a: f.var_a,
            var_b: f.var_b,
            n_a: sample_a.len(),
            n_b: sample_b.len(),
            levene_stat: levene.statistic,
            levene_p: levene.p_value,
        })
    }
}

/// Check the preconditions of `kind` against `input`.
fn validate(kind: TestKind, input: &TestInput<'_>) -> Result<(), AnalysisError> {
    if kind.needs_hypothesized_mean() && !hypothesized_mean(kind, input)?.is_finite() {
        return Err(AnalysisError::NonFinite { kind });
    }

    let mut samples = vec![input.sample_a];
    if kind.needs_second_sample() {
        let b = second_sample(kind, input)?;
        if kind.is_paired() && input.sample_a.len() != b.len() {
            return Err(AnalysisError::LengthMismatch {
                kind,
                len_a: input.sample_a.len(),
                len_b: b.len(),
            });
        }
        samples.push(b);
    }

    for sample in samples {
        if sample.len() < kind.min_sample_size() {
            return Err(AnalysisError::InsufficientSamples {
                kind,
                available: sample.len(),
                required: kind.min_sample_size(),
            });
        }
        if sample.iter().any(|x| !x.is_finite()) {
            return Err(AnalysisError::NonFinite { kind });
        }
    }

    debug!(test = kind.as_str(), n_a = input.sample_a.len(), "input validated");
    Ok(())
}

fn hypothesized_mean(kind: TestKind, input: &TestInput<'_>) -> Result<f64, AnalysisError> {
    input.hypothesized_mean.ok_or(AnalysisError::MissingInput {
        kind,
        what: "a hypothesized mean",
    })
}

fn second_sample<'a>(kind: TestKind, input: &TestInput<'a>) -> Result<&'a [f64], AnalysisError> {
    input.sample_b.ok_or(AnalysisError::MissingInput {
        kind,
        what: "a second sample",
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: [f64; 5] = [70.0, 75.0, 80.0, 85.0, 90.0];
    const B: [f64; 5] = [60.0, 65.0, 70.0, 75.0, 80.0];

    #[test]
    fn test_dispatch_every_kind() {
        let analyzer = Analyzer::new();
        for kind in TestKind::ALL {
            let input = if kind.needs_hypothesized_mean() {
                TestInput::one_sample(&A, 75.0)
            } else {
                TestInput::two_samples(&A, &B)
            };
            let outcome = analyzer.run(kind, &input).unwrap();
            assert_eq!(outcome.kind(), kind);
            let p = outcome.p_value();
            assert!((0.0..=1.0).contains(&p), "{}: p = {}", kind, p);
        }
    }

    #[test]
    fn test_missing_hypothesized_mean() {
        let err = Analyzer::new()
            .run(TestKind::OneSampleT, &TestInput::two_samples(&A, &B))
            .unwrap_err();
        assert_eq!(
            err,
            AnalysisError::MissingInput {
                kind: TestKind::OneSampleT,
                what: "a hypothesized mean"
            }
        );
    }

    #[test]
    fn test_missing_second_sample() {
        let err = Analyzer::new()
            .run(TestKind::FTest, &TestInput::one_sample(&A, 1.0))
            .unwrap_err();
        assert!(matches!(err, AnalysisError::MissingInput { kind: TestKind::FTest, .. }));
    }

    #[test]
    fn test_paired_length_mismatch_is_typed() {
        let err = Analyzer::new()
            .run(TestKind::PairedT, &TestInput::two_samples(&A, &B[..3]))
            .unwrap_err();
        assert_eq!(
            err,
            AnalysisError::LengthMismatch {
                kind: TestKind::PairedT,
                len_a: 5,
                len_b: 3
            }
        );
    }

    #[test]
    fn test_insufficient_and_non_finite() {
        let analyzer = Analyzer::new();
        assert!(matches!(
            analyzer.run(TestKind::TwoSampleT, &TestInput::two_samples(&A, &[1.0])),
            Err(AnalysisError::InsufficientSamples { available: 1, required: 2, .. })
        ));
        assert!(matches!(
            analyzer.run(TestKind::Levene, &TestInput::two_samples(&A, &[1.0, f64::NAN])),
            Err(AnalysisError::NonFinite { kind: TestKind::Levene })
        ));
        assert!(matches!(
            analyzer.run(TestKind::OneSampleZ, &TestInput::one_sample(&A, f64::INFINITY)),
            Err(AnalysisError::NonFinite { .. })
        ));
    }

    #[test]
    fn test_equal_var_switches_to_pooled() {
        let a = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
        let b = [4.0, 4.1, 3.9, 4.05];
        let input = TestInput::two_samples(&a, &b);
        let welch = Analyzer::new().run(TestKind::TwoSampleT, &input).unwrap();
        let pooled = Analyzer::new()
            .equal_var(true)
            .run(TestKind::TwoSampleT, &input)
            .unwrap();
        match (welch, pooled) {
            (TestOutcome::TwoSampleT(w), TestOutcome::TwoSampleT(p)) => {
                assert!((p.df - 10.0).abs() < 1e-12);
                assert!(w.df < p.df);
            }
            other => panic!("unexpected outcomes {:?}", other),
        }
    }

    #[test]
    fn test_independent_report() {
        let report = Analyzer::new().independent_groups("students", &A, &B).unwrap();
        assert_eq!(report.mean_a, 80.0);
        assert_eq!(report.mean_b, 70.0);
        assert!(report.t_stat > 0.0);
        assert!(report.p_value < 1.0);
        assert!(report.cohens_d > 0.0);
        assert_eq!((report.n_a, report.n_b), (5, 5));
    }

    #[test]
    fn test_paired_report_offers_both_tests() {
        let before = [200.0, 210.0, 190.0, 220.0, 205.0, 215.0, 198.0, 230.0];
        let after = [190.0, 205.0, 185.0, 210.0, 200.0, 212.0, 195.0, 220.0];
        let report = Analyzer::new().paired_groups("heart", &before, &after).unwrap();
        assert_eq!(report.n, 8);
        assert!((report.paired_t_stat - report.paired_z_stat).abs() < 1e-12);
        assert!(report.paired_z_p < report.paired_t_p);
        assert!((report.cohens_d_paired - report.mean_diff / report.sd_diff).abs() < 1e-12);
    }

    #[test]
    fn test_variance_report_flags_zero_variance() {
        let report = Analyzer::new()
            .variance_groups("factory", &[1.0, 2.0, 3.0, 4.0, 5.0], &[1.0, 1.0, 1.0, 1.0, 1.0])
            .unwrap();
        assert!(report.f_stat.is_infinite());
        assert!(crate::AnalysisReport::Variance(report).is_degenerate());
    }
}
