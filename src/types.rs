//! Test kinds and dispatch inputs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SelectionError;

/// Closed enumeration of every test the library can dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TestKind {
    /// One-sample z-test against a hypothesized mean.
    OneSampleZ,
    /// One-sample Student's t-test against a hypothesized mean.
    OneSampleT,
    /// Two-sample t-test (Welch unless configured otherwise).
    TwoSampleT,
    /// Paired t-test on matched observations.
    PairedT,
    /// Paired z-test (large-sample approximation of the paired t-test).
    PairedZ,
    /// Variance-ratio F-test.
    FTest,
    /// Levene's test for equality of variances.
    Levene,
    /// Two-sample z-test for a difference of means.
    TwoMeansZ,
}

impl TestKind {
    /// All kinds, in menu order followed by the extended tests.
    pub const ALL: [TestKind; 8] = [
        TestKind::OneSampleZ,
        TestKind::OneSampleT,
        TestKind::TwoSampleT,
        TestKind::PairedT,
        TestKind::FTest,
        TestKind::PairedZ,
        TestKind::Levene,
        TestKind::TwoMeansZ,
    ];

    /// Map an interactive menu selector (1-5) to a test kind.
    pub fn from_selector(selector: u8) -> Result<Self, SelectionError> {
        match selector {
            1 => Ok(TestKind::OneSampleZ),
            2 => Ok(TestKind::OneSampleT),
            3 => Ok(TestKind::TwoSampleT),
            4 => Ok(TestKind::PairedT),
            5 => Ok(TestKind::FTest),
            other => Err(SelectionError::UnknownSelector(other)),
        }
    }

    /// Parse a raw menu entry, accepting either a selector number or a test name.
    pub fn parse_selection(raw: &str) -> Result<Self, SelectionError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(SelectionError::Empty);
        }
        match trimmed.parse::<u8>() {
            Ok(selector) => Self::from_selector(selector),
            Err(_) => trimmed.parse(),
        }
    }

    /// Snake-case identifier, the inverse of [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            TestKind::OneSampleZ => "one_sample_z",
            TestKind::OneSampleT => "one_sample_t",
            TestKind::TwoSampleT => "two_sample_t",
            TestKind::PairedT => "paired_t",
            TestKind::PairedZ => "paired_z",
            TestKind::FTest => "f_test",
            TestKind::Levene => "levene",
            TestKind::TwoMeansZ => "two_means_z",
        }
    }

    /// Display name used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            TestKind::OneSampleZ => "One-sample z-test",
            TestKind::OneSampleT => "One-sample t-test",
            TestKind::TwoSampleT => "Two-sample t-test",
            TestKind::PairedT => "Paired t-test",
            TestKind::PairedZ => "Paired z-test (approximation)",
            TestKind::FTest => "F-test (variance ratio)",
            TestKind::Levene => "Levene's test",
            TestKind::TwoMeansZ => "Two-sample z-test",
        }
    }

    /// True for tests that take a hypothesized mean.
    pub fn needs_hypothesized_mean(&self) -> bool {
        matches!(self, TestKind::OneSampleZ | TestKind::OneSampleT)
    }

    /// True for tests that need a second sample.
    pub fn needs_second_sample(&self) -> bool {
        !self.needs_hypothesized_mean()
    }

    /// True for tests on matched pairs.
    pub fn is_paired(&self) -> bool {
        matches!(self, TestKind::PairedT | TestKind::PairedZ)
    }

    /// Minimum observations per sample for the statistic to be defined.
    pub fn min_sample_size(&self) -> usize {
        2
    }
}

impl fmt::Display for TestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TestKind {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        TestKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| SelectionError::UnknownName(s.trim().to_string()))
    }
}

/// Samples handed to [`crate::Analyzer::run`].
///
/// Which fields are required depends on the [`TestKind`]; the analyzer
/// validates them before dispatch.
#[derive(Debug, Clone, Copy, Default)]
pub struct TestInput<'a> {
    /// First (or only) sample; `before` for paired tests.
    pub sample_a: &'a [f64],
    /// Second sample; `after` for paired tests.
    pub sample_b: Option<&'a [f64]>,
    /// Hypothesized population mean for one-sample tests.
    pub hypothesized_mean: Option<f64>,
}

impl<'a> TestInput<'a> {
    /// Input for a one-sample test.
    pub fn one_sample(sample: &'a [f64], hypothesized_mean: f64) -> Self {
        Self {
            sample_a: sample,
            sample_b: None,
            hypothesized_mean: Some(hypothesized_mean),
        }
    }

    /// Input for a two-sample or paired test.
    pub fn two_samples(sample_a: &'a [f64], sample_b: &'a [f64]) -> Self {
        Self {
            sample_a,
            sample_b: Some(sample_b),
            hypothesized_mean: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_mapping() {
        assert_eq!(TestKind::from_selector(1).unwrap(), TestKind::OneSampleZ);
        assert_eq!(TestKind::from_selector(3).unwrap(), TestKind::TwoSampleT);
        assert_eq!(TestKind::from_selector(5).unwrap(), TestKind::FTest);
        assert!(matches!(
            TestKind::from_selector(0),
            Err(SelectionError::UnknownSelector(0))
        ));
        assert!(matches!(
            TestKind::from_selector(6),
            Err(SelectionError::UnknownSelector(6))
        ));
    }

    #[test]
    fn test_parse_names_round_trip() {
        for kind in TestKind::ALL {
            assert_eq!(kind.as_str().parse::<TestKind>().unwrap(), kind);
        }
        assert_eq!("Paired-T".parse::<TestKind>().unwrap(), TestKind::PairedT);
    }

    #[test]
    fn test_parse_selection() {
        assert_eq!(TestKind::parse_selection(" 4 ").unwrap(), TestKind::PairedT);
        assert_eq!(TestKind::parse_selection("levene").unwrap(), TestKind::Levene);
        assert!(matches!(TestKind::parse_selection(""), Err(SelectionError::Empty)));
        assert!(matches!(
            TestKind::parse_selection("anova"),
            Err(SelectionError::UnknownName(name)) if name == "anova"
        ));
        // Out of u8 range falls through to name parsing
        assert!(TestKind::parse_selection("300").is_err());
    }

    #[test]
    fn test_input_requirements() {
        assert!(TestKind::OneSampleT.needs_hypothesized_mean());
        assert!(!TestKind::OneSampleT.needs_second_sample());
        assert!(TestKind::PairedZ.is_paired());
        assert!(TestKind::Levene.needs_second_sample());
    }
}
