//! # hypotest
//!
//! Classical hypothesis tests over numeric samples.
//!
//! This crate provides:
//! - t-tests (one-sample, Welch, pooled, paired) and z-test approximations
//! - variance comparisons (F-test, Levene's test, one-way ANOVA)
//! - Cohen's d effect sizes
//! - sample extraction from in-memory tables
//! - validated dispatch, batch runs and report formatting
//!
//! The functions in [`analysis`] are pure and never fail: degenerate input
//! (zero variance, too few observations) yields NaN or an infinity in the
//! returned record. [`Analyzer`] validates input first and returns a typed
//! [`AnalysisError`] instead.
//!
//! ## Quick Start
//!
//! ```ignore
//! use hypotest::{Analyzer, TestInput, TestKind};
//!
//! let a = [70.0, 75.0, 80.0, 85.0, 90.0];
//! let b = [60.0, 65.0, 70.0, 75.0, 80.0];
//!
//! let outcome = Analyzer::new().run(TestKind::TwoSampleT, &TestInput::two_samples(&a, &b))?;
//! println!("t = {:.3}, p = {:.4}", outcome.statistic(), outcome.p_value());
//! ```
//!
//! ## Batch runs
//!
//! ```ignore
//! use hypotest::{batch::Batch, output};
//!
//! let reports = Batch::from_env()
//!     .job("Student Performance", move |an| {
//!         an.independent_groups("Student Performance", &a, &b).map(Into::into)
//!     })
//!     .run();
//! println!("{}", output::to_json_pretty(&reports)?);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
mod config;
mod error;
mod result;
mod suite;
mod thread_pool;
mod types;

// Functional modules
pub mod analysis;
pub mod batch;
pub mod data;
pub mod output;
pub mod statistics;

// Re-exports for public API
pub use config::{Config, LeveneCenter, VarianceAssumption};
pub use error::{AnalysisError, DataError, SelectionError};
pub use result::{
    AnalysisReport, Anova, FTest, IndependentReport, LeveneTest, OneSampleTTest, PairedReport,
    PairedTTest, TestOutcome, TwoMeansZTest, TwoSampleTTest, VarianceReport, ZTest,
};
pub use suite::Analyzer;
pub use types::{TestInput, TestKind};

/// Run one test with the default configuration.
///
/// Shorthand for `Analyzer::new().run(kind, input)`.
pub fn run(kind: TestKind, input: &TestInput<'_>) -> Result<TestOutcome, AnalysisError> {
    Analyzer::new().run(kind, input)
}
