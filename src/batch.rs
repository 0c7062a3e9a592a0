//! Batch runner for named analyses.
//!
//! Each job is a recoverable unit: an error becomes an
//! [`AnalysisReport::Failed`] entry and the remaining jobs still run.
//! Reports come back in submission order whether or not the jobs ran in
//! parallel.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::AnalysisError;
use crate::result::AnalysisReport;
use crate::suite::Analyzer;
use crate::thread_pool;

type Job = Box<dyn Fn(&Analyzer) -> Result<AnalysisReport, AnalysisError> + Send + Sync>;

/// A list of named analyses sharing one [`Analyzer`].
///
/// ```ignore
/// let reports = Batch::new()
///     .job("Heart Rate", move |an| {
///         an.paired_groups("Heart Rate", &before, &after).map(Into::into)
///     })
///     .job("Factory", move |an| an.variance_groups("Factory", &a, &b).map(Into::into))
///     .run();
/// ```
pub struct Batch {
    analyzer: Analyzer,
    jobs: Vec<(String, Job)>,
}

impl Default for Batch {
    fn default() -> Self {
        Self::new()
    }
}

impl Batch {
    /// Empty batch with the default configuration.
    pub fn new() -> Self {
        Self::with_analyzer(Analyzer::new())
    }

    /// Empty batch configured from `HYPOTEST_*` environment variables.
    pub fn from_env() -> Self {
        Self::with_analyzer(Analyzer::from_env())
    }

    /// Empty batch using `analyzer` for every job.
    pub fn with_analyzer(analyzer: Analyzer) -> Self {
        Self {
            analyzer,
            jobs: Vec::new(),
        }
    }

    /// Append a named job.
    pub fn job<F>(mut self, name: impl Into<String>, job: F) -> Self
    where
        F: Fn(&Analyzer) -> Result<AnalysisReport, AnalysisError> + Send + Sync + 'static,
    {
        self.jobs.push((name.into(), Box::new(job)));
        self
    }

    /// Number of queued jobs.
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    /// True when no job is queued.
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// The analyzer shared by the jobs.
    pub fn analyzer(&self) -> &Analyzer {
        &self.analyzer
    }

    /// Run every job and return one report per job, in submission order.
    pub fn run(&self) -> Vec<AnalysisReport> {
        let reports = self.run_jobs();

        let summary = BatchSummary::from_reports(&reports, self.analyzer.config().alpha);
        info!(
            total = summary.total,
            completed = summary.completed,
            failed = summary.failed,
            significant = summary.significant,
            "batch finished"
        );
        if summary.degenerate > 0 {
            warn!(
                degenerate = summary.degenerate,
                "some analyses produced undefined statistics"
            );
        }

        reports
    }

    #[cfg(feature = "parallel")]
    fn run_jobs(&self) -> Vec<AnalysisReport> {
        thread_pool::install(|| {
            self.jobs
                .par_iter()
                .map(|(name, job)| run_job(&self.analyzer, name, job))
                .collect()
        })
    }

    #[cfg(not(feature = "parallel"))]
    fn run_jobs(&self) -> Vec<AnalysisReport> {
        thread_pool::install(|| {
            self.jobs
                .iter()
                .map(|(name, job)| run_job(&self.analyzer, name, job))
                .collect()
        })
    }
}

fn run_job(analyzer: &Analyzer, name: &str, job: &Job) -> AnalysisReport {
    match job(analyzer) {
        Ok(report) => report,
        Err(e) => {
            warn!(test = name, error = %e, "analysis failed");
            AnalysisReport::Failed {
                test: name.to_string(),
                error: e.to_string(),
            }
        }
    }
}

/// Counts over a finished batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    /// Number of reports.
    pub total: usize,
    /// Reports that completed.
    pub completed: usize,
    /// Reports that failed.
    pub failed: usize,
    /// Completed reports whose headline p-value is below alpha.
    pub significant: usize,
    /// Completed reports holding a NaN or infinite statistic.
    pub degenerate: usize,
}

impl BatchSummary {
    /// Tally `reports` at significance level `alpha`.
    pub fn from_reports(reports: &[AnalysisReport], alpha: f64) -> Self {
        let mut summary = Self {
            total: reports.len(),
            ..Self::default()
        };
        for report in reports {
            if report.is_failed() {
                summary.failed += 1;
                continue;
            }
            summary.completed += 1;
            if report.is_degenerate() {
                summary.degenerate += 1;
            } else if report.primary_p_value().is_some_and(|p| p < alpha) {
                summary.significant += 1;
            }
        }
        summary
    }
}
