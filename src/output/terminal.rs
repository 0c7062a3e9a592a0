//! Terminal output formatting with colors and box drawing.

use colored::Colorize;

use crate::batch::BatchSummary;
use crate::result::{AnalysisReport, TestOutcome};

/// Format a single test outcome for human-readable terminal output.
pub fn format_outcome(outcome: &TestOutcome, alpha: f64) -> String {
    let mut output = String::new();
    let sep = "\u{2500}".repeat(62);

    output.push_str(outcome.name());
    output.push('\n');
    output.push_str(&sep);
    output.push('\n');
    output.push_str(&format!("    Statistic: {}\n", format_value(outcome.statistic())));
    match outcome {
        TestOutcome::OneSampleT(t) => output.push_str(&format!("    df:        {:.2}\n", t.df)),
        TestOutcome::TwoSampleT(t) => {
            output.push_str(&format!("    df:        {:.2}\n", t.df));
            output.push_str(&format!(
                "    Means:     {:.4} vs {:.4}\n",
                t.mean_a, t.mean_b
            ));
        }
        TestOutcome::PairedT(t) => output.push_str(&format!(
            "    Mean diff: {:.4} (sd {:.4}, n = {})\n",
            t.mean_diff, t.sd_diff, t.n
        )),
        TestOutcome::FTest(f) => output.push_str(&format!(
            "    Variances: {:.4} vs {:.4} (df {} / {})\n",
            f.var_a, f.var_b, f.dfn, f.dfd
        )),
        _ => {}
    }
    output.push_str(&format!("    p-value:   {}\n", format_value(outcome.p_value())));
    output.push('\n');
    output.push_str(&verdict(Some(outcome.p_value()), outcome.is_degenerate(), alpha));
    output
}

/// Format one analysis report.
pub fn format_report(report: &AnalysisReport, alpha: f64) -> String {
    let mut output = String::new();
    let sep = "\u{2500}".repeat(62);

    output.push_str(&report.test_name().bold().to_string());
    output.push('\n');
    output.push_str(&sep);
    output.push('\n');

    match report {
        AnalysisReport::Independent(r) => {
            output.push_str(&format!("  Groups: n = {} vs n = {}\n\n", r.n_a, r.n_b));
            output.push_str(&format!("    Means:     {:.4} vs {:.4}\n", r.mean_a, r.mean_b));
            output.push_str(&format!("    Welch t:   {}\n", format_value(r.t_stat)));
            output.push_str(&format!("    p-value:   {}\n", format_value(r.p_value)));
            output.push_str(&format!("    Cohen's d: {}\n", format_value(r.cohens_d)));
        }
        AnalysisReport::Paired(r) => {
            output.push_str(&format!("  Pairs: {}\n\n", r.n));
            output.push_str(&format!(
                "    Mean diff: {:.4} (sd {:.4})\n",
                r.mean_diff, r.sd_diff
            ));
            output.push_str(&format!(
                "    Paired t:  {} (p = {})\n",
                format_value(r.paired_t_stat),
                format_value(r.paired_t_p)
            ));
            output.push_str(&format!(
                "    Paired z:  {} (p = {})\n",
                format_value(r.paired_z_stat),
                format_value(r.paired_z_p)
            ));
            output.push_str(&format!("    Cohen's d: {}\n", format_value(r.cohens_d_paired)));
        }
        AnalysisReport::Variance(r) => {
            output.push_str(&format!("  Groups: n = {} vs n = {}\n\n", r.n_a, r.n_b));
            output.push_str(&format!("    Variances: {:.4} vs {:.4}\n", r.var_a, r.var_b));
            output.push_str(&format!(
                "    F:         {} (p = {})\n",
                format_value(r.f_stat),
                format_value(r.f_p_two_sided)
            ));
            output.push_str(&format!(
                "    Levene W:  {} (p = {})\n",
                format_value(r.levene_stat),
                format_value(r.levene_p)
            ));
        }
        AnalysisReport::Failed { error, .. } => {
            output.push_str(&format!("  {}\n", format!("\u{2717} {}", error).red().bold()));
            return output;
        }
    }

    output.push('\n');
    output.push_str(&verdict(report.primary_p_value(), report.is_degenerate(), alpha));
    output
}

/// Format every report followed by a one-line summary.
pub fn format_batch(reports: &[AnalysisReport], alpha: f64) -> String {
    let mut output = String::new();
    for report in reports {
        output.push_str(&format_report(report, alpha));
        output.push('\n');
    }

    let summary = BatchSummary::from_reports(reports, alpha);
    output.push_str(&"\u{2550}".repeat(62));
    output.push('\n');
    output.push_str(&format!(
        "{} analyses: {} completed, {} failed, {} significant at \u{03B1} = {}\n",
        summary.total, summary.completed, summary.failed, summary.significant, alpha
    ));
    output
}

fn verdict(p_value: Option<f64>, degenerate: bool, alpha: f64) -> String {
    match p_value {
        _ if degenerate => format!(
            "  {}\n",
            "\u{26A0} Undefined statistic (zero variance or too few observations)"
                .yellow()
                .bold()
        ),
        Some(p) if p < alpha => format!(
            "  {}\n",
            format!("\u{2713} Significant at \u{03B1} = {}", alpha).green().bold()
        ),
        Some(_) => format!("  Not significant at \u{03B1} = {}\n", alpha),
        None => String::new(),
    }
}

/// Four decimals, switching to scientific notation for tiny magnitudes.
fn format_value(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string().red().to_string();
    }
    if value != 0.0 && value.abs() < 1e-4 {
        format!("{:.3e}", value)
    } else {
        format!("{:.4}", value)
    }
}
