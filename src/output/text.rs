//! Plain-text result dump, one paragraph per report.

use std::fmt::Write;

use crate::result::AnalysisReport;

/// Render reports as `key: value` paragraphs separated by blank lines.
///
/// Field order follows the report structure; floats use full precision so
/// the dump can be diffed between runs.
pub fn format_text(reports: &[AnalysisReport]) -> String {
    let mut out = String::new();
    for report in reports {
        // Writing into a String cannot fail.
        let _ = write_text(&mut out, report);
        out.push('\n');
    }
    out
}

/// Append one report paragraph to `out`.
pub fn write_text<W: Write>(out: &mut W, report: &AnalysisReport) -> std::fmt::Result {
    writeln!(out, "test: {}", report.test_name())?;
    match report {
        AnalysisReport::Independent(r) => {
            writeln!(out, "t_stat: {}", r.t_stat)?;
            writeln!(out, "p_value: {}", r.p_value)?;
            writeln!(out, "mean_a: {}", r.mean_a)?;
            writeln!(out, "mean_b: {}", r.mean_b)?;
            writeln!(out, "cohens_d: {}", r.cohens_d)?;
            writeln!(out, "n_a: {}", r.n_a)?;
            writeln!(out, "n_b: {}", r.n_b)?;
        }
        AnalysisReport::Paired(r) => {
            writeln!(out, "paired_t_stat: {}", r.paired_t_stat)?;
            writeln!(out, "paired_t_p: {}", r.paired_t_p)?;
            writeln!(out, "paired_z_stat: {}", r.paired_z_stat)?;
            writeln!(out, "paired_z_p: {}", r.paired_z_p)?;
            writeln!(out, "mean_diff: {}", r.mean_diff)?;
            writeln!(out, "sd_diff: {}", r.sd_diff)?;
            writeln!(out, "cohens_d_paired: {}", r.cohens_d_paired)?;
            writeln!(out, "n: {}", r.n)?;
        }
        AnalysisReport::Variance(r) => {
            writeln!(out, "f_stat: {}", r.f_stat)?;
            writeln!(out, "f_p_two_sided: {}", r.f_p_two_sided)?;
            writeln!(out, "var_a: {}", r.var_a)?;
            writeln!(out, "var_b: {}", r.var_b)?;
            writeln!(out, "n_a: {}", r.n_a)?;
            writeln!(out, "n_b: {}", r.n_b)?;
            writeln!(out, "levene_stat: {}", r.levene_stat)?;
            writeln!(out, "levene_p: {}", r.levene_p)?;
        }
        AnalysisReport::Failed { error, .. } => {
            writeln!(out, "error: {}", error)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::VarianceReport;

    #[test]
    fn test_paragraph_per_report() {
        let reports = vec![
            AnalysisReport::Variance(VarianceReport {
                test: "Variance (factory)".to_string(),
                f_stat: 2.5,
                f_p_two_sided: 0.25,
                var_a: 5.0,
                var_b: 2.0,
                n_a: 10,
                n_b: 12,
                levene_stat: f64::NAN,
                levene_p: f64::NAN,
            }),
            AnalysisReport::Failed {
                test: "students".to_string(),
                error: "missing column 'math_score'".to_string(),
            },
        ];
        let text = format_text(&reports);
        let paragraphs: Vec<&str> = text.trim_end().split("\n\n").collect();
        assert_eq!(paragraphs.len(), 2);
        assert!(paragraphs[0].starts_with("test: Variance (factory)\nf_stat: 2.5\n"));
        assert!(paragraphs[0].contains("levene_p: NaN"));
        assert_eq!(
            paragraphs[1],
            "test: students\nerror: missing column 'math_score'"
        );
    }
}
