use qascore_types::EvalReport;

/// The fixed console summary block:
///
/// ```text
/// --------------------------------------------------
/// Evaluated 2 questions.
/// Exact Match (EM): 50.00%
/// F1 Score:         75.00%
/// --------------------------------------------------
/// ```
pub fn render_summary(report: &EvalReport) -> String {
    let rule = "-".repeat(50);
    let em = report.summary.mean_for("exact_match").unwrap_or(0.0);
    let f1 = report.summary.mean_for("token_f1").unwrap_or(0.0);
    format!(
        "{rule}\nEvaluated {} questions.\nExact Match (EM): {em:.2}%\nF1 Score:         {f1:.2}%\n{rule}",
        report.summary.evaluated
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use qascore_types::{CorpusSummary, MetricMean, QuestionResult, Score};

    fn question(em: f64, f1: f64) -> QuestionResult {
        QuestionResult {
            id: 0,
            prediction: "p".into(),
            gold_answers: vec!["g".into()],
            scores: vec![
                Score { name: "exact_match".into(), value: em, passed: em >= 1.0, details: None },
                Score { name: "token_f1".into(), value: f1, passed: f1 >= 1.0, details: None },
            ],
        }
    }

    #[test]
    fn renders_the_exact_block() {
        let questions = vec![question(1.0, 1.0), question(0.0, 0.5)];
        let summary = CorpusSummary::summarize(&questions, 0);
        let report = EvalReport { questions, summary };

        let rule = "-".repeat(50);
        let expected = format!(
            "{rule}\nEvaluated 2 questions.\nExact Match (EM): 50.00%\nF1 Score:         75.00%\n{rule}"
        );
        assert_eq!(render_summary(&report), expected);
    }

    #[test]
    fn unknown_means_render_as_zero() {
        let report = EvalReport {
            questions: Vec::new(),
            summary: CorpusSummary {
                evaluated: 0,
                skipped: 0,
                means: vec![MetricMean { name: "other".into(), pct: 12.0 }],
            },
        };
        let rendered = render_summary(&report);
        assert!(rendered.contains("Exact Match (EM): 0.00%"));
        assert!(rendered.contains("F1 Score:         0.00%"));
    }
}
