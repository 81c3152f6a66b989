use anyhow::Result;

use qascore_types::EvalReport;

/// Assert the corpus EM percentage meets a threshold.
///
/// Use this in your `#[tokio::test]` functions.
///
/// # Example
/// ```ignore
/// #[tokio::test]
/// async fn test_my_reader() -> Result<()> {
///     let eval = Eval::builder().data_source(data).build()?;
///     let report = eval.run().await?;
///     assert_min_em(&report, 60.0)?;
///     Ok(())
/// }
/// ```
pub fn assert_min_em(report: &EvalReport, min_pct: f64) -> Result<()> {
    let em = report.summary.mean_for("exact_match").unwrap_or(0.0);
    if em < min_pct {
        anyhow::bail!(
            "Evaluation failed: EM {:.2}% is below threshold {:.2}%\n{}",
            em,
            min_pct,
            report.question_table()
        );
    }
    Ok(())
}

/// Assert the corpus F1 percentage meets a threshold.
pub fn assert_min_f1(report: &EvalReport, min_pct: f64) -> Result<()> {
    let f1 = report.summary.mean_for("token_f1").unwrap_or(0.0);
    if f1 < min_pct {
        anyhow::bail!(
            "Evaluation failed: F1 {:.2}% is below threshold {:.2}%\n{}",
            f1,
            min_pct,
            report.question_table()
        );
    }
    Ok(())
}
