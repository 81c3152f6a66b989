use std::sync::Arc;

use qascore_core::{render_summary, Eval, Record, VecDataSource};
use serde_json::json;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let records: Vec<Record> = serde_json::from_value(json!([
        {
            "predictions": [{ "prediction": { "text": "Paris" } }],
            "gold_answers": ["Paris"]
        },
        {
            "prediction": "The capital is Berlin",
            "answers": ["berlin"]
        },
        // No gold answers: skipped, contributes to no denominator.
        { "predictions": [] }
    ]))?;

    let data = Arc::new(VecDataSource::new(records));
    let eval = Eval::builder().data_source(data).build()?;

    let report = eval.run().await?;
    println!("{}", report.question_table());
    println!("{}", render_summary(&report));
    Ok(())
}
