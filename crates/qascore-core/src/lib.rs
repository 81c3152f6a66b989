//! qascore-core: EM and token-F1 evaluation for QA reader predictions.
//! Compose a data source with scorers and run a sequential scoring pass;
//! each record is scored against all of its gold answers and keeps the best.
//! See `demos/library_usage.rs` for a quickstart.

pub mod config;
pub mod datasource;
pub mod error;
pub mod normalize;
pub mod report;
pub mod runner;
pub mod scorer;
pub mod testing;

pub mod scorers {
    pub mod exact;
    pub mod f1;
}

pub use config::{DataConfig, EvalConfig, ScorerConfig};
pub use datasource::{DataSource, JsonDataSource, VecDataSource};
pub use error::EvalError;
pub use normalize::{TextNormalizer, DEFAULT_STOP_WORDS};
pub use report::render_summary;
pub use runner::{Eval, EvalBuilder};
pub use scorer::Scorer;
pub use scorers::{exact::ExactMatchScorer, f1::TokenF1Scorer};
pub use qascore_types::{
    Candidate, CandidateAnswer, CorpusSummary, EvalReport, MetricMean, QuestionResult, Record,
    Score,
};
