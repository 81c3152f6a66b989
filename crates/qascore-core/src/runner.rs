use std::sync::Arc;

use crate::datasource::DataSource;
use crate::error::EvalError;
use crate::normalize::TextNormalizer;
use crate::scorer::Scorer;
use crate::scorers::{exact::ExactMatchScorer, f1::TokenF1Scorer};
use qascore_types::{CorpusSummary, EvalReport, QuestionResult, Record, Score};

pub struct EvalBuilder {
	data_source: Option<Arc<dyn DataSource>>,
	scorers: Vec<Arc<dyn Scorer>>,
	normalizer: TextNormalizer,
}

impl EvalBuilder {
	pub fn new() -> Self {
		Self {
			data_source: None,
			scorers: Vec::new(),
			normalizer: TextNormalizer::default(),
		}
	}

	pub fn data_source(mut self, data_source: Arc<dyn DataSource>) -> Self {
		self.data_source = Some(data_source);
		self
	}

	/// Normalizer used by the default scorers when none are supplied.
	pub fn normalizer(mut self, normalizer: TextNormalizer) -> Self {
		self.normalizer = normalizer;
		self
	}

	pub fn scorers<I>(mut self, scorers: I) -> Self
	where
		I: IntoIterator<Item = Arc<dyn Scorer>>,
	{
		self.scorers = scorers.into_iter().collect();
		self
	}

	pub fn add_scorer(mut self, scorer: Arc<dyn Scorer>) -> Self {
		self.scorers.push(scorer);
		self
	}

	pub fn build(self) -> Result<Eval, EvalError> {
		let data_source = self
			.data_source
			.ok_or_else(|| EvalError::Other(anyhow::anyhow!("data_source must be set")))?;
		let scorers = if self.scorers.is_empty() {
			vec![
				Arc::new(ExactMatchScorer::new(self.normalizer.clone())) as Arc<dyn Scorer>,
				Arc::new(TokenF1Scorer::new(self.normalizer.clone())),
			]
		} else {
			self.scorers
		};
		Ok(Eval { data_source, scorers })
	}
}

impl Default for EvalBuilder {
	fn default() -> Self {
		Self::new()
	}
}

pub struct Eval {
	data_source: Arc<dyn DataSource>,
	scorers: Vec<Arc<dyn Scorer>>,
}

impl Eval {
	pub fn builder() -> EvalBuilder {
		EvalBuilder::new()
	}

	pub async fn run(&self) -> Result<EvalReport, EvalError> {
		let records = self.data_source.load().await?;
		self.run_records(records).await
	}

	/// Sequential scoring pass over pre-loaded records. Split out from
	/// `run` so callers can announce the loaded entry count first.
	pub async fn run_records(&self, records: Vec<Record>) -> Result<EvalReport, EvalError> {
		let mut questions: Vec<QuestionResult> = Vec::new();
		let mut skipped = 0usize;

		for (id, record) in records.iter().enumerate() {
			let answers = record.gold_answers();
			if answers.is_empty() {
				// Nothing to score against: out of both numerator and denominator.
				skipped += 1;
				continue;
			}

			// A record with answers but no usable prediction still scores:
			// empty prediction against a non-empty truth is a zero, not a skip.
			let prediction = record.prediction_text();

			let mut best: Vec<Score> = Vec::with_capacity(self.scorers.len());
			for scorer in &self.scorers {
				let mut best_score: Option<Score> = None;
				for answer in answers {
					let score = scorer.score(&prediction, answer).await?;
					let better = best_score.as_ref().map_or(true, |b| score.value > b.value);
					if better {
						best_score = Some(score);
					}
					if best_score.as_ref().is_some_and(|b| b.value >= 1.0) {
						// Saturated; remaining answers cannot improve it.
						break;
					}
				}
				if let Some(score) = best_score {
					best.push(score);
				}
			}

			questions.push(QuestionResult {
				id,
				prediction,
				gold_answers: answers.to_vec(),
				scores: best,
			});
		}

		if questions.is_empty() {
			return Err(EvalError::NoValidEntries);
		}

		let summary = CorpusSummary::summarize(&questions, skipped);
		Ok(EvalReport { questions, summary })
	}
}
