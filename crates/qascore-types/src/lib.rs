use serde::{Deserialize, Serialize};
use serde_json::Value;
use tabled::{Table, Tabled};

/// One entry of a reader predictions file. Every field is optional:
/// the extractors below encode the fallback order between them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Record {
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub predictions: Vec<Candidate>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub prediction: Option<Value>,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub gold_answers: Vec<String>,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub answers: Vec<String>,
}

/// One ranked reader candidate: `{ "prediction": { "text": "..." } }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Candidate {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub prediction: Option<CandidateAnswer>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CandidateAnswer {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub text: Option<String>,
}

impl Record {
	/// Top-1 prediction text. Tries the nested candidate shape first,
	/// then a flat string `prediction` field; first non-empty wins.
	/// A record with neither yields the empty string and still scores
	/// (empty prediction against a non-empty truth is a zero, not a skip).
	pub fn prediction_text(&self) -> String {
		self.top_candidate_text()
			.or_else(|| self.flat_prediction())
			.unwrap_or_default()
	}

	fn top_candidate_text(&self) -> Option<String> {
		let text = self.predictions.first()?.prediction.as_ref()?.text.clone()?;
		if text.is_empty() {
			None
		} else {
			Some(text)
		}
	}

	fn flat_prediction(&self) -> Option<String> {
		// Only a JSON string counts here; other shapes are ignored.
		let text = self.prediction.as_ref()?.as_str()?;
		if text.is_empty() {
			None
		} else {
			Some(text.to_string())
		}
	}

	/// Reference answers: `gold_answers` if non-empty, else `answers`.
	/// An empty slice means the record cannot be scored.
	pub fn gold_answers(&self) -> &[String] {
		if !self.gold_answers.is_empty() {
			&self.gold_answers
		} else {
			&self.answers
		}
	}
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Score {
	pub name: String,
	pub value: f64,
	pub passed: bool,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub details: Option<Value>,
}

/// Best score per scorer across all gold answers of one record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionResult {
	pub id: usize,
	pub prediction: String,
	pub gold_answers: Vec<String>,
	pub scores: Vec<Score>,
}

impl QuestionResult {
	pub fn score_for(&self, name: &str) -> Option<f64> {
		self.scores.iter().find(|s| s.name == name).map(|s| s.value)
	}
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricMean {
	pub name: String,
	pub pct: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusSummary {
	pub evaluated: usize,
	pub skipped: usize,
	pub means: Vec<MetricMean>,
}

impl CorpusSummary {
	/// Corpus-level mean per scorer name, as a percentage. Only scored
	/// records contribute; skipped records appear in neither numerator
	/// nor denominator.
	pub fn summarize(questions: &[QuestionResult], skipped: usize) -> CorpusSummary {
		let mut sums: Vec<(String, f64, usize)> = Vec::new();
		for qr in questions {
			for s in &qr.scores {
				match sums.iter_mut().find(|(name, _, _)| name == &s.name) {
					Some((_, sum, count)) => {
						*sum += s.value;
						*count += 1;
					}
					None => sums.push((s.name.clone(), s.value, 1)),
				}
			}
		}

		let means = sums
			.into_iter()
			.map(|(name, sum, count)| MetricMean {
				name,
				pct: 100.0 * sum / count as f64,
			})
			.collect();

		CorpusSummary { evaluated: questions.len(), skipped, means }
	}

	pub fn mean_for(&self, name: &str) -> Option<f64> {
		self.means.iter().find(|m| m.name == name).map(|m| m.pct)
	}
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvalReport {
	pub questions: Vec<QuestionResult>,
	pub summary: CorpusSummary,
}

#[derive(Tabled)]
struct QuestionRow {
	id: usize,
	em: String,
	f1: String,
	prediction: String,
	gold: String,
}

impl EvalReport {
	/// Per-question table for inspection; the console summary block is
	/// rendered separately by the core report module.
	pub fn question_table(&self) -> String {
		let rows: Vec<QuestionRow> = self
			.questions
			.iter()
			.map(|qr| QuestionRow {
				id: qr.id,
				em: qr
					.score_for("exact_match")
					.map(|v| if v >= 1.0 { "✓".to_string() } else { " ".to_string() })
					.unwrap_or_else(|| "-".to_string()),
				f1: qr
					.score_for("token_f1")
					.map(|v| format!("{v:.3}"))
					.unwrap_or_else(|| "-".to_string()),
				prediction: truncate(qr.prediction.clone(), 64),
				gold: truncate(qr.gold_answers.join(" | "), 64),
			})
			.collect();

		Table::new(rows).to_string()
	}
}

fn truncate(s: String, max_len: usize) -> String {
	if s.len() <= max_len {
		return s;
	}
	let mut truncated = s.chars().take(max_len.saturating_sub(1)).collect::<String>();
	truncated.push('…');
	truncated
}
