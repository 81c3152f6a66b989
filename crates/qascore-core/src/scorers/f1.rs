use std::collections::HashSet;

use anyhow::Result;
use async_trait::async_trait;

use crate::normalize::TextNormalizer;
use crate::scorer::Scorer;
use qascore_types::Score;

/// Token-overlap F1: harmonic mean of precision and recall over the
/// set intersection of normalized tokens. Order-insensitive, unlike
/// the exact-match scorer.
pub struct TokenF1Scorer {
    normalizer: TextNormalizer,
}

impl TokenF1Scorer {
    pub fn new(normalizer: TextNormalizer) -> Self {
        Self { normalizer }
    }

    fn plain(&self, value: f64) -> Score {
        Score {
            name: self.name().to_string(),
            value,
            passed: value >= 1.0,
            details: None,
        }
    }
}

#[async_trait]
impl Scorer for TokenF1Scorer {
    fn name(&self) -> &'static str {
        "token_f1"
    }

    async fn score(&self, prediction: &str, truth: &str) -> Result<Score> {
        let pred_tokens = self.normalizer.tokens(prediction);
        let truth_tokens = self.normalizer.tokens(truth);

        if pred_tokens.is_empty() || truth_tokens.is_empty() {
            // Both empty is a perfect match; one-sided empty is a miss.
            let value = if pred_tokens == truth_tokens { 1.0 } else { 0.0 };
            return Ok(self.plain(value));
        }

        let pred_set: HashSet<&str> = pred_tokens.iter().map(String::as_str).collect();
        let truth_set: HashSet<&str> = truth_tokens.iter().map(String::as_str).collect();
        let common = pred_set.intersection(&truth_set).count();
        if common == 0 {
            return Ok(self.plain(0.0));
        }

        let precision = common as f64 / pred_set.len() as f64;
        let recall = common as f64 / truth_set.len() as f64;
        let value = 2.0 * precision * recall / (precision + recall);

        Ok(Score {
            name: self.name().to_string(),
            value,
            passed: value >= 1.0,
            details: Some(serde_json::json!({
                "precision": precision,
                "recall": recall,
                "common": common,
            })),
        })
    }
}
