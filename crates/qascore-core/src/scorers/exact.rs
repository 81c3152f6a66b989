use anyhow::Result;
use async_trait::async_trait;

use crate::normalize::TextNormalizer;
use crate::scorer::Scorer;
use qascore_types::Score;

/// Exact match on the space-joined normalized token sequence.
///
/// Order-sensitive by design: "brown fox" and "fox brown" do not match
/// here even though their token sets are identical. Token-set overlap
/// is the F1 scorer's job.
pub struct ExactMatchScorer {
    normalizer: TextNormalizer,
}

impl ExactMatchScorer {
    pub fn new(normalizer: TextNormalizer) -> Self {
        Self { normalizer }
    }
}

#[async_trait]
impl Scorer for ExactMatchScorer {
    fn name(&self) -> &'static str {
        "exact_match"
    }

    async fn score(&self, prediction: &str, truth: &str) -> Result<Score> {
        let passed = self.normalizer.joined(prediction) == self.normalizer.joined(truth);
        Ok(Score {
            name: self.name().to_string(),
            value: if passed { 1.0 } else { 0.0 },
            passed,
            details: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scorer() -> ExactMatchScorer {
        ExactMatchScorer::new(TextNormalizer::default())
    }

    #[tokio::test]
    async fn matches_up_to_normalization() {
        let score = scorer().score("The Paris!", "paris").await.unwrap();
        assert!(score.passed);
        assert_eq!(score.value, 1.0);
    }

    #[tokio::test]
    async fn identical_strings_match() {
        let score = scorer().score("Paris", "Paris").await.unwrap();
        assert_eq!(score.value, 1.0);
    }

    #[tokio::test]
    async fn extra_tokens_do_not_match() {
        let score = scorer().score("The Capital is Paris", "paris").await.unwrap();
        assert!(!score.passed);
        assert_eq!(score.value, 0.0);
    }

    #[tokio::test]
    async fn order_matters() {
        let score = scorer().score("brown fox", "fox brown").await.unwrap();
        assert_eq!(score.value, 0.0);
    }

    #[tokio::test]
    async fn both_sides_normalizing_to_empty_match() {
        let score = scorer().score("the a an", "").await.unwrap();
        assert_eq!(score.value, 1.0);
    }
}
