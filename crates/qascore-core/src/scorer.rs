use anyhow::Result;
use async_trait::async_trait;

use qascore_types::Score;

#[async_trait]
pub trait Scorer: Send + Sync {
    fn name(&self) -> &'static str;
    async fn score(&self, prediction: &str, truth: &str) -> Result<Score>;
}
