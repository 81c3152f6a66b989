use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::EvalError;
use crate::normalize::{TextNormalizer, DEFAULT_STOP_WORDS};
use crate::scorer::Scorer;
use crate::scorers::{exact::ExactMatchScorer, f1::TokenF1Scorer};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvalConfig {
    pub data: DataConfig,
    #[serde(default)]
    pub scorers: Vec<ScorerConfig>,
    #[serde(default = "default_stop_words")]
    pub stop_words: Vec<String>,
}

fn default_stop_words() -> Vec<String> {
    DEFAULT_STOP_WORDS.iter().map(|s| s.to_string()).collect()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
#[serde(rename_all = "snake_case")]
pub enum DataConfig {
    /// Explicit path to a predictions file.
    File { path: PathBuf },
    /// Path derived from a sample size:
    /// `<results_dir>/reader_<sample_size>_predictions.json`.
    Sample {
        results_dir: PathBuf,
        sample_size: u32,
    },
}

impl DataConfig {
    pub fn resolve(&self) -> PathBuf {
        match self {
            DataConfig::File { path } => path.clone(),
            DataConfig::Sample {
                results_dir,
                sample_size,
            } => results_dir.join(format!("reader_{sample_size}_predictions.json")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
#[serde(rename_all = "snake_case")]
pub enum ScorerConfig {
    Exact,
    TokenF1,
}

impl EvalConfig {
    pub fn from_yaml_file(path: &Path) -> Result<Self, EvalError> {
        let content =
            std::fs::read_to_string(path).map_err(|source| EvalError::from_io(path, source))?;
        serde_yaml::from_str(&content).map_err(|err| EvalError::MalformedInput {
            path: path.to_path_buf(),
            message: err.to_string(),
        })
    }

    pub fn normalizer(&self) -> TextNormalizer {
        TextNormalizer::new(self.stop_words.iter().cloned())
    }

    /// Scorers named by the config; empty when none are listed, which
    /// the eval builder treats as "use the defaults".
    pub fn build_scorers(&self, normalizer: &TextNormalizer) -> Vec<Arc<dyn Scorer>> {
        self.scorers
            .iter()
            .map(|c| match c {
                ScorerConfig::Exact => {
                    Arc::new(ExactMatchScorer::new(normalizer.clone())) as Arc<dyn Scorer>
                }
                ScorerConfig::TokenF1 => Arc::new(TokenF1Scorer::new(normalizer.clone())),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_config_builds_the_reader_path() {
        let data = DataConfig::Sample {
            results_dir: PathBuf::from("/results"),
            sample_size: 200,
        };
        assert_eq!(
            data.resolve(),
            PathBuf::from("/results/reader_200_predictions.json")
        );
    }

    #[test]
    fn parses_yaml_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("eval.yaml");
        std::fs::write(
            &path,
            "data:\n  type: sample\n  results_dir: /results\n  sample_size: 200\n",
        )
        .unwrap();

        let config = EvalConfig::from_yaml_file(&path).unwrap();
        assert!(config.scorers.is_empty());
        assert_eq!(config.stop_words, ["a", "an", "the"]);
        assert_eq!(
            config.data.resolve(),
            PathBuf::from("/results/reader_200_predictions.json")
        );
    }

    #[test]
    fn parses_explicit_scorers_and_stop_words() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("eval.yaml");
        std::fs::write(
            &path,
            concat!(
                "data:\n  type: file\n  path: preds.json\n",
                "scorers:\n  - type: exact\n  - type: token_f1\n",
                "stop_words: [a, an, the, of]\n",
            ),
        )
        .unwrap();

        let config = EvalConfig::from_yaml_file(&path).unwrap();
        assert_eq!(config.scorers.len(), 2);
        let normalizer = config.normalizer();
        assert!(normalizer.tokens("of the").is_empty());
        assert_eq!(config.build_scorers(&normalizer).len(), 2);
    }

    #[test]
    fn missing_config_file_is_file_not_found() {
        let err = EvalConfig::from_yaml_file(Path::new("/nowhere/eval.yaml")).unwrap_err();
        assert!(matches!(err, EvalError::FileNotFound(_)));
    }
}
