use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::error::EvalError;
use qascore_types::Record;

#[async_trait]
pub trait DataSource: Send + Sync {
    async fn load(&self) -> Result<Vec<Record>, EvalError>;
}

pub struct VecDataSource {
    records: Vec<Record>,
}

impl VecDataSource {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl DataSource for VecDataSource {
    async fn load(&self) -> Result<Vec<Record>, EvalError> {
        Ok(self.records.clone())
    }
}

/// Reads a reader predictions file: one JSON array where each element
/// is a record of the shape
/// `{ "predictions": [{ "prediction": { "text": ... } }], "prediction": ...,
///    "gold_answers": [...], "answers": [...] }`
/// with every field optional.
///
/// A missing file maps to `EvalError::FileNotFound`; anything that is
/// not a parseable JSON array of records fails the run with
/// `EvalError::MalformedInput`.
pub struct JsonDataSource {
    path: PathBuf,
}

impl JsonDataSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl DataSource for JsonDataSource {
    async fn load(&self) -> Result<Vec<Record>, EvalError> {
        let content = read_to_string(&self.path).await?;
        serde_json::from_str(&content).map_err(|err| EvalError::MalformedInput {
            path: self.path.clone(),
            message: err.to_string(),
        })
    }
}

#[cfg(not(feature = "sync-fs"))]
async fn read_to_string(path: &Path) -> Result<String, EvalError> {
    use tokio::fs;
    fs::read_to_string(path)
        .await
        .map_err(|source| EvalError::from_io(path, source))
}

#[cfg(feature = "sync-fs")]
async fn read_to_string(path: &Path) -> Result<String, EvalError> {
    use std::fs;
    use tokio::task;
    let path = path.to_path_buf();
    task::spawn_blocking(move || {
        fs::read_to_string(&path).map_err(|source| EvalError::from_io(&path, source))
    })
    .await
    .map_err(|err| EvalError::Other(anyhow::anyhow!(err)))?
}
