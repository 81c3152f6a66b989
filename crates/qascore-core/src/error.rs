use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors surfaced by an evaluation run.
///
/// `FileNotFound` and `NoValidEntries` are recoverable conditions: the
/// CLI reports them on the console and terminates cleanly rather than
/// crashing out to the shell.
#[derive(Debug, Error)]
pub enum EvalError {
    /// The predictions path does not resolve to a readable file.
    #[error("File not found: '{0}'")]
    FileNotFound(PathBuf),

    /// Every record lacked gold answers, or the corpus was empty.
    #[error("No valid entries found")]
    NoValidEntries,

    /// The predictions file is not a JSON array of records, or a
    /// config file failed to parse. Fails the whole run.
    #[error("Malformed input '{path}': {message}")]
    MalformedInput { path: PathBuf, message: String },

    /// Any other I/O failure.
    #[error("I/O error for path '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl EvalError {
    /// Classify an I/O error: a missing file is its own condition.
    pub(crate) fn from_io(path: &Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            EvalError::FileNotFound(path.to_path_buf())
        } else {
            EvalError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}
