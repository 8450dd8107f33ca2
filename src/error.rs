//! Error type shared by the lexicon, corpus and dataset loaders.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failures surfaced by the engine.
///
/// Empty input is never an error: analyses of zero texts, zero units or
/// fewer units than the window size return empty collections and `None`
/// extremes instead.
#[derive(Debug, Error)]
pub enum SentimentError {
    /// A lexicon, corpus or dataset file does not exist.
    #[error("resource not found: {}", path.display())]
    ResourceNotFound { path: PathBuf },

    /// A single line or row could not be parsed. Loaders skip these and
    /// report them through the log; they are never fatal to a batch.
    #[error("malformed record at line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    /// Reading an input failed part-way through.
    #[error("failed to read {origin}: {cause}")]
    IoFailure {
        origin: String,
        #[source]
        cause: io::Error,
    },

    /// The CSV dataset could not be opened or its header is unusable.
    #[error("failed to load dataset {}: {cause}", path.display())]
    Dataset {
        path: PathBuf,
        #[source]
        cause: csv::Error,
    },

    /// A dataset lookup (subject, article url) matched nothing.
    #[error("{kind} not found: {key}")]
    UnknownKey { kind: &'static str, key: String },

    /// Serializing a result to JSON/CSV failed.
    #[error("failed to render output: {0}")]
    Render(String),

    /// Some inputs of a multi-file run failed; each one was reported as it
    /// happened.
    #[error("{failed} of {total} file(s) could not be analyzed")]
    PartialFailure { failed: usize, total: usize },

    /// Invalid combination of caller options.
    #[error("{0}")]
    Usage(String),
}

pub type Result<T> = std::result::Result<T, SentimentError>;

impl SentimentError {
    /// Classify an open/read error on `path`: a missing file becomes
    /// `ResourceNotFound`, everything else an `IoFailure`.
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::NotFound {
            SentimentError::ResourceNotFound {
                path: path.to_path_buf(),
            }
        } else {
            SentimentError::IoFailure {
                origin: path.display().to_string(),
                cause: err,
            }
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, SentimentError::ResourceNotFound { .. })
    }
}
