//! Error taxonomy.
//!
//! Nothing in the pipeline is fatal to the process: provider misses and
//! remote failures degrade to empty results at the retrieval boundary.
//! The errors below are reserved for conditions worth surfacing — a data
//! file that exists but cannot be parsed, or an index that is corrupt.

use std::path::PathBuf;

/// Corpus (verse data source) errors.
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A book file exists but does not parse. A *missing* file is not an
    /// error — providers report it as an empty result.
    #[error("malformed book file {path}: {reason}")]
    MalformedBook { path: PathBuf, reason: String },

    #[error("fetch of {what} timed out after {millis}ms")]
    Timeout { what: String, millis: u64 },

    #[error("remote provider error: {reason}")]
    Remote { reason: String },
}

/// Static lookup-index errors.
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    #[error("malformed index file {path}: {reason}")]
    MalformedIndex { path: PathBuf, reason: String },
}

/// Umbrella error for the whole pipeline.
#[derive(Debug, thiserror::Error)]
pub enum AssistantError {
    #[error(transparent)]
    Corpus(#[from] CorpusError),

    #[error(transparent)]
    Index(#[from] IndexError),
}

pub type AssistantResult<T> = Result<T, AssistantError>;
