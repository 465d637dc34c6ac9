// src/error.rs
//! Error types for exporting custom media.
//!
//! Only real failures are errors here. An unrecognised destination format is
//! not a failure: the exporter skips it and reports it as such.

use std::path::PathBuf;
use thiserror::Error;

/// Boxed error returned by caller-supplied callbacks.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for an export batch.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Export callback failed: {0}")]
    Callback(#[source] BoxError),

    #[error("Failed to serialize custom media as JSON: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Destination task did not complete: {0}")]
    TaskFailed(#[from] tokio::task::JoinError),

    #[error("Missing configuration: {0}")]
    MissingConfiguration(String),

    #[error("Failed to read custom media from {}: {source}", path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse custom media from {}: {source}", path.display())]
    InputParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl ExportError {
    /// Wraps any callback failure.
    pub fn callback(err: impl Into<BoxError>) -> Self {
        ExportError::Callback(err.into())
    }

    /// Whether the error came from the destination itself rather than from
    /// loading input.
    pub fn is_destination_failure(&self) -> bool {
        matches!(
            self,
            Self::Write { .. } | Self::Callback(_) | Self::Serialization(_) | Self::TaskFailed(_)
        )
    }
}

// Callbacks written with anyhow can use `?` all the way out.
impl From<anyhow::Error> for ExportError {
    fn from(err: anyhow::Error) -> Self {
        ExportError::Callback(err.into())
    }
}

/// Result type alias for convenience
pub type Result<T, E = ExportError> = std::result::Result<T, E>;
