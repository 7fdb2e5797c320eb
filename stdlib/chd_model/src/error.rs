//! Error types for artifact loading and inference

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or applying a model artifact
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("cannot read artifact '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed artifact '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("feature names do not match: expected [{}], found [{}]", expected.join(", "), found.join(", "))]
    FeatureMismatch {
        expected: Vec<String>,
        found: Vec<String>,
    },
    #[error("dimension mismatch: expected {expected} values, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}
