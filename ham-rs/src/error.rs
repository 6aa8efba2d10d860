//! Error types for ham-rs

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for ham-rs operations
pub type Result<T> = std::result::Result<T, HamError>;

/// Errors raised while loading configuration or ingesting a corpus.
///
/// Model fitting and evaluation never fail; degenerate ratios surface as `NaN`.
#[derive(Error, Debug)]
pub enum HamError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("reading {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("invalid class on shuffled row {row}: {value}")]
    InvalidClass { row: usize, value: String },

    #[error("empty text on shuffled row {row}")]
    EmptyText { row: usize },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<config::ConfigError> for HamError {
    fn from(err: config::ConfigError) -> Self {
        HamError::Config(err.to_string())
    }
}
