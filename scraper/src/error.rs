//! Error types for snapshot scraping.
//!
//! Parsing itself never fails: lines that do not match simply contribute
//! nothing. Errors come from reading input, loading configuration and
//! serializing reports.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while scraping a snapshot.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// The snapshot file could not be read.
    #[error("failed to read snapshot '{}': {source}", path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Other file I/O failure (config files, report output).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing or serialization failure.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Configuration values that cannot produce a report.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Convenience alias for results with [`ScrapeError`].
pub type Result<T> = std::result::Result<T, ScrapeError>;
