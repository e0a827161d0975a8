//! Error types for generation, storage and reporting

use std::path::PathBuf;

/// Errors surfaced by the retailsim library
#[derive(Debug, thiserror::Error)]
pub enum RetailError {
    /// Filesystem error while reading or writing a table
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV encoding or decoding error
    #[error("CSV error in {file}: {source}")]
    Csv {
        file: String,
        #[source]
        source: csv::Error,
    },

    /// Manifest or report JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Settings could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Settings loaded but describe an impossible run
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    /// A table row failed validation after parsing
    #[error("Malformed row in {file} at line {line}: {reason}")]
    MalformedRow {
        file: String,
        line: usize,
        reason: String,
    },

    /// A table listed in the manifest is not on disk
    #[error("Missing table file: {}", .0.display())]
    MissingTable(PathBuf),

    /// The manifest does not list one of the six tables
    #[error("Manifest has no entry for '{0}'")]
    MissingManifestEntry(String),

    /// A written table no longer matches its recorded checksum
    #[error(
        "Table '{file}' has been modified after generation.\n\
         Recorded checksum: {recorded}\n\
         Current checksum: {current}"
    )]
    ChecksumMismatch {
        file: String,
        recorded: String,
        current: String,
    },

    /// A report filter named a store or department that does not exist
    #[error("Unknown {kind} '{value}'")]
    UnknownFilter { kind: &'static str, value: String },
}

impl RetailError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        RetailError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn csv(file: impl Into<String>, source: csv::Error) -> Self {
        RetailError::Csv {
            file: file.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, RetailError>;
