//! Error types for source-table ingestion.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading a source table.
///
/// These cover the malformed-source conditions the engine itself never
/// sees; row-level dirt inside a well-formed table is not an error.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Failed to open or read the source file.
    #[error("failed to read source file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV parsing failed.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// The source has no rows at all, not even a header row.
    #[error("source table is empty: {path}")]
    EmptyTable { path: PathBuf },

    /// The header row contains no usable column names.
    #[error("source table has a blank header row: {path}")]
    NoColumns { path: PathBuf },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
