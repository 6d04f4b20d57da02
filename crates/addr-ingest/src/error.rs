//! Error types for address data ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or writing delimited files.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input file not found.
    #[error("input file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Output file is already present; it is never overwritten or appended to.
    #[error("output file already exists: {path}")]
    OutputExists { path: PathBuf },

    /// Failed to write file.
    #[error("failed to write file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File starts with a byte order mark for an encoding other than UTF-8.
    #[error("unsupported encoding {encoding} in {path} (expected UTF-8)")]
    UnsupportedEncoding {
        path: PathBuf,
        encoding: &'static str,
    },

    // === CSV Parsing Errors ===
    /// Failed to parse a record.
    #[error("failed to parse {path} at line {}: {message}", .line.map_or_else(|| "?".to_string(), |line| line.to_string()))]
    CsvParse {
        path: PathBuf,
        line: Option<u64>,
        message: String,
    },

    /// File has no header row.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },

    /// Header row contains an empty column name.
    #[error("empty column name in header of {path}")]
    EmptyColumnName { path: PathBuf },

    /// Header row names the same column twice.
    #[error("duplicate column '{column}' in header of {path}")]
    DuplicateColumn { column: String, path: PathBuf },

    /// Batch written with a header different from the first batch.
    #[error("batch columns do not match the header already written to {path}")]
    ColumnMismatch { path: PathBuf },

    // === Option Errors ===
    /// Separator is not a single ASCII character.
    #[error("invalid separator '{value}': expected a single ASCII character")]
    InvalidDelimiter { value: String },

    /// Chunk size of zero.
    #[error("chunk size must be at least 1")]
    InvalidChunkSize,

    // === Record Errors ===
    /// Record could not be added to a batch.
    #[error(transparent)]
    Record(#[from] addr_normalization::NormalizationError),
}

impl IngestError {
    pub(crate) fn csv(path: &std::path::Path, err: &csv::Error) -> Self {
        Self::CsvParse {
            path: path.to_path_buf(),
            line: err.position().map(csv::Position::line),
            message: csv_message(err),
        }
    }
}

/// Short description of a CSV error without the position prefix.
fn csv_message(err: &csv::Error) -> String {
    match err.kind() {
        csv::ErrorKind::UnequalLengths {
            expected_len, len, ..
        } => format!("found {len} fields, expected {expected_len}"),
        csv::ErrorKind::Utf8 { .. } => "invalid UTF-8".to_string(),
        _ => err.to_string(),
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
