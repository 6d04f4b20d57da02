//! Error types for address normalization.

use thiserror::Error;

/// Errors that can occur while normalizing address fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizationError {
    /// Field yielded no candidate values after splitting on `&`, `,`, `AND`, `OR`.
    #[error("no value left after splitting '{value}'")]
    EmptyValue { value: String },

    /// Configured source column is not present in the batch.
    #[error("column '{column}' not found in input")]
    MissingColumn { column: String },

    /// Row has a different number of values than the batch has columns.
    #[error("row {row} has {found} values, expected {expected}")]
    RowWidth {
        row: usize,
        found: usize,
        expected: usize,
    },

    /// A single record failed and the batch was configured to fail.
    #[error(transparent)]
    Record(#[from] RecordError),
}

/// A normalization failure tied to one record of the input.
///
/// Carries enough context for the caller to decide whether to skip the
/// record or abort: absolute record index, source column and the value that
/// failed (already preprocessed).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("record {row}, column '{column}': {source}")]
pub struct RecordError {
    /// Zero-based index of the record within the whole input.
    pub row: usize,
    /// Source column the value came from.
    pub column: String,
    /// The offending value.
    pub value: String,
    #[source]
    pub source: Box<NormalizationError>,
}

impl RecordError {
    pub fn new(
        row: usize,
        column: impl Into<String>,
        value: impl Into<String>,
        source: NormalizationError,
    ) -> Self {
        Self {
            row,
            column: column.into(),
            value: value.into(),
            source: Box::new(source),
        }
    }
}

/// Result type for normalization operations.
pub type Result<T> = std::result::Result<T, NormalizationError>;
