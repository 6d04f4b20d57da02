//! Options for delimited file reading and writing.

use serde::{Deserialize, Serialize};

use crate::error::{IngestError, Result};

/// Records read per batch when nothing else is configured.
pub const DEFAULT_CHUNK_SIZE: usize = 100_000;

/// Options shared by [`CsvChunkReader`](crate::CsvChunkReader) and
/// [`CsvChunkWriter`](crate::CsvChunkWriter).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsvOptions {
    /// Field separator byte.
    pub delimiter: u8,
    /// Records per batch.
    pub chunk_size: usize,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl CsvOptions {
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_chunk_size(mut self, size: usize) -> Self {
        self.chunk_size = size;
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            return Err(IngestError::InvalidChunkSize);
        }
        Ok(())
    }
}

/// Parse a separator given on the command line.
///
/// Accepts a single ASCII character, or the escape `\t` for tab.
pub fn parse_delimiter(value: &str) -> Result<u8> {
    if value == "\\t" {
        return Ok(b'\t');
    }
    match value.as_bytes() {
        [byte] if byte.is_ascii() => Ok(*byte),
        _ => Err(IngestError::InvalidDelimiter {
            value: value.to_string(),
        }),
    }
}
