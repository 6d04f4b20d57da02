//! Sequential delimited file writing.

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

use addr_normalization::RecordBatch;
use csv::{QuoteStyle, Writer, WriterBuilder};

use crate::error::{IngestError, Result};
use crate::options::CsvOptions;

/// Writes [`RecordBatch`]es one after another to a single new file.
///
/// The header is written once, before the first batch. Values are only
/// quoted when they contain the separator, a quote or a line break.
pub struct CsvChunkWriter {
    path: PathBuf,
    writer: Writer<File>,
    columns: Option<Vec<String>>,
    rows_written: usize,
}

impl CsvChunkWriter {
    /// Create `path`, failing with [`IngestError::OutputExists`] if it is
    /// already there.
    pub fn create(path: impl AsRef<Path>, options: &CsvOptions) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::AlreadyExists {
                    IngestError::OutputExists { path: path.clone() }
                } else {
                    IngestError::FileWrite {
                        path: path.clone(),
                        source: e,
                    }
                }
            })?;
        let writer = WriterBuilder::new()
            .delimiter(options.delimiter)
            .quote_style(QuoteStyle::Necessary)
            .from_writer(file);
        Ok(Self {
            path,
            writer,
            columns: None,
            rows_written: 0,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Data records written so far.
    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    /// Write the header unless one has been written already.
    pub fn write_header(&mut self, columns: &[String]) -> Result<()> {
        if let Some(existing) = &self.columns {
            if existing.as_slice() != columns {
                return Err(IngestError::ColumnMismatch {
                    path: self.path.clone(),
                });
            }
            return Ok(());
        }
        self.writer
            .write_record(columns)
            .map_err(|e| IngestError::csv(&self.path, &e))?;
        self.columns = Some(columns.to_vec());
        Ok(())
    }

    /// Append all rows of `batch`, writing the header first if needed.
    pub fn write_batch(&mut self, batch: &RecordBatch) -> Result<()> {
        self.write_header(batch.columns())?;
        for row in batch.rows() {
            self.writer
                .write_record(row)
                .map_err(|e| IngestError::csv(&self.path, &e))?;
        }
        self.rows_written += batch.len();
        Ok(())
    }

    /// Flush buffered output and return the number of data records written.
    pub fn finish(mut self) -> Result<usize> {
        self.writer.flush().map_err(|e| IngestError::FileWrite {
            path: self.path.clone(),
            source: e,
        })?;
        Ok(self.rows_written)
    }
}
