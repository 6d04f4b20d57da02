//! Chunked delimited file reading.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use addr_normalization::RecordBatch;
use csv::{Reader, ReaderBuilder, StringRecord};
use encoding_rs::{Encoding, UTF_8};

use crate::error::{IngestError, Result};
use crate::options::CsvOptions;

fn open_file(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })
}

/// Reject files whose byte order mark announces an encoding other than UTF-8.
///
/// A UTF-8 BOM is accepted and stripped from the first column name.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = open_file(path)?;
    let mut buffer = [0u8; 3];
    let bytes_read = file.read(&mut buffer).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    if let Some((encoding, _)) = Encoding::for_bom(&buffer[..bytes_read])
        && encoding != UTF_8
    {
        return Err(IngestError::UnsupportedEncoding {
            path: path.to_path_buf(),
            encoding: encoding.name(),
        });
    }
    Ok(())
}

/// Reads a delimited file as consecutive [`RecordBatch`]es of text values.
///
/// Every field is read as a string with no type inference, and empty fields
/// stay empty strings. Quoting follows the same rules as
/// [`CsvChunkWriter`](crate::CsvChunkWriter), so written output reads back
/// to the same values.
pub struct CsvChunkReader {
    path: PathBuf,
    reader: Reader<File>,
    columns: Vec<String>,
    chunk_size: usize,
    rows_read: usize,
    finished: bool,
}

impl CsvChunkReader {
    /// Open `path` and read its header row.
    pub fn open(path: impl AsRef<Path>, options: &CsvOptions) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        options.validate()?;
        validate_encoding(&path)?;

        let file = open_file(&path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .delimiter(options.delimiter)
            .from_reader(file);
        let headers = reader
            .headers()
            .map_err(|e| IngestError::csv(&path, &e))?;
        let columns = parse_header(&path, headers)?;

        tracing::debug!(
            path = %path.display(),
            columns = columns.len(),
            chunk_size = options.chunk_size,
            "opened input"
        );

        Ok(Self {
            path,
            reader,
            columns,
            chunk_size: options.chunk_size,
            rows_read: 0,
            finished: false,
        })
    }

    /// Column names from the header row.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Data records read so far.
    pub fn rows_read(&self) -> usize {
        self.rows_read
    }

    /// Read up to `chunk_size` records; `None` once the input is exhausted.
    pub fn next_batch(&mut self) -> Result<Option<RecordBatch>> {
        if self.finished {
            return Ok(None);
        }
        let mut batch = RecordBatch::new(self.columns.clone(), self.rows_read);
        let mut record = StringRecord::new();
        while batch.len() < self.chunk_size {
            let more = self
                .reader
                .read_record(&mut record)
                .map_err(|e| IngestError::csv(&self.path, &e))?;
            if !more {
                self.finished = true;
                break;
            }
            batch.push_row(record.iter().map(str::to_string).collect())?;
        }
        self.rows_read += batch.len();
        if batch.is_empty() {
            return Ok(None);
        }
        Ok(Some(batch))
    }
}

impl Iterator for CsvChunkReader {
    type Item = Result<RecordBatch>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_batch().transpose()
    }
}

fn parse_header(path: &Path, headers: &StringRecord) -> Result<Vec<String>> {
    if headers.is_empty() {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }
    let mut seen = BTreeSet::new();
    let mut columns = Vec::with_capacity(headers.len());
    for (index, name) in headers.iter().enumerate() {
        let name = if index == 0 {
            name.trim_start_matches('\u{feff}')
        } else {
            name
        };
        if name.trim().is_empty() {
            return Err(IngestError::EmptyColumnName {
                path: path.to_path_buf(),
            });
        }
        if !seen.insert(name) {
            return Err(IngestError::DuplicateColumn {
                column: name.to_string(),
                path: path.to_path_buf(),
            });
        }
        columns.push(name.to_string());
    }
    Ok(columns)
}
