//! Address data ingestion utilities.
//!
//! This crate reads delimited address files into
//! [`RecordBatch`](addr_normalization::RecordBatch)es and writes the
//! standardized batches back out.
//!
//! # Features
//!
//! - **Chunked reading**: fixed-size batches, every field kept as text
//! - **Sequential writing**: one header, batches appended in input order
//! - **Safety checks**: UTF-8 only, existing output files are never touched
//!
//! # Example
//!
//! ```ignore
//! use addr_ingest::{CsvChunkReader, CsvChunkWriter, CsvOptions};
//!
//! let options = CsvOptions::default().with_delimiter(b'|');
//! let reader = CsvChunkReader::open("addresses.txt", &options)?;
//! let mut writer = CsvChunkWriter::create("standardized.txt", &options)?;
//! for batch in reader {
//!     writer.write_batch(&batch?)?;
//! }
//! writer.finish()?;
//! ```

mod csv;
mod error;
mod options;

// === Error Types ===
pub use error::{IngestError, Result};

// === Options ===
pub use options::{CsvOptions, DEFAULT_CHUNK_SIZE, parse_delimiter};

// === Reading and Writing ===
pub use self::csv::{CsvChunkReader, CsvChunkWriter, validate_encoding};
