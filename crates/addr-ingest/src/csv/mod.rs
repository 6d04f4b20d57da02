//! Delimited file reading and writing.

mod reader;
mod writer;

pub use reader::{CsvChunkReader, validate_encoding};
pub use writer::CsvChunkWriter;
