//! US street address normalization.
//!
//! Collapses inconsistent manual entries of house numbers and street names
//! ("123 N. Main St", "123 NORTH MAIN STREET") into a canonical, comparable
//! form.
//!
//! # Overview
//!
//! This crate provides:
//! - **Preprocessing**: uppercase, trim and whitespace-run collapsing
//! - **House numbers**: primary value extraction with partial/rear flags
//! - **Streets**: directional and suffix extraction against fixed vocabularies
//! - **Batch execution**: derived columns appended to every record of a batch
//!
//! # Example
//!
//! ```ignore
//! use addr_normalization::{RecordBatch, StandardizeOptions, standardize_batch};
//!
//! let mut batch = RecordBatch::new(vec!["HOUSENUM".into(), "STREET".into()], 0);
//! batch.push_row(vec!["123r".into(), "n  main st".into()])?;
//!
//! let options = StandardizeOptions::new("HOUSENUM", "STREET");
//! let report = standardize_batch(&mut batch, &options)?;
//! assert_eq!(batch.value(0, "STREET_NAME"), Some("MAIN"));
//! ```
//!
//! # Design Principles
//!
//! - **Stateless functions**: every record depends only on its own two fields
//! - **Fixed vocabularies**: directional and suffix tables never change at runtime
//! - **Explicit errors**: empty fields fail with [`NormalizationError::EmptyValue`]

mod error;
mod executor;
mod housenum;
mod options;
mod preprocess;
mod record;
mod split;
mod street;

pub mod vocabulary;

// Error types
pub use error::{NormalizationError, RecordError, Result};

// Text primitives
pub use preprocess::preprocess;
pub use split::split_values;

// Field normalizers
pub use housenum::{HouseNumber, standardize_housenum};
pub use street::{Street, standardize_street};

// Batch execution
pub use executor::{BatchReport, DERIVED_COLUMNS, standardize_batch};
pub use options::{ErrorPolicy, StandardizeOptions};
pub use record::RecordBatch;
