//! Batch standardization.
//!
//! Applies preprocessing and both field normalizers to every record of a
//! [`RecordBatch`], writing the derived columns back into the batch.

use tracing::debug;

use crate::error::{NormalizationError, RecordError, Result};
use crate::housenum::{HouseNumber, standardize_housenum};
use crate::options::{ErrorPolicy, StandardizeOptions};
use crate::preprocess::preprocess;
use crate::record::RecordBatch;
use crate::street::{Street, standardize_street};

/// Derived columns in output order.
pub const DERIVED_COLUMNS: [&str; 8] = [
    "HOUSENUM_STD",
    "PARTIAL",
    "REAR",
    "ADDITIONAL_HOUSENUMS",
    "STREET_NAME",
    "STREET_SUFFIX",
    "STREET_DIRECTIONAL",
    "ADDITIONAL_STREETS",
];

/// Outcome of standardizing one batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Records in the batch before standardization.
    pub input_rows: usize,
    /// Records left in the batch afterwards.
    pub output_rows: usize,
    /// Records removed under [`ErrorPolicy::Skip`].
    pub skipped: Vec<RecordError>,
    /// Records kept with empty derived values under [`ErrorPolicy::Keep`].
    pub kept: Vec<RecordError>,
}

impl BatchReport {
    pub fn error_count(&self) -> usize {
        self.skipped.len() + self.kept.len()
    }
}

/// Standardize every record of `batch` in place.
///
/// The configured house number and street columns are replaced by their
/// preprocessed values and the [`DERIVED_COLUMNS`] are filled in (appended
/// when absent, overwritten otherwise). Row order is preserved.
///
/// # Errors
///
/// Returns [`NormalizationError::MissingColumn`] when a configured column is
/// absent, and [`NormalizationError::Record`] for the first failing record
/// under [`ErrorPolicy::Fail`]. In that case rows before the failing one
/// have already been rewritten.
pub fn standardize_batch(
    batch: &mut RecordBatch,
    options: &StandardizeOptions,
) -> Result<BatchReport> {
    let housenum_index = require_column(batch, &options.housenum_column)?;
    let street_index = require_column(batch, &options.street_column)?;
    let derived: Vec<usize> = DERIVED_COLUMNS
        .iter()
        .map(|name| batch.ensure_column(name))
        .collect();

    let first_row = batch.first_row();
    let mut report = BatchReport {
        input_rows: batch.len(),
        ..BatchReport::default()
    };
    let mut keep = Vec::with_capacity(batch.len());

    for (offset, row) in batch.rows_mut().iter_mut().enumerate() {
        row[housenum_index] = preprocess(&row[housenum_index]);
        row[street_index] = preprocess(&row[street_index]);

        match standardize_record(
            &row[housenum_index],
            &row[street_index],
            first_row + offset,
            options,
        ) {
            Ok((housenum, street)) => {
                let values = housenum.fields().into_iter().chain(street.fields());
                for (&index, value) in derived.iter().zip(values) {
                    row[index] = value.to_string();
                }
                keep.push(true);
            }
            Err(error) => match options.error_policy {
                ErrorPolicy::Fail => return Err(error.into()),
                ErrorPolicy::Skip => {
                    debug!(row = error.row, column = %error.column, "skipping record");
                    report.skipped.push(error);
                    keep.push(false);
                }
                ErrorPolicy::Keep => {
                    debug!(
                        row = error.row,
                        column = %error.column,
                        "keeping record without derived values"
                    );
                    for &index in &derived {
                        row[index].clear();
                    }
                    report.kept.push(error);
                    keep.push(true);
                }
            },
        }
    }

    if !report.skipped.is_empty() {
        let mut keep = keep.into_iter();
        batch.rows_mut().retain(|_| keep.next().unwrap_or(true));
    }
    report.output_rows = batch.len();
    Ok(report)
}

fn require_column(batch: &RecordBatch, column: &str) -> Result<usize> {
    batch
        .column_index(column)
        .ok_or_else(|| NormalizationError::MissingColumn {
            column: column.to_string(),
        })
}

/// Standardize both fields of one record, attaching record context to errors.
fn standardize_record(
    housenum: &str,
    street: &str,
    row: usize,
    options: &StandardizeOptions,
) -> std::result::Result<(HouseNumber, Street), RecordError> {
    let housenum = standardize_housenum(housenum)
        .map_err(|source| RecordError::new(row, &options.housenum_column, housenum, source))?;
    let street = standardize_street(street)
        .map_err(|source| RecordError::new(row, &options.street_column, street, source))?;
    Ok((housenum, street))
}
