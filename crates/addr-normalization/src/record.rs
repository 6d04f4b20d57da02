//! Tabular record batches.

use crate::error::{NormalizationError, Result};

/// A chunk of input records sharing one header.
///
/// Values are plain strings; a missing value is the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordBatch {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
    /// Index of the first row of this batch within the whole input.
    first_row: usize,
}

impl RecordBatch {
    pub fn new(columns: Vec<String>, first_row: usize) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            first_row,
        }
    }

    /// Append a row; it must have one value per column.
    pub fn push_row(&mut self, row: Vec<String>) -> Result<()> {
        if row.len() != self.columns.len() {
            return Err(NormalizationError::RowWidth {
                row: self.first_row + self.rows.len(),
                found: row.len(),
                expected: self.columns.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn first_row(&self) -> usize {
        self.first_row
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    /// Value at `row` (batch-relative) in column `name`.
    pub fn value(&self, row: usize, name: &str) -> Option<&str> {
        let index = self.column_index(name)?;
        self.rows.get(row).map(|values| values[index].as_str())
    }

    /// Index of `name`, appending an empty column when it does not exist yet.
    pub(crate) fn ensure_column(&mut self, name: &str) -> usize {
        if let Some(index) = self.column_index(name) {
            return index;
        }
        self.columns.push(name.to_string());
        for row in &mut self.rows {
            row.push(String::new());
        }
        self.columns.len() - 1
    }

    pub(crate) fn rows_mut(&mut self) -> &mut Vec<Vec<String>> {
        &mut self.rows
    }
}
