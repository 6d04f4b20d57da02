//! Configuration options for batch standardization.

use serde::{Deserialize, Serialize};

/// What to do with a record whose house number or street cannot be
/// standardized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Abort the batch on the first failing record.
    #[default]
    Fail,
    /// Drop the failing record from the output and report it.
    Skip,
    /// Keep the failing record with empty derived values and report it.
    Keep,
}

/// Options controlling how a batch is standardized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandardizeOptions {
    /// Column holding the house number text.
    pub housenum_column: String,
    /// Column holding the street text.
    pub street_column: String,
    /// Handling of records that fail to standardize.
    pub error_policy: ErrorPolicy,
}

impl StandardizeOptions {
    pub fn new(housenum_column: impl Into<String>, street_column: impl Into<String>) -> Self {
        Self {
            housenum_column: housenum_column.into(),
            street_column: street_column.into(),
            error_policy: ErrorPolicy::default(),
        }
    }

    pub fn with_error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.error_policy = policy;
        self
    }
}
