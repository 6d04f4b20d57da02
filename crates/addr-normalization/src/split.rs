//! Multi-value field splitting shared by house numbers and streets.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{NormalizationError, Result};

/// `&` and `,` split with or without surrounding whitespace; `AND` and `OR`
/// only as whole words between whitespace.
static VALUE_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s*&\s*|\s*,\s*|\s+AND\s+|\s+OR\s+").expect("Invalid separator regex")
});

/// Split a preprocessed field into its candidate values, dropping empties.
///
/// Returns [`NormalizationError::EmptyValue`] when nothing is left, so callers
/// can always take the first element as the primary value.
pub fn split_values(value: &str) -> Result<Vec<&str>> {
    let values: Vec<&str> = VALUE_SEPARATOR
        .split(value)
        .filter(|candidate| !candidate.is_empty())
        .collect();
    if values.is_empty() {
        return Err(NormalizationError::EmptyValue {
            value: value.to_string(),
        });
    }
    Ok(values)
}

/// Split into the primary value and the remaining values joined with `", "`.
pub(crate) fn primary_and_additional(value: &str) -> Result<(&str, String)> {
    let values = split_values(value)?;
    Ok((values[0], values[1..].join(", ")))
}
