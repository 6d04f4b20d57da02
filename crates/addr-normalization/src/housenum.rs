//! House number normalization.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::split::primary_and_additional;

/// Flag value written for partial (uncertain) house numbers.
const PARTIAL_FLAG: &str = "P";
/// Flag value written for rear structures.
const REAR_FLAG: &str = "R";

/// Standardized house number of one record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HouseNumber {
    /// Primary house number, digits only.
    pub primary: String,
    /// The primary value contained a `?`.
    pub partial: bool,
    /// The primary value contained an `R`.
    pub rear: bool,
    /// Remaining split values joined with `", "`, verbatim.
    pub additional: String,
}

impl HouseNumber {
    /// `"P"` for partial house numbers, empty otherwise.
    pub fn partial_flag(&self) -> &'static str {
        if self.partial { PARTIAL_FLAG } else { "" }
    }

    /// `"R"` for rear house numbers, empty otherwise.
    pub fn rear_flag(&self) -> &'static str {
        if self.rear { REAR_FLAG } else { "" }
    }

    /// Output values in column order: number, partial, rear, additional.
    pub fn fields(&self) -> [&str; 4] {
        [
            self.primary.as_str(),
            self.partial_flag(),
            self.rear_flag(),
            self.additional.as_str(),
        ]
    }
}

/// Standardize a preprocessed house number field.
///
/// Only the first of several `&`/`,`/`AND`/`OR` separated values is
/// standardized. Anything from the first `.` after the leading dots is
/// dropped, so `"123.5"` becomes `"123"`.
pub fn standardize_housenum(value: &str) -> Result<HouseNumber> {
    let (primary, additional) = primary_and_additional(value)?;

    let cleaned: String = primary
        .chars()
        .filter(|ch| ch.is_ascii_digit() || matches!(ch, '?' | 'R' | '.'))
        .collect();
    let partial = cleaned.contains('?');
    let rear = cleaned.contains('R');
    let cleaned = cleaned.replace('R', "");

    let number = cleaned.trim_start_matches('.');
    let number = number.split_once('.').map_or(number, |(head, _)| head);

    Ok(HouseNumber {
        primary: number.replace('?', ""),
        partial,
        rear,
        additional,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NormalizationError;

    fn fields(value: &str) -> [String; 4] {
        standardize_housenum(value)
            .unwrap()
            .fields()
            .map(str::to_string)
    }

    #[test]
    fn test_additional_values() {
        assert_eq!(fields("123 & 456"), ["123", "", "", "456"]);
        assert_eq!(fields("1,3 AND 5 OR 7"), ["1", "", "", "3, 5, 7"]);
    }

    #[test]
    fn test_rear() {
        assert_eq!(fields("123R"), ["123", "", "R", ""]);
        assert_eq!(fields("R 12 REAR"), ["12", "", "R", ""]);
    }

    #[test]
    fn test_partial() {
        assert_eq!(fields("12?.5"), ["12", "P", "", ""]);
        assert_eq!(fields("1?3"), ["13", "P", "", ""]);
    }

    #[test]
    fn test_fraction_is_dropped() {
        assert_eq!(fields("123.5"), ["123", "", "", ""]);
        assert_eq!(fields("..77.1.2"), ["77", "", "", ""]);
    }

    #[test]
    fn test_noise_is_removed() {
        assert_eq!(fields("#12-B"), ["12", "", "", ""]);
        assert_eq!(fields("NONE"), ["", "", "", ""]);
    }

    #[test]
    fn test_additional_is_not_cleaned() {
        assert_eq!(fields("12 & 14R?"), ["12", "", "", "14R?"]);
    }

    #[test]
    fn test_empty_value() {
        assert!(matches!(
            standardize_housenum(""),
            Err(NormalizationError::EmptyValue { .. })
        ));
        assert!(matches!(
            standardize_housenum(" , "),
            Err(NormalizationError::EmptyValue { .. })
        ));
    }
}
