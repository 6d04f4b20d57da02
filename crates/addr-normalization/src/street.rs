//! Street name normalization.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::split::primary_and_additional;
use crate::vocabulary;

/// Values that mark a street as unreadable or absent rather than a name.
const SENTINELS: [&str; 2] = ["ILLEGIBLE", "NO"];

/// Standardized street of one record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Street {
    /// Remaining name tokens joined with a space.
    pub name: String,
    /// Canonical suffix (`ST`, `AVE`, ...) or empty.
    pub suffix: String,
    /// Canonical directional (`N`, `NE`, ...) or empty.
    pub directional: String,
    /// Remaining split values joined with `", "`, verbatim.
    pub additional: String,
}

impl Street {
    /// Output values in column order: name, suffix, directional, additional.
    pub fn fields(&self) -> [&str; 4] {
        [
            self.name.as_str(),
            self.suffix.as_str(),
            self.directional.as_str(),
            self.additional.as_str(),
        ]
    }
}

/// Keep only `A-Z` and `0-9`.
fn clean_token(token: &str) -> String {
    token
        .chars()
        .filter(|ch| ch.is_ascii_uppercase() || ch.is_ascii_digit())
        .collect()
}

/// Standardize a preprocessed street field.
///
/// Tokens of the primary value are classified in order: a leading `ST`
/// followed by more tokens is a name ("ST JAMES"), then directionals, then
/// suffixes, then everything else non-empty is a name. When several
/// directionals or suffixes appear, the last one wins.
pub fn standardize_street(value: &str) -> Result<Street> {
    let (primary, additional) = primary_and_additional(value)?;

    let tokens: Vec<&str> = if SENTINELS.contains(&primary) {
        Vec::new()
    } else {
        primary.split_whitespace().collect()
    };

    let mut names: Vec<String> = Vec::with_capacity(tokens.len());
    let mut suffix = "";
    let mut directional = "";

    for (index, token) in tokens.iter().enumerate() {
        let cleaned = clean_token(token);
        if index == 0 && cleaned == "ST" && tokens.len() > 1 {
            names.push(cleaned);
        } else if let Some(canonical) = vocabulary::directional(&cleaned) {
            directional = canonical;
        } else if let Some(canonical) = vocabulary::suffix(&cleaned) {
            suffix = canonical;
        } else if !cleaned.is_empty() && !SENTINELS.contains(&cleaned.as_str()) {
            names.push(cleaned);
        }
    }

    Ok(Street {
        name: names.join(" "),
        suffix: suffix.to_string(),
        directional: directional.to_string(),
        additional,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NormalizationError;

    fn fields(value: &str) -> [String; 4] {
        standardize_street(value)
            .unwrap()
            .fields()
            .map(str::to_string)
    }

    #[test]
    fn test_directional_and_suffix() {
        assert_eq!(fields("N MAIN ST"), ["MAIN", "ST", "N", ""]);
        assert_eq!(fields("NORTH MAIN STREET"), ["MAIN", "ST", "N", ""]);
        assert_eq!(fields("N. MAIN ST."), ["MAIN", "ST", "N", ""]);
    }

    #[test]
    fn test_leading_saint_is_a_name() {
        assert_eq!(fields("ST JAMES PLACE"), ["ST JAMES", "PL", "", ""]);
    }

    #[test]
    fn test_lone_st_is_a_suffix() {
        assert_eq!(fields("ST"), ["", "ST", "", ""]);
    }

    #[test]
    fn test_st_after_first_token_is_a_suffix() {
        assert_eq!(fields("E ST JAMES"), ["JAMES", "ST", "E", ""]);
    }

    #[test]
    fn test_sentinels() {
        assert_eq!(fields("ILLEGIBLE"), ["", "", "", ""]);
        assert_eq!(fields("NO"), ["", "", "", ""]);
        assert_eq!(fields("MAIN ILLEGIBLE"), ["MAIN", "", "", ""]);
        assert_eq!(fields("NO & ELM"), ["", "", "", "ELM"]);
    }

    #[test]
    fn test_additional_streets_are_verbatim() {
        assert_eq!(fields("MAIN ST & OAK AVE"), ["MAIN", "ST", "", "OAK AVE"]);
        assert_eq!(
            fields("MAIN ST, N. OAK AVENUE OR ELM"),
            ["MAIN", "ST", "", "N. OAK AVENUE, ELM"]
        );
    }

    #[test]
    fn test_last_match_wins() {
        assert_eq!(fields("N MAIN ST RD"), ["MAIN", "RD", "N", ""]);
        assert_eq!(fields("N MAIN ST S"), ["MAIN", "ST", "S", ""]);
    }

    #[test]
    fn test_punctuation_only_tokens_are_skipped() {
        assert_eq!(fields("MAIN - ST"), ["MAIN", "ST", "", ""]);
    }

    #[test]
    fn test_numbered_streets() {
        assert_eq!(fields("W 42ND ST"), ["42ND", "ST", "W", ""]);
    }

    #[test]
    fn test_empty_value() {
        assert!(matches!(
            standardize_street("&"),
            Err(NormalizationError::EmptyValue { .. })
        ));
    }
}
