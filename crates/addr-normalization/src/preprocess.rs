//! Text preprocessing applied to every raw field before normalization.

use std::sync::LazyLock;

use regex::Regex;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{2,}").expect("Invalid whitespace regex"));

/// Uppercase, trim and collapse whitespace runs.
///
/// Every run of two or more whitespace characters becomes a single space.
/// A lone whitespace character is kept as-is, so `"A\tB"` stays `"A\tB"`.
pub fn preprocess(value: &str) -> String {
    let upper = value.to_uppercase();
    WHITESPACE_RUN.replace_all(upper.trim(), " ").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uppercase_and_trim() {
        assert_eq!(preprocess("  123 n. main st "), "123 N. MAIN ST");
    }

    #[test]
    fn test_collapses_long_runs() {
        assert_eq!(preprocess("MAIN     ST"), "MAIN ST");
        assert_eq!(preprocess("A \t\n B"), "A B");
    }

    #[test]
    fn test_single_tab_is_kept() {
        assert_eq!(preprocess("a\tb"), "A\tB");
    }

    #[test]
    fn test_empty() {
        assert_eq!(preprocess(""), "");
        assert_eq!(preprocess("   "), "");
    }
}
