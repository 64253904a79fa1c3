//! Query matching for action names
//!
//! Matching is a case- and diacritic-insensitive substring test: both strings
//! are canonically decomposed, combining marks are dropped and the rest is
//! lowercased before comparing. "Cafe" therefore matches "café" and "ÉCRIRE"
//! matches "ecr".

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Fold a string for comparison: strip diacritics and lowercase
pub fn fold(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Check whether `haystack` contains `needle`, ignoring case and diacritics
///
/// An empty needle is contained in every haystack.
pub fn standard_contains(haystack: &str, needle: &str) -> bool {
    fold(haystack).contains(&fold(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_ignores_case() {
        assert!(standard_contains("Add Item", "add"));
        assert!(standard_contains("Add Item", "ITEM"));
        assert!(standard_contains("add item", "D I"));
        assert!(!standard_contains("Add Item", "delete"));
    }

    #[test]
    fn test_contains_ignores_diacritics() {
        assert!(standard_contains("Café au lait", "cafe"));
        assert!(standard_contains("Cafe au lait", "CAFÉ"));
        assert!(standard_contains("Ångström", "angstrom"));
        assert!(standard_contains("naïve", "NAIVE"));
    }

    #[test]
    fn test_contains_empty_needle() {
        assert!(standard_contains("anything", ""));
        assert!(standard_contains("", ""));
        assert!(!standard_contains("", "a"));
    }

    #[test]
    fn test_fold_handles_precomposed_and_decomposed_forms() {
        // U+00E9 vs 'e' + U+0301
        assert_eq!(fold("\u{e9}"), fold("e\u{301}"));
        assert_eq!(fold("\u{e9}"), "e");
    }
}
