//! Title collation.
//!
//! Approximates a locale-aware comparison in three levels:
//! base letters ignoring accents and case, then accents, then case with
//! lowercase sorting before uppercase. Identical strings compare equal.

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Compare two strings for display ordering
pub fn compare(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(&primary_key(b))
        .then_with(|| secondary_key(a).cmp(&secondary_key(b)))
        .then_with(|| case_key(a).cmp(case_key(b)))
        .then_with(|| a.cmp(b))
}

/// Lowercased base letters with accents stripped
fn primary_key(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Lowercased decomposition, accents kept
fn secondary_key(s: &str) -> String {
    s.nfd().flat_map(char::to_lowercase).collect()
}

fn case_key(s: &str) -> impl Iterator<Item = bool> + '_ {
    s.chars().map(char::is_uppercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive_primary() {
        assert_eq!(compare("apple", "Banana"), Ordering::Less);
        assert_eq!(compare("Zebra", "apple"), Ordering::Greater);
    }

    #[test]
    fn test_accents_ignored_at_primary_level() {
        assert_eq!(compare("émigré", "emission"), Ordering::Less);
        assert_eq!(compare("Über", "uber cool"), Ordering::Less);
    }

    #[test]
    fn test_accent_breaks_ties() {
        assert_eq!(compare("resume", "résumé"), Ordering::Less);
    }

    #[test]
    fn test_lowercase_before_uppercase() {
        assert_eq!(compare("iot", "IoT"), Ordering::Less);
        assert_eq!(compare("IoT", "iot"), Ordering::Greater);
    }

    #[test]
    fn test_identical() {
        assert_eq!(compare("Trust", "Trust"), Ordering::Equal);
    }
}
