//! Name normalization for equivalence lookups
//!
//! - Unicode NFD decomposition
//! - Combining-mark removal (`ä` → `a`, `ö` → `o`)
//! - Lowercase conversion
//! - Whitespace trimming and collapsing

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Normalize a name for equivalence storage and lookup.
///
/// # Examples
///
/// ```
/// use family_linker::names::normalize;
///
/// assert_eq!(normalize("  Yrjö "), "yrjo");
/// assert_eq!(normalize("BRITA"), "brita");
/// ```
#[must_use]
pub fn normalize(name: &str) -> String {
    let stripped: String = name
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect();

    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Trim and case-fold without touching diacritics.
///
/// This is the "exact name" comparison of the identity matcher.
#[must_use]
pub fn fold_case(name: &str) -> String {
    name.trim().to_lowercase()
}
