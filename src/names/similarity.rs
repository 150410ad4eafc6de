//! Edit-distance similarity for name variants
//!
//! Plain Levenshtein similarity underrates pairs such as `Henrik`/`Heikki`
//! that differ in the middle but share a regional ending or stem, so pairs
//! sharing a known pattern get a fixed boost.

/// Endings that recur across Finnish and Swedish name forms
const REGIONAL_SUFFIXES: &[&str] = &[
    "poika", "tytar", "dotter", "sson", "son", "inen", "nen", "ias", "ius", "ina", "iina", "kki",
    "kko", "ta", "sa",
];

/// Stems that recur at the start of name variants
const REGIONAL_PREFIXES: &[&str] = &["jo", "ju", "ma", "he", "ka", "el", "li", "an", "er", "pe"];

/// Boost applied when both names share a regional pattern
const PATTERN_BOOST: f64 = 0.1;

/// Similarity in [0, 1] between two already normalized names
#[must_use]
pub fn name_similarity(a: &str, b: &str) -> f64 {
    let base = strsim::normalized_levenshtein(a, b);
    if shares_regional_pattern(a, b) {
        (base + PATTERN_BOOST).min(1.0)
    } else {
        base
    }
}

/// Whether both names end with the same known suffix or start with the same known prefix
#[must_use]
pub fn shares_regional_pattern(a: &str, b: &str) -> bool {
    REGIONAL_SUFFIXES
        .iter()
        .any(|suffix| a.ends_with(suffix) && b.ends_with(suffix))
        || REGIONAL_PREFIXES
            .iter()
            .any(|prefix| a.starts_with(prefix) && b.starts_with(prefix))
}
