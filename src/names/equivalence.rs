//! Name equivalence index
//!
//! A bidirectional, transitively closed mapping of historical name variants.
//! Every stored name maps to the full set of names it is equivalent to, so
//! equivalence is one set lookup no matter how long the chain of insertions
//! that connected two names was.

use std::collections::BTreeMap;

use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;

use super::defaults::DEFAULT_EQUIVALENCES;
use super::normalize::normalize;
use super::similarity::name_similarity;

/// Similarity reported for names that are already equivalent
pub const EQUIVALENT_SCORE: f64 = 0.95;

/// A candidate equivalence offered for human review
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NameSuggestion {
    /// The known name
    pub name: String,
    /// Similarity to the queried name in [0, 1]
    pub score: f64,
}

/// Mapping from normalized name to its normalized equivalents
#[derive(Debug, Clone, Default)]
pub struct NameEquivalenceIndex {
    equivalents: FxHashMap<String, FxHashSet<String>>,
}

impl NameEquivalenceIndex {
    /// Create an empty index
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an index seeded with the built-in variant pairs
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut index = Self::new();
        for (a, b) in DEFAULT_EQUIVALENCES {
            index.add(a, b);
        }
        index
    }

    /// Build an index from a persisted mapping, closing it transitively
    ///
    /// A store edited by hand may not be closed; this restores the invariant.
    #[must_use]
    pub fn from_mapping(mapping: BTreeMap<String, Vec<String>>) -> Self {
        let mut index = Self::new();
        for (name, equivalents) in mapping {
            let name = normalize(&name);
            if name.is_empty() {
                continue;
            }
            let entry = index.equivalents.entry(name.clone()).or_default();
            for other in equivalents {
                let other = normalize(&other);
                if !other.is_empty() && other != name {
                    entry.insert(other);
                }
            }
        }

        // Make the relation symmetric before closing it
        let pairs: Vec<(String, String)> = index
            .equivalents
            .iter()
            .flat_map(|(name, set)| set.iter().map(move |other| (other.clone(), name.clone())))
            .collect();
        for (from, to) in pairs {
            index.equivalents.entry(from).or_default().insert(to);
        }

        let all: Vec<String> = index.equivalents.keys().cloned().collect();
        index.propagate(all);
        index
    }

    /// Sorted mapping suitable for persistence
    #[must_use]
    pub fn to_mapping(&self) -> BTreeMap<String, Vec<String>> {
        self.equivalents
            .iter()
            .map(|(name, set)| {
                let mut equivalents: Vec<String> = set.iter().cloned().collect();
                equivalents.sort();
                (name.clone(), equivalents)
            })
            .collect()
    }

    /// Record that two names are equivalent
    ///
    /// Returns `true` if the index changed.
    pub fn add(&mut self, a: &str, b: &str) -> bool {
        let a = normalize(a);
        let b = normalize(b);
        if a.is_empty() || b.is_empty() || a == b {
            return false;
        }

        let inserted_ab = self.equivalents.entry(a.clone()).or_default().insert(b.clone());
        let inserted_ba = self.equivalents.entry(b.clone()).or_default().insert(a.clone());
        if !(inserted_ab || inserted_ba) {
            return false;
        }

        self.propagate(vec![a, b]);
        true
    }

    /// Spread equivalences from the queued names until nothing changes
    fn propagate(&mut self, mut queue: Vec<String>) {
        while let Some(name) = queue.pop() {
            let Some(group) = self.equivalents.get(&name).cloned() else {
                continue;
            };

            for member in &group {
                let entry = self.equivalents.entry(member.clone()).or_default();
                let mut changed = false;
                for other in group.iter().chain(std::iter::once(&name)) {
                    if other != member {
                        changed |= entry.insert(other.clone());
                    }
                }
                if changed {
                    queue.push(member.clone());
                }
            }
        }
    }

    /// Whether two names are equal after normalization or recorded as equivalent
    #[must_use]
    pub fn are_equivalent(&self, a: &str, b: &str) -> bool {
        let a = normalize(a);
        let b = normalize(b);
        if a == b {
            return true;
        }
        self.equivalents
            .get(&a)
            .is_some_and(|set| set.contains(&b))
    }

    /// Known equivalents of a name, sorted
    #[must_use]
    pub fn equivalents_of(&self, name: &str) -> Vec<String> {
        let mut names: Vec<String> = self
            .equivalents
            .get(&normalize(name))
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default();
        names.sort();
        names
    }

    /// Similarity score used when suggesting new equivalences
    ///
    /// 1.0 for equal names, 0.95 for recorded equivalents, otherwise an edit
    /// distance score that never reaches the equivalence score.
    #[must_use]
    pub fn similarity(&self, a: &str, b: &str) -> f64 {
        let na = normalize(a);
        let nb = normalize(b);
        if na == nb {
            return 1.0;
        }
        if self.are_equivalent(&na, &nb) {
            return EQUIVALENT_SCORE;
        }
        name_similarity(&na, &nb).min(EQUIVALENT_SCORE - 0.01)
    }

    /// Rank known names that could be equivalent to `name`
    ///
    /// Names already equivalent (or equal) are left out.
    #[must_use]
    pub fn suggest_equivalents(&self, name: &str, min_score: f64, limit: usize) -> Vec<NameSuggestion> {
        let target = normalize(name);
        let mut suggestions: Vec<NameSuggestion> = self
            .equivalents
            .par_iter()
            .map(|(candidate, _)| candidate)
            .filter(|candidate| **candidate != target && !self.are_equivalent(&target, candidate))
            .map(|candidate| NameSuggestion {
                name: candidate.clone(),
                score: self.similarity(&target, candidate),
            })
            .filter(|suggestion| suggestion.score >= min_score)
            .collect();

        suggestions.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then_with(|| a.name.cmp(&b.name))
        });
        suggestions.truncate(limit);
        suggestions
    }

    /// Number of names in the index
    #[must_use]
    pub fn len(&self) -> usize {
        self.equivalents.len()
    }

    /// Whether the index holds no names
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.equivalents.is_empty()
    }
}
