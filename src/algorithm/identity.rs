//! Identity matching between person records
//!
//! Records carry no shared identifier, so "is this the same person" is decided
//! by a fixed sequence of heuristics. The order matters: a matching birth date
//! is the only fact trusted enough to override differently spelled names,
//! while an equivalent name is accepted even when birth dates disagree, since
//! transcribed dates are no more reliable than transcribed names.

use crate::models::Person;
use crate::names::{NameEquivalenceIndex, fold_case};

/// Which rule established an identity match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityMatch {
    /// Both birth dates present and equal after trimming
    BirthDate,
    /// Names equal after trimming and case folding
    ExactName,
    /// Names recorded as equivalent variants
    EquivalentName,
}

/// Decides whether two person records describe the same individual
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityMatcher<'a> {
    names: Option<&'a NameEquivalenceIndex>,
}

impl<'a> IdentityMatcher<'a> {
    /// Matcher that also consults the name-equivalence index
    #[must_use]
    pub const fn new(names: &'a NameEquivalenceIndex) -> Self {
        Self { names: Some(names) }
    }

    /// Matcher using only birth dates and exact names
    #[must_use]
    pub const fn without_equivalences() -> Self {
        Self { names: None }
    }

    /// Matcher with an optional index
    #[must_use]
    pub const fn with_optional(names: Option<&'a NameEquivalenceIndex>) -> Self {
        Self { names }
    }

    /// The first rule that matches, in priority order
    #[must_use]
    pub fn match_reason(&self, a: &Person, b: &Person) -> Option<IdentityMatch> {
        if let (Some(birth_a), Some(birth_b)) = (a.birth_date(), b.birth_date()) {
            if birth_a == birth_b {
                return Some(IdentityMatch::BirthDate);
            }
        }

        if self.same_name(&a.name, &b.name) {
            return Some(IdentityMatch::ExactName);
        }

        if self
            .names
            .is_some_and(|names| names.are_equivalent(&a.name, &b.name))
        {
            return Some(IdentityMatch::EquivalentName);
        }

        None
    }

    /// Whether the two records describe the same person
    #[must_use]
    pub fn same_identity(&self, a: &Person, b: &Person) -> bool {
        self.match_reason(a, b).is_some()
    }

    /// Exact-name comparison (trimmed, case-folded, non-empty)
    #[must_use]
    pub fn same_name(&self, a: &str, b: &str) -> bool {
        let a = fold_case(a);
        !a.is_empty() && a == fold_case(b)
    }

    /// Whether a name matches a person's name, or name and patronymic
    #[must_use]
    pub fn names_person(&self, name: &str, person: &Person) -> bool {
        self.same_name(name, &person.name) || self.same_name(name, &person.full_name())
    }

    /// First person in `candidates` matching `target`
    pub fn find<'p, I>(&self, target: &Person, candidates: I) -> Option<&'p Person>
    where
        I: IntoIterator<Item = &'p Person>,
    {
        candidates
            .into_iter()
            .find(|candidate| self.same_identity(target, candidate))
    }
}
