//! Enhancement of a child row from the child's own adult-family record
//!
//! A nuclear family usually records little about a child beyond birth and
//! marriage. The family the child later headed tends to know the death date
//! and a fuller marriage date. Those values are pulled in, and the ones the
//! nuclear record lacked are reported back as "Additional Information".

use std::ptr;

use super::format::{Row, describe, resolved_birth_year};
use crate::algorithm::identity::IdentityMatcher;
use crate::models::{Couple, Family, Person};
use crate::utils::date_utils::format_date;

/// Length at which a marriage date counts as a full date
const FULL_DATE_MIN_CHARS: usize = 8;
/// Length up to which a marriage date counts as year-only
const PARTIAL_DATE_MAX_CHARS: usize = 4;

/// A person located in their linked adult family
#[derive(Debug, Clone, Copy)]
pub struct Enhancement<'a> {
    linked: &'a Family,
    record: &'a Person,
    couple: &'a Couple,
}

/// Values the linked record supplies that the nuclear record lacked
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SuppliedFields<'a> {
    /// Death date present in the linked record only
    pub death_date: Option<&'a str>,
    /// Marriage date more complete than, or different from, the nuclear one
    pub marriage_date: Option<&'a str>,
}

impl<'a> Enhancement<'a> {
    /// Find `person` among the spouses of `linked`
    #[must_use]
    pub fn locate(person: &Person, linked: &'a Family, matcher: &IdentityMatcher<'_>) -> Option<Self> {
        linked.couples.iter().find_map(|couple| {
            couple
                .spouses()
                .find(|side| matcher.same_identity(person, side))
                .map(|record| Self {
                    linked,
                    record,
                    couple,
                })
        })
    }

    /// The linked adult family
    #[must_use]
    pub const fn linked(&self) -> &'a Family {
        self.linked
    }

    /// The person as recorded in the linked family
    #[must_use]
    pub const fn record(&self) -> &'a Person {
        self.record
    }

    /// The other side of the couple
    #[must_use]
    pub fn spouse(&self) -> &'a Person {
        if ptr::eq(self.record, &self.couple.husband) {
            &self.couple.wife
        } else {
            &self.couple.husband
        }
    }

    /// Death date according to the linked record
    #[must_use]
    pub fn death_date(&self) -> Option<&'a str> {
        self.record.death_date()
    }

    /// Marriage date according to the linked record
    #[must_use]
    pub fn marriage_date(&self) -> Option<&'a str> {
        self.couple
            .marriage_date()
            .or_else(|| self.record.effective_marriage_date())
    }

    /// Compare against the nuclear record's copy of the person
    #[must_use]
    pub fn supplied(&self, nuclear: &Person) -> SuppliedFields<'a> {
        SuppliedFields {
            death_date: self.death_date().filter(|_| nuclear.death_date().is_none()),
            marriage_date: self
                .marriage_date()
                .filter(|linked| supplies_marriage_date(nuclear.effective_marriage_date(), linked)),
        }
    }

    /// Row for the nuclear copy, filled in from the linked record
    pub(crate) fn row<'r>(&self, nuclear: &'r Person, birth_anchor: Option<i32>) -> Row<'r>
    where
        'a: 'r,
    {
        let supplied = self.supplied(nuclear);
        Row {
            person: nuclear,
            birth_anchor,
            death_date: nuclear.death_date().or(supplied.death_date),
            marriage_date: supplied
                .marriage_date
                .or_else(|| nuclear.effective_marriage_date()),
            spouse: Some(describe(self.spouse(), None)),
            linked_family: Some(self.linked.id.as_str()),
        }
    }
}

impl SuppliedFields<'_> {
    /// Whether nothing new was supplied
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.death_date.is_none() && self.marriage_date.is_none()
    }

    /// "Additional Information" block, empty when nothing was supplied
    ///
    /// # Arguments
    /// * `person` - The nuclear copy, used to anchor two-digit years
    /// * `linked` - The family the values came from
    /// * `birth_anchor` - Parent birth year anchoring the person's own birth date
    #[must_use]
    pub fn lines(&self, person: &Person, linked: &Family, birth_anchor: Option<i32>) -> Vec<String> {
        if self.is_empty() {
            return Vec::new();
        }

        let own_year = resolved_birth_year(person, birth_anchor);
        let source = format!("from {}, {}", linked.id, linked.page_reference());
        let mut lines = vec!["Additional Information:".to_string()];
        if let Some(date) = self.death_date {
            lines.push(format!("  Death date: {} ({source})", format_date(date, own_year)));
        }
        if let Some(date) = self.marriage_date {
            lines.push(format!("  Marriage date: {} ({source})", format_date(date, own_year)));
        }
        lines
    }
}

/// Whether a linked marriage date adds to the nuclear one
///
/// True when the nuclear record has none, when the linked value is a full
/// date against a year-only one, or when the two simply differ.
#[must_use]
pub fn supplies_marriage_date(current: Option<&str>, linked: &str) -> bool {
    let linked = linked.trim();
    match current.map(str::trim) {
        None => !linked.is_empty(),
        Some(current) => is_more_complete(linked, current) || current != linked,
    }
}

fn is_more_complete(linked: &str, current: &str) -> bool {
    linked.chars().count() >= FULL_DATE_MIN_CHARS
        && current.chars().count() <= PARTIAL_DATE_MAX_CHARS
}
