//! Family record representation
//!
//! This module contains the Family model, which represents one record of a
//! parish family register. A family consists of one or more couples: the
//! primary couple, then one couple per remarriage after widowhood.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::person::Person;
use crate::error::{Result, XrefError};

/// A married couple and the children of that marriage
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Couple {
    /// Husband
    pub husband: Person,
    /// Wife
    pub wife: Person,
    /// Marriage date as written
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marriage_date: Option<String>,
    /// Children in record order
    #[serde(default)]
    pub children: Vec<Person>,
    /// Number of children who died in infancy
    #[serde(default)]
    pub died_in_infancy: u32,
    /// Notes that belong to this couple only
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
}

impl Couple {
    /// Create a couple without children
    #[must_use]
    pub fn new(husband: Person, wife: Person) -> Self {
        Self {
            husband,
            wife,
            ..Self::default()
        }
    }

    /// Set the marriage date
    #[must_use]
    pub fn with_marriage_date(mut self, date: impl Into<String>) -> Self {
        self.marriage_date = Some(date.into());
        self
    }

    /// Add a child
    #[must_use]
    pub fn with_child(mut self, child: Person) -> Self {
        self.children.push(child);
        self
    }

    /// Set the count of children who died in infancy
    #[must_use]
    pub const fn with_died_in_infancy(mut self, count: u32) -> Self {
        self.died_in_infancy = count;
        self
    }

    /// Both spouses, husband first
    pub fn spouses(&self) -> impl Iterator<Item = &Person> {
        [&self.husband, &self.wife].into_iter()
    }

    /// Marriage date, ignoring blank strings
    #[must_use]
    pub fn marriage_date(&self) -> Option<&str> {
        self.marriage_date
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
    }
}

/// One family record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Family {
    /// Record identifier, e.g. `"KORPI 6"`
    #[serde(default)]
    pub id: String,
    /// Page references in the source volume
    #[serde(default)]
    pub pages: Vec<String>,
    /// Couples, primary first. Never empty.
    pub couples: Vec<Couple>,
    /// Free-text notes in record order
    #[serde(default)]
    pub notes: Vec<String>,
    /// Footnote marker to footnote text
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub footnotes: BTreeMap<String, String>,
}

impl Family {
    /// Create a family with its primary couple
    #[must_use]
    pub fn new(id: impl Into<String>, primary: Couple) -> Self {
        Self {
            id: id.into(),
            pages: Vec::new(),
            couples: vec![primary],
            notes: Vec::new(),
            footnotes: BTreeMap::new(),
        }
    }

    /// Add a page reference
    #[must_use]
    pub fn with_page(mut self, page: impl Into<String>) -> Self {
        self.pages.push(page.into());
        self
    }

    /// Add a remarriage couple
    #[must_use]
    pub fn with_couple(mut self, couple: Couple) -> Self {
        self.couples.push(couple);
        self
    }

    /// Add a family note
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Define a footnote
    #[must_use]
    pub fn with_footnote(mut self, marker: impl Into<String>, text: impl Into<String>) -> Self {
        self.footnotes.insert(marker.into(), text.into());
        self
    }

    /// Check the record invariants
    ///
    /// A family must have an id and at least one couple.
    pub fn validate(self) -> Result<Self> {
        if self.id.trim().is_empty() {
            return Err(XrefError::parse_failure(
                self.id,
                "family record has no identifier",
            ));
        }
        if self.couples.is_empty() {
            return Err(XrefError::parse_failure(
                self.id,
                "family record has no couples",
            ));
        }
        Ok(self)
    }

    /// The first-listed couple
    #[must_use]
    pub fn primary_couple(&self) -> Option<&Couple> {
        self.couples.first()
    }

    /// Couples after the primary one (remarriages)
    #[must_use]
    pub fn additional_couples(&self) -> &[Couple] {
        self.couples.get(1..).unwrap_or_default()
    }

    /// All children across all couples, in record order
    pub fn children(&self) -> impl Iterator<Item = &Person> {
        self.couples.iter().flat_map(|couple| couple.children.iter())
    }

    /// All spouses across all couples, in record order
    pub fn spouses(&self) -> impl Iterator<Item = &Person> {
        self.couples.iter().flat_map(Couple::spouses)
    }

    /// Page reference as rendered in citations
    #[must_use]
    pub fn page_reference(&self) -> String {
        let pages: Vec<&str> = self
            .pages
            .iter()
            .map(|p| p.trim())
            .filter(|p| !p.is_empty())
            .collect();
        match pages.as_slice() {
            [] => "page unknown".to_string(),
            [page] => format!("page {page}"),
            _ => format!("pages {}", pages.join(", ")),
        }
    }
}
