//! Person representation
//!
//! A person as transcribed in one family record. The same individual shows up
//! in several records (as a child in one, as a parent in another) with no
//! shared identifier, so identity has to be inferred by the matcher.

use serde::{Deserialize, Serialize};

use crate::utils::date_utils::extract_year;

/// A person appearing in a family record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Given name as written
    pub name: String,
    /// Patronymic ("Matinpoika", "Henriksdotter"), if recorded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patronymic: Option<String>,
    /// Birth date as written
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    /// Death date as written
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub death_date: Option<String>,
    /// Marriage date in the short form the record gives
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marriage_date: Option<String>,
    /// Fuller marriage date, authoritative when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_marriage_date: Option<String>,
    /// Name of the spouse (for married children)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spouse_name: Option<String>,
    /// Id of the family record this person was born into
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_family: Option<String>,
    /// Id of the family record this person later headed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adult_family: Option<String>,
    /// Identifier in an external historical-records database
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    /// Footnote markers attached to this person
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub footnotes: Vec<String>,
}

impl Person {
    /// Create a person with only a name
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the patronymic
    #[must_use]
    pub fn with_patronymic(mut self, patronymic: impl Into<String>) -> Self {
        self.patronymic = Some(patronymic.into());
        self
    }

    /// Set the birth date
    #[must_use]
    pub fn with_birth_date(mut self, date: impl Into<String>) -> Self {
        self.birth_date = Some(date.into());
        self
    }

    /// Set the death date
    #[must_use]
    pub fn with_death_date(mut self, date: impl Into<String>) -> Self {
        self.death_date = Some(date.into());
        self
    }

    /// Set the short marriage date
    #[must_use]
    pub fn with_marriage_date(mut self, date: impl Into<String>) -> Self {
        self.marriage_date = Some(date.into());
        self
    }

    /// Set the full marriage date
    #[must_use]
    pub fn with_full_marriage_date(mut self, date: impl Into<String>) -> Self {
        self.full_marriage_date = Some(date.into());
        self
    }

    /// Set the spouse name
    #[must_use]
    pub fn with_spouse(mut self, spouse: impl Into<String>) -> Self {
        self.spouse_name = Some(spouse.into());
        self
    }

    /// Set the birth-family reference
    #[must_use]
    pub fn with_birth_family(mut self, family_id: impl Into<String>) -> Self {
        self.birth_family = Some(family_id.into());
        self
    }

    /// Set the adult-family reference
    #[must_use]
    pub fn with_adult_family(mut self, family_id: impl Into<String>) -> Self {
        self.adult_family = Some(family_id.into());
        self
    }

    /// Attach a footnote marker
    #[must_use]
    pub fn with_footnote(mut self, marker: impl Into<String>) -> Self {
        self.footnotes.push(marker.into());
        self
    }

    /// Name followed by the patronymic, if any
    #[must_use]
    pub fn full_name(&self) -> String {
        match non_blank(self.patronymic.as_deref()) {
            Some(patronymic) => format!("{} {patronymic}", self.name.trim()),
            None => self.name.trim().to_string(),
        }
    }

    /// Birth date, ignoring blank strings
    #[must_use]
    pub fn birth_date(&self) -> Option<&str> {
        non_blank(self.birth_date.as_deref())
    }

    /// Death date, ignoring blank strings
    #[must_use]
    pub fn death_date(&self) -> Option<&str> {
        non_blank(self.death_date.as_deref())
    }

    /// The marriage date to trust: the full form wins over the short one
    #[must_use]
    pub fn effective_marriage_date(&self) -> Option<&str> {
        non_blank(self.full_marriage_date.as_deref())
            .or_else(|| non_blank(self.marriage_date.as_deref()))
    }

    /// Spouse name, ignoring blank strings
    #[must_use]
    pub fn spouse_name(&self) -> Option<&str> {
        non_blank(self.spouse_name.as_deref())
    }

    /// Birth year, when the birth date carries an explicit four-digit year
    #[must_use]
    pub fn birth_year(&self) -> Option<i32> {
        self.birth_date().and_then(extract_year)
    }

    /// Whether the record shows this person as married
    #[must_use]
    pub fn is_married(&self) -> bool {
        self.effective_marriage_date().is_some() || self.spouse_name().is_some()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
