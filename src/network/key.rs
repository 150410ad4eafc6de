//! Composite person identity keys
//!
//! A [`PersonKey`] gathers everything a record says about who a person is:
//! normalized name, patronymic, birth year and the family record they were
//! seen in. Callers rarely hold all of it, so a key expands into partial
//! [`KeyVariant`]s that are tried from most to least specific.

use std::fmt;

use smallvec::SmallVec;

use crate::models::Person;
use crate::names::normalize;

/// Canonical identity of a person as seen in one record
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PersonKey {
    /// Normalized given name
    pub name: String,
    /// Normalized patronymic
    pub patronymic: Option<String>,
    /// Explicit birth year
    pub birth_year: Option<i32>,
    /// Id of the family record the person was seen in
    pub family_id: Option<String>,
}

/// A partial key, in lookup precedence order
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeyVariant {
    /// Name qualified by birth year
    BirthYear {
        /// Normalized name
        name: String,
        /// Birth year
        year: i32,
    },
    /// Name qualified by the originating family id
    Family {
        /// Normalized name
        name: String,
        /// Originating family id
        family_id: String,
    },
    /// Name and patronymic
    Patronymic {
        /// Normalized name
        name: String,
        /// Normalized patronymic
        patronymic: String,
    },
    /// Bare name
    Name(String),
}

impl PersonKey {
    /// Key with only a name
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        Self {
            name: normalize(name),
            patronymic: None,
            birth_year: None,
            family_id: None,
        }
    }

    /// Key for a person seen in the given family record
    #[must_use]
    pub fn for_person(person: &Person, family_id: Option<&str>) -> Self {
        Self {
            name: normalize(&person.name),
            patronymic: person
                .patronymic
                .as_deref()
                .map(normalize)
                .filter(|p| !p.is_empty()),
            birth_year: person.birth_year(),
            family_id: family_id
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .map(str::to_string),
        }
    }

    /// Set the patronymic
    #[must_use]
    pub fn with_patronymic(mut self, patronymic: &str) -> Self {
        self.patronymic = Some(normalize(patronymic));
        self
    }

    /// Set the birth year
    #[must_use]
    pub const fn with_birth_year(mut self, year: i32) -> Self {
        self.birth_year = Some(year);
        self
    }

    /// Set the originating family id
    #[must_use]
    pub fn with_family_id(mut self, family_id: &str) -> Self {
        self.family_id = Some(family_id.trim().to_string());
        self
    }

    /// Every variant this key can produce, most specific first
    #[must_use]
    pub fn variants(&self) -> SmallVec<[KeyVariant; 4]> {
        let mut variants = SmallVec::new();
        if self.name.is_empty() {
            return variants;
        }

        if let Some(year) = self.birth_year {
            variants.push(KeyVariant::BirthYear {
                name: self.name.clone(),
                year,
            });
        }
        if let Some(family_id) = &self.family_id {
            variants.push(KeyVariant::Family {
                name: self.name.clone(),
                family_id: family_id.clone(),
            });
        }
        if let Some(patronymic) = &self.patronymic {
            variants.push(KeyVariant::Patronymic {
                name: self.name.clone(),
                patronymic: patronymic.clone(),
            });
        }
        variants.push(KeyVariant::Name(self.name.clone()));
        variants
    }
}

impl fmt::Display for PersonKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if let Some(patronymic) = &self.patronymic {
            write!(f, " {patronymic}")?;
        }
        if let Some(year) = self.birth_year {
            write!(f, " ({year})")?;
        }
        if let Some(family_id) = &self.family_id {
            write!(f, " @ {family_id}")?;
        }
        Ok(())
    }
}
