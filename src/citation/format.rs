//! Line formatting shared by every citation layout

use itertools::Itertools;

use crate::models::{Couple, Person};
use crate::utils::date_utils::{format_date, parse_historical_date};

/// Birth year of a person, resolving a two-digit birth date against `anchor`
pub(crate) fn resolved_birth_year(person: &Person, anchor: Option<i32>) -> Option<i32> {
    person
        .birth_date()
        .and_then(|raw| parse_historical_date(raw, anchor))
        .and_then(|date| date.year())
}

/// Anchor year for a couple's children and marriage date: husband first, then wife
pub(crate) fn couple_anchor(couple: &Couple) -> Option<i32> {
    resolved_birth_year(&couple.husband, None).or_else(|| resolved_birth_year(&couple.wife, None))
}

/// Name, patronymic and footnote markers
pub(crate) fn person_label(person: &Person) -> String {
    let markers = person
        .footnotes
        .iter()
        .map(|marker| marker.trim())
        .filter(|marker| !marker.is_empty())
        .map(|marker| format!("[{marker}]"))
        .join("");
    format!("{}{markers}", person.full_name())
}

/// Compact `birth–death` range, or `b. …` / `d. …` when only one end is known
pub(crate) fn life_span(birth: Option<String>, death: Option<String>) -> Option<String> {
    match (birth, death) {
        (Some(birth), Some(death)) => Some(format!("{birth}–{death}")),
        (Some(birth), None) => Some(format!("b. {birth}")),
        (None, Some(death)) => Some(format!("d. {death}")),
        (None, None) => None,
    }
}

/// Label plus life span for a spouse line
pub(crate) fn describe(person: &Person, birth_anchor: Option<i32>) -> String {
    let own_year = resolved_birth_year(person, birth_anchor);
    let birth = person.birth_date().map(|d| format_date(d, birth_anchor));
    let death = person.death_date().map(|d| format_date(d, own_year));
    match life_span(birth, death) {
        Some(span) => format!("{} ({span})", person_label(person)),
        None => person_label(person),
    }
}

/// One child row, optionally carrying values taken from a linked record
#[derive(Debug, Clone)]
pub(crate) struct Row<'a> {
    pub person: &'a Person,
    pub birth_anchor: Option<i32>,
    pub death_date: Option<&'a str>,
    pub marriage_date: Option<&'a str>,
    pub spouse: Option<String>,
    pub linked_family: Option<&'a str>,
}

impl<'a> Row<'a> {
    /// Row built only from what the record itself says
    pub fn plain(person: &'a Person, birth_anchor: Option<i32>) -> Self {
        Self {
            person,
            birth_anchor,
            death_date: person.death_date(),
            marriage_date: person.effective_marriage_date(),
            spouse: person.spouse_name().map(str::to_string),
            linked_family: None,
        }
    }

    pub fn render(&self) -> String {
        let own_year = resolved_birth_year(self.person, self.birth_anchor);
        let birth = self
            .person
            .birth_date()
            .map(|d| format_date(d, self.birth_anchor));
        let death = self.death_date.map(|d| format_date(d, own_year));

        let mut line = person_label(self.person);
        if let Some(span) = life_span(birth, death) {
            line.push_str(&format!(" ({span})"));
        }
        if self.marriage_date.is_some() || self.spouse.is_some() {
            line.push_str(", m.");
            if let Some(date) = self.marriage_date {
                line.push(' ');
                line.push_str(&format_date(date, own_year));
            }
            if let Some(spouse) = &self.spouse {
                line.push(' ');
                line.push_str(spouse);
            }
        }
        if let Some(family_id) = self.linked_family {
            line.push_str(&format!(" [{family_id}]"));
        }
        line
    }
}

/// Warning emitted when a person cannot be placed in their birth family
pub(crate) fn not_found_warning(person: &Person, family_id: &str) -> String {
    let birth = person
        .birth_date()
        .map_or_else(|| "unknown".to_string(), |d| format_date(d, None));
    format!(
        "Warning: {} (b. {birth}) was not found among the children of {family_id}",
        person.full_name()
    )
}
