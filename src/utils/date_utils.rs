//! Parsing and formatting of historical date strings.
//!
//! Parish records carry dates as free text: `15.02.1730`, `02.1730`, `1730`,
//! approximations such as `n 1730`, and two-digit years whose century has to
//! be inferred from a birth year.

use std::fmt;

use chrono::Month;

/// Prefixes that mark a date as approximate, longest first
const APPROXIMATE_PREFIXES: &[&str] = &["noin", "abt.", "abt", "ca.", "ca", "c.", "n.", "n", "~"];

/// Candidate centuries for two-digit years, oldest first
const CANDIDATE_CENTURIES: [i32; 3] = [1600, 1700, 1800];

/// Century used when no birth-year anchor decides
const DEFAULT_CENTURY: i32 = 1700;

/// Plausible age range for an event anchored to a birth year
const ANCHOR_AGE_RANGE: std::ops::RangeInclusive<i32> = 15..=50;

/// A date string interpreted at the precision the record gives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoricalDate {
    /// Day, month and year are known
    Day {
        /// Day of month
        day: u32,
        /// Month of year
        month: Month,
        /// Four-digit year
        year: i32,
    },
    /// Month and year are known
    MonthYear {
        /// Month of year
        month: Month,
        /// Four-digit year
        year: i32,
    },
    /// Only the year is known
    Year(i32),
    /// An approximate date
    Approximate(Box<HistoricalDate>),
    /// Text that is not a recognised date form
    Unrecognized(String),
}

impl HistoricalDate {
    /// Year of the date, if one was recognised
    #[must_use]
    pub fn year(&self) -> Option<i32> {
        match self {
            Self::Day { year, .. } | Self::MonthYear { year, .. } | Self::Year(year) => Some(*year),
            Self::Approximate(inner) => inner.year(),
            Self::Unrecognized(_) => None,
        }
    }
}

impl fmt::Display for HistoricalDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Day { day, month, year } => write!(f, "{day} {} {year}", month.name()),
            Self::MonthYear { month, year } => write!(f, "{} {year}", month.name()),
            Self::Year(year) => write!(f, "{year}"),
            Self::Approximate(inner) => write!(f, "abt {inner}"),
            Self::Unrecognized(text) => f.write_str(text),
        }
    }
}

/// Parse a historical date string
///
/// # Arguments
/// * `raw` - The date as written in the record
/// * `anchor_birth_year` - Birth year used to place two-digit years in a century
///
/// # Returns
/// `None` for blank input, otherwise the interpreted date
#[must_use]
pub fn parse_historical_date(raw: &str, anchor_birth_year: Option<i32>) -> Option<HistoricalDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Some(rest) = strip_approximate_prefix(trimmed) {
        let inner = parse_historical_date(rest, anchor_birth_year)?;
        return Some(HistoricalDate::Approximate(Box::new(inner)));
    }

    let unrecognized = || HistoricalDate::Unrecognized(trimmed.to_string());
    let parts: Vec<&str> = trimmed.trim_end_matches('.').split('.').map(str::trim).collect();
    if parts
        .iter()
        .any(|part| part.is_empty() || !part.chars().all(|c| c.is_ascii_digit()))
    {
        return Some(unrecognized());
    }

    let parsed = match parts.as_slice() {
        [day, month, year] => day
            .parse::<u32>()
            .ok()
            .filter(|d| (1..=31).contains(d))
            .zip(parse_month(month))
            .zip(parse_year(year, anchor_birth_year))
            .map(|((day, month), year)| HistoricalDate::Day { day, month, year }),
        [month, year] => parse_month(month)
            .zip(parse_year(year, anchor_birth_year))
            .map(|(month, year)| HistoricalDate::MonthYear { month, year }),
        [year] => parse_year(year, anchor_birth_year).map(HistoricalDate::Year),
        _ => None,
    };

    Some(parsed.unwrap_or_else(unrecognized))
}

/// Render a date string for a citation
///
/// `"15.02.1730"` becomes `"15 February 1730"`, `"n 1730"` becomes
/// `"abt 1730"`, and unrecognised text is echoed trimmed.
#[must_use]
pub fn format_date(raw: &str, anchor_birth_year: Option<i32>) -> String {
    parse_historical_date(raw, anchor_birth_year)
        .map(|date| date.to_string())
        .unwrap_or_default()
}

/// Expand a two-digit year using a birth-year anchor
///
/// The first century (1600s, 1700s, 1800s) that puts the event between 15 and
/// 50 years after the anchor wins. Without an anchor, or when no century
/// fits, the 1700s are assumed.
#[must_use]
pub fn expand_two_digit_year(short_year: u32, anchor_birth_year: Option<i32>) -> i32 {
    let short_year = i32::try_from(short_year % 100).unwrap_or_default();

    anchor_birth_year
        .and_then(|birth| {
            CANDIDATE_CENTURIES
                .iter()
                .map(|century| century + short_year)
                .find(|candidate| ANCHOR_AGE_RANGE.contains(&(candidate - birth)))
        })
        .unwrap_or(DEFAULT_CENTURY + short_year)
}

/// Extract an explicit four-digit year from a date string
///
/// Two-digit years are ignored here since their century is a guess.
#[must_use]
pub fn extract_year(raw: &str) -> Option<i32> {
    raw.split(|c: char| !c.is_ascii_digit())
        .find(|run| run.len() == 4)
        .and_then(|run| run.parse().ok())
}

fn strip_approximate_prefix(text: &str) -> Option<&str> {
    APPROXIMATE_PREFIXES.iter().find_map(|prefix| {
        let head = text.get(..prefix.len())?;
        if !head.eq_ignore_ascii_case(prefix) {
            return None;
        }
        let rest = &text[prefix.len()..];
        let separated = prefix.ends_with('.')
            || prefix.ends_with('~')
            || rest.starts_with(char::is_whitespace);
        let rest = rest.trim_start();
        (separated && rest.starts_with(|c: char| c.is_ascii_digit())).then_some(rest)
    })
}

fn parse_month(text: &str) -> Option<Month> {
    let number: u8 = text.parse().ok()?;
    Month::try_from(number).ok()
}

fn parse_year(text: &str, anchor_birth_year: Option<i32>) -> Option<i32> {
    match text.len() {
        1 | 2 => text
            .parse()
            .ok()
            .map(|short| expand_two_digit_year(short, anchor_birth_year)),
        3 | 4 => text.parse().ok(),
        _ => None,
    }
}
