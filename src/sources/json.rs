//! JSON family parser
//!
//! Parses the structured form of a family record, the same shape the
//! extraction service returns. A record without an id takes the id it was
//! requested under.

use std::future::Future;
use std::pin::Pin;

use crate::algorithm::resolution::FamilyParser;
use crate::error::{Result, XrefError};
use crate::models::Family;

/// Parser for JSON-encoded family records
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFamilyParser;

impl JsonFamilyParser {
    /// Create a parser
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Parse synchronously
    ///
    /// # Errors
    /// Returns [`XrefError::ParseFailure`] if the text is not a valid family
    /// record or the record has no couples.
    pub fn parse_str(&self, family_id: &str, text: &str) -> Result<Family> {
        let mut family: Family = serde_json::from_str(text)
            .map_err(|e| XrefError::parse_failure(family_id, e.to_string()))?;

        if family.id.trim().is_empty() {
            family.id = family_id.trim().to_string();
        } else if family.id.trim() != family_id.trim() {
            log::debug!("Record requested as {family_id} carries id {}", family.id);
        }

        family.validate()
    }
}

impl FamilyParser for JsonFamilyParser {
    fn parse<'a>(
        &'a self,
        family_id: &'a str,
        text: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Family>> + Send + 'a>> {
        Box::pin(async move { self.parse_str(family_id, text) })
    }
}
