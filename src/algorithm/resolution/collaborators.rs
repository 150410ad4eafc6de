//! External collaborators of the resolver
//!
//! The resolver never reads source documents or talks to the language-model
//! service itself. It asks a text source for the raw block of a family id and
//! hands that block to a parser. Both are async and object-safe so they can
//! sit behind `Arc<dyn …>` and be swapped in tests.

use std::future::Future;
use std::pin::Pin;

use crate::error::Result;
use crate::models::{Family, Person};
use crate::network::LinkKind;

/// Source of raw family text by id
pub trait FamilyTextSource: Send + Sync {
    /// Return the raw source block for a family id, or `None` if it is unknown
    fn lookup_text<'a>(
        &'a self,
        family_id: &'a str,
    ) -> Pin<Box<dyn Future<Output = Option<String>> + Send + 'a>>;
}

/// Turns raw family text into a structured record
pub trait FamilyParser: Send + Sync {
    /// Parse the text of one family
    ///
    /// Fails with [`crate::error::XrefError::ParseFailure`] when the upstream
    /// service returned malformed or incomplete data.
    fn parse<'a>(
        &'a self,
        family_id: &'a str,
        text: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Family>> + Send + 'a>>;
}

/// Search used when a direct reference fails to validate
///
/// Candidates returned here are validated exactly like direct references.
pub trait FallbackSearch: Send + Sync {
    /// Look for a family that could hold `person` in the given role
    fn search<'a>(
        &'a self,
        person: &'a Person,
        kind: LinkKind,
    ) -> Pin<Box<dyn Future<Output = Option<Family>> + Send + 'a>>;
}

/// Fallback that never finds anything
///
/// A birth-date scan over the whole register would go here. It is not
/// implemented, so a reference that fails validation stays unresolved.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFallback;

impl FallbackSearch for NoFallback {
    fn search<'a>(
        &'a self,
        _person: &'a Person,
        _kind: LinkKind,
    ) -> Pin<Box<dyn Future<Output = Option<Family>> + Send + 'a>> {
        Box::pin(async { None })
    }
}
