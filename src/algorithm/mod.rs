//! Identity matching and cross-reference resolution
//!
//! `identity` decides whether two person records describe the same
//! individual. `resolution` follows the references of a family record to
//! other records and assembles the resulting network.

pub mod identity;
pub mod resolution;

pub use identity::{IdentityMatch, IdentityMatcher};
pub use resolution::{CancelFlag, CrossReferenceResolver, PrefetchHandle};
