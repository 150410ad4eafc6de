//! Cross-reference resolution
//!
//! Given a main family record, every parent's birth-family reference and every
//! married child's adult-family reference is fetched, parsed and validated
//! against the person it was supposed to describe. Accepted records are
//! merged into a [`crate::network::FamilyNetwork`].

pub mod cancel;
pub mod collaborators;
pub mod prefetch;
pub mod resolver;
pub mod stats;

pub use cancel::CancelFlag;
pub use collaborators::{FallbackSearch, FamilyParser, FamilyTextSource, NoFallback};
pub use prefetch::PrefetchHandle;
pub use resolver::CrossReferenceResolver;
pub use stats::{ResolutionStats, StatsSnapshot};
