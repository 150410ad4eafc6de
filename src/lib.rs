//! Cross-referencing of historical parish family registers.
//!
//! A family record names, for each parent, the record they were born into, and
//! for each married child, the record they later headed. This crate follows
//! those references, checks that each referenced record really contains the
//! person, assembles the results into a [`FamilyNetwork`], and renders
//! citations that mark and enrich one target person.

pub mod algorithm;
pub mod citation;
pub mod config;
pub mod error;
pub mod models;
pub mod names;
pub mod network;
pub mod sources;
pub mod utils;

// Core types
pub use config::{CitationConfig, LinkerConfig, ResolverConfig};
pub use error::{Result, XrefError};
pub use models::{Couple, Family, Person};
pub use network::{FamilyNetwork, KeyVariant, LinkKind, PersonKey};

// Resolution
pub use algorithm::identity::{IdentityMatch, IdentityMatcher};
pub use algorithm::resolution::{
    CancelFlag, CrossReferenceResolver, FallbackSearch, FamilyParser, FamilyTextSource,
    NoFallback, PrefetchHandle, StatsSnapshot,
};

// Names
pub use names::{EquivalenceStore, NameEquivalenceIndex, NameSuggestion, SharedEquivalences};

// Citations
pub use citation::{CitationGenerator, render_as_child_family, render_main_family};

// Collaborators
pub use sources::{DirectoryTextSource, JsonFamilyParser, MemoryTextSource};
