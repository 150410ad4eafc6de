//! Family network
//!
//! The resolved aggregate for one extraction: the main family record plus
//! three tables linking people of that record to other records.
//!
//! - `as_child_of`: a parent of the main family → the family they were born into
//! - `as_parent_of`: a married child of the main family → the family they headed
//! - `spouse_as_child_of`: that child's spouse → the spouse's birth family
//!
//! A network is built by exactly one resolution and is read-only afterwards.

pub mod key;
pub mod table;

use std::sync::Arc;

pub use key::{KeyVariant, PersonKey};
pub use table::ResolutionTable;

use crate::models::{Family, Person};
use crate::names::NameEquivalenceIndex;

/// Which table a link belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkKind {
    /// Parent → birth family
    AsChild,
    /// Married child → adult family
    AsParent,
    /// Spouse of a married child → spouse's birth family
    SpouseAsChild,
}

/// Main family plus its resolved cross-references
#[derive(Debug, Clone)]
pub struct FamilyNetwork {
    main: Arc<Family>,
    as_child_of: ResolutionTable,
    as_parent_of: ResolutionTable,
    spouse_as_child_of: ResolutionTable,
    names: Option<Arc<NameEquivalenceIndex>>,
}

impl FamilyNetwork {
    /// Create a network with no links yet
    #[must_use]
    pub fn new(main: Family) -> Self {
        Self::from_shared(Arc::new(main))
    }

    /// Create a network around an already shared main family
    #[must_use]
    pub fn from_shared(main: Arc<Family>) -> Self {
        Self {
            main,
            as_child_of: ResolutionTable::new(),
            as_parent_of: ResolutionTable::new(),
            spouse_as_child_of: ResolutionTable::new(),
            names: None,
        }
    }

    /// Attach the name-equivalence snapshot the links were validated with
    #[must_use]
    pub fn with_names(mut self, names: Arc<NameEquivalenceIndex>) -> Self {
        self.names = Some(names);
        self
    }

    /// The name-equivalence snapshot the links were validated with, if any
    #[must_use]
    pub fn names(&self) -> Option<&NameEquivalenceIndex> {
        self.names.as_deref()
    }

    /// The main family record
    #[must_use]
    pub fn main(&self) -> &Family {
        &self.main
    }

    /// Shared handle to the main family record
    #[must_use]
    pub fn main_shared(&self) -> Arc<Family> {
        Arc::clone(&self.main)
    }

    /// Key for a person of the main family
    #[must_use]
    pub fn key_for(&self, person: &Person) -> PersonKey {
        PersonKey::for_person(person, Some(&self.main.id))
    }

    /// Record a link
    pub fn insert(&mut self, kind: LinkKind, key: &PersonKey, family: Arc<Family>) {
        self.table_mut(kind).insert(key, family);
    }

    /// Birth family of a person of the main family
    #[must_use]
    pub fn as_child_family(&self, person: &Person) -> Option<Arc<Family>> {
        self.as_child_family_by_key(&self.key_for(person))
    }

    /// Adult family of a person of the main family
    #[must_use]
    pub fn as_parent_family(&self, person: &Person) -> Option<Arc<Family>> {
        self.as_parent_family_by_key(&self.key_for(person))
    }

    /// Birth family of a spouse as seen in the given adult family
    #[must_use]
    pub fn spouse_as_child_family(&self, spouse: &Person, adult_family_id: &str) -> Option<Arc<Family>> {
        self.spouse_as_child_family_by_key(&PersonKey::for_person(spouse, Some(adult_family_id)))
    }

    /// Birth-family lookup with an explicit key
    #[must_use]
    pub fn as_child_family_by_key(&self, key: &PersonKey) -> Option<Arc<Family>> {
        self.as_child_of.lookup(key)
    }

    /// Adult-family lookup with an explicit key
    #[must_use]
    pub fn as_parent_family_by_key(&self, key: &PersonKey) -> Option<Arc<Family>> {
        self.as_parent_of.lookup(key)
    }

    /// Spouse birth-family lookup with an explicit key
    #[must_use]
    pub fn spouse_as_child_family_by_key(&self, key: &PersonKey) -> Option<Arc<Family>> {
        self.spouse_as_child_of.lookup(key)
    }

    /// Look up a single key variant in one table
    #[must_use]
    pub fn lookup_variant(&self, kind: LinkKind, variant: &KeyVariant) -> Option<Arc<Family>> {
        self.table(kind).lookup_variant(variant)
    }

    /// Number of links of each kind: (as child, as parent, spouse as child)
    #[must_use]
    pub const fn link_counts(&self) -> (usize, usize, usize) {
        (
            self.as_child_of.len(),
            self.as_parent_of.len(),
            self.spouse_as_child_of.len(),
        )
    }

    const fn table(&self, kind: LinkKind) -> &ResolutionTable {
        match kind {
            LinkKind::AsChild => &self.as_child_of,
            LinkKind::AsParent => &self.as_parent_of,
            LinkKind::SpouseAsChild => &self.spouse_as_child_of,
        }
    }

    fn table_mut(&mut self, kind: LinkKind) -> &mut ResolutionTable {
        match kind {
            LinkKind::AsChild => &mut self.as_child_of,
            LinkKind::AsParent => &mut self.as_parent_of,
            LinkKind::SpouseAsChild => &mut self.spouse_as_child_of,
        }
    }
}
