//! Resolution table keyed by person identity
//!
//! Each resolution is stored under every variant of the person's key. When
//! two different resolutions claim the same partial variant with different
//! families, the variant is marked ambiguous and stops answering lookups; the
//! more specific variants of both people keep working.

use std::collections::hash_map::Entry;
use std::sync::Arc;

use rustc_hash::FxHashMap;

use super::key::{KeyVariant, PersonKey};
use crate::models::Family;

#[derive(Debug, Clone)]
enum Slot {
    Unique(Arc<Family>),
    Ambiguous,
}

/// Map from person identity to a resolved family
#[derive(Debug, Clone, Default)]
pub struct ResolutionTable {
    slots: FxHashMap<KeyVariant, Slot>,
    resolutions: usize,
}

impl ResolutionTable {
    /// Create an empty table
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a resolved family under every variant of the key
    pub fn insert(&mut self, key: &PersonKey, family: Arc<Family>) {
        for variant in key.variants() {
            match self.slots.entry(variant) {
                Entry::Vacant(entry) => {
                    entry.insert(Slot::Unique(Arc::clone(&family)));
                }
                Entry::Occupied(mut entry) => {
                    let conflict = match entry.get() {
                        Slot::Unique(existing) if existing.id != family.id => Some(existing.id.clone()),
                        _ => None,
                    };
                    if let Some(existing_id) = conflict {
                        log::debug!(
                            "Key variant {:?} claimed by both {existing_id} and {}, marking ambiguous",
                            entry.key(),
                            family.id
                        );
                        entry.insert(Slot::Ambiguous);
                    }
                }
            }
        }
        self.resolutions += 1;
    }

    /// Look a person up, trying variants from most to least specific
    #[must_use]
    pub fn lookup(&self, key: &PersonKey) -> Option<Arc<Family>> {
        key.variants()
            .iter()
            .find_map(|variant| self.lookup_variant(variant))
    }

    /// Look up a single variant
    #[must_use]
    pub fn lookup_variant(&self, variant: &KeyVariant) -> Option<Arc<Family>> {
        match self.slots.get(variant)? {
            Slot::Unique(family) => Some(Arc::clone(family)),
            Slot::Ambiguous => None,
        }
    }

    /// Number of resolutions stored
    #[must_use]
    pub const fn len(&self) -> usize {
        self.resolutions
    }

    /// Whether nothing has been stored
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.resolutions == 0
    }
}
