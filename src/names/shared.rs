//! Shared, lock-guarded access to the name-equivalence index
//!
//! Resolutions read the index through immutable snapshots taken at the start
//! of a run; user-driven additions take the write lock, publish a new snapshot
//! and rewrite the store. A resolution already in flight keeps the snapshot it
//! started with.

use std::sync::{Arc, RwLock};

use crate::error::{Result, XrefError};

use super::equivalence::{NameEquivalenceIndex, NameSuggestion};
use super::store::EquivalenceStore;

/// Thread-safe owner of the current name-equivalence index
#[derive(Debug)]
pub struct SharedEquivalences {
    current: RwLock<Arc<NameEquivalenceIndex>>,
    store: Option<EquivalenceStore>,
}

impl SharedEquivalences {
    /// Wrap an index that is not persisted
    #[must_use]
    pub fn in_memory(index: NameEquivalenceIndex) -> Self {
        Self {
            current: RwLock::new(Arc::new(index)),
            store: None,
        }
    }

    /// Load from a store, seeding it on first use
    pub fn open(store: EquivalenceStore) -> Result<Self> {
        let index = store.load()?;
        Ok(Self {
            current: RwLock::new(Arc::new(index)),
            store: Some(store),
        })
    }

    /// Immutable view of the index for one resolution run
    pub fn snapshot(&self) -> Result<Arc<NameEquivalenceIndex>> {
        self.current
            .read()
            .map(|guard| Arc::clone(&guard))
            .map_err(|_| XrefError::Lock("Failed to acquire read lock on name index".to_string()))
    }

    /// Record a new equivalence and persist it
    ///
    /// Returns `true` if the index changed.
    pub fn add_equivalence(&self, a: &str, b: &str) -> Result<bool> {
        let mut guard = self
            .current
            .write()
            .map_err(|_| XrefError::Lock("Failed to acquire write lock on name index".to_string()))?;

        let mut updated = NameEquivalenceIndex::clone(&guard);
        if !updated.add(a, b) {
            return Ok(false);
        }

        if let Some(store) = &self.store {
            store.save(&updated)?;
        }
        log::info!("Recorded name equivalence {a} ~ {b}");
        *guard = Arc::new(updated);
        Ok(true)
    }

    /// Suggest equivalences for a name against the current index
    pub fn suggest(&self, name: &str, min_score: f64, limit: usize) -> Result<Vec<NameSuggestion>> {
        Ok(self.snapshot()?.suggest_equivalents(name, min_score, limit))
    }
}
