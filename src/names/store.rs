//! Persisted name-equivalence store
//!
//! The store is a JSON object mapping each normalized name to its sorted list
//! of equivalents. A missing file is seeded with the built-in defaults and
//! written out on first use.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::error::util::{read_optional_to_string, write_string};

use super::equivalence::NameEquivalenceIndex;

/// File-backed storage for a [`NameEquivalenceIndex`]
#[derive(Debug, Clone)]
pub struct EquivalenceStore {
    path: PathBuf,
}

impl EquivalenceStore {
    /// Create a store backed by the given file
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the index, seeding and persisting the defaults if the file is absent
    pub fn load(&self) -> Result<NameEquivalenceIndex> {
        match read_optional_to_string(&self.path, "name equivalence store")? {
            Some(content) => {
                let mapping: BTreeMap<String, Vec<String>> = serde_json::from_str(&content)?;
                let index = NameEquivalenceIndex::from_mapping(mapping);
                log::info!(
                    "Loaded {} names from equivalence store {}",
                    index.len(),
                    self.path.display()
                );
                Ok(index)
            }
            None => {
                let index = NameEquivalenceIndex::with_defaults();
                log::info!(
                    "Seeding equivalence store {} with {} default names",
                    self.path.display(),
                    index.len()
                );
                self.save(&index)?;
                Ok(index)
            }
        }
    }

    /// Rewrite the backing file from the index
    pub fn save(&self, index: &NameEquivalenceIndex) -> Result<()> {
        let content = serde_json::to_string_pretty(&index.to_mapping())?;
        write_string(&self.path, &content, "name equivalence store")
    }
}
