//! In-memory text source

use std::future::Future;
use std::pin::Pin;

use rustc_hash::FxHashMap;

use crate::algorithm::resolution::FamilyTextSource;

/// Family text held in a map keyed by trimmed family id
#[derive(Debug, Clone, Default)]
pub struct MemoryTextSource {
    blocks: FxHashMap<String, String>,
}

impl MemoryTextSource {
    /// Create an empty source
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a family block
    #[must_use]
    pub fn with_family(mut self, family_id: &str, text: impl Into<String>) -> Self {
        self.insert(family_id, text);
        self
    }

    /// Add or replace a family block
    pub fn insert(&mut self, family_id: &str, text: impl Into<String>) {
        self.blocks.insert(family_id.trim().to_string(), text.into());
    }

    /// Number of blocks held
    #[must_use]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Whether no blocks are held
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

impl FamilyTextSource for MemoryTextSource {
    fn lookup_text<'a>(
        &'a self,
        family_id: &'a str,
    ) -> Pin<Box<dyn Future<Output = Option<String>> + Send + 'a>> {
        Box::pin(async move { self.blocks.get(family_id.trim()).cloned() })
    }
}
