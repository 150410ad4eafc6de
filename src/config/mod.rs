//! Configuration for resolution and citation rendering.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::util::read_optional_to_string;
use crate::error::{Result, XrefError};

/// Configuration for the cross-reference resolver
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Maximum number of reference resolutions in flight at once
    pub max_concurrent_lookups: usize,
    /// Whether to follow a married child's spouse to the spouse's birth family
    pub resolve_spouses: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            max_concurrent_lookups: num_cpus::get(),
            resolve_spouses: true,
        }
    }
}

impl ResolverConfig {
    /// Set the lookup concurrency (values below one are treated as one)
    #[must_use]
    pub fn with_max_concurrent_lookups(mut self, limit: usize) -> Self {
        self.max_concurrent_lookups = limit.max(1);
        self
    }

    /// Enable or disable spouse birth-family capture
    #[must_use]
    pub const fn with_resolve_spouses(mut self, resolve: bool) -> Self {
        self.resolve_spouses = resolve;
        self
    }

    /// Effective concurrency, never zero
    #[must_use]
    pub fn concurrency(&self) -> usize {
        self.max_concurrent_lookups.max(1)
    }
}

/// Configuration for citation rendering
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CitationConfig {
    /// Marker placed in front of the target person's row
    pub target_marker: String,
    /// Words that identify a family note as a widow annotation
    pub widow_markers: Vec<String>,
    /// Label used for the children-died-in-infancy count
    pub infancy_label: String,
}

impl Default for CitationConfig {
    fn default() -> Self {
        Self {
            target_marker: "→".to_string(),
            widow_markers: vec![
                "widow".to_string(),
                "leski".to_string(),
                "änka".to_string(),
            ],
            infancy_label: "Children died in infancy".to_string(),
        }
    }
}

impl CitationConfig {
    /// Set the target marker
    #[must_use]
    pub fn with_target_marker(mut self, marker: impl Into<String>) -> Self {
        self.target_marker = marker.into();
        self
    }

    /// Replace the widow marker words
    #[must_use]
    pub fn with_widow_markers<I, S>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.widow_markers = markers.into_iter().map(Into::into).collect();
        self
    }

    /// Whether a note reads as a widow annotation
    #[must_use]
    pub fn is_widow_note(&self, note: &str) -> bool {
        let lowered = note.to_lowercase();
        lowered
            .split(|c: char| !c.is_alphanumeric())
            .any(|word| {
                self.widow_markers
                    .iter()
                    .any(|marker| word.starts_with(&marker.to_lowercase()))
            })
    }
}

/// Top-level configuration aggregating every component
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkerConfig {
    /// Resolver settings
    pub resolver: ResolverConfig,
    /// Citation settings
    pub citation: CitationConfig,
    /// Location of the persisted name-equivalence store
    pub equivalence_store: Option<PathBuf>,
}

impl LinkerConfig {
    /// Load configuration from a JSON file, falling back to defaults if it is absent
    pub fn from_file(path: &Path) -> Result<Self> {
        let Some(content) = read_optional_to_string(path, "linker configuration")? else {
            log::warn!("Configuration file {} not found, using defaults", path.display());
            return Ok(Self::default());
        };

        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings that cannot work
    pub fn validate(&self) -> Result<()> {
        if self.citation.target_marker.trim().is_empty() {
            return Err(XrefError::Config(
                "target_marker must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl fmt::Display for LinkerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Linker Configuration:")?;
        writeln!(
            f,
            "  Max Concurrent Lookups: {}",
            self.resolver.concurrency()
        )?;
        writeln!(f, "  Resolve Spouses: {}", self.resolver.resolve_spouses)?;
        writeln!(f, "  Target Marker: {}", self.citation.target_marker)?;
        writeln!(
            f,
            "  Widow Markers: {}",
            self.citation.widow_markers.join(", ")
        )?;
        if let Some(store) = &self.equivalence_store {
            writeln!(f, "  Equivalence Store: {}", store.display())?;
        }
        Ok(())
    }
}
