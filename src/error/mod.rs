//! Error handling for family cross-referencing.
//!
//! Only a handful of these errors ever escape the resolver: a missing or
//! malformed *top-level* family, cancellation, and I/O around the persisted
//! name-equivalence store. Failures on cross-referenced families are absorbed
//! and counted instead.

pub mod util;

use std::io;

/// Specialized error type for cross-reference resolution and its collaborators
#[derive(Debug, thiserror::Error)]
pub enum XrefError {
    /// The referenced family id is unknown to the text source
    #[error("Family not found: {0}")]
    LookupFailure(String),

    /// The upstream parser returned malformed or incomplete data
    #[error("Failed to parse family {family_id}: {message}")]
    ParseFailure {
        /// Family id whose text failed to parse
        family_id: String,
        /// Description of what was wrong
        message: String,
    },

    /// A resolved candidate did not contain the expected person
    #[error("Validation error: {0}")]
    ValidationFailure(String),

    /// Resolution was cancelled between suspension points
    #[error("Resolution cancelled")]
    Cancelled,

    /// Error opening or reading a file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Error serializing or deserializing JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A shared lock was poisoned
    #[error("Lock error: {0}")]
    Lock(String),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// A background task panicked or was aborted
    #[error("Task error: {0}")]
    Task(String),
}

impl XrefError {
    /// Build a parse failure for the given family id
    pub fn parse_failure(family_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ParseFailure {
            family_id: family_id.into(),
            message: message.into(),
        }
    }

    /// Whether the error is one the resolver absorbs for cross-referenced families
    #[must_use]
    pub const fn is_reference_failure(&self) -> bool {
        matches!(
            self,
            Self::LookupFailure(_) | Self::ParseFailure { .. } | Self::ValidationFailure(_)
        )
    }
}

/// Result type for cross-referencing operations
pub type Result<T> = std::result::Result<T, XrefError>;
