//! Directory-backed text source
//!
//! One file per family: `<root>/<family id>.json`. A path separator inside an
//! id is replaced by `_` so every id maps to a file directly under the root.

use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;

use crate::algorithm::resolution::FamilyTextSource;
use crate::error::Result;
use crate::error::util::validate_directory;

/// Reads family text from a directory of JSON files
#[derive(Debug, Clone)]
pub struct DirectoryTextSource {
    root: PathBuf,
}

impl DirectoryTextSource {
    /// Open a records directory
    ///
    /// # Errors
    /// Returns an error if `root` does not exist or is not a directory
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        validate_directory(&root, "records directory")?;
        Ok(Self { root })
    }

    /// The records directory
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File that holds the given family
    #[must_use]
    pub fn path_for(&self, family_id: &str) -> PathBuf {
        let file_name = family_id.trim().replace(['/', '\\'], "_");
        self.root.join(format!("{file_name}.json"))
    }
}

impl FamilyTextSource for DirectoryTextSource {
    fn lookup_text<'a>(
        &'a self,
        family_id: &'a str,
    ) -> Pin<Box<dyn Future<Output = Option<String>> + Send + 'a>> {
        Box::pin(async move {
            let path = self.path_for(family_id);
            match tokio::fs::read_to_string(&path).await {
                Ok(text) => Some(text),
                Err(e) => {
                    log::debug!("No text for {family_id} at {}: {e}", path.display());
                    None
                }
            }
        })
    }
}
