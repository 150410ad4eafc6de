//! Utility functions for error handling
//!
//! Small file-system helpers that turn `io::Error`s into errors carrying the
//! path and the reason the file was needed.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{Result, XrefError};

/// Check that a directory exists and is readable
pub fn validate_directory(path: &Path, purpose: &str) -> Result<()> {
    if !path.exists() {
        return Err(XrefError::Io(io::Error::new(
            io::ErrorKind::NotFound,
            format!("Directory not found: {} (needed for: {purpose})", path.display()),
        )));
    }

    if !path.is_dir() {
        return Err(XrefError::Io(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("Path is not a directory: {} (expected for: {purpose})", path.display()),
        )));
    }

    match fs::read_dir(path) {
        Ok(_) => Ok(()),
        Err(e) => {
            let context = match e.kind() {
                io::ErrorKind::PermissionDenied => "Permission denied - check directory permissions",
                _ => "Failed to access directory",
            };
            Err(XrefError::Io(io::Error::new(
                e.kind(),
                format!("{context}: {} ({purpose})", path.display()),
            )))
        }
    }
}

/// Read a file to string, or `None` when it does not exist
///
/// # Arguments
/// * `path` - The file to read
/// * `purpose` - Why the file is being read (for error context)
pub fn read_optional_to_string(path: &Path, purpose: &str) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => {
            let context = match e.kind() {
                io::ErrorKind::InvalidData => {
                    "File contains invalid UTF-8 data - cannot read as text"
                }
                io::ErrorKind::PermissionDenied => "Permission denied - check file permissions",
                _ => "Failed to read file content",
            };
            Err(XrefError::Io(io::Error::new(
                e.kind(),
                format!("{context}: {} ({purpose})", path.display()),
            )))
        }
    }
}

/// Write a file, creating its parent directory when needed
pub fn write_string(path: &Path, content: &str, purpose: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(path, content).map_err(|e| {
        XrefError::Io(io::Error::new(
            e.kind(),
            format!("Failed to write {} ({purpose}): {e}", path.display()),
        ))
    })
}
