//! Logging utilities
//!
//! Consistent extraction and reference lines on top of the `log` facade.

pub mod log;

pub use log::{log_extraction_start, log_links_resolved, log_reference_skipped};
