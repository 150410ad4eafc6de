//! Resolution logging
//!
//! The resolver reports each extraction and each skipped reference through
//! these helpers, so every run leaves the same trail in the log.

use std::time::Duration;

use crate::error::XrefError;

/// Log the start of an extraction
///
/// # Arguments
/// * `family_id` - Id of the main family being extracted
pub fn log_extraction_start(family_id: &str) {
    log::info!("Extracting {family_id}");
}

/// Log the links a resolution added to a network
///
/// # Arguments
/// * `family_id` - Id of the main family
/// * `links` - Number of links inserted into the network
/// * `elapsed` - Optional elapsed time
pub fn log_links_resolved(family_id: &str, links: usize, elapsed: Option<Duration>) {
    let noun = if links == 1 { "link" } else { "links" };
    if let Some(duration) = elapsed {
        log::info!("Resolved {links} {noun} for {family_id} in {duration:?}");
    } else {
        log::info!("Resolved {links} {noun} for {family_id}");
    }
}

/// Log a reference left out of the network
///
/// A candidate that was found but rejected is worth a warning. A reference
/// that could not be looked up or parsed is routine in partial registers and
/// only logged at debug level.
///
/// # Arguments
/// * `person` - Name of the person the reference belongs to
/// * `reference` - The family id that was followed
/// * `error` - Why the reference was skipped
pub fn log_reference_skipped(person: &str, reference: &str, error: &XrefError) {
    match error {
        XrefError::ValidationFailure(_) => log::warn!("Reference {reference} of {person} rejected: {error}"),
        _ => log::debug!("Reference {reference} of {person} skipped: {error}"),
    }
}
