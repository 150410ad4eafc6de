//! Citation generation
//!
//! Turns a family record, optionally with its resolved network, into plain
//! text. Rendering is synchronous and has no side effects apart from log
//! lines, so the same inputs always give the same text.
//!
//! Layout of a family citation:
//!
//! ```text
//! KORPI 6, page 112
//! Husband: Matti Matinpoika (15 February 1730–1790)
//! Wife: Liisa (b. 1735)
//! Married: 1755
//! Children:
//!   Juho (b. 1756)
//! → Anna (2 May 1760–5 March 1820), m. 12 June 1782 Erkki (b. 1758) [KORVELA 2]
//! Additional Information:
//!   Death date: 5 March 1820 (from KORVELA 2, page 45)
//! ```

mod as_child;
pub mod enhancement;
mod format;
mod main_family;

pub use enhancement::{Enhancement, SuppliedFields, supplies_marriage_date};

use crate::algorithm::identity::IdentityMatcher;
use crate::config::CitationConfig;
use crate::models::{Family, Person};
use crate::names::NameEquivalenceIndex;
use crate::network::FamilyNetwork;
use self::main_family::{Focus, locate_child};

/// Renders citations with a given configuration
#[derive(Debug, Clone, Default)]
pub struct CitationGenerator {
    config: CitationConfig,
}

impl CitationGenerator {
    /// Create a generator
    #[must_use]
    pub const fn new(config: CitationConfig) -> Self {
        Self { config }
    }

    /// The configuration in use
    #[must_use]
    pub const fn config(&self) -> &CitationConfig {
        &self.config
    }

    /// Render a main family citation
    ///
    /// # Arguments
    /// * `family` - The family to render
    /// * `target` - Person whose row gets the target marker
    /// * `network` - Resolved network used to enhance a married target
    ///
    /// The target is located in its adult family with the same name
    /// equivalences the network's links were validated with.
    #[must_use]
    pub fn render_main_family(
        &self,
        family: &Family,
        target: Option<&Person>,
        network: Option<&FamilyNetwork>,
    ) -> String {
        let matcher = IdentityMatcher::with_optional(network.and_then(FamilyNetwork::names));
        let location = target.and_then(|target| locate_child(family, target, &matcher));

        let adult = location.and_then(|(couple, child)| {
            let child = &family.couples[couple].children[child];
            if child.is_married() {
                network.and_then(|network| network.as_parent_family(child))
            } else {
                None
            }
        });

        let focus = location.map(|(couple, child)| Focus {
            couple,
            child,
            linked: adult.as_deref(),
            matcher,
        });
        self.family_lines(family, focus.as_ref()).join("\n")
    }
}

/// [`CitationGenerator::render_main_family`] with the default configuration
#[must_use]
pub fn render_main_family(
    family: &Family,
    target: Option<&Person>,
    network: Option<&FamilyNetwork>,
) -> String {
    CitationGenerator::default().render_main_family(family, target, network)
}

/// [`CitationGenerator::render_as_child_family`] with the default configuration
#[must_use]
pub fn render_as_child_family(
    person: &Person,
    as_child_family: &Family,
    network: Option<&FamilyNetwork>,
    names: Option<&NameEquivalenceIndex>,
) -> String {
    CitationGenerator::default().render_as_child_family(person, as_child_family, network, names)
}
