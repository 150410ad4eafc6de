//! Birth-family citations
//!
//! Renders a person's birth family with the person's row marked and enhanced
//! from the family they later headed.

use std::sync::Arc;

use super::CitationGenerator;
use super::format::not_found_warning;
use super::main_family::{Focus, locate_child};
use crate::algorithm::identity::IdentityMatcher;
use crate::models::{Family, Person};
use crate::names::NameEquivalenceIndex;
use crate::network::FamilyNetwork;

impl CitationGenerator {
    /// Render `as_child_family` from the perspective of one of its children
    ///
    /// # Arguments
    /// * `person` - The person whose birth family this is
    /// * `as_child_family` - The birth family record
    /// * `network` - Network used to find the person's own adult family
    /// * `names` - Equivalence index used to locate the person among the
    ///   children, defaulting to the network's own
    ///
    /// # Returns
    /// The citation text. When the person cannot be found among the children
    /// the family is rendered unmarked, followed by a warning line.
    #[must_use]
    pub fn render_as_child_family(
        &self,
        person: &Person,
        as_child_family: &Family,
        network: Option<&FamilyNetwork>,
        names: Option<&NameEquivalenceIndex>,
    ) -> String {
        let matcher =
            IdentityMatcher::with_optional(names.or_else(|| network.and_then(FamilyNetwork::names)));
        let Some((couple, child)) = locate_child(as_child_family, person, &matcher) else {
            log::warn!(
                "{} not found among the children of {}",
                person.full_name(),
                as_child_family.id
            );
            let mut lines = self.family_lines(as_child_family, None);
            lines.push(not_found_warning(person, &as_child_family.id));
            return lines.join("\n");
        };

        let adult = network.and_then(|network| adult_family_of(person, network, &matcher));
        let focus = Focus {
            couple,
            child,
            linked: adult.as_deref(),
            matcher,
        };
        self.family_lines(as_child_family, Some(&focus)).join("\n")
    }

    /// Render the birth family of a person of the network's main family
    ///
    /// When the birth family did not resolve, only the warning line is
    /// returned.
    #[must_use]
    pub fn render_person_birth_family(
        &self,
        person: &Person,
        network: &FamilyNetwork,
        names: Option<&NameEquivalenceIndex>,
    ) -> String {
        match network.as_child_family(person) {
            Some(birth_family) => {
                self.render_as_child_family(person, &birth_family, Some(network), names)
            }
            None => {
                let reference = person
                    .birth_family
                    .as_deref()
                    .map(str::trim)
                    .filter(|id| !id.is_empty())
                    .unwrap_or("unknown family");
                not_found_warning(person, reference)
            }
        }
    }
}

/// The family `person` headed: a resolved adult family, or the main family
/// itself when the person is one of its spouses
fn adult_family_of(
    person: &Person,
    network: &FamilyNetwork,
    matcher: &IdentityMatcher<'_>,
) -> Option<Arc<Family>> {
    network.as_parent_family(person).or_else(|| {
        network
            .main()
            .spouses()
            .any(|spouse| matcher.same_identity(person, spouse))
            .then(|| network.main_shared())
    })
}
