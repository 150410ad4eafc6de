//! Cross-reference resolver
//!
//! One resolution fans out over every reference found in the main family,
//! bounded by [`ResolverConfig::concurrency`]. Results come back in request
//! order, so two runs over the same inputs build the same network.
//!
//! A reference that cannot be fetched, parsed or validated is logged and left
//! out. Cancellation, or any error that is not a reference failure, aborts the
//! resolution.

use std::sync::Arc;
use std::time::Instant;

use futures::stream::{self, StreamExt};
use rustc_hash::FxHashSet;

use super::cancel::CancelFlag;
use super::collaborators::{FallbackSearch, FamilyParser, FamilyTextSource, NoFallback};
use super::stats::{ResolutionStats, StatsSnapshot};
use crate::algorithm::identity::IdentityMatcher;
use crate::config::ResolverConfig;
use crate::error::{Result, XrefError};
use crate::models::{Family, Person};
use crate::names::NameEquivalenceIndex;
use crate::network::{FamilyNetwork, LinkKind, PersonKey};
use crate::utils::logging::{log_extraction_start, log_links_resolved, log_reference_skipped};

/// One reference to follow
#[derive(Debug, Clone)]
enum LinkRequest {
    /// Parent of the main family and the id of their birth family
    BirthFamily { person: Person, reference: String },
    /// Married child of the main family and the id of their adult family
    AdultFamily { person: Person, reference: String },
}

/// A resolved link waiting to be merged into the network
#[derive(Debug)]
struct Link {
    kind: LinkKind,
    key: PersonKey,
    family: Arc<Family>,
}

/// Resolves the cross-references of family records
pub struct CrossReferenceResolver {
    source: Arc<dyn FamilyTextSource>,
    parser: Arc<dyn FamilyParser>,
    fallback: Arc<dyn FallbackSearch>,
    names: Arc<NameEquivalenceIndex>,
    config: ResolverConfig,
    stats: ResolutionStats,
}

impl CrossReferenceResolver {
    /// Create a resolver with default configuration and no fallback search
    ///
    /// # Arguments
    /// * `source` - Where raw family text is looked up
    /// * `parser` - How raw text becomes a [`Family`]
    /// * `names` - Snapshot of the name-equivalence index used for validation
    #[must_use]
    pub fn new(
        source: Arc<dyn FamilyTextSource>,
        parser: Arc<dyn FamilyParser>,
        names: Arc<NameEquivalenceIndex>,
    ) -> Self {
        Self {
            source,
            parser,
            fallback: Arc::new(NoFallback),
            names,
            config: ResolverConfig::default(),
            stats: ResolutionStats::default(),
        }
    }

    /// Set the resolver configuration
    #[must_use]
    pub fn with_config(mut self, config: ResolverConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the search used when a direct reference fails to validate
    #[must_use]
    pub fn with_fallback(mut self, fallback: Arc<dyn FallbackSearch>) -> Self {
        self.fallback = fallback;
        self
    }

    /// Replace the name-equivalence snapshot used for later resolutions
    #[must_use]
    pub fn with_names(mut self, names: Arc<NameEquivalenceIndex>) -> Self {
        self.names = names;
        self
    }

    /// The name-equivalence snapshot in use
    #[must_use]
    pub fn names(&self) -> &NameEquivalenceIndex {
        &self.names
    }

    /// The configuration in use
    #[must_use]
    pub const fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Counters accumulated over every resolution run by this resolver
    #[must_use]
    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }

    /// Fetch, parse and resolve a family by id
    ///
    /// # Errors
    /// Returns [`XrefError::LookupFailure`] if the id is unknown to the text
    /// source, or the parser's error if its text cannot be parsed.
    pub async fn extract(&self, family_id: &str) -> Result<FamilyNetwork> {
        self.extract_with_cancel(family_id, &CancelFlag::new()).await
    }

    /// [`Self::extract`] that stops when `cancel` is set
    ///
    /// # Errors
    /// As [`Self::extract`], plus [`XrefError::Cancelled`].
    pub async fn extract_with_cancel(
        &self,
        family_id: &str,
        cancel: &CancelFlag,
    ) -> Result<FamilyNetwork> {
        log_extraction_start(family_id);
        cancel.check()?;
        let family = self.fetch(family_id, cancel).await?;
        self.resolve_with_cancel(family, cancel).await
    }

    /// Resolve the references of an already parsed family
    ///
    /// # Errors
    /// Unresolvable references are left out of the network rather than
    /// reported. Shares the error type of [`Self::resolve_with_cancel`].
    pub async fn resolve(&self, family: Family) -> Result<FamilyNetwork> {
        self.resolve_with_cancel(family, &CancelFlag::new()).await
    }

    /// Resolve the references of a family, stopping when `cancel` is set
    ///
    /// # Errors
    /// Returns [`XrefError::Cancelled`] if cancellation was requested before
    /// the network was complete. A partial network is never returned.
    pub async fn resolve_with_cancel(
        &self,
        family: Family,
        cancel: &CancelFlag,
    ) -> Result<FamilyNetwork> {
        let start = Instant::now();
        let main = Arc::new(family);
        let requests = collect_requests(&main);
        log::debug!("{} references to follow in {}", requests.len(), main.id);

        let main_ref: &Family = &main;
        let outcomes = stream::iter(requests)
            .map(move |request| self.resolve_request(main_ref, request, cancel))
            .buffered(self.config.concurrency())
            .collect::<Vec<_>>()
            .await;

        cancel.check()?;
        let mut network =
            FamilyNetwork::from_shared(Arc::clone(&main)).with_names(Arc::clone(&self.names));
        let mut linked = 0;
        for outcome in outcomes {
            for link in outcome? {
                network.insert(link.kind, &link.key, link.family);
                linked += 1;
            }
        }

        log_links_resolved(&main.id, linked, Some(start.elapsed()));
        Ok(network)
    }

    async fn resolve_request(
        &self,
        main: &Family,
        request: LinkRequest,
        cancel: &CancelFlag,
    ) -> Result<Vec<Link>> {
        match request {
            LinkRequest::BirthFamily { person, reference } => {
                let resolved = self
                    .resolve_reference(&person, &reference, LinkKind::AsChild, cancel)
                    .await?;
                Ok(resolved
                    .map(|family| {
                        vec![Link {
                            kind: LinkKind::AsChild,
                            key: PersonKey::for_person(&person, Some(&main.id)),
                            family,
                        }]
                    })
                    .unwrap_or_default())
            }
            LinkRequest::AdultFamily { person, reference } => {
                let Some(adult) = self
                    .resolve_reference(&person, &reference, LinkKind::AsParent, cancel)
                    .await?
                else {
                    return Ok(Vec::new());
                };

                let spouse_link = if self.config.resolve_spouses {
                    self.capture_spouse(&person, &adult, cancel).await?
                } else {
                    None
                };

                let mut links = vec![Link {
                    kind: LinkKind::AsParent,
                    key: PersonKey::for_person(&person, Some(&main.id)),
                    family: adult,
                }];
                links.extend(spouse_link);
                Ok(links)
            }
        }
    }

    /// Locate the child's spouse in their adult family and follow the
    /// spouse's own birth-family reference
    async fn capture_spouse(
        &self,
        child: &Person,
        adult: &Family,
        cancel: &CancelFlag,
    ) -> Result<Option<Link>> {
        let Some(spouse_name) = child.spouse_name() else {
            return Ok(None);
        };

        let matcher = IdentityMatcher::new(&self.names);
        let Some(spouse) = adult
            .spouses()
            .filter(|candidate| !matcher.same_identity(child, candidate))
            .find(|candidate| matcher.names_person(spouse_name, candidate))
        else {
            log::debug!("Spouse {spouse_name} of {} not found in {}", child.name, adult.id);
            return Ok(None);
        };

        let Some(reference) = non_blank(spouse.birth_family.as_deref()) else {
            return Ok(None);
        };

        Ok(self
            .resolve_reference(spouse, reference, LinkKind::SpouseAsChild, cancel)
            .await?
            .map(|family| Link {
                kind: LinkKind::SpouseAsChild,
                key: PersonKey::for_person(spouse, Some(&adult.id)),
                family,
            }))
    }

    /// Fetch a referenced family and accept it only if `person` appears in it
    /// in the expected role
    ///
    /// Reference failures are logged and counted. Any other error, including
    /// cancellation, is returned.
    async fn resolve_reference(
        &self,
        person: &Person,
        reference: &str,
        kind: LinkKind,
        cancel: &CancelFlag,
    ) -> Result<Option<Arc<Family>>> {
        cancel.check()?;
        let error = match self.fetch(reference, cancel).await {
            Ok(candidate) => match self.validate(person, &candidate, kind) {
                Ok(()) => {
                    self.stats.record_resolved_by_id();
                    return Ok(Some(Arc::new(candidate)));
                }
                Err(e) => e,
            },
            Err(e) if e.is_reference_failure() => e,
            Err(e) => return Err(e),
        };
        log_reference_skipped(&person.full_name(), reference, &error);

        // The fallback runs only for a candidate that was found and rejected.
        if matches!(error, XrefError::ValidationFailure(_)) {
            cancel.check()?;
            if let Some(found) = self.fallback.search(person, kind).await {
                match self.validate(person, &found, kind) {
                    Ok(()) => {
                        log::info!("Resolved {} through fallback search as {}", person.name, found.id);
                        self.stats.record_resolved_by_fallback();
                        return Ok(Some(Arc::new(found)));
                    }
                    Err(e) => log_reference_skipped(&person.full_name(), &found.id, &e),
                }
            }
        }

        self.stats.record_unresolved();
        Ok(None)
    }

    async fn fetch(&self, family_id: &str, cancel: &CancelFlag) -> Result<Family> {
        let text = self
            .source
            .lookup_text(family_id)
            .await
            .ok_or_else(|| XrefError::LookupFailure(family_id.to_string()))?;
        cancel.check()?;
        self.parser.parse(family_id, &text).await?.validate()
    }

    /// Check that `person` appears in `candidate` in the role `kind` expects
    fn validate(&self, person: &Person, candidate: &Family, kind: LinkKind) -> Result<()> {
        let matcher = IdentityMatcher::new(&self.names);
        let found = match kind {
            LinkKind::AsChild | LinkKind::SpouseAsChild => matcher.find(person, candidate.children()),
            LinkKind::AsParent => matcher.find(person, candidate.spouses()),
        };

        let Some(matched) = found else {
            let role = match kind {
                LinkKind::AsChild | LinkKind::SpouseAsChild => "a child",
                LinkKind::AsParent => "a spouse",
            };
            return Err(XrefError::ValidationFailure(format!(
                "{} is not {role} in {}",
                person.full_name(),
                candidate.id
            )));
        };

        log::debug!(
            "{} matched {} in {} by {:?}",
            person.name,
            matched.name,
            candidate.id,
            matcher.match_reason(person, matched)
        );
        Ok(())
    }
}

/// Every reference of the main family, in record order, without duplicates
fn collect_requests(family: &Family) -> Vec<LinkRequest> {
    let mut seen = FxHashSet::default();
    let mut requests = Vec::new();

    for parent in family.spouses() {
        if let Some(reference) = non_blank(parent.birth_family.as_deref()) {
            let key = PersonKey::for_person(parent, Some(&family.id));
            if seen.insert((LinkKind::AsChild, key, reference.to_string())) {
                requests.push(LinkRequest::BirthFamily {
                    person: parent.clone(),
                    reference: reference.to_string(),
                });
            }
        }
    }

    for child in family.children().filter(|child| child.is_married()) {
        if let Some(reference) = non_blank(child.adult_family.as_deref()) {
            let key = PersonKey::for_person(child, Some(&family.id));
            if seen.insert((LinkKind::AsParent, key, reference.to_string())) {
                requests.push(LinkRequest::AdultFamily {
                    person: child.clone(),
                    reference: reference.to_string(),
                });
            }
        }
    }

    requests
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
