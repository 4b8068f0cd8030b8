//! The controller-group resolver.
//!
//! One synchronous pass over a fully-materialized snapshot: register
//! every actor in a fresh forest, run the six signal passes, materialize
//! components, filter, aggregate evidence, score, sort. Nothing persists
//! between calls and nothing here performs I/O, so concurrent callers are
//! safe as long as each brings its own input.
//!
//! The resolver is total by design. Malformed links are skipped,
//! non-wallet-shaped strings filtered, missing attributes defaulted, and
//! duplicate actor identifiers collapsed to their first occurrence.
//! Callers that want malformed snapshots reported instead of absorbed use
//! [`ResolutionInput::validate`] before resolving.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::actor::{ActorId, ActorProfile};
use crate::error::ValidationError;
use crate::evidence::EvidenceLedger;
use crate::forest::DisjointForest;
use crate::group::{confidence_score, ControllerGroup};
use crate::signals;

/// Maximum number of distinct evidence reasons kept per group.
const EVIDENCE_CAP: usize = 8;

/// Hard floor on the effective minimum group size.
const MIN_GROUP_FLOOR: usize = 2;

/// A full snapshot of everything the resolver needs for one run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResolutionInput {
    /// One profile per actor under review.
    pub profiles: Vec<ActorProfile>,

    /// Wallet → known funder wallets, gathered externally.
    #[serde(default)]
    pub funders: HashMap<String, Vec<String>>,

    /// Smallest group worth reporting; effectively floored at 2.
    pub min_group_size: usize,
}

impl ResolutionInput {
    /// Creates an input over the given profiles with the default minimum
    /// group size of 2 and no funding data.
    #[must_use]
    pub fn new(profiles: Vec<ActorProfile>) -> Self {
        Self {
            profiles,
            funders: HashMap::new(),
            min_group_size: MIN_GROUP_FLOOR,
        }
    }

    /// Sets the wallet → funder-wallets mapping.
    #[must_use]
    pub fn with_funders(mut self, funders: HashMap<String, Vec<String>>) -> Self {
        self.funders = funders;
        self
    }

    /// Sets the minimum group size.
    #[must_use]
    pub fn with_min_group_size(mut self, min_group_size: usize) -> Self {
        self.min_group_size = min_group_size;
        self
    }

    /// Strict validation for callers that prefer errors over filtering.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] on an empty actor identifier, a
    /// duplicated actor identifier, or a zero minimum group size. None of
    /// these conditions stop [`resolve`], which absorbs them instead.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.min_group_size == 0 {
            return Err(ValidationError::ZeroMinGroupSize);
        }
        let mut seen: HashSet<&str> = HashSet::new();
        for profile in &self.profiles {
            if profile.id.is_empty() {
                return Err(ValidationError::EmptyActorId);
            }
            if !seen.insert(profile.id.as_str()) {
                return Err(ValidationError::DuplicateActor {
                    id: profile.id.clone(),
                });
            }
        }
        Ok(())
    }
}

/// The result of one resolver run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Resolution {
    /// Surviving groups, sorted by descending score then descending size.
    pub groups: Vec<ControllerGroup>,

    /// Grouped actor → its group's id. Filtered-out actors are absent.
    pub group_of: BTreeMap<ActorId, usize>,
}

/// Groups the snapshot's actors into controller groups.
///
/// Deterministic for fixed input: member lists and evidence lists are
/// sorted before being returned, components are enumerated in sorted root
/// order when ids are assigned, and the final ordering is score
/// descending with member count breaking ties. Ids are not renumbered
/// after the sort.
#[must_use]
pub fn resolve(input: &ResolutionInput) -> Resolution {
    let profiles = dedup_profiles(&input.profiles);

    let mut forest = DisjointForest::new();
    for profile in profiles.iter() {
        forest.insert(profile.id.as_str());
    }

    let mut ledger = EvidenceLedger::new();
    signals::shared_links(&mut forest, &mut ledger, &profiles);
    signals::shared_domains(&mut forest, &mut ledger, &profiles);
    signals::shared_stems(&mut forest, &mut ledger, &profiles);
    signals::cross_platform_handles(&mut forest, &mut ledger, &profiles);
    signals::shared_wallets(&mut forest, &mut ledger, &profiles);
    signals::common_funders(&mut forest, &mut ledger, &input.funders);

    let mut components: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for profile in profiles.iter() {
        components
            .entry(forest.find(profile.id.as_str()))
            .or_default()
            .push(profile.id.to_string());
    }

    let floor = input.min_group_size.max(MIN_GROUP_FLOOR);
    let mut groups: Vec<ControllerGroup> = Vec::new();
    for (_root, mut members) in components {
        if members.len() < floor {
            continue;
        }
        members.sort();
        let evidence = collect_evidence(&ledger, &members);
        let score = confidence_score(members.len(), &evidence);
        groups.push(ControllerGroup {
            id: groups.len(),
            members: members.into_iter().map(ActorId::new).collect(),
            score,
            evidence,
        });
    }

    groups.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| b.members.len().cmp(&a.members.len()))
    });

    let group_of = groups
        .iter()
        .flat_map(|group| group.members.iter().map(|member| (member.clone(), group.id)))
        .collect();

    Resolution { groups, group_of }
}

/// Keeps the first occurrence of each actor identifier.
fn dedup_profiles(profiles: &[ActorProfile]) -> Cow<'_, [ActorProfile]> {
    let mut seen: HashSet<&str> = HashSet::new();
    let unique = profiles.iter().all(|p| seen.insert(p.id.as_str()));
    if unique {
        return Cow::Borrowed(profiles);
    }

    let mut seen: HashSet<&str> = HashSet::new();
    let deduped: Vec<ActorProfile> = profiles
        .iter()
        .filter(|p| seen.insert(p.id.as_str()))
        .cloned()
        .collect();
    Cow::Owned(deduped)
}

/// Gathers up to [`EVIDENCE_CAP`] distinct reasons for a sorted member
/// list by scanning its unordered pairs in order.
///
/// The scan stops entirely once the cap is reached; whichever reasons
/// turn up first in sorted-member order win. The surviving reasons are
/// then sorted for stable presentation.
fn collect_evidence(ledger: &EvidenceLedger, members: &[String]) -> Vec<String> {
    let mut evidence: Vec<String> = Vec::new();
    'scan: for (i, a) in members.iter().enumerate() {
        for b in &members[i + 1..] {
            let Some(reasons) = ledger.reasons(a, b) else {
                continue;
            };
            for reason in reasons {
                if !evidence.iter().any(|seen| seen == reason) {
                    evidence.push(reason.clone());
                    if evidence.len() >= EVIDENCE_CAP {
                        break 'scan;
                    }
                }
            }
        }
    }
    evidence.sort();
    evidence
}
