//! Shared uncommon-domain pass (medium signal).

use std::collections::{BTreeMap, BTreeSet};

use crate::actor::ActorProfile;
use crate::domain::{extract_domain, is_common_domain};
use crate::evidence::EvidenceLedger;
use crate::forest::DisjointForest;

use super::union_members;

/// Minimum number of distinct actors sharing one uncommon domain.
///
/// Three rather than two: small-but-legitimate domains get reused by
/// coincidence often enough that a pair alone is too weak.
const MIN_ACTORS: usize = 3;

/// Unions actors whose links resolve to the same uncommon hostname.
///
/// Each actor contributes its distinct set of extracted domains;
/// malformed links and denylisted platform domains contribute nothing.
pub fn shared_domains(
    forest: &mut DisjointForest,
    ledger: &mut EvidenceLedger,
    profiles: &[ActorProfile],
) {
    let mut by_domain: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for profile in profiles {
        let domains: BTreeSet<String> = profile
            .links
            .iter()
            .filter_map(|link| extract_domain(link))
            .filter(|domain| !is_common_domain(domain))
            .collect();
        for domain in domains {
            by_domain.entry(domain).or_default().push(profile.id.to_string());
        }
    }

    for (domain, members) in &by_domain {
        if members.len() < MIN_ACTORS {
            continue;
        }
        union_members(forest, ledger, members, &format!("Shared domain: {domain}"));
    }
}
