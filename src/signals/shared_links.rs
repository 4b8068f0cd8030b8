//! Shared exact-link pass (high signal).

use std::collections::BTreeMap;

use crate::actor::ActorProfile;
use crate::evidence::EvidenceLedger;
use crate::forest::DisjointForest;

use super::union_members;

/// Minimum number of actors sharing one identical link.
const MIN_ACTORS: usize = 2;

/// Unions actors that published the same exact link string.
///
/// Two unrelated actors rarely post byte-identical links; when they do it
/// is usually a payment page, invite, or landing page they both control.
/// Empty link strings carry no signal and are skipped.
pub fn shared_links(
    forest: &mut DisjointForest,
    ledger: &mut EvidenceLedger,
    profiles: &[ActorProfile],
) {
    let mut by_link: BTreeMap<&str, Vec<String>> = BTreeMap::new();
    for profile in profiles {
        for link in &profile.links {
            if link.trim().is_empty() {
                continue;
            }
            by_link
                .entry(link.as_str())
                .or_default()
                .push(profile.id.to_string());
        }
    }

    for (link, members) in &by_link {
        if members.len() < MIN_ACTORS {
            continue;
        }
        union_members(forest, ledger, members, &format!("Shared link: {link}"));
    }
}
