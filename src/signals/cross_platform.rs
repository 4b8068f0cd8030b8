//! Cross-platform identical base-handle pass.

use std::collections::BTreeMap;

use crate::actor::ActorProfile;
use crate::evidence::EvidenceLedger;
use crate::forest::DisjointForest;

use super::union_members;

/// Minimum number of actors sharing one base handle.
const MIN_ACTORS: usize = 2;

/// Unions actors that use the same base handle on different platforms.
///
/// Base-handle extraction lives on [`crate::ActorId`]: everything after
/// the first `:` separator, trimmed and lowercased, skipped entirely when
/// no separator exists or the result is shorter than
/// [`crate::actor::BASE_HANDLE_MIN_LEN`] characters.
pub fn cross_platform_handles(
    forest: &mut DisjointForest,
    ledger: &mut EvidenceLedger,
    profiles: &[ActorProfile],
) {
    let mut by_base: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for profile in profiles {
        let Some(base) = profile.id.base_handle() else {
            continue;
        };
        by_base.entry(base).or_default().push(profile.id.to_string());
    }

    for (base, members) in &by_base {
        if members.len() < MIN_ACTORS {
            continue;
        }
        union_members(
            forest,
            ledger,
            members,
            &format!("Same handle across platforms: {base}"),
        );
    }
}
