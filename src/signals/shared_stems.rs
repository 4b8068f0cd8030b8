//! Shared handle-stem pass (low/medium signal, needs volume).

use std::collections::BTreeMap;

use crate::actor::ActorProfile;
use crate::evidence::EvidenceLedger;
use crate::forest::DisjointForest;

use super::union_members;

/// Minimum number of actors sharing one handle stem.
///
/// Stems collide easily (think `crypto`, `official`), so this pass only
/// fires once a stem looks like a naming scheme rather than a
/// coincidence.
const MIN_ACTORS: usize = 4;

/// Unions actors whose precomputed handle stems match.
///
/// Stem computation is the caller's concern; profiles without a stem (or
/// with an empty one) simply sit this pass out.
pub fn shared_stems(
    forest: &mut DisjointForest,
    ledger: &mut EvidenceLedger,
    profiles: &[ActorProfile],
) {
    let mut by_stem: BTreeMap<&str, Vec<String>> = BTreeMap::new();
    for profile in profiles {
        let Some(stem) = profile.handle_stem.as_deref() else {
            continue;
        };
        if stem.is_empty() {
            continue;
        }
        by_stem.entry(stem).or_default().push(profile.id.to_string());
    }

    for (stem, members) in &by_stem {
        if members.len() < MIN_ACTORS {
            continue;
        }
        union_members(
            forest,
            ledger,
            members,
            &format!("Shared handle stem: {stem}"),
        );
    }
}
