//! Wallet-address reuse pass (high signal).

use std::collections::BTreeMap;

use crate::actor::ActorProfile;
use crate::evidence::EvidenceLedger;
use crate::forest::DisjointForest;
use crate::wallet::profile_wallets;

use super::union_members;

/// Minimum number of actors holding one wallet.
const MIN_ACTORS: usize = 2;

/// Unions actors whose extracted wallet sets overlap.
///
/// Candidates per actor come from [`profile_wallets`]: bio text, the
/// concatenated links, externally-supplied extras, and the actor
/// identifier itself when wallet-shaped, all deduplicated and lowercased.
///
/// For every wallet held by at least two actors, the owners are unioned
/// (with evidence) and the lowercase wallet string itself is unioned into
/// the component as a bare node, without a ledger entry. That silent edge
/// is what lets the common-funder pass, which unions wallet strings only,
/// reach actor components at all; a wallet held by fewer than two actors
/// inserts no node, leaving funder unions over it inert.
pub fn shared_wallets(
    forest: &mut DisjointForest,
    ledger: &mut EvidenceLedger,
    profiles: &[ActorProfile],
) {
    let mut owners: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for profile in profiles {
        for wallet in profile_wallets(profile) {
            owners.entry(wallet).or_default().push(profile.id.to_string());
        }
    }

    for (wallet, members) in &owners {
        if members.len() < MIN_ACTORS {
            continue;
        }
        union_members(forest, ledger, members, &format!("Shared wallet: {wallet}"));
        if let Some(first) = members.first() {
            forest.union(first, wallet);
        }
    }
}
