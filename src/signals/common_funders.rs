//! Common-funder pass (high signal).

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::evidence::EvidenceLedger;
use crate::forest::DisjointForest;
use crate::wallet::normalize_wallet;

use super::union_members;

/// Minimum number of distinct funded wallets per funder.
const MIN_FUNDED: usize = 2;

/// Unions wallets that received funds from the same funder wallet.
///
/// Works on the caller-supplied wallet → funder-wallets mapping, inverted
/// into funder → funded set. Non-wallet-shaped strings on either side are
/// ignored; everything is lowercased first.
///
/// This pass unions *wallet strings* as forest nodes, not actors. It only
/// moves actor grouping when those wallet nodes are already reachable
/// from actors: either because the shared-wallet pass inserted them, or
/// because an actor identifier is itself the lowercase wallet string.
/// Funder unions over wallets nothing references are deliberately inert.
pub fn common_funders(
    forest: &mut DisjointForest,
    ledger: &mut EvidenceLedger,
    funders: &HashMap<String, Vec<String>>,
) {
    let mut funded: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    for (wallet, funder_list) in funders {
        let Some(wallet) = normalize_wallet(wallet) else {
            continue;
        };
        for funder in funder_list {
            let Some(funder) = normalize_wallet(funder) else {
                continue;
            };
            funded.entry(funder).or_default().insert(wallet.clone());
        }
    }

    for (funder, wallets) in &funded {
        if wallets.len() < MIN_FUNDED {
            continue;
        }
        let members: Vec<String> = wallets.iter().cloned().collect();
        union_members(forest, ledger, &members, &format!("Common funder: {funder}"));
    }
}
