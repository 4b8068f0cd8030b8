//! The signal passes that drive grouping.
//!
//! Each pass is a free function over `(&mut DisjointForest, &mut
//! EvidenceLedger)` plus its own slice of the input: it groups actors (or
//! wallets) by one extracted feature, unions every set that clears the
//! pass's threshold, and records one reason string per directly-unioned
//! pair. Passes only interact through the shared forest and ledger, so
//! each is unit-testable in isolation and their combined effect is
//! independent of pass order; only the evidence text differs per pass.
//!
//! Grouping tables are `BTreeMap`s filled in input-profile order, so both
//! which pairs are directly unioned and the order unions happen in are
//! fully determined by the input.

mod common_funders;
mod cross_platform;
mod shared_domains;
mod shared_links;
mod shared_stems;
mod shared_wallets;

pub use common_funders::common_funders;
pub use cross_platform::cross_platform_handles;
pub use shared_domains::shared_domains;
pub use shared_links::shared_links;
pub use shared_stems::shared_stems;
pub use shared_wallets::shared_wallets;

use crate::evidence::EvidenceLedger;
use crate::forest::DisjointForest;

/// Unions a feature group: the first member is joined with each
/// subsequent member, and only those pairs get a ledger entry.
pub(crate) fn union_members(
    forest: &mut DisjointForest,
    ledger: &mut EvidenceLedger,
    members: &[String],
    reason: &str,
) {
    let Some((first, rest)) = members.split_first() else {
        return;
    };
    for member in rest {
        forest.union(first, member);
        ledger.record(first, member, reason);
    }
}
