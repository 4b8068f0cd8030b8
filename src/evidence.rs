//! Per-pair evidence ledger.
//!
//! Every direct union performed by a signal pass records a human-readable
//! reason against the unordered pair it joined. Transitively-connected
//! pairs never get their own entry; their evidence surfaces later through
//! the group-level aggregation, which ORs reasons across all intra-group
//! pairs that do have entries.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Canonical unordered pair of node identifiers.
///
/// The lexicographically smaller identifier is always stored first, so
/// `(a, b)` and `(b, a)` address the same ledger slot.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PairKey {
    first: String,
    second: String,
}

impl PairKey {
    /// Builds the canonical key for an unordered pair.
    #[must_use]
    pub fn new(a: &str, b: &str) -> Self {
        if a <= b {
            Self {
                first: a.to_string(),
                second: b.to_string(),
            }
        } else {
            Self {
                first: b.to_string(),
                second: a.to_string(),
            }
        }
    }

    /// The smaller identifier.
    #[must_use]
    pub fn first(&self) -> &str {
        &self.first
    }

    /// The larger identifier.
    #[must_use]
    pub fn second(&self) -> &str {
        &self.second
    }
}

impl fmt::Display for PairKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <> {}", self.first, self.second)
    }
}

/// Sparse symmetric relation from actor/wallet pairs to reason strings.
///
/// Reasons are deduplicated per pair and iterated in sorted order, so a
/// ledger built from the same unions always reads back identically.
#[derive(Debug, Default, Clone)]
pub struct EvidenceLedger {
    entries: BTreeMap<PairKey, BTreeSet<String>>,
}

impl EvidenceLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `reason` against the unordered pair `(a, b)`.
    pub fn record(&mut self, a: &str, b: &str, reason: impl Into<String>) {
        self.entries
            .entry(PairKey::new(a, b))
            .or_default()
            .insert(reason.into());
    }

    /// Returns the reasons recorded for `(a, b)`, if any.
    #[must_use]
    pub fn reasons(&self, a: &str, b: &str) -> Option<&BTreeSet<String>> {
        self.entries.get(&PairKey::new(a, b))
    }

    /// Number of pairs with at least one recorded reason.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
