//! Controller groups and confidence scoring.

use serde::{Deserialize, Serialize};

use crate::actor::ActorId;

/// Base score every surviving group starts from.
const BASE_SCORE: f64 = 0.25;

/// Cap on the size-ramp bonus.
const SIZE_BONUS_CAP: f64 = 0.25;

/// Bonus when any evidence reason is a shared-wallet match.
const WALLET_BONUS: f64 = 0.25;

/// Bonus when any evidence reason is a common-funder match.
const FUNDER_BONUS: f64 = 0.25;

/// Bonus when any evidence reason is an exact shared link.
const LINK_BONUS: f64 = 0.15;

/// Bonus when any evidence reason is a shared uncommon domain.
const DOMAIN_BONUS: f64 = 0.10;

/// A cluster of actors hypothesized to share a controlling entity.
///
/// `id` is assigned in component-enumeration order and is *not*
/// renumbered after the output list is sorted by score; it identifies the
/// group within one resolution, nothing more. Members are sorted
/// lexicographically and `evidence` holds at most eight distinct reason
/// strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControllerGroup {
    /// Sequential group identifier within this resolution.
    pub id: usize,

    /// Sorted member actor identifiers.
    pub members: Vec<ActorId>,

    /// Heuristic confidence in [0, 1].
    pub score: f64,

    /// Up to eight distinct evidence reason strings.
    pub evidence: Vec<String>,
}

impl ControllerGroup {
    /// Number of member actors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Groups are never empty in practice, but the usual pairing exists.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Computes the fixed heuristic confidence score for a group.
///
/// Base 0.25, plus a linear size ramp `min((members - 2) / 10, 0.25)`,
/// plus flat bonuses per evidence category present (shared wallet 0.25,
/// common funder 0.25, shared link 0.15, shared domain 0.10), clamped to
/// 1.0. The bonuses key off reason-string prefixes, which is exactly how
/// the evidence text is generated by the signal passes.
#[must_use]
pub fn confidence_score(member_count: usize, evidence: &[String]) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let ramp = member_count.saturating_sub(2) as f64 / 10.0;
    let mut score = BASE_SCORE + ramp.min(SIZE_BONUS_CAP);

    let has = |prefix: &str| evidence.iter().any(|reason| reason.starts_with(prefix));
    if has("Shared wallet:") {
        score += WALLET_BONUS;
    }
    if has("Common funder:") {
        score += FUNDER_BONUS;
    }
    if has("Shared link:") {
        score += LINK_BONUS;
    }
    if has("Shared domain:") {
        score += DOMAIN_BONUS;
    }

    score.min(1.0)
}
