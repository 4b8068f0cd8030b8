//! Wallet-shaped string recognition and extraction.
//!
//! "Wallet" here means a syntactically-EVM-shaped string: `0x` followed by
//! exactly 40 hex digits. No on-chain verification happens anywhere in
//! this crate; the shape is a textual proxy for an account. All matches
//! are normalized to lowercase before any set membership or output.

use std::collections::BTreeSet;
use std::sync::OnceLock;

use regex::Regex;

use crate::actor::ActorProfile;

fn wallet_exact() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^0x[0-9a-fA-F]{40}$").expect("wallet shape regex is valid"))
}

fn wallet_scan() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b0x[0-9a-fA-F]{40}\b").expect("wallet scan regex is valid"))
}

/// Returns true if `s` is exactly `0x` + 40 hex digits, case-insensitive.
#[must_use]
pub fn is_wallet_shaped(s: &str) -> bool {
    wallet_exact().is_match(s)
}

/// Lowercases `s` if it is wallet-shaped, `None` otherwise.
#[must_use]
pub fn normalize_wallet(s: &str) -> Option<String> {
    is_wallet_shaped(s).then(|| s.to_lowercase())
}

/// Scans free text for wallet-shaped substrings at word boundaries.
///
/// Matches come back lowercased, duplicates included; callers that need a
/// set de-duplicate themselves.
///
/// # Examples
///
/// ```
/// use syndic::wallet::scan_text;
///
/// let found = scan_text("pay 0xABCDEFabcdef0123456789ABCDEFabcdef012345 thanks");
/// assert_eq!(found, vec!["0xabcdefabcdef0123456789abcdefabcdef012345"]);
/// ```
#[must_use]
pub fn scan_text(text: &str) -> Vec<String> {
    wallet_scan()
        .find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .collect()
}

/// Collects the deduplicated wallet candidates attributable to one actor.
///
/// Sources, in order: the bio text, the space-joined concatenation of the
/// actor's links, externally-supplied extra wallets, and the actor
/// identifier itself when it is wallet-shaped. Non-wallet-shaped extras
/// are filtered, not rejected.
#[must_use]
pub fn profile_wallets(profile: &ActorProfile) -> BTreeSet<String> {
    let mut wallets: BTreeSet<String> = BTreeSet::new();

    wallets.extend(scan_text(&profile.bio));
    wallets.extend(scan_text(&profile.links.join(" ")));
    wallets.extend(
        profile
            .extra_wallets
            .iter()
            .filter_map(|w| normalize_wallet(w)),
    );
    if let Some(own) = normalize_wallet(profile.id.as_str()) {
        wallets.insert(own);
    }

    wallets
}
