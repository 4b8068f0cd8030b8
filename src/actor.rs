//! Actor identity and per-actor input attributes.
//!
//! An actor identifier is the unit the resolver partitions: an opaque
//! string naming a reviewed entity, typically a platform-qualified handle
//! (`"platform:name"`) or a raw wallet-looking string. Actor identifiers
//! are caller-supplied and never generated or rewritten by the resolver.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Minimum character length for a base handle to count as a
/// cross-platform match signal. Shorter handles are too ambiguous.
pub const BASE_HANDLE_MIN_LEN: usize = 3;

/// Opaque actor identifier.
///
/// Identifiers compare and sort as plain strings; lexicographic order is
/// what makes member lists and evidence scans deterministic.
///
/// # Examples
///
/// ```
/// use syndic::ActorId;
///
/// let id = ActorId::new("farcaster:alice");
/// assert_eq!(id.as_str(), "farcaster:alice");
/// assert_eq!(id.base_handle().as_deref(), Some("alice"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActorId(String);

impl ActorId {
    /// Creates an actor identifier from any string-like value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the identifier is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Extracts the platform-independent base handle, if any.
    ///
    /// Identifiers shaped `"<platform>:<handle...>"` yield everything after
    /// the first `:`, trimmed and lowercased. Identifiers without a
    /// separator, and base handles shorter than [`BASE_HANDLE_MIN_LEN`]
    /// characters, yield `None`.
    #[must_use]
    pub fn base_handle(&self) -> Option<String> {
        let (_, rest) = self.0.split_once(':')?;
        let base = rest.trim().to_lowercase();
        if base.chars().count() < BASE_HANDLE_MIN_LEN {
            return None;
        }
        Some(base)
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ActorId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ActorId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for ActorId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Everything the caller knows about one actor, fully materialized.
///
/// All attribute fields default to empty; the resolver treats missing
/// data as the absence of a signal, never as an error.
///
/// # Examples
///
/// ```
/// use syndic::ActorProfile;
///
/// let profile = ActorProfile::new("x:alice")
///     .with_links(["https://alice.example"])
///     .with_bio("payouts to 0x1111111111111111111111111111111111111111")
///     .with_handle_stem("alice");
/// assert_eq!(profile.links.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActorProfile {
    /// The actor being described.
    pub id: ActorId,

    /// Raw link strings gathered for this actor (may be malformed).
    #[serde(default)]
    pub links: Vec<String>,

    /// Free-text bio, scanned for wallet-shaped substrings.
    #[serde(default)]
    pub bio: String,

    /// Precomputed normalized handle stem, supplied by the caller.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handle_stem: Option<String>,

    /// Additional wallet strings known for this actor from external sources.
    #[serde(default)]
    pub extra_wallets: Vec<String>,
}

impl ActorProfile {
    /// Creates a profile with the given identifier and no attributes.
    #[must_use]
    pub fn new(id: impl Into<ActorId>) -> Self {
        Self {
            id: id.into(),
            links: Vec::new(),
            bio: String::new(),
            handle_stem: None,
            extra_wallets: Vec::new(),
        }
    }

    /// Sets the link list.
    #[must_use]
    pub fn with_links<I, S>(mut self, links: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.links = links.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the bio text.
    #[must_use]
    pub fn with_bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = bio.into();
        self
    }

    /// Sets the precomputed handle stem.
    #[must_use]
    pub fn with_handle_stem(mut self, stem: impl Into<String>) -> Self {
        self.handle_stem = Some(stem.into());
        self
    }

    /// Sets the externally-known wallet list.
    #[must_use]
    pub fn with_extra_wallets<I, S>(mut self, wallets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_wallets = wallets.into_iter().map(Into::into).collect();
        self
    }
}
