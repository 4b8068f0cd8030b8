//! Error types for syndic.
//!
//! The resolver itself is total: malformed links, non-wallet-shaped
//! strings, and missing attributes are filtered or defaulted, never
//! raised. Errors exist only at the edges: strict input validation for
//! callers who opt into it, and the review-decision store contract.

use thiserror::Error;

use crate::actor::ActorId;

/// Input-validation errors reported by [`crate::ResolutionInput::validate`].
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The same actor identifier appears more than once in the snapshot.
    #[error("Duplicate actor identifier: {id}")]
    DuplicateActor {
        /// The repeated identifier.
        id: ActorId,
    },

    /// An actor identifier is the empty string.
    #[error("Actor identifier cannot be empty")]
    EmptyActorId,

    /// The requested minimum group size is zero.
    #[error("Minimum group size must be at least 1 (got 0)")]
    ZeroMinGroupSize,
}

/// Top-level error type for syndic.
#[derive(Debug, Error)]
pub enum SyndicError {
    /// Input validation failed.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A review-store operation failed.
    #[error("Storage error: {0}")]
    Storage(#[from] crate::store::StorageError),
}

/// Result type alias for syndic operations.
pub type SyndicResult<T> = Result<T, SyndicError>;
