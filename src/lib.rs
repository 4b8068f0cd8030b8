//! # Syndic - controller-group entity resolution
//!
//! Syndic groups a snapshot of actor identifiers (social handles, wallet
//! addresses) into *controller groups*: clusters hypothesized to be run
//! by the same real-world entity, inferred from weak, independently
//! gathered signals: shared links, shared uncommon domains, shared
//! handle stems, cross-platform handle matches, shared wallet addresses,
//! and common funding sources.
//!
//! ## Core Concepts
//!
//! - **Actor**: an opaque identifier for a reviewed entity
//! - **Signal pass**: one heuristic rule that merges actors or wallets
//!   sharing an extracted feature
//! - **Evidence**: human-readable reasons recorded per directly-unioned pair
//! - **Controller group**: a scored, evidence-bearing cluster of actors
//!
//! ## Usage
//!
//! ```rust
//! use syndic::{ActorProfile, ResolutionInput};
//!
//! let input = ResolutionInput::new(vec![
//!     ActorProfile::new("x:alice"),
//!     ActorProfile::new("y:alice"),
//! ]);
//!
//! let resolution = syndic::resolve(&input);
//! assert_eq!(resolution.groups.len(), 1);
//! assert_eq!(
//!     resolution.groups[0].evidence,
//!     vec!["Same handle across platforms: alice".to_string()],
//! );
//! ```
//!
//! The resolver is pure and synchronous: it never performs I/O, never
//! fails on malformed input, and produces identical output for identical
//! input. "Wallet" throughout means a syntactically-EVM-shaped string;
//! nothing is verified on-chain.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod actor;
pub mod domain;
pub mod error;
pub mod evidence;
pub mod forest;
pub mod group;
pub mod resolver;
pub mod signals;
pub mod store;
pub mod wallet;

// Re-export primary types at crate root for convenience
pub use actor::{ActorId, ActorProfile};
pub use error::{SyndicError, SyndicResult, ValidationError};
pub use evidence::{EvidenceLedger, PairKey};
pub use forest::DisjointForest;
pub use group::{confidence_score, ControllerGroup};
pub use resolver::{resolve, Resolution, ResolutionInput};
pub use store::{
    InMemoryReviewStore, ReviewDecision, ReviewStore, ReviewVerdict, StorageError,
};
