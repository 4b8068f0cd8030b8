//! Review-decision storage.
//!
//! Persistence of per-actor review decisions is an external collaborator:
//! the resolver never reads or writes it. This module defines the
//! contract that collaborator presents (a key-value store keyed by actor
//! identifier) plus a thread-safe in-memory implementation for embedded
//! use and tests.

use std::collections::BTreeMap;
use std::sync::RwLock;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::actor::ActorId;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// No decision recorded for the actor.
    #[error("No review decision for actor: {0}")]
    DecisionNotFound(ActorId),

    /// Backend error.
    #[error("Storage backend error: {0}")]
    BackendError(String),
}

/// A reviewer's verdict on one actor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewVerdict {
    /// Reviewed and considered independently controlled.
    Legitimate,
    /// Flagged for further review.
    Suspect,
    /// Confirmed as part of a controller group.
    Confirmed,
}

/// One persisted review decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewDecision {
    /// The reviewed actor.
    pub actor: ActorId,

    /// The reviewer's verdict.
    pub verdict: ReviewVerdict,

    /// Free-form reviewer note.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    /// When the decision was made or last revised.
    pub decided_at: DateTime<Utc>,
}

impl ReviewDecision {
    /// Creates a decision timestamped now.
    #[must_use]
    pub fn new(actor: impl Into<ActorId>, verdict: ReviewVerdict) -> Self {
        Self {
            actor: actor.into(),
            verdict,
            note: None,
            decided_at: Utc::now(),
        }
    }

    /// Attaches a reviewer note.
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

/// Storage contract for review decisions.
pub trait ReviewStore: Send + Sync {
    /// Get the decision for one actor, if any.
    fn get(&self, actor: &ActorId) -> Result<Option<ReviewDecision>, StorageError>;

    /// Get every stored decision, ordered by actor identifier.
    fn get_all(&self) -> Result<Vec<ReviewDecision>, StorageError>;

    /// Insert or replace the decision for its actor.
    fn upsert(&self, decision: ReviewDecision) -> Result<(), StorageError>;

    /// Delete the decision for one actor. Errors if none exists.
    fn delete(&self, actor: &ActorId) -> Result<(), StorageError>;
}

fn lock_err(context: &'static str) -> StorageError {
    StorageError::BackendError(format!("poisoned lock: {context}"))
}

/// Thread-safe in-memory review store.
#[derive(Debug, Default)]
pub struct InMemoryReviewStore {
    decisions: RwLock<BTreeMap<ActorId, ReviewDecision>>,
}

impl InMemoryReviewStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReviewStore for InMemoryReviewStore {
    fn get(&self, actor: &ActorId) -> Result<Option<ReviewDecision>, StorageError> {
        let guard = self.decisions.read().map_err(|_| lock_err("get"))?;
        Ok(guard.get(actor).cloned())
    }

    fn get_all(&self) -> Result<Vec<ReviewDecision>, StorageError> {
        let guard = self.decisions.read().map_err(|_| lock_err("get_all"))?;
        Ok(guard.values().cloned().collect())
    }

    fn upsert(&self, decision: ReviewDecision) -> Result<(), StorageError> {
        let mut guard = self.decisions.write().map_err(|_| lock_err("upsert"))?;
        guard.insert(decision.actor.clone(), decision);
        Ok(())
    }

    fn delete(&self, actor: &ActorId) -> Result<(), StorageError> {
        let mut guard = self.decisions.write().map_err(|_| lock_err("delete"))?;
        if guard.remove(actor).is_none() {
            return Err(StorageError::DecisionNotFound(actor.clone()));
        }
        Ok(())
    }
}
