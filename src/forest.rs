//! Disjoint-set forest over string-keyed nodes.
//!
//! The forest is the shared substrate every signal pass mutates: actor
//! identifiers and (via the funder pass) bare wallet strings live in the
//! same node namespace. `find` compresses paths iteratively so adversarial
//! union orders cannot build recursion depth, and `union` is size-weighted
//! with a deterministic tie-break, so the resulting partition depends only
//! on the sequence of union calls.

use std::collections::HashMap;

/// Map-based union-find with path compression and union by size.
///
/// # Examples
///
/// ```
/// use syndic::DisjointForest;
///
/// let mut forest = DisjointForest::new();
/// forest.union("a", "b");
/// forest.union("b", "c");
/// assert!(forest.connected("a", "c"));
/// assert!(!forest.connected("a", "d"));
/// ```
#[derive(Debug, Default, Clone)]
pub struct DisjointForest {
    parent: HashMap<String, String>,
    size: HashMap<String, usize>,
}

impl DisjointForest {
    /// Creates an empty forest.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `key` as a singleton component if it is not already present.
    pub fn insert(&mut self, key: &str) {
        if !self.parent.contains_key(key) {
            self.parent.insert(key.to_string(), key.to_string());
            self.size.insert(key.to_string(), 1);
        }
    }

    /// Returns true if `key` has been registered or pulled in by a union.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.parent.contains_key(key)
    }

    /// Number of registered nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns true if no node has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the root of `key`'s component, compressing the visited path.
    ///
    /// An unregistered key is its own singleton root; the forest is not
    /// mutated in that case.
    pub fn find(&mut self, key: &str) -> String {
        if !self.parent.contains_key(key) {
            return key.to_string();
        }

        let mut root = key.to_string();
        while let Some(next) = self.parent.get(&root) {
            if *next == root {
                break;
            }
            root = next.clone();
        }

        // Second walk: point every visited node directly at the root.
        let mut current = key.to_string();
        while current != root {
            let next = match self.parent.get(&current) {
                Some(next) => next.clone(),
                None => break,
            };
            self.parent.insert(current, root.clone());
            current = next;
        }

        root
    }

    /// Merges the components of `a` and `b`.
    ///
    /// No-op when already joined. The root with the smaller recorded size
    /// is attached under the larger; on a tie, `b`'s root goes under
    /// `a`'s. Unregistered endpoints are registered as singletons first.
    pub fn union(&mut self, a: &str, b: &str) {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return;
        }
        self.insert(&root_a);
        self.insert(&root_b);

        let size_a = self.size.get(&root_a).copied().unwrap_or(1);
        let size_b = self.size.get(&root_b).copied().unwrap_or(1);
        let (winner, loser) = if size_b > size_a {
            (root_b, root_a)
        } else {
            (root_a, root_b)
        };

        self.parent.insert(loser.clone(), winner.clone());
        self.size.remove(&loser);
        self.size.insert(winner, size_a + size_b);
    }

    /// Returns true if `a` and `b` share a root.
    pub fn connected(&mut self, a: &str, b: &str) -> bool {
        self.find(a) == self.find(b)
    }

    /// Size of the component containing `key` (1 for unregistered keys).
    pub fn component_size(&mut self, key: &str) -> usize {
        let root = self.find(key);
        self.size.get(&root).copied().unwrap_or(1)
    }
}
