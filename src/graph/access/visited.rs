//! Per-call visited sets for graph traversals.
//!
//! Keeps the "have we entered this node yet" logic in one place so each
//! traversal only expresses what it does on first entry.

use core::hash::Hash;
use std::collections::HashSet;

/// Hash-backed visited set, created per top-level traversal and dropped with it.
pub(crate) struct VisitedSet<K> {
    seen: HashSet<K>,
}

impl<K: Eq + Hash> VisitedSet<K> {
    #[inline]
    pub(crate) fn new() -> Self {
        Self {
            seen: HashSet::new(),
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.seen.len()
    }

    /// Returns `true` iff `node` was not yet visited, marking it visited.
    #[inline]
    pub(crate) fn try_visit(&mut self, node: K) -> bool {
        self.seen.insert(node)
    }

    #[inline]
    pub(crate) fn is_visited(&self, node: &K) -> bool {
        self.seen.contains(node)
    }

    pub(crate) fn into_inner(self) -> HashSet<K> {
        self.seen
    }
}
