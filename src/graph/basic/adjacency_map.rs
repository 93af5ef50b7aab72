//! A keyed adjacency-map graph.
//!
//! Each key maps to an ordered list of neighbour keys. Keys are compared by
//! value, and a key that is absent from the map simply has no outgoing
//! neighbours, so neighbour lists may mention keys that have no entry of their
//! own.

use core::hash::Hash;
use std::collections::{HashMap, HashSet};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::graph::traits::Successors;

/// A directed graph stored as `key -> [neighbour keys]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
#[serde(bound(
    serialize = "K: Serialize + Eq + Hash",
    deserialize = "K: Deserialize<'de> + Eq + Hash"
))]
pub struct AdjacencyMap<K> {
    edges: HashMap<K, Vec<K>>,
}

impl<K: Eq + Hash> PartialEq for AdjacencyMap<K> {
    fn eq(&self, other: &Self) -> bool {
        self.edges == other.edges
    }
}

impl<K: Eq + Hash> Eq for AdjacencyMap<K> {}

impl<K: Eq + Hash> Default for AdjacencyMap<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash> AdjacencyMap<K> {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self {
            edges: HashMap::new(),
        }
    }

    /// Sets the neighbour list of `key`, returning the previous one.
    pub fn insert(&mut self, key: K, neighbors: Vec<K>) -> Option<Vec<K>> {
        self.edges.insert(key, neighbors)
    }

    /// Appends `to` to the neighbour list of `from`, creating the entry for
    /// `from` if needed. No entry is created for `to`.
    pub fn add_edge(&mut self, from: K, to: K) {
        self.edges.entry(from).or_default().push(to);
    }

    /// Returns the neighbours of `key`; empty when `key` has no entry.
    pub fn neighbors(&self, key: &K) -> &[K] {
        self.edges.get(key).map_or(&[], Vec::as_slice)
    }

    /// Returns `true` if `key` has an entry of its own.
    pub fn contains_key(&self, key: &K) -> bool {
        self.edges.contains_key(key)
    }

    /// Iterates over the keys that have an entry.
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.edges.keys()
    }

    /// Number of keys with an entry.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if no key has an entry.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

impl<K: Eq + Hash + Clone> AdjacencyMap<K> {
    /// Keys with an entry that cannot be reached from `starting`.
    ///
    /// See [`unreachable`](crate::graph::algorithms::unreachable).
    pub fn unreachable_from(&self, starting: &K) -> HashSet<K> {
        crate::graph::algorithms::unreachable(Some(self), starting)
    }
}

impl<K: Eq + Hash + DeserializeOwned> AdjacencyMap<K> {
    /// Decodes a map from a JSON object of `key: [neighbours...]`.
    ///
    /// Integer key types accept the usual JSON object-key spelling (`"1"`).
    ///
    /// # Errors
    /// Returns [`GraphError::Json`](crate::GraphError::Json) if `json` is not
    /// an object of arrays of keys.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl<K: Eq + Hash> From<HashMap<K, Vec<K>>> for AdjacencyMap<K> {
    fn from(edges: HashMap<K, Vec<K>>) -> Self {
        Self { edges }
    }
}

impl<K: Eq + Hash> FromIterator<(K, Vec<K>)> for AdjacencyMap<K> {
    fn from_iter<I: IntoIterator<Item = (K, Vec<K>)>>(iter: I) -> Self {
        Self {
            edges: iter.into_iter().collect(),
        }
    }
}

impl<K: Eq + Hash + Clone> Successors for AdjacencyMap<K> {
    type Id = K;

    fn successors(&self, id: &K) -> impl Iterator<Item = K> + '_ {
        self.neighbors(id).iter().cloned()
    }
}
