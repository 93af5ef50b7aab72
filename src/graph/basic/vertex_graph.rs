//! An arena of valued vertices with ordered neighbour lists.
//!
//! Vertices are addressed by [`VertexId`] handles. Identity is the handle, not
//! the value: two vertices holding equal values are still distinct nodes, which
//! is what lets visited sets behave correctly when values repeat.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `add_vertex` | \(O(1)\) amortized | Appends to the arena |
//! | `add_edge` | \(O(1)\) amortized | Parallel edges are kept |
//! | `has_self_loop` | \(O(\text{out-degree})\) | Linear scan of the neighbour list |
//! | `edge_count` | \(O(n)\) | Sums neighbour list lengths |

use crate::error::{GraphError, Result};
use crate::graph::traits::{Labeled, Successors};

/// Handle to a vertex in a [`VertexGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(usize);

/// A vertex: a value and the ordered handles of its neighbours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex<T> {
    value: T,
    neighbors: Vec<VertexId>,
}

impl<T> Vertex<T> {
    /// The value stored at this vertex.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Outgoing neighbours, in insertion order.
    pub fn neighbors(&self) -> &[VertexId] {
        &self.neighbors
    }
}

/// A directed, possibly cyclic graph of valued vertices.
///
/// Handles from another graph are "unknown": they have no neighbours and no
/// value, so queries started from one see an empty graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexGraph<T> {
    vertices: Vec<Vertex<T>>,
}

impl<T> Default for VertexGraph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> VertexGraph<T> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
        }
    }

    /// Creates an empty graph with room for `capacity` vertices.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(capacity),
        }
    }

    /// Adds a vertex with no neighbours and returns its handle.
    pub fn add_vertex(&mut self, value: T) -> VertexId {
        let id = VertexId(self.vertices.len());
        self.vertices.push(Vertex {
            value,
            neighbors: Vec::new(),
        });
        id
    }

    /// Appends `to` to the neighbour list of `from`.
    ///
    /// # Panics
    /// Panics if either handle does not belong to this graph.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId) {
        let n = self.vertex_count();
        assert!(from.0 < n, "from vertex {} out of bounds for n={n}", from.0);
        assert!(to.0 < n, "to vertex {} out of bounds for n={n}", to.0);
        self.vertices[from.0].neighbors.push(to);
    }

    /// Appends `to` to the neighbour list of `from`, rejecting unknown handles.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownVertex`] if either handle does not belong
    /// to this graph; the graph is left unchanged.
    pub fn try_add_edge(&mut self, from: VertexId, to: VertexId) -> Result<()> {
        let vertex_count = self.vertex_count();
        if let Some(bad) = [from, to].into_iter().find(|id| id.0 >= vertex_count) {
            return Err(GraphError::UnknownVertex {
                id: bad.0,
                vertex_count,
            });
        }
        self.vertices[from.0].neighbors.push(to);
        Ok(())
    }

    /// Returns the vertex behind `id`, if it belongs to this graph.
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex<T>> {
        self.vertices.get(id.0)
    }

    /// Returns the value stored at `id`.
    ///
    /// # Panics
    /// Panics if `id` does not belong to this graph.
    pub fn value(&self, id: VertexId) -> &T {
        &self.vertices[id.0].value
    }

    /// Returns the ordered neighbours of `id`; empty for unknown handles.
    pub fn neighbors(&self, id: VertexId) -> &[VertexId] {
        self.vertices.get(id.0).map_or(&[], |v| v.neighbors.as_slice())
    }

    /// Returns `true` if `id` lists itself among its neighbours.
    pub fn has_self_loop(&self, id: VertexId) -> bool {
        self.neighbors(id).contains(&id)
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges, counting parallel edges separately.
    pub fn edge_count(&self) -> usize {
        self.vertices.iter().map(|v| v.neighbors.len()).sum()
    }

    /// Iterates over all handles in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        (0..self.vertices.len()).map(VertexId)
    }
}

impl<T> Successors for VertexGraph<T> {
    type Id = VertexId;

    fn successors(&self, id: &VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.neighbors(*id).iter().copied()
    }
}

impl<T> Labeled for VertexGraph<T> {
    type Value = T;

    fn value(&self, id: &VertexId) -> Option<&T> {
        self.vertex(*id).map(Vertex::value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_is_the_handle_not_the_value() {
        let mut g = VertexGraph::new();
        let a = g.add_vertex("same");
        let b = g.add_vertex("same");
        assert_ne!(a, b);
        assert_eq!(g.value(a), g.value(b));
    }

    #[test]
    fn edges_keep_order_and_duplicates() {
        let mut g = VertexGraph::with_capacity(3);
        let a = g.add_vertex(0);
        let b = g.add_vertex(1);
        let c = g.add_vertex(2);
        g.add_edge(a, c);
        g.add_edge(a, b);
        g.add_edge(a, c);
        assert_eq!(g.neighbors(a), &[c, b, c]);
        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.vertex_count(), 3);
        assert_eq!(g.ids().collect::<Vec<_>>(), [a, b, c]);
    }

    #[test]
    fn self_loop_detection() {
        let mut g = VertexGraph::new();
        let a = g.add_vertex('a');
        let b = g.add_vertex('b');
        g.add_edge(a, b);
        g.add_edge(b, b);
        assert!(!g.has_self_loop(a));
        assert!(g.has_self_loop(b));
    }

    #[test]
    fn try_add_edge_rejects_foreign_handles() {
        let mut other = VertexGraph::new();
        other.add_vertex(());
        let foreign = other.add_vertex(());

        let mut g = VertexGraph::new();
        let a = g.add_vertex(());
        let err = g.try_add_edge(a, foreign).unwrap_err();
        assert!(matches!(
            err,
            GraphError::UnknownVertex {
                id: 1,
                vertex_count: 1
            }
        ));
        assert_eq!(g.edge_count(), 0);
        assert!(g.try_add_edge(a, a).is_ok());
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn add_edge_panics_on_foreign_handle() {
        let mut other = VertexGraph::new();
        other.add_vertex(());
        let foreign = other.add_vertex(());

        let mut g = VertexGraph::new();
        let a = g.add_vertex(());
        g.add_edge(a, foreign);
    }

    #[test]
    fn unknown_handle_has_no_neighbors() {
        let mut other = VertexGraph::new();
        let far = (0..4).map(|i| other.add_vertex(i)).last().unwrap();
        let g: VertexGraph<i32> = VertexGraph::new();
        assert!(g.neighbors(far).is_empty());
        assert!(g.vertex(far).is_none());
        assert!(Labeled::value(&g, &far).is_none());
    }
}
