//! Explicit-stack pre-order depth-first traversal.
//!
//! [`PreorderDfs`] yields ids in exactly the order a recursive
//! "visit, then recurse into each neighbour in order" walk would first enter
//! them. Neighbours are pushed in reverse so the first one is popped next, and
//! the visited check happens at pop time, which is what keeps the order
//! identical to the recursive formulation when a node is reachable along
//! several paths.

use crate::graph::access::visited::VisitedSet;
use crate::graph::traits::Successors;

/// A lazy pre-order DFS over any [`Successors`] graph.
///
/// Each reachable id is yielded exactly once; cycles and self-loops terminate.
pub struct PreorderDfs<'g, G: Successors> {
    graph: &'g G,
    visited: VisitedSet<G::Id>,
    stack: Vec<G::Id>,
    scratch: Vec<G::Id>,
}

impl<'g, G: Successors> PreorderDfs<'g, G> {
    /// Creates a traversal rooted at `start`. A `None` start yields nothing.
    pub fn new(graph: &'g G, start: Option<G::Id>) -> Self {
        Self {
            graph,
            visited: VisitedSet::new(),
            stack: start.into_iter().collect(),
            scratch: Vec::new(),
        }
    }

    /// Number of distinct ids entered so far.
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// Drains the traversal and returns every id it entered.
    pub fn into_visited(mut self) -> std::collections::HashSet<G::Id> {
        while self.next().is_some() {}
        self.visited.into_inner()
    }
}

impl<G: Successors> Iterator for PreorderDfs<'_, G> {
    type Item = G::Id;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(id) = self.stack.pop() {
            if !self.visited.try_visit(id.clone()) {
                continue;
            }

            self.scratch.extend(
                self.graph
                    .successors(&id)
                    .filter(|next| !self.visited.is_visited(next)),
            );
            self.stack.extend(self.scratch.drain(..).rev());

            return Some(id);
        }
        None
    }
}

/// Walks `graph` depth-first from `start`, yielding ids in pre-order.
pub fn preorder<G: Successors>(graph: &G, start: Option<G::Id>) -> PreorderDfs<'_, G> {
    PreorderDfs::new(graph, start)
}
