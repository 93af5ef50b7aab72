//! Graph representations and the depth-first queries that walk them.
//!
//! Modules are organized into:
//! - `basic`: concrete graph representations (vertex arena, adjacency map, flight network)
//! - `traits`: the `Successors` / `Labeled` seam every traversal is written against
//! - `traversal`: the explicit-stack pre-order DFS shared by every query
//! - `algorithms`: reachability queries built on that traversal

pub mod algorithms;
pub mod basic;
pub mod traits;
pub mod traversal;
pub(crate) mod access;

// Re-export commonly used types from submodules
pub use algorithms::{
    can_reach, longest_value, print_self_loopers, print_short_words, reachable, self_loopers,
    short_words, unreachable, write_self_loopers, write_short_words,
};
pub use basic::{AdjacencyMap, Airport, AirportId, FlightNetwork, Vertex, VertexGraph, VertexId};
pub use traits::{Labeled, Successors};
pub use traversal::{preorder, PreorderDfs};
