//! # `trailhead` - Depth-First Reachability Queries
//!
//! Small, total graph queries over directed, possibly cyclic graphs: which
//! values can be reached from a node, which of them are short, which is the
//! longest, which nodes loop onto themselves, whether one node reaches another,
//! and which keys of an adjacency map can never be reached.
//!
//! ## Guarantees
//!
//! - **Termination on cycles**: every query walks with a per-call visited set,
//!   so each node is entered at most once and cyclic graphs terminate.
//! - **No recursion**: traversals use an explicit stack, so deep graphs cannot
//!   exhaust the call stack.
//! - **Read-only graphs**: queries borrow graphs immutably and keep no state
//!   between calls.
//! - **Total functions**: an absent start (`None`), an absent map or an empty
//!   map degrade to no output, `false`, `""` or an empty set. Nothing panics
//!   for well-formed graphs.
//!
//! ## Architecture
//!
//! ### Core Abstractions
//!
//! 1. **Seam traits** ([`Successors`], [`Labeled`]):
//!    - `Successors` enumerates ordered outgoing neighbours of a node id
//!    - `Labeled` adds the value stored at a node
//!
//! 2. **Representations** ([`VertexGraph`], [`AdjacencyMap`], [`FlightNetwork`]):
//!    - `VertexGraph<T>`: arena of valued vertices, identity by [`VertexId`] handle
//!    - `AdjacencyMap<K>`: `key -> [neighbour keys]`, identity by key equality
//!    - `FlightNetwork`: airports with outbound flights, identity by [`AirportId`]
//!
//! 3. **Traversal** ([`PreorderDfs`]):
//!    - Lazy pre-order DFS, same order as the recursive formulation
//!
//! 4. **Queries** ([`graph::algorithms`]):
//!    - [`short_words`], [`longest_value`], [`self_loopers`], [`can_reach`],
//!      [`unreachable`], plus `write_*` / `print_*` line printers
//!
//! ## Features
//!
//! - `tracing`: instruments the queries with `trace`-level spans and events.
//!
//! ## Example
//!
//! ```rust
//! use trailhead::{can_reach, longest_value, VertexGraph};
//!
//! let mut graph = VertexGraph::new();
//! let cat = graph.add_vertex("cat");
//! let elephant = graph.add_vertex("elephant");
//! let ox = graph.add_vertex("ox");
//! graph.add_edge(cat, elephant);
//! graph.add_edge(elephant, ox);
//! graph.add_edge(ox, cat);
//!
//! assert_eq!(longest_value(&graph, Some(cat)), "elephant");
//! assert!(can_reach(&graph, Some(ox), &cat));
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

mod trace;

pub mod error;
pub mod graph;

pub use error::{GraphError, Result};
pub use graph::{
    can_reach, longest_value, preorder, print_self_loopers, print_short_words, reachable,
    self_loopers, short_words, unreachable, write_self_loopers, write_short_words, AdjacencyMap,
    Airport, AirportId, FlightNetwork, Labeled, PreorderDfs, Successors, Vertex, VertexGraph,
    VertexId,
};

// Compile-time assertions for handle layout
const _: () = {
    use core::mem;

    // Handles are plain indices.
    assert!(mem::size_of::<VertexId>() == mem::size_of::<usize>());
    assert!(mem::size_of::<AirportId>() == mem::size_of::<usize>());
    assert!(mem::size_of::<Option<VertexId>>() <= mem::size_of::<usize>() * 2);
};
