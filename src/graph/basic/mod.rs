//! Basic graph representations.
//!
//! Each type here implements [`Successors`](crate::graph::Successors), and the
//! valued ones also implement [`Labeled`](crate::graph::Labeled).

pub mod adjacency_map;
pub mod flight_network;
pub mod vertex_graph;

pub use adjacency_map::AdjacencyMap;
pub use flight_network::{Airport, AirportId, FlightNetwork};
pub use vertex_graph::{Vertex, VertexGraph, VertexId};
