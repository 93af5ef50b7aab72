//! Errors raised while building graphs.
//!
//! Traversals never fail; only construction (checked edge insertion, JSON
//! loading) can.

use core::fmt;

/// The error type for graph construction.
#[derive(Debug)]
pub enum GraphError {
    /// An edge referenced a vertex id that is not part of the graph.
    UnknownVertex {
        /// Index of the offending id.
        id: usize,
        /// Number of vertices in the graph at the time of the call.
        vertex_count: usize,
    },
    /// An adjacency map could not be decoded from JSON.
    Json(serde_json::Error),
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownVertex { id, vertex_count } => {
                write!(f, "vertex {id} out of bounds for n={vertex_count}")
            }
            Self::Json(err) => write!(f, "invalid adjacency map: {err}"),
        }
    }
}

impl std::error::Error for GraphError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::UnknownVertex { .. } => None,
            Self::Json(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for GraphError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

/// Result alias for fallible graph construction.
pub type Result<T> = core::result::Result<T, GraphError>;
