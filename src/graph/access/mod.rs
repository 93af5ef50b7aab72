//! Internal traversal building blocks.
//!
//! `pub(crate)` so traversals can share the visited-set primitive without it
//! becoming part of the public API surface.

pub(crate) mod visited;
