//! The seam between traversals and graph storage.
//!
//! Every traversal in [`crate::graph::algorithms`] is written against these two
//! traits, so the same walk serves arena vertex graphs, adjacency maps and
//! domain graphs such as [`FlightNetwork`](crate::graph::FlightNetwork).

use core::hash::Hash;

/// A directed graph that can enumerate the outgoing neighbours of a node.
///
/// `Id` is the node identity used by visited sets: for object graphs it is a
/// handle (two nodes are the same iff their handles are equal), for keyed
/// graphs it is the key itself.
pub trait Successors {
    /// Node identity.
    type Id: Clone + Eq + Hash;

    /// Returns the outgoing neighbours of `id`, in order.
    ///
    /// Unknown ids have no neighbours.
    fn successors(&self, id: &Self::Id) -> impl Iterator<Item = Self::Id> + '_;
}

/// A graph whose nodes carry a value.
pub trait Labeled: Successors {
    /// The value stored at each node.
    type Value: ?Sized;

    /// Returns the value stored at `id`, or `None` for ids the graph does
    /// not know.
    fn value(&self, id: &Self::Id) -> Option<&Self::Value>;
}
