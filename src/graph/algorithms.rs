//! Depth-first reachability queries.
//!
//! Every query here is one pre-order walk from a start node (see
//! [`preorder`]) with its own visited set, so each reachable node is entered at
//! most once and cyclic graphs terminate. An absent start (`None`) is never an
//! error: it produces no output, `false`, `""` or an empty set. A start id the
//! graph does not know behaves like a node with no value and no neighbours.
//!
//! Value lengths are counted in Unicode scalar values.
//!
//! The filtering queries return lazy iterators; the `write_*` and `print_*`
//! wrappers only turn their items into lines of text.

use core::hash::Hash;
use std::collections::HashSet;
use std::io::{self, Write};

use crate::graph::basic::AdjacencyMap;
use crate::graph::traits::{Labeled, Successors};
use crate::graph::traversal::preorder;
use crate::trace::trace_event;

#[inline]
fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Values reachable from `start` (itself included) that are shorter than `k`.
///
/// Yields in DFS pre-order, one item per node, even if the node is reachable
/// along several paths.
pub fn short_words<'g, G>(
    graph: &'g G,
    start: Option<G::Id>,
    k: usize,
) -> impl Iterator<Item = &'g G::Value> + 'g
where
    G: Labeled,
    G::Value: AsRef<str>,
{
    preorder(graph, start)
        .filter_map(move |id| graph.value(&id))
        .filter(move |value| char_len((*value).as_ref()) < k)
}

/// Writes [`short_words`] to `out`, one value per line.
///
/// # Errors
/// Returns the first error reported by `out`.
#[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip_all, fields(k = k)))]
pub fn write_short_words<G, W>(
    graph: &G,
    start: Option<G::Id>,
    k: usize,
    out: &mut W,
) -> io::Result<()>
where
    G: Labeled,
    G::Value: AsRef<str>,
    W: Write + ?Sized,
{
    for word in short_words(graph, start, k) {
        writeln!(out, "{}", word.as_ref())?;
    }
    Ok(())
}

/// Prints [`short_words`] to standard output, one value per line.
///
/// # Errors
/// Returns the first error raised while writing to standard output.
pub fn print_short_words<G>(graph: &G, start: Option<G::Id>, k: usize) -> io::Result<()>
where
    G: Labeled,
    G::Value: AsRef<str>,
{
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_short_words(graph, start, k, &mut out)
}

/// The longest value reachable from `start`, itself included.
///
/// Ties go to the value met first in DFS pre-order. Returns `""` when `start`
/// is `None`.
#[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip_all, ret))]
pub fn longest_value<'g, G>(graph: &'g G, start: Option<G::Id>) -> &'g str
where
    G: Labeled,
    G::Value: AsRef<str>,
{
    let mut longest = "";
    let mut longest_len = 0;
    for value in preorder(graph, start).filter_map(|id| graph.value(&id)) {
        let value = value.as_ref();
        let len = char_len(value);
        if len > longest_len {
            longest = value;
            longest_len = len;
        }
    }
    longest
}

/// Values of reachable nodes that list themselves among their own neighbours.
///
/// Yields in DFS pre-order, each self-looping node once.
pub fn self_loopers<'g, G>(
    graph: &'g G,
    start: Option<G::Id>,
) -> impl Iterator<Item = &'g G::Value> + 'g
where
    G: Labeled,
{
    preorder(graph, start)
        .filter(move |id| graph.successors(id).any(|next| next == *id))
        .filter_map(move |id| graph.value(&id))
}

/// Writes [`self_loopers`] to `out`, one value per line.
///
/// # Errors
/// Returns the first error reported by `out`.
#[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip_all))]
pub fn write_self_loopers<G, W>(graph: &G, start: Option<G::Id>, out: &mut W) -> io::Result<()>
where
    G: Labeled,
    G::Value: core::fmt::Display,
    W: Write + ?Sized,
{
    for value in self_loopers(graph, start) {
        writeln!(out, "{value}")?;
    }
    Ok(())
}

/// Prints [`self_loopers`] to standard output, one value per line.
///
/// # Errors
/// Returns the first error raised while writing to standard output.
pub fn print_self_loopers<G>(graph: &G, start: Option<G::Id>) -> io::Result<()>
where
    G: Labeled,
    G::Value: core::fmt::Display,
{
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_self_loopers(graph, start, &mut out)
}

/// Returns `true` iff `destination` can be reached from `start` by following
/// zero or more edges.
///
/// A start equal to the destination is reachable without walking. `None`
/// reaches nothing. Worst case \(O(V + E)\).
#[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip_all, ret))]
pub fn can_reach<G: Successors>(graph: &G, start: Option<G::Id>, destination: &G::Id) -> bool {
    let Some(start) = start else {
        return false;
    };
    if start == *destination {
        return true;
    }

    let mut walk = preorder(graph, Some(start));
    let found = walk.any(|id| id == *destination);
    trace_event!(visited = walk.visited_count(), found, "reachability walk finished");
    found
}

/// Every id reachable from `starting`, itself included.
///
/// For adjacency maps this includes keys that only appear as neighbours.
pub fn reachable<G: Successors>(graph: &G, starting: &G::Id) -> HashSet<G::Id> {
    preorder(graph, Some(starting.clone())).into_visited()
}

/// Keys of `graph` that cannot be reached from `starting`.
///
/// - `None` or an empty map gives an empty set.
/// - A `starting` key without an entry of its own gives every key of the map.
/// - Otherwise the result is the map's keys minus everything reachable, so
///   `starting` itself is never part of it.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(level = "trace", skip_all, fields(keys = graph.map_or(0, AdjacencyMap::len)))
)]
pub fn unreachable<K>(graph: Option<&AdjacencyMap<K>>, starting: &K) -> HashSet<K>
where
    K: Eq + Hash + Clone,
{
    let Some(graph) = graph.filter(|g| !g.is_empty()) else {
        return HashSet::new();
    };
    if !graph.contains_key(starting) {
        return graph.keys().cloned().collect();
    }

    let visited = reachable(graph, starting);
    let result: HashSet<K> = graph
        .keys()
        .filter(|key| !visited.contains(*key))
        .cloned()
        .collect();
    trace_event!(
        reached = visited.len(),
        unreachable = result.len(),
        "unreachable walk finished"
    );
    result
}
