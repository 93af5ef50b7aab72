//! Prints the keys of a JSON adjacency map that cannot be reached from a start key.
//!
//! Usage: `unreachable_report <graph.json> <start-key>`
//!
//! The file holds a JSON object mapping each key to an array of neighbour keys,
//! e.g. `{"a": ["b"], "b": [], "c": ["a"]}`. Unreachable keys are printed sorted,
//! one per line.

use std::fs;
use std::io::{self, Write};

use anyhow::{bail, Context, Result};
use trailhead::AdjacencyMap;

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let (Some(path), Some(start)) = (args.next(), args.next()) else {
        bail!("usage: unreachable_report <graph.json> <start-key>");
    };

    let json = fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
    let graph: AdjacencyMap<String> =
        AdjacencyMap::from_json(&json).with_context(|| format!("parsing {path}"))?;

    let mut keys: Vec<String> = graph.unreachable_from(&start).into_iter().collect();
    keys.sort();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for key in &keys {
        writeln!(out, "{key}")?;
    }
    Ok(())
}
