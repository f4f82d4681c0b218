//! Random input builders.
//!
//! These randomize *inputs* only; generating a trace from a given input stays deterministic.
//! Pass a seeded `ChaCha8Rng` for reproducible inputs.

use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::foundation::config::Limits;
use crate::foundation::error::{TraceError, TraceResult};
use crate::generators::mst::{Edge, Graph};

/// `size` values drawn uniformly from `min..=max`.
pub fn random_array<R: Rng>(
    rng: &mut R,
    size: usize,
    min: i64,
    max: i64,
) -> TraceResult<Vec<i64>> {
    if min > max {
        return Err(TraceError::validation(format!(
            "empty value range {min}..={max}"
        )));
    }
    Ok((0..size).map(|_| rng.gen_range(min..=max)).collect())
}

/// `1..=size`, ascending or reversed.
pub fn sorted_array(size: usize, ascending: bool) -> Vec<i64> {
    let mut v: Vec<i64> = (1..=size as i64).collect();
    if !ascending {
        v.reverse();
    }
    v
}

/// Shuffled copy of `values`.
pub fn shuffled<R: Rng>(rng: &mut R, values: &[i64]) -> Vec<i64> {
    let mut v = values.to_vec();
    v.shuffle(rng);
    v
}

/// Random connected graph on `nodes` nodes named `A`, `B`, ...
///
/// A random spanning tree guarantees connectivity, then up to `extra_edges` additional
/// distinct edges are sprinkled in. Weights are drawn from `1..=max_weight`.
pub fn random_connected_graph<R: Rng>(
    rng: &mut R,
    nodes: usize,
    extra_edges: usize,
    max_weight: u32,
) -> TraceResult<Graph> {
    if nodes == 0 {
        return Err(TraceError::validation("a random graph needs at least one node"));
    }
    Limits::check_len("random graph", nodes, Limits::MAX_GRAPH_NODES)?;
    if max_weight == 0 {
        return Err(TraceError::validation("max_weight must be > 0"));
    }

    let names: Vec<String> = (b'A'..)
        .take(nodes)
        .map(|b| char::from(b).to_string())
        .collect();

    let mut order: Vec<usize> = (0..nodes).collect();
    order.shuffle(rng);

    let mut pairs = HashSet::new();
    let mut edges = Vec::new();
    for i in 1..nodes {
        let a = order[i];
        let b = order[rng.gen_range(0..i)];
        pairs.insert((a.min(b), a.max(b)));
        edges.push(Edge::new(&names[a], &names[b], rng.gen_range(1..=max_weight)));
    }

    let free = nodes * (nodes - 1) / 2 - edges.len();
    let wanted = extra_edges.min(free);
    // rejection sampling; bounded so dense requests still terminate
    let mut attempts = 0;
    while edges.len() < nodes - 1 + wanted && attempts < 64 * (wanted + 1) {
        attempts += 1;
        let a = rng.gen_range(0..nodes);
        let b = rng.gen_range(0..nodes);
        if a == b || !pairs.insert((a.min(b), a.max(b))) {
            continue;
        }
        edges.push(Edge::new(&names[a], &names[b], rng.gen_range(1..=max_weight)));
    }

    Ok(Graph {
        nodes: names,
        edges,
        start: None,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/inputs/random.rs"]
mod tests;
