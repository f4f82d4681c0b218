use std::collections::HashMap;

use crate::foundation::config::Limits;
use crate::foundation::error::{TraceError, TraceResult};
use crate::generators::union_find::UnionFind;
use crate::projection::graph::MstProjector;
use crate::trace::{Recorder, StepRecord, Trace, TraceGenerator};

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Edge {
    pub from: String,
    pub to: String,
    pub weight: u32,
    /// Traversals follow a one-way edge only from `from` to `to`. Spanning trees treat every
    /// edge as undirected.
    #[serde(default = "two_way", skip_serializing_if = "is_two_way")]
    pub bidirectional: bool,
}

fn two_way() -> bool {
    true
}

fn is_two_way(bidirectional: &bool) -> bool {
    *bidirectional
}

impl Edge {
    pub fn new(from: impl Into<String>, to: impl Into<String>, weight: u32) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            weight,
            bidirectional: true,
        }
    }

    /// Edge a traversal may only follow from `from` to `to`.
    pub fn one_way(from: impl Into<String>, to: impl Into<String>, weight: u32) -> Self {
        Self {
            bidirectional: false,
            ..Self::new(from, to, weight)
        }
    }
}

/// Weighted graph with named nodes.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Graph {
    pub nodes: Vec<String>,
    pub edges: Vec<Edge>,
    /// Prim's seed node. Defaults to the first node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
}

impl Graph {
    pub fn validate(&self) -> TraceResult<()> {
        Limits::check_len("graph node list", self.nodes.len(), Limits::MAX_GRAPH_NODES)?;
        Limits::check_len("graph edge list", self.edges.len(), Limits::MAX_GRAPH_EDGES)?;
        let mut seen = std::collections::HashSet::new();
        for node in &self.nodes {
            if node.trim().is_empty() {
                return Err(TraceError::validation("node names must be non-empty"));
            }
            if !seen.insert(node.as_str()) {
                return Err(TraceError::validation(format!("duplicate node '{node}'")));
            }
        }
        for (i, e) in self.edges.iter().enumerate() {
            for end in [&e.from, &e.to] {
                if !seen.contains(end.as_str()) {
                    return Err(TraceError::validation(format!(
                        "edge {i} references unknown node '{end}'"
                    )));
                }
            }
        }
        if let Some(start) = &self.start
            && !seen.contains(start.as_str())
        {
            return Err(TraceError::validation(format!(
                "start node '{start}' is not in the graph"
            )));
        }
        Ok(())
    }

    pub(crate) fn index(&self) -> HashMap<&str, usize> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (n.as_str(), i))
            .collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MstAlgorithm {
    Kruskal,
    Prim,
}

impl MstAlgorithm {
    pub fn name(self) -> &'static str {
        match self {
            Self::Kruskal => "kruskal",
            Self::Prim => "prim",
        }
    }
}

/// An input edge as seen by the algorithm. `index` is its position in the input list.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct EdgeRef {
    pub index: usize,
    pub from: String,
    pub to: String,
    pub weight: u32,
}

impl EdgeRef {
    fn new(index: usize, edge: &Edge) -> Self {
        Self {
            index,
            from: edge.from.clone(),
            to: edge.to.clone(),
            weight: edge.weight,
        }
    }

    /// Same edge, read from `to` towards `from`.
    fn reversed(mut self) -> Self {
        std::mem::swap(&mut self.from, &mut self.to);
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum MstEvent {
    /// Prim seeds its tree with `node`.
    Start { node: String },
    Check { edge: EdgeRef },
    Add { edge: EdgeRef },
    /// Kruskal only: both endpoints already share a component.
    Reject { edge: EdgeRef },
    Complete {
        edge_count: usize,
        cost: u64,
        spanning: bool,
    },
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MstStep {
    #[serde(flatten)]
    pub event: MstEvent,
    pub message: String,
    /// Accepted edges so far, in acceptance order.
    pub accepted: Vec<EdgeRef>,
    pub total_cost: u64,
    /// Nodes touched by the tree so far, in the order they joined.
    pub visited: Vec<String>,
}

impl StepRecord for MstStep {
    fn action(&self) -> &'static str {
        match self.event {
            MstEvent::Start { .. } => "start",
            MstEvent::Check { .. } => "check",
            MstEvent::Add { .. } => "add",
            MstEvent::Reject { .. } => "reject",
            MstEvent::Complete { .. } => "complete",
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Cumulative tree state copied into every record.
#[derive(Default)]
struct Forest {
    accepted: Vec<EdgeRef>,
    total_cost: u64,
    visited: Vec<String>,
}

impl Forest {
    fn touch(&mut self, node: &str) {
        if !self.visited.iter().any(|v| v == node) {
            self.visited.push(node.to_owned());
        }
    }

    fn accept(&mut self, edge: &EdgeRef) {
        self.touch(&edge.from);
        self.touch(&edge.to);
        self.total_cost += u64::from(edge.weight);
        self.accepted.push(edge.clone());
    }

    fn record(&self, event: MstEvent, message: String) -> MstStep {
        MstStep {
            event,
            message,
            accepted: self.accepted.clone(),
            total_cost: self.total_cost,
            visited: self.visited.clone(),
        }
    }

    fn complete(&self, graph: &Graph, algorithm: MstAlgorithm) -> MstStep {
        let edge_count = self.accepted.len();
        let spanning = edge_count + 1 >= graph.nodes.len();
        let shape = if spanning { "spanning tree" } else { "spanning forest" };
        self.record(
            MstEvent::Complete {
                edge_count,
                cost: self.total_cost,
                spanning,
            },
            format!(
                "{} finished: {shape} with {edge_count} edge(s), total cost {}",
                algorithm.name(),
                self.total_cost
            ),
        )
    }
}

fn kruskal(graph: &Graph, rec: &mut Recorder<MstStep>) -> Forest {
    let index = graph.index();
    let mut order: Vec<usize> = (0..graph.edges.len()).collect();
    order.sort_by_key(|&i| graph.edges[i].weight);

    let mut uf = UnionFind::new(graph.nodes.len());
    let mut forest = Forest::default();
    for i in order {
        let edge = EdgeRef::new(i, &graph.edges[i]);
        let label = format!("{}-{} ({})", edge.from, edge.to, edge.weight);
        rec.push(forest.record(
            MstEvent::Check { edge: edge.clone() },
            format!("check edge {label}"),
        ));

        let (a, b) = (index[edge.from.as_str()], index[edge.to.as_str()]);
        if uf.union(a, b) {
            forest.accept(&edge);
            rec.push(forest.record(
                MstEvent::Add { edge },
                format!("add {label}: joins two components"),
            ));
        } else {
            rec.push(forest.record(
                MstEvent::Reject { edge },
                format!("reject {label}: would close a cycle"),
            ));
        }
    }
    tracing::debug!(components = uf.sets(), "kruskal scan done");
    forest
}

fn prim(graph: &Graph, rec: &mut Recorder<MstStep>) -> Forest {
    let mut forest = Forest::default();
    let Some(start) = graph.start.as_ref().or(graph.nodes.first()) else {
        return forest;
    };
    let index = graph.index();
    let mut in_tree = vec![false; graph.nodes.len()];
    in_tree[index[start.as_str()]] = true;
    forest.touch(start);
    rec.push(forest.record(
        MstEvent::Start {
            node: start.clone(),
        },
        format!("start the tree at {start}"),
    ));

    // Each iteration adds one node or stops, so at most `nodes - 1` iterations run.
    loop {
        let mut best: Option<EdgeRef> = None;
        for (i, e) in graph.edges.iter().enumerate() {
            let (f, t) = (in_tree[index[e.from.as_str()]], in_tree[index[e.to.as_str()]]);
            if f == t {
                continue;
            }
            if best.as_ref().is_some_and(|b| b.weight <= e.weight) {
                continue;
            }
            let edge = EdgeRef::new(i, e);
            best = Some(if f { edge } else { edge.reversed() });
        }
        let Some(edge) = best else {
            break;
        };

        let label = format!("{}-{} ({})", edge.from, edge.to, edge.weight);
        rec.push(forest.record(
            MstEvent::Check { edge: edge.clone() },
            format!("cheapest edge leaving the tree is {label}"),
        ));
        in_tree[index[edge.to.as_str()]] = true;
        forest.accept(&edge);
        rec.push(forest.record(
            MstEvent::Add { edge: edge.clone() },
            format!("add {label}: {} joins the tree", edge.to),
        ));
    }
    forest
}

/// Minimum spanning tree (or forest) by Kruskal or Prim.
///
/// Kruskal checks every edge in ascending weight order, ties in input order. Prim grows from
/// the start node and stops as soon as no edge crosses the tree boundary, so a disconnected
/// graph yields the tree of the start node's component.
#[tracing::instrument(skip(graph), fields(nodes = graph.nodes.len(), edges = graph.edges.len()))]
pub fn spanning_tree(algorithm: MstAlgorithm, graph: &Graph) -> TraceResult<Trace<MstStep>> {
    graph.validate()?;

    let mut rec = Recorder::new();
    let forest = match algorithm {
        MstAlgorithm::Kruskal => kruskal(graph, &mut rec),
        MstAlgorithm::Prim => prim(graph, &mut rec),
    };
    rec.push(forest.complete(graph, algorithm));
    Ok(rec.finish())
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SpanningTree {
    pub algorithm: MstAlgorithm,
    pub graph: Graph,
}

impl TraceGenerator for SpanningTree {
    type Step = MstStep;
    type Projector = MstProjector;

    fn name(&self) -> &'static str {
        self.algorithm.name()
    }

    fn generate(&self) -> TraceResult<Trace<MstStep>> {
        spanning_tree(self.algorithm, &self.graph)
    }

    fn projector(&self) -> MstProjector {
        MstProjector
    }
}

#[cfg(test)]
#[path = "../../tests/unit/generators/mst.rs"]
mod tests;
