use std::collections::VecDeque;

use crate::foundation::error::TraceResult;
use crate::generators::mst::Graph;
use crate::generators::pathfinding::Strategy;
use crate::projection::traversal::TraversalProjector;
use crate::trace::{Recorder, StepRecord, Trace, TraceGenerator};

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum TraversalEvent {
    /// BFS seeds its queue with `node`.
    Start { node: String },
    /// BFS dequeues `node`; DFS enters it.
    Visit { node: String },
    /// BFS discovers `node` from `from` and appends it to the queue.
    Enqueue { from: String, node: String },
    /// DFS is about to descend along `from -> to`.
    Explore { from: String, to: String },
    /// DFS has finished every neighbor of `node` and leaves it.
    Backtrack { node: String },
    Done { reached: usize, unreached: usize },
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TraversalStep {
    #[serde(flatten)]
    pub event: TraversalEvent,
    pub message: String,
    /// Node the traversal is working on after this record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current: Option<String>,
    /// Discovered nodes, in discovery order.
    pub visited: Vec<String>,
    /// BFS queue front to back, or the DFS path from the start node to the active node.
    pub frontier: Vec<String>,
    /// Traversal order so far: dequeue order for BFS, entry order for DFS.
    pub order: Vec<String>,
}

impl StepRecord for TraversalStep {
    fn action(&self) -> &'static str {
        match self.event {
            TraversalEvent::Start { .. } => "start",
            TraversalEvent::Visit { .. } => "visit",
            TraversalEvent::Enqueue { .. } => "enqueue",
            TraversalEvent::Explore { .. } => "explore",
            TraversalEvent::Backtrack { .. } => "backtrack",
            TraversalEvent::Done { .. } => "done",
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Neighbor lists in edge input order. A two-way edge contributes to both endpoints.
fn adjacency(graph: &Graph) -> Vec<Vec<usize>> {
    let index = graph.index();
    let mut adj = vec![Vec::new(); graph.nodes.len()];
    for e in &graph.edges {
        let (from, to) = (index[e.from.as_str()], index[e.to.as_str()]);
        adj[from].push(to);
        if e.bidirectional {
            adj[to].push(from);
        }
    }
    adj
}

struct Walk<'a> {
    names: &'a [String],
    rec: Recorder<TraversalStep>,
    seen: Vec<bool>,
    visited: Vec<usize>,
    frontier: Vec<usize>,
    order: Vec<usize>,
}

impl<'a> Walk<'a> {
    fn new(graph: &'a Graph) -> Self {
        Self {
            names: &graph.nodes,
            rec: Recorder::new(),
            seen: vec![false; graph.nodes.len()],
            visited: Vec::new(),
            frontier: Vec::new(),
            order: Vec::new(),
        }
    }

    fn name(&self, node: usize) -> String {
        self.names[node].clone()
    }

    fn names_of(&self, nodes: &[usize]) -> Vec<String> {
        nodes.iter().map(|&n| self.name(n)).collect()
    }

    fn discover(&mut self, node: usize) {
        self.seen[node] = true;
        self.visited.push(node);
    }

    fn emit(&mut self, event: TraversalEvent, current: Option<usize>, message: String) {
        let step = TraversalStep {
            event,
            message,
            current: current.map(|n| self.name(n)),
            visited: self.names_of(&self.visited),
            frontier: self.names_of(&self.frontier),
            order: self.names_of(&self.order),
        };
        self.rec.push(step);
    }

    fn finish(mut self, strategy: Strategy) -> Trace<TraversalStep> {
        let reached = self.visited.len();
        let unreached = self.names.len() - reached;
        let message = if unreached == 0 {
            format!("graph {} reached all {reached} node(s)", strategy.name())
        } else {
            format!(
                "graph {} reached {reached} node(s), {unreached} unreachable from the start",
                strategy.name()
            )
        };
        self.emit(TraversalEvent::Done { reached, unreached }, None, message);
        self.rec.finish()
    }
}

fn breadth_first(walk: &mut Walk<'_>, adj: &[Vec<usize>], start: usize) {
    let mut queue = VecDeque::from([start]);
    walk.discover(start);
    walk.frontier = vec![start];
    let s = walk.name(start);
    walk.emit(
        TraversalEvent::Start { node: s.clone() },
        Some(start),
        format!("enqueue start node {s}"),
    );

    // Every node is enqueued at most once.
    while let Some(node) = queue.pop_front() {
        walk.frontier.remove(0);
        walk.order.push(node);
        let n = walk.name(node);
        walk.emit(
            TraversalEvent::Visit { node: n.clone() },
            Some(node),
            format!("dequeue {n}"),
        );

        for &next in &adj[node] {
            if walk.seen[next] {
                continue;
            }
            walk.discover(next);
            queue.push_back(next);
            walk.frontier.push(next);
            let m = walk.name(next);
            walk.emit(
                TraversalEvent::Enqueue {
                    from: n.clone(),
                    node: m.clone(),
                },
                Some(node),
                format!("discover {m} from {n}, queue holds {}", queue.len()),
            );
        }
    }
}

fn depth_first(walk: &mut Walk<'_>, adj: &[Vec<usize>], start: usize) {
    // (node, index of the next neighbor to try)
    let mut frames: Vec<(usize, usize)> = Vec::new();
    enter(walk, &mut frames, start);

    while let Some(frame) = frames.last_mut() {
        let node = frame.0;
        let next = adj[node].get(frame.1).copied();
        frame.1 += 1;
        match next {
            Some(next) if !walk.seen[next] => {
                let (from, to) = (walk.name(node), walk.name(next));
                walk.emit(
                    TraversalEvent::Explore {
                        from: from.clone(),
                        to: to.clone(),
                    },
                    Some(node),
                    format!("explore {from} -> {to}"),
                );
                enter(walk, &mut frames, next);
            }
            Some(_) => {}
            None => {
                frames.pop();
                walk.frontier.pop();
                let back_to = frames.last().map(|&(n, _)| n);
                let n = walk.name(node);
                let message = match back_to {
                    Some(parent) => format!("backtrack from {n} to {}", walk.name(parent)),
                    None => format!("backtrack from {n}, the start node"),
                };
                walk.emit(TraversalEvent::Backtrack { node: n }, back_to, message);
            }
        }
    }
}

fn enter(walk: &mut Walk<'_>, frames: &mut Vec<(usize, usize)>, node: usize) {
    walk.discover(node);
    walk.order.push(node);
    walk.frontier.push(node);
    frames.push((node, 0));
    let n = walk.name(node);
    walk.emit(
        TraversalEvent::Visit { node: n.clone() },
        Some(node),
        format!("visit {n} at depth {}", frames.len() - 1),
    );
}

/// Breadth- or depth-first traversal of a graph from its start node (first node by default).
///
/// Neighbors are tried in edge input order. Nodes outside the start node's component are
/// counted as unreached on the terminal `done` record.
#[tracing::instrument(skip(graph), fields(nodes = graph.nodes.len(), edges = graph.edges.len()))]
pub fn traverse(strategy: Strategy, graph: &Graph) -> TraceResult<Trace<TraversalStep>> {
    graph.validate()?;

    let mut walk = Walk::new(graph);
    let start = graph.start.as_ref().or(graph.nodes.first());
    if let Some(start) = start {
        let start = graph.index()[start.as_str()];
        let adj = adjacency(graph);
        match strategy {
            Strategy::Bfs => breadth_first(&mut walk, &adj, start),
            Strategy::Dfs => depth_first(&mut walk, &adj, start),
        }
    }
    Ok(walk.finish(strategy))
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GraphTraversal {
    pub strategy: Strategy,
    pub graph: Graph,
}

impl TraceGenerator for GraphTraversal {
    type Step = TraversalStep;
    type Projector = TraversalProjector;

    fn name(&self) -> &'static str {
        match self.strategy {
            Strategy::Bfs => "graph_bfs",
            Strategy::Dfs => "graph_dfs",
        }
    }

    fn generate(&self) -> TraceResult<Trace<TraversalStep>> {
        traverse(self.strategy, &self.graph)
    }

    fn projector(&self) -> TraversalProjector {
        TraversalProjector::new(self.strategy)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/generators/traversal.rs"]
mod tests;
