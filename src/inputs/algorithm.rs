use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context as _;

use crate::foundation::error::{TraceError, TraceResult};
use crate::generators::greedy::{ActivitySelection, CoinChange};
use crate::generators::knapsack::Knapsack;
use crate::generators::lcs::Lcs;
use crate::generators::merge_sort::MergeSort;
use crate::generators::mst::{Graph, MstAlgorithm, SpanningTree};
use crate::generators::pathfinding::{Maze, MazeSearch, Strategy};
use crate::generators::search::{BinarySearch, LinearSearch};
use crate::generators::sorting::{ComparisonSort, SortAlgorithm};
use crate::generators::traversal::GraphTraversal;
use crate::projection::Projector;
use crate::trace::TraceGenerator;

/// Payload shared by the comparison sorts.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ArrayInput {
    pub array: Vec<i64>,
}

/// JSON-facing description of one (algorithm, input) pair.
///
/// The `algorithm` tag selects the generator; the remaining fields are that generator's input:
///
/// ```json
/// { "algorithm": "bubble_sort", "array": [5, 1, 4] }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "algorithm", rename_all = "snake_case")]
pub enum AlgorithmInput {
    LinearSearch(LinearSearch),
    BinarySearch(BinarySearch),
    BubbleSort(ArrayInput),
    SelectionSort(ArrayInput),
    InsertionSort(ArrayInput),
    QuickSort(ArrayInput),
    MergeSort(MergeSort),
    Bfs(Maze),
    Dfs(Maze),
    Knapsack(Knapsack),
    Lcs(Lcs),
    CoinChange(CoinChange),
    ActivitySelection(ActivitySelection),
    Kruskal(Graph),
    Prim(Graph),
    GraphBfs(Graph),
    GraphDfs(Graph),
}

/// Callback run against the concrete generator behind an [`AlgorithmInput`].
///
/// Step records and views of every family serialize, so visitors can dump or narrate any
/// trace without naming its record type.
pub trait JobVisitor {
    type Output;

    fn visit<G>(self, job: &G) -> Self::Output
    where
        G: TraceGenerator,
        G::Step: serde::Serialize,
        <G::Projector as Projector>::View: serde::Serialize;
}

impl AlgorithmInput {
    /// Parse an input from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> TraceResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| TraceError::serde(format!("parse algorithm input JSON: {e}")))
    }

    /// Parse an input from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> TraceResult<Self> {
        let path = path.as_ref();
        let f = File::open(path)
            .with_context(|| format!("open algorithm input '{}'", path.display()))?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn to_json_pretty(&self) -> TraceResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| TraceError::serde(format!("serialize algorithm input: {e}")))
    }

    /// Value of the `algorithm` tag.
    pub fn name(&self) -> &'static str {
        match self {
            Self::LinearSearch(_) => "linear_search",
            Self::BinarySearch(_) => "binary_search",
            Self::BubbleSort(_) => SortAlgorithm::Bubble.name(),
            Self::SelectionSort(_) => SortAlgorithm::Selection.name(),
            Self::InsertionSort(_) => SortAlgorithm::Insertion.name(),
            Self::QuickSort(_) => SortAlgorithm::Quick.name(),
            Self::MergeSort(_) => "merge_sort",
            Self::Bfs(_) => Strategy::Bfs.name(),
            Self::Dfs(_) => Strategy::Dfs.name(),
            Self::Knapsack(_) => "knapsack",
            Self::Lcs(_) => "lcs",
            Self::CoinChange(_) => "coin_change",
            Self::ActivitySelection(_) => "activity_selection",
            Self::Kruskal(_) => MstAlgorithm::Kruskal.name(),
            Self::Prim(_) => MstAlgorithm::Prim.name(),
            Self::GraphBfs(_) => "graph_bfs",
            Self::GraphDfs(_) => "graph_dfs",
        }
    }

    /// Build the generator for this input and hand it to `visitor`.
    pub fn dispatch<V: JobVisitor>(&self, visitor: V) -> V::Output {
        let sort = |algorithm, input: &ArrayInput| ComparisonSort {
            algorithm,
            array: input.array.clone(),
        };
        let maze = |strategy, maze: &Maze| MazeSearch {
            strategy,
            maze: maze.clone(),
        };
        let tree = |algorithm, graph: &Graph| SpanningTree {
            algorithm,
            graph: graph.clone(),
        };
        let walk = |strategy, graph: &Graph| GraphTraversal {
            strategy,
            graph: graph.clone(),
        };
        match self {
            Self::LinearSearch(job) => visitor.visit(job),
            Self::BinarySearch(job) => visitor.visit(job),
            Self::BubbleSort(a) => visitor.visit(&sort(SortAlgorithm::Bubble, a)),
            Self::SelectionSort(a) => visitor.visit(&sort(SortAlgorithm::Selection, a)),
            Self::InsertionSort(a) => visitor.visit(&sort(SortAlgorithm::Insertion, a)),
            Self::QuickSort(a) => visitor.visit(&sort(SortAlgorithm::Quick, a)),
            Self::MergeSort(job) => visitor.visit(job),
            Self::Bfs(m) => visitor.visit(&maze(Strategy::Bfs, m)),
            Self::Dfs(m) => visitor.visit(&maze(Strategy::Dfs, m)),
            Self::Knapsack(job) => visitor.visit(job),
            Self::Lcs(job) => visitor.visit(job),
            Self::CoinChange(job) => visitor.visit(job),
            Self::ActivitySelection(job) => visitor.visit(job),
            Self::Kruskal(g) => visitor.visit(&tree(MstAlgorithm::Kruskal, g)),
            Self::Prim(g) => visitor.visit(&tree(MstAlgorithm::Prim, g)),
            Self::GraphBfs(g) => visitor.visit(&walk(Strategy::Bfs, g)),
            Self::GraphDfs(g) => visitor.visit(&walk(Strategy::Dfs, g)),
        }
    }

    /// Generate the trace and render it as JSON: `{ algorithm, records, steps, summary }`.
    ///
    /// `summary` is the view after the terminal record.
    pub fn trace_json(&self) -> TraceResult<serde_json::Value> {
        self.dispatch(TraceDump)
    }
}

struct TraceDump;

impl JobVisitor for TraceDump {
    type Output = TraceResult<serde_json::Value>;

    fn visit<G>(self, job: &G) -> Self::Output
    where
        G: TraceGenerator,
        G::Step: serde::Serialize,
        <G::Projector as Projector>::View: serde::Serialize,
    {
        let trace = job.generate()?;
        let projector = job.projector();
        let summary = trace.last().map(|s| projector.project(s));
        let to_value = |what: &str, v: serde_json::Result<serde_json::Value>| {
            v.map_err(|e| TraceError::serde(format!("serialize {what}: {e}")))
        };
        Ok(serde_json::json!({
            "algorithm": job.name(),
            "records": trace.len(),
            "steps": to_value("trace", serde_json::to_value(&trace))?,
            "summary": to_value("summary", serde_json::to_value(&summary))?,
        }))
    }
}
