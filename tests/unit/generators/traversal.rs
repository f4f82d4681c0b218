use super::*;
use crate::generators::mst::Edge;
use crate::TraceError;

/// A square A-B-D-C plus an isolated E.
fn square() -> Graph {
    Graph {
        nodes: ["A", "B", "C", "D", "E"].map(String::from).to_vec(),
        edges: vec![
            Edge::new("A", "B", 1),
            Edge::new("A", "C", 1),
            Edge::new("B", "D", 1),
            Edge::new("C", "D", 1),
        ],
        start: None,
    }
}

fn names(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
}

#[test]
fn bfs_dequeues_level_by_level() {
    let trace = traverse(Strategy::Bfs, &square()).unwrap();
    assert_eq!(
        trace.actions(),
        ["start", "visit", "enqueue", "enqueue", "visit", "enqueue", "visit", "visit", "done"]
    );
    let last = trace.last().unwrap();
    assert_eq!(last.order, names(&["A", "B", "C", "D"]));
    assert!(last.frontier.is_empty());
    assert_eq!(
        last.event,
        TraversalEvent::Done {
            reached: 4,
            unreached: 1
        }
    );

    // D is discovered from B, so it sits behind C in the queue.
    let enqueue_d = &trace.steps()[5];
    assert_eq!(
        enqueue_d.event,
        TraversalEvent::Enqueue {
            from: "B".into(),
            node: "D".into()
        }
    );
    assert_eq!(enqueue_d.frontier, names(&["C", "D"]));
    assert_eq!(enqueue_d.visited, names(&["A", "B", "C", "D"]));
}

#[test]
fn dfs_descends_then_backtracks_to_the_start() {
    let trace = traverse(Strategy::Dfs, &square()).unwrap();
    assert_eq!(
        trace.actions(),
        [
            "visit",
            "explore",
            "visit",
            "explore",
            "visit",
            "explore",
            "visit",
            "backtrack",
            "backtrack",
            "backtrack",
            "backtrack",
            "done"
        ]
    );
    let deepest = &trace.steps()[6];
    assert_eq!(deepest.frontier, names(&["A", "B", "D", "C"]));
    assert_eq!(deepest.current.as_deref(), Some("C"));

    let first_back = &trace.steps()[7];
    assert_eq!(first_back.event, TraversalEvent::Backtrack { node: "C".into() });
    assert_eq!(first_back.current.as_deref(), Some("D"));

    let last = trace.last().unwrap();
    assert_eq!(last.order, names(&["A", "B", "D", "C"]));
    assert!(last.frontier.is_empty());
    assert_eq!(last.current, None);
}

#[test]
fn one_way_edges_are_followed_forward_only() {
    let graph = Graph {
        nodes: names(&["A", "B", "C"]),
        edges: vec![Edge::one_way("B", "A", 1), Edge::one_way("A", "C", 1)],
        start: None,
    };
    for strategy in [Strategy::Bfs, Strategy::Dfs] {
        let trace = traverse(strategy, &graph).unwrap();
        let last = trace.last().unwrap();
        assert_eq!(last.order, names(&["A", "C"]), "{strategy:?}");
        assert_eq!(
            last.event,
            TraversalEvent::Done {
                reached: 2,
                unreached: 1
            }
        );
    }
}

#[test]
fn start_node_can_be_chosen() {
    let mut graph = square();
    graph.start = Some("D".into());
    let trace = traverse(Strategy::Bfs, &graph).unwrap();
    assert_eq!(trace.steps()[0].event, TraversalEvent::Start { node: "D".into() });
    assert_eq!(trace.last().unwrap().order, names(&["D", "B", "C", "A"]));
}

#[test]
fn empty_graph_yields_only_the_done_record() {
    let graph = Graph {
        nodes: Vec::new(),
        edges: Vec::new(),
        start: None,
    };
    let trace = traverse(Strategy::Dfs, &graph).unwrap();
    assert_eq!(trace.actions(), ["done"]);
}

#[test]
fn unknown_start_is_rejected_before_any_record() {
    let mut graph = square();
    graph.start = Some("Z".into());
    let err = traverse(Strategy::Bfs, &graph).unwrap_err();
    assert!(matches!(err, TraceError::Validation(_)), "{err}");
}

#[test]
fn edges_default_to_two_way_in_json() {
    let two_way: Edge = serde_json::from_str(r#"{"from":"A","to":"B","weight":2}"#).unwrap();
    assert_eq!(two_way, Edge::new("A", "B", 2));
    assert!(!serde_json::to_string(&two_way).unwrap().contains("bidirectional"));

    let one_way: Edge =
        serde_json::from_str(r#"{"from":"A","to":"B","weight":2,"bidirectional":false}"#).unwrap();
    assert_eq!(one_way, Edge::one_way("A", "B", 2));
}

#[test]
fn job_names_distinguish_the_strategies() {
    let bfs = GraphTraversal {
        strategy: Strategy::Bfs,
        graph: square(),
    };
    let dfs = GraphTraversal {
        strategy: Strategy::Dfs,
        ..bfs.clone()
    };
    assert_eq!(bfs.name(), "graph_bfs");
    assert_eq!(dfs.name(), "graph_dfs");
}
