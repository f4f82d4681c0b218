use super::*;

fn easy() -> Maze {
    Maze {
        grid: vec![
            vec![1, 1, 1, 1, 1],
            vec![1, 0, 0, 0, 1],
            vec![1, 0, 1, 0, 1],
            vec![1, 0, 0, 0, 1],
            vec![1, 1, 1, 1, 1],
        ],
        start: Cell::new(1, 1),
        goal: Cell::new(3, 3),
    }
}

#[test]
fn bfs_finds_a_shortest_path_on_the_easy_maze() {
    let trace = search_maze(Strategy::Bfs, &easy()).unwrap();
    assert_eq!(trace.count("found"), 1);
    let last = trace.last().unwrap();
    assert_eq!(last.action(), "found");
    assert!(last.frontier.is_empty());
    assert_eq!(
        last.path,
        vec![
            Cell::new(1, 1),
            Cell::new(2, 1),
            Cell::new(3, 1),
            Cell::new(3, 2),
            Cell::new(3, 3)
        ]
    );
    assert_eq!(last.path.len() - 1, Cell::new(1, 1).manhattan(Cell::new(3, 3)));
}

#[test]
fn dfs_path_is_never_shorter_than_bfs() {
    let bfs = search_maze(Strategy::Bfs, &easy()).unwrap();
    let dfs = search_maze(Strategy::Dfs, &easy()).unwrap();
    let dfs_last = dfs.last().unwrap();
    assert_eq!(dfs_last.action(), "found");
    assert_eq!(dfs_last.path.first(), Some(&Cell::new(1, 1)));
    assert_eq!(dfs_last.path.last(), Some(&Cell::new(3, 3)));
    assert!(dfs_last.path.len() >= bfs.last().unwrap().path.len());
}

#[test]
fn trace_opens_with_start_and_explores_before_visiting() {
    let trace = search_maze(Strategy::Bfs, &easy()).unwrap();
    assert_eq!(&trace.actions()[..4], &["start", "visit", "explore", "explore"]);
    let start = trace.get(0).unwrap();
    assert!(start.path.is_empty());
    assert_eq!(start.frontier, vec![Cell::new(1, 1)]);

    let explore = trace.get(2).unwrap();
    assert_eq!(
        explore.event,
        PathEvent::Explore {
            from: Cell::new(1, 1),
            cell: Cell::new(2, 1),
            direction: Direction::Down,
        }
    );
    assert_eq!(explore.frontier, vec![Cell::new(2, 1)]);
    assert!(explore.visited.contains(&Cell::new(2, 1)));
}

#[test]
fn no_explore_after_the_goal_is_visited() {
    let trace = search_maze(Strategy::Bfs, &easy()).unwrap();
    let n = trace.len();
    assert_eq!(trace.get(n - 2).unwrap().action(), "visit");
    assert_eq!(
        trace.get(n - 2).unwrap().event,
        PathEvent::Visit {
            cell: Cell::new(3, 3)
        }
    );
}

#[test]
fn each_cell_is_visited_at_most_once() {
    for strategy in [Strategy::Bfs, Strategy::Dfs] {
        let trace = search_maze(strategy, &easy()).unwrap();
        let mut seen = Vec::new();
        for step in &trace {
            if let PathEvent::Visit { cell } = step.event {
                assert!(!seen.contains(&cell), "{strategy:?} revisited {cell}");
                seen.push(cell);
            }
        }
    }
}

#[test]
fn unreachable_goal_ends_without_found() {
    let maze = Maze {
        grid: vec![vec![0, 1, 0]],
        start: Cell::new(0, 0),
        goal: Cell::new(0, 2),
    };
    for strategy in [Strategy::Bfs, Strategy::Dfs] {
        let trace = search_maze(strategy, &maze).unwrap();
        assert_eq!(trace.actions(), vec!["start", "visit"]);
        assert_eq!(trace.count("found"), 0);
    }
}

#[test]
fn start_on_goal_is_found_immediately() {
    let mut maze = easy();
    maze.goal = maze.start;
    let trace = search_maze(Strategy::Dfs, &maze).unwrap();
    assert_eq!(trace.actions(), vec!["start", "visit", "found"]);
    assert_eq!(trace.last().unwrap().path, vec![Cell::new(1, 1)]);
}

#[test]
fn malformed_mazes_are_rejected() {
    let mut ragged = easy();
    ragged.grid[2].pop();
    assert!(ragged.validate().is_err());

    let mut walled = easy();
    walled.goal = Cell::new(2, 2);
    let err = search_maze(Strategy::Bfs, &walled).unwrap_err();
    assert!(err.to_string().contains("goal (2, 2) is a wall"));

    let mut odd = easy();
    odd.grid[1][2] = 2;
    assert!(odd.validate().is_err());

    let mut outside = easy();
    outside.start = Cell::new(9, 0);
    assert!(outside.validate().is_err());

    let empty = Maze {
        grid: vec![],
        start: Cell::new(0, 0),
        goal: Cell::new(0, 0),
    };
    assert!(empty.validate().is_err());
}

#[test]
fn path_to_walks_back_to_the_root() {
    let a = Cell::new(0, 0);
    let b = Cell::new(0, 1);
    let c = Cell::new(1, 1);
    let tree = vec![(a, b), (b, c)];
    assert_eq!(path_to(&tree, c), vec![a, b, c]);
    assert_eq!(path_to(&tree, a), vec![a]);
}
