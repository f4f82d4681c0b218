use super::*;
use crate::generators::mst::{MstAlgorithm, MstEvent, spanning_tree};
use crate::generators::pathfinding::{PathEvent, Strategy, search_maze};

#[test]
fn every_maze_preset_is_valid_and_solvable() {
    for preset in MazePreset::ALL {
        let maze = preset.maze();
        maze.validate().unwrap();
        for strategy in [Strategy::Bfs, Strategy::Dfs] {
            let trace = search_maze(strategy, &maze).unwrap();
            let last = trace.last().unwrap();
            assert_eq!(
                last.event,
                PathEvent::Found { cell: maze.goal },
                "{} via {strategy:?}",
                preset.name()
            );
        }
    }
}

#[test]
fn graph_presets_have_known_tree_costs() {
    for (preset, cost) in [
        (GraphPreset::Internet, 19),
        (GraphPreset::Power, 27),
        (GraphPreset::Road, 32),
    ] {
        let graph = preset.graph();
        graph.validate().unwrap();
        for algorithm in [MstAlgorithm::Kruskal, MstAlgorithm::Prim] {
            let trace = spanning_tree(algorithm, &graph).unwrap();
            let last = trace.last().unwrap();
            assert_eq!(last.total_cost, cost, "{} via {algorithm:?}", preset.name());
            assert!(matches!(
                last.event,
                MstEvent::Complete { spanning: true, .. }
            ));
        }
    }
}

#[test]
fn preset_names_round_trip_through_from_str() {
    for preset in MazePreset::ALL {
        assert_eq!(preset.name().parse::<MazePreset>().unwrap(), preset);
    }
    assert_eq!("road".parse::<GraphPreset>().unwrap(), GraphPreset::Road);

    let err = "volcano".parse::<MazePreset>().unwrap_err();
    assert!(err.to_string().contains("compare_b"));
}
