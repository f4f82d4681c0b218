use std::collections::VecDeque;

use crate::foundation::config::Limits;
use crate::foundation::core::Cell;
use crate::foundation::error::{TraceError, TraceResult};
use crate::projection::grid::GridProjector;
use crate::trace::{Recorder, StepRecord, Trace, TraceGenerator};

pub const OPEN: u8 = 0;
pub const WALL: u8 = 1;

/// Rectangular grid maze. `0` is an open cell, `1` a wall.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Maze {
    pub grid: Vec<Vec<u8>>,
    pub start: Cell,
    pub goal: Cell,
}

impl Maze {
    pub fn rows(&self) -> usize {
        self.grid.len()
    }

    pub fn cols(&self) -> usize {
        self.grid.first().map_or(0, Vec::len)
    }

    pub fn is_open(&self, cell: Cell) -> bool {
        self.grid
            .get(cell.row)
            .and_then(|row| row.get(cell.col))
            .is_some_and(|&v| v == OPEN)
    }

    pub fn validate(&self) -> TraceResult<()> {
        let (rows, cols) = (self.rows(), self.cols());
        if rows == 0 || cols == 0 {
            return Err(TraceError::validation("maze grid must be non-empty"));
        }
        if rows > Limits::MAX_GRID_SIDE || cols > Limits::MAX_GRID_SIDE {
            return Err(TraceError::validation(format!(
                "maze is {rows}x{cols}, at most {max}x{max} is supported",
                max = Limits::MAX_GRID_SIDE
            )));
        }
        for (r, row) in self.grid.iter().enumerate() {
            if row.len() != cols {
                return Err(TraceError::validation(format!(
                    "maze row {r} has {} cells, expected {cols}",
                    row.len()
                )));
            }
            if let Some(c) = row.iter().position(|&v| v != OPEN && v != WALL) {
                return Err(TraceError::validation(format!(
                    "maze cell ({r}, {c}) must be 0 (open) or 1 (wall)"
                )));
            }
        }
        for (what, cell) in [("start", self.start), ("goal", self.goal)] {
            if cell.row >= rows || cell.col >= cols {
                return Err(TraceError::validation(format!(
                    "{what} {cell} is outside the {rows}x{cols} maze"
                )));
            }
            if !self.is_open(cell) {
                return Err(TraceError::validation(format!("{what} {cell} is a wall")));
            }
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    Bfs,
    Dfs,
}

impl Strategy {
    pub fn name(self) -> &'static str {
        match self {
            Self::Bfs => "bfs",
            Self::Dfs => "dfs",
        }
    }

    fn frontier_name(self) -> &'static str {
        match self {
            Self::Bfs => "queue",
            Self::Dfs => "stack",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Neighbor scan order.
    pub const ALL: [Direction; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    pub fn delta(self) -> (isize, isize) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum PathEvent {
    Start {
        cell: Cell,
    },
    Visit {
        cell: Cell,
    },
    Explore {
        from: Cell,
        cell: Cell,
        direction: Direction,
    },
    Found {
        cell: Cell,
    },
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PathStep {
    #[serde(flatten)]
    pub event: PathEvent,
    pub message: String,
    pub current: Cell,
    /// Discovered cells in discovery order. A cell is marked when it enters the frontier.
    pub visited: Vec<Cell>,
    /// Queue (front first) for BFS, stack (bottom first) for DFS.
    pub frontier: Vec<Cell>,
    /// Path from the start to `current`, both ends included. Empty on the start record.
    pub path: Vec<Cell>,
    /// Discovery edges `(parent, child)` of the search tree.
    pub tree: Vec<(Cell, Cell)>,
}

impl StepRecord for PathStep {
    fn action(&self) -> &'static str {
        match self.event {
            PathEvent::Start { .. } => "start",
            PathEvent::Visit { .. } => "visit",
            PathEvent::Explore { .. } => "explore",
            PathEvent::Found { .. } => "found",
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Walk discovery edges back from `cell` to the root.
pub(crate) fn path_to(tree: &[(Cell, Cell)], cell: Cell) -> Vec<Cell> {
    let mut path = vec![cell];
    let mut at = cell;
    for _ in 0..tree.len() {
        match tree.iter().find(|(_, child)| *child == at) {
            Some(&(parent, _)) => {
                path.push(parent);
                at = parent;
            }
            None => break,
        }
    }
    path.reverse();
    path
}

/// A frontier that pops from the front (BFS) or the back (DFS).
struct Frontier {
    strategy: Strategy,
    cells: VecDeque<Cell>,
}

impl Frontier {
    fn pop(&mut self) -> Option<Cell> {
        match self.strategy {
            Strategy::Bfs => self.cells.pop_front(),
            Strategy::Dfs => self.cells.pop_back(),
        }
    }

    fn snapshot(&self) -> Vec<Cell> {
        self.cells.iter().copied().collect()
    }
}

/// Search the maze from `start` towards `goal`, recording every visit and every discovery.
///
/// Generation stops at the first `found` record. An unreachable goal ends the trace when the
/// frontier empties, with no `found` record.
#[tracing::instrument(skip(maze), fields(rows = maze.rows(), cols = maze.cols()))]
pub fn search_maze(strategy: Strategy, maze: &Maze) -> TraceResult<Trace<PathStep>> {
    maze.validate()?;

    let mut rec = Recorder::new();
    let mut visited = vec![maze.start];
    let mut tree: Vec<(Cell, Cell)> = Vec::new();
    let mut frontier = Frontier {
        strategy,
        cells: VecDeque::from([maze.start]),
    };

    rec.push(PathStep {
        event: PathEvent::Start { cell: maze.start },
        message: format!("start at {} with {} search", maze.start, strategy.name()),
        current: maze.start,
        visited: visited.clone(),
        frontier: frontier.snapshot(),
        path: Vec::new(),
        tree: Vec::new(),
    });

    while let Some(cell) = frontier.pop() {
        let path = path_to(&tree, cell);
        rec.push(PathStep {
            event: PathEvent::Visit { cell },
            message: format!("visit {cell}"),
            current: cell,
            visited: visited.clone(),
            frontier: frontier.snapshot(),
            path: path.clone(),
            tree: tree.clone(),
        });

        if cell == maze.goal {
            let len = path.len();
            rec.push(PathStep {
                event: PathEvent::Found { cell },
                message: format!("goal {cell} reached, path covers {len} cells"),
                current: cell,
                visited,
                frontier: Vec::new(),
                path,
                tree,
            });
            tracing::debug!(cells = len, "goal found");
            return Ok(rec.finish());
        }

        for direction in Direction::ALL {
            let (dr, dc) = direction.delta();
            let Some(next) = cell.offset(dr, dc) else {
                continue;
            };
            if !maze.is_open(next) || visited.contains(&next) {
                continue;
            }
            visited.push(next);
            tree.push((cell, next));
            frontier.cells.push_back(next);
            rec.push(PathStep {
                event: PathEvent::Explore {
                    from: cell,
                    cell: next,
                    direction,
                },
                message: format!(
                    "{direction:?} of {cell} is open: add {next} to the {}",
                    strategy.frontier_name()
                ),
                current: cell,
                visited: visited.clone(),
                frontier: frontier.snapshot(),
                path: path.clone(),
                tree: tree.clone(),
            });
        }
    }

    tracing::debug!(visited = visited.len(), "frontier exhausted without reaching the goal");
    Ok(rec.finish())
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MazeSearch {
    pub strategy: Strategy,
    pub maze: Maze,
}

impl TraceGenerator for MazeSearch {
    type Step = PathStep;
    type Projector = GridProjector;

    fn name(&self) -> &'static str {
        self.strategy.name()
    }

    fn generate(&self) -> TraceResult<Trace<PathStep>> {
        search_maze(self.strategy, &self.maze)
    }

    fn projector(&self) -> GridProjector {
        GridProjector
    }
}

#[cfg(test)]
#[path = "../../tests/unit/generators/pathfinding.rs"]
mod tests;
