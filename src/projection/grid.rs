use crate::foundation::core::Cell;
use crate::generators::pathfinding::{PathEvent, PathStep, path_to};
use crate::projection::Projector;
use crate::trace::StepRecord;

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct GridView {
    pub action: Option<&'static str>,
    pub current: Option<Cell>,
    /// Cell being added to the frontier by an `explore` record.
    pub exploring: Option<Cell>,
    pub visited: Vec<Cell>,
    pub frontier: Vec<Cell>,
    pub path: Vec<Cell>,
    pub tree: Vec<(Cell, Cell)>,
    pub found: bool,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct GridProjector;

impl Projector for GridProjector {
    type Step = PathStep;
    type View = GridView;

    fn blank(&self) -> GridView {
        GridView::default()
    }

    fn project(&self, step: &PathStep) -> GridView {
        let exploring = match step.event {
            PathEvent::Explore { cell, .. } => Some(cell),
            _ => None,
        };
        GridView {
            action: Some(step.action()),
            current: Some(step.current),
            exploring,
            visited: step.visited.clone(),
            frontier: step.frontier.clone(),
            path: step.path.clone(),
            tree: step.tree.clone(),
            found: matches!(step.event, PathEvent::Found { .. }),
        }
    }

    fn apply(&self, view: &mut GridView, step: &PathStep) {
        view.action = Some(step.action());
        view.exploring = None;
        match step.event {
            PathEvent::Start { cell } => {
                view.current = Some(cell);
                view.visited = vec![cell];
                view.frontier = vec![cell];
                view.path.clear();
                view.tree.clear();
            }
            PathEvent::Visit { cell } => {
                // Cells enter the frontier once, so removing by value matches either pop order.
                view.frontier.retain(|c| *c != cell);
                view.current = Some(cell);
                view.path = path_to(&view.tree, cell);
            }
            PathEvent::Explore { from, cell, .. } => {
                view.current = Some(from);
                view.exploring = Some(cell);
                view.visited.push(cell);
                view.frontier.push(cell);
                view.tree.push((from, cell));
            }
            PathEvent::Found { cell } => {
                view.current = Some(cell);
                view.frontier.clear();
                view.found = true;
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/projection/grid.rs"]
mod tests;
