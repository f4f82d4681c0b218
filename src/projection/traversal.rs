use crate::generators::pathfinding::Strategy;
use crate::generators::traversal::{TraversalEvent, TraversalStep};
use crate::projection::Projector;
use crate::trace::StepRecord;

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct TraversalView {
    pub action: Option<&'static str>,
    pub current: Option<String>,
    /// Edge being followed by an `enqueue` or `explore` record.
    pub edge: Option<(String, String)>,
    pub visited: Vec<String>,
    pub frontier: Vec<String>,
    pub order: Vec<String>,
    pub finished: bool,
}

/// The meaning of a `visit` record depends on the strategy, so the projector carries it.
#[derive(Clone, Copy, Debug)]
pub struct TraversalProjector {
    strategy: Strategy,
}

impl TraversalProjector {
    pub fn new(strategy: Strategy) -> Self {
        Self { strategy }
    }
}

impl Projector for TraversalProjector {
    type Step = TraversalStep;
    type View = TraversalView;

    fn blank(&self) -> TraversalView {
        TraversalView::default()
    }

    fn project(&self, step: &TraversalStep) -> TraversalView {
        let edge = match &step.event {
            TraversalEvent::Enqueue { from, node } => Some((from.clone(), node.clone())),
            TraversalEvent::Explore { from, to } => Some((from.clone(), to.clone())),
            _ => None,
        };
        TraversalView {
            action: Some(step.action()),
            current: step.current.clone(),
            edge,
            visited: step.visited.clone(),
            frontier: step.frontier.clone(),
            order: step.order.clone(),
            finished: matches!(step.event, TraversalEvent::Done { .. }),
        }
    }

    fn apply(&self, view: &mut TraversalView, step: &TraversalStep) {
        view.action = Some(step.action());
        view.edge = None;
        match &step.event {
            TraversalEvent::Start { node } => {
                view.visited.push(node.clone());
                view.frontier.push(node.clone());
                view.current = Some(node.clone());
            }
            TraversalEvent::Visit { node } => {
                match self.strategy {
                    Strategy::Bfs => {
                        if !view.frontier.is_empty() {
                            view.frontier.remove(0);
                        }
                    }
                    Strategy::Dfs => {
                        view.visited.push(node.clone());
                        view.frontier.push(node.clone());
                    }
                }
                view.order.push(node.clone());
                view.current = Some(node.clone());
            }
            TraversalEvent::Enqueue { from, node } => {
                view.visited.push(node.clone());
                view.frontier.push(node.clone());
                view.current = Some(from.clone());
                view.edge = Some((from.clone(), node.clone()));
            }
            TraversalEvent::Explore { from, to } => {
                view.current = Some(from.clone());
                view.edge = Some((from.clone(), to.clone()));
            }
            TraversalEvent::Backtrack { .. } => {
                view.frontier.pop();
                view.current = view.frontier.last().cloned();
            }
            TraversalEvent::Done { .. } => {
                view.current = None;
                view.finished = true;
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/projection/traversal.rs"]
mod tests;
