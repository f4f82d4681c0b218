use crate::generators::mst::{EdgeRef, MstEvent, MstStep};
use crate::projection::Projector;
use crate::trace::StepRecord;

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct MstView {
    pub action: Option<&'static str>,
    /// Edge under consideration, accepted or rejected by the current record.
    pub edge: Option<EdgeRef>,
    pub accepted: Vec<EdgeRef>,
    pub total_cost: u64,
    pub visited: Vec<String>,
    pub spanning: Option<bool>,
}

impl MstView {
    fn touch(&mut self, node: &str) {
        if !self.visited.iter().any(|v| v == node) {
            self.visited.push(node.to_owned());
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct MstProjector;

impl Projector for MstProjector {
    type Step = MstStep;
    type View = MstView;

    fn blank(&self) -> MstView {
        MstView::default()
    }

    fn project(&self, step: &MstStep) -> MstView {
        let (edge, spanning) = match &step.event {
            MstEvent::Check { edge } | MstEvent::Add { edge } | MstEvent::Reject { edge } => {
                (Some(edge.clone()), None)
            }
            MstEvent::Start { .. } => (None, None),
            MstEvent::Complete { spanning, .. } => (None, Some(*spanning)),
        };
        MstView {
            action: Some(step.action()),
            edge,
            accepted: step.accepted.clone(),
            total_cost: step.total_cost,
            visited: step.visited.clone(),
            spanning,
        }
    }

    fn apply(&self, view: &mut MstView, step: &MstStep) {
        view.action = Some(step.action());
        view.edge = None;
        match &step.event {
            MstEvent::Start { node } => view.touch(node),
            MstEvent::Check { edge } | MstEvent::Reject { edge } => view.edge = Some(edge.clone()),
            MstEvent::Add { edge } => {
                view.touch(&edge.from);
                view.touch(&edge.to);
                view.total_cost += u64::from(edge.weight);
                view.accepted.push(edge.clone());
                view.edge = Some(edge.clone());
            }
            MstEvent::Complete { spanning, .. } => view.spanning = Some(*spanning),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/projection/graph.rs"]
mod tests;
