use crate::generators::merge_sort::{Lane, MergeEvent, MergeStep};
use crate::projection::Projector;
use crate::trace::StepRecord;

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct MergeView {
    pub array: Vec<i64>,
    pub action: Option<&'static str>,
    pub range: Option<(usize, usize)>,
    pub depth: usize,
    pub lane: Lane,
    /// Index written by the current record.
    pub placing: Option<usize>,
    pub finished: bool,
}

#[derive(Clone, Debug)]
pub struct MergeProjector {
    input: Vec<i64>,
}

impl MergeProjector {
    pub fn new(input: Vec<i64>) -> Self {
        Self { input }
    }
}

impl Projector for MergeProjector {
    type Step = MergeStep;
    type View = MergeView;

    fn blank(&self) -> MergeView {
        MergeView {
            array: self.input.clone(),
            action: None,
            range: None,
            depth: 0,
            lane: Lane::Root,
            placing: None,
            finished: false,
        }
    }

    fn project(&self, step: &MergeStep) -> MergeView {
        let placing = match step.event {
            MergeEvent::MergeCompare { placing, .. } | MergeEvent::MergeRemaining { placing, .. } => {
                Some(placing)
            }
            _ => None,
        };
        MergeView {
            array: step.array.clone(),
            action: Some(step.action()),
            range: step.range,
            depth: step.depth,
            lane: step.lane,
            placing,
            finished: step.event == MergeEvent::Complete,
        }
    }

    fn apply(&self, view: &mut MergeView, step: &MergeStep) {
        view.action = Some(step.action());
        view.placing = None;
        match step.event {
            MergeEvent::Divide {
                left,
                right,
                depth,
                lane,
                ..
            }
            | MergeEvent::MergeStart {
                left,
                right,
                depth,
                lane,
                ..
            }
            | MergeEvent::MergeComplete {
                left,
                right,
                depth,
                lane,
            } => {
                view.range = Some((left, right));
                view.depth = depth;
                view.lane = lane;
            }
            MergeEvent::MergeCompare { placing, value, .. }
            | MergeEvent::MergeRemaining { placing, value } => {
                view.array[placing] = value;
                view.placing = Some(placing);
            }
            MergeEvent::Complete => {
                view.range = None;
                view.depth = 0;
                view.lane = Lane::Root;
                view.finished = true;
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/projection/merge.rs"]
mod tests;
