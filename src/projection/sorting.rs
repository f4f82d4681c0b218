use crate::generators::sorting::{SortEvent, SortStep, follow_swap};
use crate::projection::Projector;
use crate::trace::StepRecord;

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct SortView {
    pub array: Vec<i64>,
    pub action: Option<&'static str>,
    pub highlighted: Vec<usize>,
    pub sorted: Vec<usize>,
    pub comparisons: usize,
    pub swaps: usize,
    pub pivot: Option<usize>,
    pub held: Option<i64>,
    pub finished: bool,
}

/// Projector for the comparison-sort family. Position 0 shows the unsorted input.
#[derive(Clone, Debug)]
pub struct SortProjector {
    input: Vec<i64>,
}

impl SortProjector {
    pub fn new(input: Vec<i64>) -> Self {
        Self { input }
    }
}

impl Projector for SortProjector {
    type Step = SortStep;
    type View = SortView;

    fn blank(&self) -> SortView {
        SortView {
            array: self.input.clone(),
            action: None,
            highlighted: Vec::new(),
            sorted: Vec::new(),
            comparisons: 0,
            swaps: 0,
            pivot: None,
            held: None,
            finished: false,
        }
    }

    fn project(&self, step: &SortStep) -> SortView {
        SortView {
            array: step.array.clone(),
            action: Some(step.action()),
            highlighted: step.event.indices(),
            sorted: step.sorted.clone(),
            comparisons: step.comparisons,
            swaps: step.swaps,
            pivot: step.pivot,
            held: step.held,
            finished: step.event == SortEvent::Complete,
        }
    }

    fn apply(&self, view: &mut SortView, step: &SortStep) {
        match step.event {
            SortEvent::Compare { .. } => view.comparisons += 1,
            SortEvent::Swap { i, j } => {
                view.array.swap(i, j);
                view.swaps += 1;
                view.pivot = follow_swap(view.pivot, i, j);
            }
            SortEvent::Select { value, .. } => view.held = Some(value),
            SortEvent::Shift { from, to } => {
                view.array[to] = view.array[from];
                view.swaps += 1;
            }
            SortEvent::Insert { index, value } => {
                view.array[index] = value;
                view.held = None;
            }
            SortEvent::SelectPivot { index, .. } => view.pivot = Some(index),
            SortEvent::Complete => {
                view.pivot = None;
                view.held = None;
                view.finished = true;
            }
        }
        view.sorted.extend_from_slice(&step.settled);
        view.sorted.sort_unstable();
        view.sorted.dedup();
        view.action = Some(step.action());
        view.highlighted = step.event.indices();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/projection/sorting.rs"]
mod tests;
