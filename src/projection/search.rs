use crate::generators::search::{BinaryEvent, BinaryStep, LinearEvent, LinearStep};
use crate::projection::Projector;

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct LinearSearchView {
    /// Index highlighted as "being examined".
    pub current: Option<usize>,
    pub matches: Vec<usize>,
    pub checked: usize,
    pub finished: bool,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct LinearSearchProjector;

impl Projector for LinearSearchProjector {
    type Step = LinearStep;
    type View = LinearSearchView;

    fn blank(&self) -> LinearSearchView {
        LinearSearchView::default()
    }

    fn project(&self, step: &LinearStep) -> LinearSearchView {
        let current = match step.event {
            LinearEvent::Check { index, .. } => Some(index),
            LinearEvent::Complete => None,
        };
        LinearSearchView {
            current,
            matches: step.matches.clone(),
            checked: step.checked,
            finished: step.is_final,
        }
    }

    fn apply(&self, view: &mut LinearSearchView, step: &LinearStep) {
        match step.event {
            LinearEvent::Check { index, found, .. } => {
                view.current = Some(index);
                view.checked = index + 1;
                if found {
                    view.matches.push(index);
                }
            }
            LinearEvent::Complete => {
                view.current = None;
                view.finished = true;
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct BinarySearchView {
    pub low: usize,
    pub high: usize,
    pub mid: Option<usize>,
    pub probes: usize,
    pub found: Option<usize>,
    pub finished: bool,
}

/// Binary search projector. The fold narrows the interval from the previous probe, so it
/// needs the sorted array and the target.
#[derive(Clone, Debug)]
pub struct BinarySearchProjector {
    sorted: Vec<i64>,
    target: i64,
}

impl BinarySearchProjector {
    pub fn new(sorted: Vec<i64>, target: i64) -> Self {
        Self { sorted, target }
    }

    fn narrow(&self, view: &mut BinarySearchView) {
        let Some(mid) = view.mid else {
            return;
        };
        match self.sorted.get(mid) {
            Some(&v) if v < self.target => view.low = mid + 1,
            Some(&v) if v > self.target => view.high = mid,
            _ => {}
        }
    }
}

impl Projector for BinarySearchProjector {
    type Step = BinaryStep;
    type View = BinarySearchView;

    fn blank(&self) -> BinarySearchView {
        BinarySearchView {
            low: 0,
            high: self.sorted.len(),
            mid: None,
            probes: 0,
            found: None,
            finished: false,
        }
    }

    fn project(&self, step: &BinaryStep) -> BinarySearchView {
        let (mid, found, finished) = match step.event {
            BinaryEvent::Probe { mid, .. } => (Some(mid), None, false),
            BinaryEvent::Found { index, .. } => (Some(index), Some(index), true),
            BinaryEvent::NotFound => (None, None, true),
        };
        BinarySearchView {
            low: step.low,
            high: step.high,
            mid,
            probes: step.probes,
            found,
            finished,
        }
    }

    fn apply(&self, view: &mut BinarySearchView, step: &BinaryStep) {
        match step.event {
            BinaryEvent::Probe { mid, .. } => {
                self.narrow(view);
                view.mid = Some(mid);
                view.probes += 1;
            }
            BinaryEvent::Found { index, .. } => {
                view.mid = Some(index);
                view.found = Some(index);
                view.finished = true;
            }
            BinaryEvent::NotFound => {
                self.narrow(view);
                view.mid = None;
                view.finished = true;
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/projection/search.rs"]
mod tests;
