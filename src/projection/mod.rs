//! Mapping a trace position to a renderable view.
//!
//! Every family has a projector with two ways to reach the same view:
//! `project` reads the snapshot fields embedded in a single record, while `apply`
//! folds only the record's transition data onto the previous view. The two must agree at
//! every index, which is what lets the timeline step backward without replaying history.

pub mod graph;
pub mod greedy;
pub mod grid;
pub mod merge;
pub mod search;
pub mod sorting;
pub mod table;
pub mod traversal;

use crate::foundation::core::Position;
use crate::trace::{StepRecord, Trace};

pub trait Projector {
    type Step: StepRecord;
    type View: Clone + PartialEq + std::fmt::Debug;

    /// View before any record has been applied (timeline position 0).
    fn blank(&self) -> Self::View;

    /// View after `step`, read from the step alone.
    fn project(&self, step: &Self::Step) -> Self::View;

    /// Fold the transition described by `step` onto `view`.
    fn apply(&self, view: &mut Self::View, step: &Self::Step);

    /// Fold every step onto the blank view.
    fn replay(&self, steps: &[Self::Step]) -> Self::View {
        let mut view = self.blank();
        for step in steps {
            self.apply(&mut view, step);
        }
        view
    }

    /// View at a timeline position. Reads at most one record.
    fn view_at(&self, trace: &Trace<Self::Step>, position: Position) -> Self::View {
        match position
            .clamp(trace.len())
            .record_index()
            .and_then(|i| trace.get(i))
        {
            Some(step) => self.project(step),
            None => self.blank(),
        }
    }
}

/// First index where the snapshot read and the replayed fold disagree.
pub fn first_divergence<P: Projector>(projector: &P, trace: &Trace<P::Step>) -> Option<usize> {
    let mut folded = projector.blank();
    for (i, step) in trace.iter().enumerate() {
        projector.apply(&mut folded, step);
        if projector.project(step) != folded {
            return Some(i);
        }
    }
    None
}

#[cfg(test)]
#[path = "../../tests/unit/projection/mod.rs"]
mod tests;
