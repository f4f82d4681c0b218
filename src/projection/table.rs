//! Projectors for the table-filling DP families.

use crate::generators::knapsack::{KnapsackEvent, KnapsackStep};
use crate::generators::lcs::{LcsEvent, LcsStep};
use crate::projection::Projector;
use crate::trace::StepRecord;

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct KnapsackView {
    pub action: Option<&'static str>,
    pub table: Vec<Vec<u64>>,
    pub cell: Option<(usize, usize)>,
    pub item: Option<usize>,
    pub selected: Vec<usize>,
    pub residual: usize,
    pub total_value: Option<u64>,
    pub finished: bool,
}

#[derive(Clone, Copy, Debug)]
pub struct KnapsackProjector {
    items: usize,
    capacity: usize,
}

impl KnapsackProjector {
    pub fn new(items: usize, capacity: usize) -> Self {
        Self { items, capacity }
    }
}

impl Projector for KnapsackProjector {
    type Step = KnapsackStep;
    type View = KnapsackView;

    fn blank(&self) -> KnapsackView {
        KnapsackView {
            action: None,
            table: vec![vec![0; self.capacity + 1]; self.items + 1],
            cell: None,
            item: None,
            selected: Vec::new(),
            residual: self.capacity,
            total_value: None,
            finished: false,
        }
    }

    fn project(&self, step: &KnapsackStep) -> KnapsackView {
        let total_value = match step.event {
            KnapsackEvent::Complete { total_value, .. } => Some(total_value),
            _ => None,
        };
        KnapsackView {
            action: Some(step.action()),
            table: step.table.clone(),
            cell: step.event.cell(),
            item: step.event.item(),
            selected: step.selected.clone(),
            residual: step.residual,
            total_value,
            finished: total_value.is_some(),
        }
    }

    fn apply(&self, view: &mut KnapsackView, step: &KnapsackStep) {
        view.action = Some(step.action());
        view.cell = step.event.cell();
        view.item = step.event.item();
        match &step.event {
            KnapsackEvent::Check { .. } => {}
            KnapsackEvent::Skip {
                row,
                capacity,
                value,
                ..
            }
            | KnapsackEvent::Include {
                row,
                capacity,
                value,
                ..
            }
            | KnapsackEvent::Exclude {
                row,
                capacity,
                value,
                ..
            } => view.table[*row][*capacity] = *value,
            KnapsackEvent::Backtrack {
                item,
                capacity_after,
                ..
            } => {
                view.selected.push(*item);
                view.residual = *capacity_after;
            }
            KnapsackEvent::Complete {
                items,
                total_value,
                ..
            } => {
                view.selected = items.clone();
                view.total_value = Some(*total_value);
                view.finished = true;
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct LcsView {
    pub action: Option<&'static str>,
    pub table: Vec<Vec<u32>>,
    pub cell: Option<(usize, usize)>,
    pub collected: String,
    pub finished: bool,
}

#[derive(Clone, Copy, Debug)]
pub struct LcsProjector {
    rows: usize,
    cols: usize,
}

impl LcsProjector {
    pub fn new(a_len: usize, b_len: usize) -> Self {
        Self {
            rows: a_len,
            cols: b_len,
        }
    }
}

impl Projector for LcsProjector {
    type Step = LcsStep;
    type View = LcsView;

    fn blank(&self) -> LcsView {
        LcsView {
            action: None,
            table: vec![vec![0; self.cols + 1]; self.rows + 1],
            cell: None,
            collected: String::new(),
            finished: false,
        }
    }

    fn project(&self, step: &LcsStep) -> LcsView {
        let cell = match step.event {
            LcsEvent::Match { row, col, .. }
            | LcsEvent::Max { row, col, .. }
            | LcsEvent::Backtrack { row, col, .. } => Some((row, col)),
            LcsEvent::Complete { .. } => None,
        };
        LcsView {
            action: Some(step.action()),
            table: step.table.clone(),
            cell,
            collected: step.collected.clone(),
            finished: matches!(step.event, LcsEvent::Complete { .. }),
        }
    }

    fn apply(&self, view: &mut LcsView, step: &LcsStep) {
        view.action = Some(step.action());
        match &step.event {
            LcsEvent::Match {
                row, col, value, ..
            }
            | LcsEvent::Max {
                row, col, value, ..
            } => {
                view.table[*row][*col] = *value;
                view.cell = Some((*row, *col));
            }
            LcsEvent::Backtrack { row, col, ch } => {
                view.collected.insert(0, *ch);
                view.cell = Some((*row, *col));
            }
            LcsEvent::Complete { lcs, .. } => {
                view.collected = lcs.clone();
                view.cell = None;
                view.finished = true;
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/projection/table.rs"]
mod tests;
