use crate::foundation::config::Limits;
use crate::foundation::error::TraceResult;
use crate::projection::sorting::SortProjector;
use crate::trace::{Recorder, StepRecord, Trace, TraceGenerator};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortAlgorithm {
    Bubble,
    Selection,
    Insertion,
    Quick,
}

impl SortAlgorithm {
    pub fn name(self) -> &'static str {
        match self {
            Self::Bubble => "bubble_sort",
            Self::Selection => "selection_sort",
            Self::Insertion => "insertion_sort",
            Self::Quick => "quick_sort",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum SortEvent {
    Compare { i: usize, j: usize },
    Swap { i: usize, j: usize },
    /// Insertion sort picks up the key at `index`.
    Select { index: usize, value: i64 },
    /// Element at `from` is copied one slot right into `to`.
    Shift { from: usize, to: usize },
    Insert { index: usize, value: i64 },
    SelectPivot { index: usize, value: i64 },
    Complete,
}

impl SortEvent {
    /// Indices a renderer should highlight for this transition.
    pub fn indices(&self) -> Vec<usize> {
        match *self {
            Self::Compare { i, j } | Self::Swap { i, j } => vec![i, j],
            Self::Shift { from, to } => vec![from, to],
            Self::Select { index, .. }
            | Self::Insert { index, .. }
            | Self::SelectPivot { index, .. } => vec![index],
            Self::Complete => Vec::new(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SortStep {
    #[serde(flatten)]
    pub event: SortEvent,
    pub message: String,
    /// Array state after this record.
    pub array: Vec<i64>,
    /// Indices that became sorted with this record.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub settled: Vec<usize>,
    /// Every sorted index so far, ascending.
    pub sorted: Vec<usize>,
    pub comparisons: usize,
    /// Swaps plus shifts.
    pub swaps: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pivot: Option<usize>,
    /// Key held out of the array during an insertion pass.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub held: Option<i64>,
}

impl StepRecord for SortStep {
    fn action(&self) -> &'static str {
        match self.event {
            SortEvent::Compare { .. } => "compare",
            SortEvent::Swap { .. } => "swap",
            SortEvent::Select { .. } => "select",
            SortEvent::Shift { .. } => "shift",
            SortEvent::Insert { .. } => "insert",
            SortEvent::SelectPivot { .. } => "select_pivot",
            SortEvent::Complete => "complete",
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Where a tracked index ends up after swapping `i` and `j`.
pub(crate) fn follow_swap(tracked: Option<usize>, i: usize, j: usize) -> Option<usize> {
    tracked.map(|p| match p {
        p if p == i => j,
        p if p == j => i,
        p => p,
    })
}

/// Working state shared by the four comparison sorts.
struct SortRun {
    rec: Recorder<SortStep>,
    a: Vec<i64>,
    sorted: Vec<bool>,
    comparisons: usize,
    swaps: usize,
    pivot: Option<usize>,
    held: Option<i64>,
}

impl SortRun {
    fn new(input: &[i64]) -> Self {
        Self {
            rec: Recorder::new(),
            a: input.to_vec(),
            sorted: vec![false; input.len()],
            comparisons: 0,
            swaps: 0,
            pivot: None,
            held: None,
        }
    }

    fn sorted_indices(&self) -> Vec<usize> {
        self.sorted
            .iter()
            .enumerate()
            .filter_map(|(i, &s)| s.then_some(i))
            .collect()
    }

    fn emit(&mut self, event: SortEvent, message: String) {
        self.rec.push(SortStep {
            event,
            message,
            array: self.a.clone(),
            settled: Vec::new(),
            sorted: self.sorted_indices(),
            comparisons: self.comparisons,
            swaps: self.swaps,
            pivot: self.pivot,
            held: self.held,
        });
    }

    /// `a[i] > a[j]`, recorded as one comparison.
    fn compare(&mut self, i: usize, j: usize) -> bool {
        self.comparisons += 1;
        let (x, y) = (self.a[i], self.a[j]);
        let out_of_order = x > y;
        let verdict = if out_of_order { ">" } else { "<=" };
        self.emit(
            SortEvent::Compare { i, j },
            format!("compare index {i} ({x}) with index {j} ({y}): {x} {verdict} {y}"),
        );
        out_of_order
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.a.swap(i, j);
        self.swaps += 1;
        self.pivot = follow_swap(self.pivot, i, j);
        let (x, y) = (self.a[i], self.a[j]);
        self.emit(
            SortEvent::Swap { i, j },
            format!("swap index {i} and {j}: now {x} and {y}"),
        );
    }

    /// Mark indices sorted on the most recent record. Before the first record this is a
    /// no-op and the terminal record picks the indices up instead.
    fn settle(&mut self, indices: &[usize]) {
        if self.rec.is_empty() {
            return;
        }
        let fresh: Vec<usize> = indices
            .iter()
            .copied()
            .filter(|&i| !self.sorted[i])
            .collect();
        if fresh.is_empty() {
            return;
        }
        for &i in &fresh {
            self.sorted[i] = true;
        }
        let snapshot = self.sorted_indices();
        if let Some(last) = self.rec.last_mut() {
            last.settled.extend(fresh);
            last.sorted = snapshot;
        }
    }

    fn finish(mut self, algorithm: SortAlgorithm) -> Trace<SortStep> {
        let rest: Vec<usize> = (0..self.a.len()).filter(|&i| !self.sorted[i]).collect();
        self.sorted.iter_mut().for_each(|s| *s = true);
        self.pivot = None;
        self.held = None;
        let message = format!(
            "{} finished: {} comparisons, {} swaps",
            algorithm.name(),
            self.comparisons,
            self.swaps
        );
        self.emit(SortEvent::Complete, message);
        if let Some(last) = self.rec.last_mut() {
            last.settled = rest;
        }
        self.rec.finish()
    }
}

fn bubble(run: &mut SortRun) {
    let n = run.a.len();
    for pass in 0..n.saturating_sub(1) {
        let mut swapped = false;
        for j in 0..n - 1 - pass {
            if run.compare(j, j + 1) {
                run.swap(j, j + 1);
                swapped = true;
            }
        }
        run.settle(&[n - 1 - pass]);
        if !swapped {
            let prefix: Vec<usize> = (0..n - 1 - pass).collect();
            run.settle(&prefix);
            break;
        }
    }
}

fn selection(run: &mut SortRun) {
    let n = run.a.len();
    for i in 0..n.saturating_sub(1) {
        let mut min = i;
        for j in i + 1..n {
            if run.compare(min, j) {
                min = j;
            }
        }
        if min != i {
            run.swap(i, min);
        }
        run.settle(&[i]);
    }
}

fn insertion(run: &mut SortRun) {
    let n = run.a.len();
    for i in 1..n {
        let key = run.a[i];
        run.held = Some(key);
        run.emit(
            SortEvent::Select { index: i, value: key },
            format!("pick up {key} from index {i}"),
        );

        let mut hole = i;
        while hole > 0 {
            run.comparisons += 1;
            let left = run.a[hole - 1];
            let shifts = left > key;
            let verdict = if shifts { "shift right" } else { "stop" };
            run.emit(
                SortEvent::Compare { i: hole - 1, j: hole },
                format!("compare index {} ({left}) with key {key}: {verdict}", hole - 1),
            );
            if !shifts {
                break;
            }
            run.a[hole] = left;
            run.swaps += 1;
            run.emit(
                SortEvent::Shift {
                    from: hole - 1,
                    to: hole,
                },
                format!("shift {left} from index {} to {hole}", hole - 1),
            );
            hole -= 1;
        }

        run.a[hole] = key;
        run.held = None;
        run.emit(
            SortEvent::Insert {
                index: hole,
                value: key,
            },
            format!("insert {key} at index {hole}"),
        );
        if i == 1 {
            run.settle(&[0, 1]);
        } else {
            run.settle(&[i]);
        }
    }
}

fn quick(run: &mut SortRun) {
    let Some(last) = run.a.len().checked_sub(1) else {
        return;
    };
    // Right half is pushed first so the left half is partitioned first.
    let mut work = vec![(0, last)];
    while let Some((low, high)) = work.pop() {
        if low == high {
            run.settle(&[low]);
            continue;
        }

        let pivot_value = run.a[high];
        run.pivot = Some(high);
        run.emit(
            SortEvent::SelectPivot {
                index: high,
                value: pivot_value,
            },
            format!("partition [{low}, {high}] around pivot {pivot_value}"),
        );

        let mut store = low;
        for j in low..high {
            run.comparisons += 1;
            let value = run.a[j];
            let less = value < pivot_value;
            let verdict = if less { "smaller" } else { "not smaller" };
            run.emit(
                SortEvent::Compare { i: j, j: high },
                format!("compare index {j} ({value}) with pivot {pivot_value}: {verdict}"),
            );
            if less {
                run.swap(store, j);
                store += 1;
            }
        }
        run.swap(store, high);
        run.settle(&[store]);

        if store < high {
            work.push((store + 1, high));
        }
        if store > low {
            work.push((low, store - 1));
        }
    }
}

/// Run a comparison sort over a working copy of `input`, recording every comparison.
#[tracing::instrument(skip(input), fields(len = input.len()))]
pub fn comparison_sort(algorithm: SortAlgorithm, input: &[i64]) -> TraceResult<Trace<SortStep>> {
    Limits::check_len("sort array", input.len(), Limits::MAX_ARRAY_LEN)?;

    let mut run = SortRun::new(input);
    match algorithm {
        SortAlgorithm::Bubble => bubble(&mut run),
        SortAlgorithm::Selection => selection(&mut run),
        SortAlgorithm::Insertion => insertion(&mut run),
        SortAlgorithm::Quick => quick(&mut run),
    }
    Ok(run.finish(algorithm))
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ComparisonSort {
    pub algorithm: SortAlgorithm,
    pub array: Vec<i64>,
}

impl TraceGenerator for ComparisonSort {
    type Step = SortStep;
    type Projector = SortProjector;

    fn name(&self) -> &'static str {
        self.algorithm.name()
    }

    fn generate(&self) -> TraceResult<Trace<SortStep>> {
        comparison_sort(self.algorithm, &self.array)
    }

    fn projector(&self) -> SortProjector {
        SortProjector::new(self.array.clone())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/generators/sorting.rs"]
mod tests;
