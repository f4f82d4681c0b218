//! Top-down merge sort with divide/merge narration.
//!
//! The left and right halves of a split are tagged with a [`Lane`] so a renderer can draw
//! them side by side. Lanes are labels only: the halves are processed one after the other and
//! the trace is strictly ordered.

use crate::foundation::config::Limits;
use crate::foundation::error::TraceResult;
use crate::projection::merge::MergeProjector;
use crate::trace::{Recorder, StepRecord, Trace, TraceGenerator};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lane {
    #[default]
    Root,
    Left,
    Right,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum MergeEvent {
    Divide {
        left: usize,
        mid: usize,
        right: usize,
        depth: usize,
        lane: Lane,
    },
    MergeStart {
        left: usize,
        mid: usize,
        right: usize,
        depth: usize,
        lane: Lane,
        left_part: Vec<i64>,
        right_part: Vec<i64>,
    },
    MergeCompare {
        left_value: i64,
        right_value: i64,
        placing: usize,
        value: i64,
    },
    MergeRemaining {
        placing: usize,
        value: i64,
    },
    MergeComplete {
        left: usize,
        right: usize,
        depth: usize,
        lane: Lane,
    },
    Complete,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MergeStep {
    #[serde(flatten)]
    pub event: MergeEvent,
    pub message: String,
    /// Array after this record's write.
    pub array: Vec<i64>,
    /// Inclusive range being divided or merged.
    pub range: Option<(usize, usize)>,
    /// Recursion depth and lane of the call this record belongs to.
    #[serde(rename = "call_depth")]
    pub depth: usize,
    #[serde(rename = "call_lane")]
    pub lane: Lane,
}

impl StepRecord for MergeStep {
    fn action(&self) -> &'static str {
        match self.event {
            MergeEvent::Divide { .. } => "divide",
            MergeEvent::MergeStart { .. } => "merge_start",
            MergeEvent::MergeCompare { .. } => "merge_compare",
            MergeEvent::MergeRemaining { .. } => "merge_remaining",
            MergeEvent::MergeComplete { .. } => "merge_complete",
            MergeEvent::Complete => "complete",
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// `(left, right, depth, lane)` of the call a record belongs to.
type Frame = (usize, usize, usize, Lane);

struct MergeRun {
    rec: Recorder<MergeStep>,
    a: Vec<i64>,
}

impl MergeRun {
    fn emit(&mut self, event: MergeEvent, message: String, frame: Option<Frame>) {
        let (range, depth, lane) = match frame {
            Some((left, right, depth, lane)) => (Some((left, right)), depth, lane),
            None => (None, 0, Lane::Root),
        };
        self.rec.push(MergeStep {
            event,
            message,
            array: self.a.clone(),
            range,
            depth,
            lane,
        });
    }

    fn sort(&mut self, left: usize, right: usize, depth: usize, lane: Lane) {
        if left >= right {
            return;
        }
        let mid = left + (right - left) / 2;
        self.emit(
            MergeEvent::Divide {
                left,
                mid,
                right,
                depth,
                lane,
            },
            format!("split [{left}, {right}] into [{left}, {mid}] and [{}, {right}]", mid + 1),
            Some((left, right, depth, lane)),
        );
        self.sort(left, mid, depth + 1, Lane::Left);
        self.sort(mid + 1, right, depth + 1, Lane::Right);
        self.merge(left, mid, right, depth, lane);
    }

    fn merge(&mut self, left: usize, mid: usize, right: usize, depth: usize, lane: Lane) {
        let frame = Some((left, right, depth, lane));
        let left_part = self.a[left..=mid].to_vec();
        let right_part = self.a[mid + 1..=right].to_vec();
        self.emit(
            MergeEvent::MergeStart {
                left,
                mid,
                right,
                depth,
                lane,
                left_part: left_part.clone(),
                right_part: right_part.clone(),
            },
            format!("merge {left_part:?} with {right_part:?}"),
            frame,
        );

        let (mut i, mut j, mut k) = (0, 0, left);
        while i < left_part.len() && j < right_part.len() {
            let (lv, rv) = (left_part[i], right_part[j]);
            // Ties take from the left half, which keeps the sort stable.
            let value = if lv <= rv {
                i += 1;
                lv
            } else {
                j += 1;
                rv
            };
            self.a[k] = value;
            self.emit(
                MergeEvent::MergeCompare {
                    left_value: lv,
                    right_value: rv,
                    placing: k,
                    value,
                },
                format!("compare {lv} and {rv}: place {value} at index {k}"),
                frame,
            );
            k += 1;
        }

        let rest = left_part[i..].iter().chain(&right_part[j..]).copied();
        for value in rest.collect::<Vec<_>>() {
            self.a[k] = value;
            self.emit(
                MergeEvent::MergeRemaining { placing: k, value },
                format!("copy remaining {value} to index {k}"),
                frame,
            );
            k += 1;
        }

        self.emit(
            MergeEvent::MergeComplete {
                left,
                right,
                depth,
                lane,
            },
            format!("merged [{left}, {right}]: {:?}", &self.a[left..=right]),
            frame,
        );
    }
}

#[tracing::instrument(skip(input), fields(len = input.len()))]
pub fn merge_sort(input: &[i64]) -> TraceResult<Trace<MergeStep>> {
    Limits::check_len("sort array", input.len(), Limits::MAX_ARRAY_LEN)?;

    let mut run = MergeRun {
        rec: Recorder::new(),
        a: input.to_vec(),
    };
    if let Some(last) = input.len().checked_sub(1) {
        run.sort(0, last, 0, Lane::Root);
    }
    let message = format!("merge sort finished: {:?}", run.a);
    run.emit(MergeEvent::Complete, message, None);
    Ok(run.rec.finish())
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MergeSort {
    pub array: Vec<i64>,
}

impl TraceGenerator for MergeSort {
    type Step = MergeStep;
    type Projector = MergeProjector;

    fn name(&self) -> &'static str {
        "merge_sort"
    }

    fn generate(&self) -> TraceResult<Trace<MergeStep>> {
        merge_sort(&self.array)
    }

    fn projector(&self) -> MergeProjector {
        MergeProjector::new(self.array.clone())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/generators/merge_sort.rs"]
mod tests;
