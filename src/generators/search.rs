use crate::foundation::config::Limits;
use crate::foundation::error::TraceResult;
use crate::projection::search::{BinarySearchProjector, LinearSearchProjector};
use crate::trace::{Recorder, StepRecord, Trace, TraceGenerator};

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum LinearEvent {
    Check {
        index: usize,
        value: i64,
        found: bool,
    },
    Complete,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LinearStep {
    #[serde(flatten)]
    pub event: LinearEvent,
    pub message: String,
    /// Every matching index found so far, ascending.
    pub matches: Vec<usize>,
    /// Indices examined so far.
    pub checked: usize,
    #[serde(rename = "final")]
    pub is_final: bool,
}

impl StepRecord for LinearStep {
    fn action(&self) -> &'static str {
        match self.event {
            LinearEvent::Check { .. } => "check",
            LinearEvent::Complete => "complete",
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Scan every index in order and collect all occurrences of `target`.
///
/// The scan never stops early, so the trace has exactly `array.len() + 1` records.
#[tracing::instrument(skip(array), fields(len = array.len()))]
pub fn linear_search(array: &[i64], target: i64) -> TraceResult<Trace<LinearStep>> {
    Limits::check_len("search array", array.len(), Limits::MAX_SEARCH_LEN)?;

    let mut rec = Recorder::new();
    let mut matches = Vec::new();
    for (index, &value) in array.iter().enumerate() {
        let found = value == target;
        if found {
            matches.push(index);
        }
        let message = if found {
            format!("index {index} holds {value}: match")
        } else {
            format!("index {index} holds {value}, not {target}")
        };
        rec.push(LinearStep {
            event: LinearEvent::Check {
                index,
                value,
                found,
            },
            message,
            matches: matches.clone(),
            checked: index + 1,
            is_final: false,
        });
    }

    let message = if matches.is_empty() {
        format!("{target} does not occur in the array")
    } else {
        format!("{target} occurs at indices {matches:?}")
    };
    rec.push(LinearStep {
        event: LinearEvent::Complete,
        message,
        matches,
        checked: array.len(),
        is_final: true,
    });
    Ok(rec.finish())
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum BinaryEvent {
    Probe { mid: usize, value: i64 },
    Found { index: usize, value: i64 },
    NotFound,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BinaryStep {
    #[serde(flatten)]
    pub event: BinaryEvent,
    pub message: String,
    /// Sorted working copy the search runs over.
    pub sorted: Vec<i64>,
    /// Half-open interval `[low, high)` still under consideration.
    pub low: usize,
    pub high: usize,
    pub probes: usize,
}

impl StepRecord for BinaryStep {
    fn action(&self) -> &'static str {
        match self.event {
            BinaryEvent::Probe { .. } => "probe",
            BinaryEvent::Found { .. } => "found",
            BinaryEvent::NotFound => "not_found",
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Binary search over a sorted copy of `array`. Found indices refer to the sorted copy.
#[tracing::instrument(skip(array), fields(len = array.len()))]
pub fn binary_search(array: &[i64], target: i64) -> TraceResult<Trace<BinaryStep>> {
    Limits::check_len("search array", array.len(), Limits::MAX_SEARCH_LEN)?;

    let mut sorted = array.to_vec();
    sorted.sort_unstable();

    let mut rec = Recorder::new();
    let (mut low, mut high) = (0, sorted.len());
    let mut probes = 0;
    while low < high {
        let mid = low + (high - low) / 2;
        let value = sorted[mid];
        probes += 1;
        rec.push(BinaryStep {
            event: BinaryEvent::Probe { mid, value },
            message: format!("probe index {mid} in [{low}, {high}): {value}"),
            sorted: sorted.clone(),
            low,
            high,
            probes,
        });

        if value == target {
            rec.push(BinaryStep {
                event: BinaryEvent::Found { index: mid, value },
                message: format!("found {target} at index {mid}"),
                sorted,
                low,
                high,
                probes,
            });
            return Ok(rec.finish());
        }
        if value < target {
            low = mid + 1;
        } else {
            high = mid;
        }
    }

    rec.push(BinaryStep {
        event: BinaryEvent::NotFound,
        message: format!("{target} is not in the array after {probes} probe(s)"),
        sorted,
        low,
        high,
        probes,
    });
    Ok(rec.finish())
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LinearSearch {
    pub array: Vec<i64>,
    pub target: i64,
}

impl TraceGenerator for LinearSearch {
    type Step = LinearStep;
    type Projector = LinearSearchProjector;

    fn name(&self) -> &'static str {
        "linear_search"
    }

    fn generate(&self) -> TraceResult<Trace<LinearStep>> {
        linear_search(&self.array, self.target)
    }

    fn projector(&self) -> LinearSearchProjector {
        LinearSearchProjector
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BinarySearch {
    pub array: Vec<i64>,
    pub target: i64,
}

impl TraceGenerator for BinarySearch {
    type Step = BinaryStep;
    type Projector = BinarySearchProjector;

    fn name(&self) -> &'static str {
        "binary_search"
    }

    fn generate(&self) -> TraceResult<Trace<BinaryStep>> {
        binary_search(&self.array, self.target)
    }

    fn projector(&self) -> BinarySearchProjector {
        let mut sorted = self.array.clone();
        sorted.sort_unstable();
        BinarySearchProjector::new(sorted, self.target)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/generators/search.rs"]
mod tests;
