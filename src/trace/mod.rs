//! Step records and the immutable trace container.

use crate::foundation::error::TraceResult;
use crate::projection::Projector;

/// One atomic, self-sufficient state transition of an algorithm.
///
/// Every record carries enough embedded state to be rendered on its own; consumers never
/// need to replay earlier records to know what a record shows.
pub trait StepRecord: Clone + std::fmt::Debug {
    /// Canonical `snake_case` name of the transition kind (`compare`, `visit`, ...).
    fn action(&self) -> &'static str;
    /// Human-readable narration of the transition.
    fn message(&self) -> &str;
}

/// Ordered, finite, immutable sequence of step records produced once per run.
///
/// A trace is never empty: every generator closes it with a terminal record, even for trivial
/// input.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Trace<S> {
    steps: Vec<S>,
}

impl<S: StepRecord> Trace<S> {
    pub(crate) fn from_steps(steps: Vec<S>) -> Self {
        debug_assert!(!steps.is_empty(), "generators must emit a terminal record");
        Self { steps }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&S> {
        self.steps.get(index)
    }

    pub fn steps(&self) -> &[S] {
        &self.steps
    }

    pub fn last(&self) -> Option<&S> {
        self.steps.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, S> {
        self.steps.iter()
    }

    /// Action names in trace order.
    pub fn actions(&self) -> Vec<&'static str> {
        self.steps.iter().map(StepRecord::action).collect()
    }

    /// Number of records with the given action name.
    pub fn count(&self, action: &str) -> usize {
        self.steps.iter().filter(|s| s.action() == action).count()
    }
}

impl<'a, S> IntoIterator for &'a Trace<S> {
    type Item = &'a S;
    type IntoIter = std::slice::Iter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// A runnable (algorithm, input) pair: produces a trace and the projector that renders it.
pub trait TraceGenerator {
    type Step: StepRecord;
    type Projector: Projector<Step = Self::Step>;

    /// Short algorithm label used in logs and summaries.
    fn name(&self) -> &'static str;

    /// Run the algorithm to completion. Fails only on malformed input, before any record exists.
    fn generate(&self) -> TraceResult<Trace<Self::Step>>;

    /// Projector bound to this input.
    fn projector(&self) -> Self::Projector;
}

/// Append-only record buffer used by generators while they run.
pub(crate) struct Recorder<S> {
    steps: Vec<S>,
}

impl<S: StepRecord> Recorder<S> {
    pub(crate) fn new() -> Self {
        Self { steps: Vec::new() }
    }

    pub(crate) fn push(&mut self, step: S) {
        self.steps.push(step);
    }

    /// Most recent record, while it is still private to the generator.
    pub(crate) fn last_mut(&mut self) -> Option<&mut S> {
        self.steps.last_mut()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub(crate) fn finish(self) -> Trace<S> {
        tracing::debug!(records = self.steps.len(), "trace complete");
        Trace::from_steps(self.steps)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/trace/mod.rs"]
mod tests;
