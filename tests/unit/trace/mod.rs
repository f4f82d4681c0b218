use super::*;

#[derive(Clone, Debug, PartialEq)]
struct Note(&'static str);

impl StepRecord for Note {
    fn action(&self) -> &'static str {
        self.0
    }

    fn message(&self) -> &str {
        self.0
    }
}

#[test]
fn recorder_finishes_into_ordered_trace() {
    let mut rec = Recorder::new();
    rec.push(Note("check"));
    rec.push(Note("check"));
    rec.push(Note("complete"));
    assert!(!rec.is_empty());
    let trace = rec.finish();
    assert_eq!(trace.actions(), vec!["check", "check", "complete"]);
    assert_eq!(trace.count("check"), 2);
    assert_eq!(trace.last(), Some(&Note("complete")));
    assert_eq!(trace.get(3), None);
}

#[test]
fn last_mut_edits_only_the_newest_record() {
    let mut rec = Recorder::new();
    rec.push(Note("a"));
    rec.push(Note("b"));
    if let Some(last) = rec.last_mut() {
        *last = Note("c");
    }
    let trace = rec.finish();
    assert_eq!(trace.actions(), vec!["a", "c"]);
}

#[test]
fn trace_iterates_by_reference() {
    let trace = Trace::from_steps(vec![Note("x"), Note("y")]);
    let names: Vec<_> = (&trace).into_iter().map(StepRecord::message).collect();
    assert_eq!(names, vec!["x", "y"]);
    assert!(!trace.is_empty());
}
