use super::*;
use crate::generators::search::{BinarySearch, LinearSearch};
use crate::projection::first_divergence;
use crate::trace::TraceGenerator;

#[test]
fn linear_snapshot_matches_replay() {
    let job = LinearSearch {
        array: vec![5, 3, 5, 1, 5],
        target: 5,
    };
    let trace = job.generate().unwrap();
    assert_eq!(first_divergence(&job.projector(), &trace), None);
}

#[test]
fn linear_view_tracks_the_examined_index() {
    let p = LinearSearchProjector;
    let trace = crate::generators::search::linear_search(&[2, 8], 8).unwrap();
    let view = p.project(trace.get(1).unwrap());
    assert_eq!(view.current, Some(1));
    assert_eq!(view.matches, vec![1]);
    assert!(!view.finished);
    assert!(p.project(trace.last().unwrap()).finished);
}

#[test]
fn binary_snapshot_matches_replay() {
    for target in [-1, 1, 4, 9, 10, 20] {
        let job = BinarySearch {
            array: vec![10, 1, 9, 3, 7, 5, 4],
            target,
        };
        let trace = job.generate().unwrap();
        assert_eq!(
            first_divergence(&job.projector(), &trace),
            None,
            "target {target}"
        );
    }
}
