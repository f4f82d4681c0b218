use super::*;
use crate::generators::merge_sort::MergeSort;
use crate::projection::first_divergence;
use crate::trace::TraceGenerator;

#[test]
fn snapshots_match_replay() {
    for array in [vec![], vec![5], vec![5, 1, 4, 2, 8, 8, 0], (0..20).rev().collect()] {
        let job = MergeSort { array };
        let trace = job.generate().unwrap();
        assert_eq!(first_divergence(&job.projector(), &trace), None);
    }
}

#[test]
fn placing_is_cleared_outside_writes() {
    let job = MergeSort {
        array: vec![2, 1],
    };
    let trace = job.generate().unwrap();
    let p = job.projector();
    assert_eq!(p.project(trace.get(2).unwrap()).placing, Some(0));
    assert_eq!(p.project(trace.get(4).unwrap()).placing, None);
}
