use super::*;
use crate::generators::sorting::{ComparisonSort, SortAlgorithm};
use crate::projection::first_divergence;
use crate::trace::TraceGenerator;

#[test]
fn snapshots_match_replay_for_every_sort() {
    let inputs = [vec![], vec![1], vec![2, 1], vec![4, 4, 1, 8, 0, 3, 3, 9, -1]];
    for algorithm in [
        SortAlgorithm::Bubble,
        SortAlgorithm::Selection,
        SortAlgorithm::Insertion,
        SortAlgorithm::Quick,
    ] {
        for array in &inputs {
            let job = ComparisonSort {
                algorithm,
                array: array.clone(),
            };
            let trace = job.generate().unwrap();
            assert_eq!(
                first_divergence(&job.projector(), &trace),
                None,
                "{algorithm:?} on {array:?}"
            );
        }
    }
}

#[test]
fn blank_view_shows_the_input() {
    let p = SortProjector::new(vec![3, 1]);
    let v = p.blank();
    assert_eq!(v.array, vec![3, 1]);
    assert_eq!(v.action, None);
    assert!(!v.finished);
}
