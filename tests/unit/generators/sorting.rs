use super::*;

const ALL: [SortAlgorithm; 4] = [
    SortAlgorithm::Bubble,
    SortAlgorithm::Selection,
    SortAlgorithm::Insertion,
    SortAlgorithm::Quick,
];

fn is_sorted(a: &[i64]) -> bool {
    a.windows(2).all(|w| w[0] <= w[1])
}

#[test]
fn every_algorithm_sorts_and_marks_everything_sorted() {
    let input = vec![5, -2, 9, 1, 5, 6, 0, 3];
    for algorithm in ALL {
        let trace = comparison_sort(algorithm, &input).unwrap();
        let last = trace.last().unwrap();
        assert_eq!(last.action(), "complete", "{algorithm:?}");
        assert!(is_sorted(&last.array), "{algorithm:?}: {:?}", last.array);
        let mut expected = input.clone();
        expected.sort();
        assert_eq!(last.array, expected);
        assert_eq!(last.sorted, (0..input.len()).collect::<Vec<_>>());
    }
}

#[test]
fn comparisons_are_each_recorded() {
    let input = vec![3, 1, 2];
    for algorithm in ALL {
        let trace = comparison_sort(algorithm, &input).unwrap();
        let last = trace.last().unwrap();
        assert_eq!(trace.count("compare"), last.comparisons, "{algorithm:?}");
        let moves = trace.count("swap") + trace.count("shift");
        assert_eq!(moves, last.swaps, "{algorithm:?}");
    }
}

#[test]
fn bubble_sort_emits_compare_before_swap() {
    let trace = comparison_sort(SortAlgorithm::Bubble, &[2, 1]).unwrap();
    assert_eq!(trace.actions(), vec!["compare", "swap", "complete"]);
    let swap = trace.get(1).unwrap();
    assert_eq!(swap.array, vec![1, 2]);
    assert_eq!(swap.settled, vec![1]);
}

#[test]
fn array_copy_is_the_state_after_its_record() {
    let trace = comparison_sort(SortAlgorithm::Selection, &[3, 2, 1]).unwrap();
    for step in &trace {
        if let SortEvent::Swap { i, j } = step.event {
            assert!(step.array[i] <= step.array[j], "{step:?}");
        }
    }
}

#[test]
fn insertion_sort_selects_shifts_then_inserts() {
    let trace = comparison_sort(SortAlgorithm::Insertion, &[2, 3, 1]).unwrap();
    assert_eq!(
        trace.actions(),
        vec![
            "select", "compare", "insert", // key 3 stays
            "select", "compare", "shift", "compare", "shift", "insert", // key 1 to front
            "complete",
        ]
    );
    let shift = trace.get(5).unwrap();
    assert_eq!(shift.array, vec![2, 3, 3]);
    assert_eq!(shift.held, Some(1));
    assert_eq!(trace.get(8).unwrap().array, vec![1, 2, 3]);
    assert_eq!(trace.get(8).unwrap().held, None);
}

#[test]
fn quick_sort_tracks_the_pivot() {
    let trace = comparison_sort(SortAlgorithm::Quick, &[3, 1, 2]).unwrap();
    let first = trace.get(0).unwrap();
    assert_eq!(first.action(), "select_pivot");
    assert_eq!(first.pivot, Some(2));
    for step in &trace {
        if let Some(p) = step.pivot {
            assert_eq!(step.array[p], 2, "{step:?}");
            break;
        }
    }
    assert_eq!(trace.last().unwrap().pivot, None);
}

#[test]
fn trivial_inputs_still_complete() {
    for algorithm in ALL {
        let trace = comparison_sort(algorithm, &[]).unwrap();
        assert_eq!(trace.actions(), vec!["complete"]);
        let trace = comparison_sort(algorithm, &[4]).unwrap();
        assert_eq!(trace.last().unwrap().sorted, vec![0]);
    }
}

#[test]
fn oversized_arrays_are_rejected() {
    let big = vec![1; Limits::MAX_ARRAY_LEN + 1];
    assert!(comparison_sort(SortAlgorithm::Bubble, &big).is_err());
}

#[test]
fn serialized_records_carry_the_action_tag() {
    let trace = comparison_sort(SortAlgorithm::Bubble, &[2, 1]).unwrap();
    let v = serde_json::to_value(trace.get(0).unwrap()).unwrap();
    assert_eq!(v["action"], "compare");
    assert_eq!(v["i"], 0);
    assert_eq!(v["array"], serde_json::json!([2, 1]));
    let back: SortStep = serde_json::from_value(v).unwrap();
    assert_eq!(&back, trace.get(0).unwrap());
}
