use super::*;

#[test]
fn merge_sort_sorts_and_narrates_each_level() {
    let input = vec![38, 27, 43, 3, 9, 82, 10];
    let trace = merge_sort(&input).unwrap();
    let last = trace.last().unwrap();
    assert_eq!(last.array, vec![3, 9, 10, 27, 38, 43, 82]);
    assert_eq!(last.action(), "complete");
    // n - 1 internal nodes in the recursion tree.
    assert_eq!(trace.count("divide"), input.len() - 1);
    assert_eq!(trace.count("merge_start"), trace.count("merge_complete"));
    let writes = trace.count("merge_compare") + trace.count("merge_remaining");
    let merged: usize = trace
        .iter()
        .filter_map(|s| match s.event {
            MergeEvent::MergeComplete { left, right, .. } => Some(right - left + 1),
            _ => None,
        })
        .sum();
    assert_eq!(writes, merged);
}

#[test]
fn lanes_label_the_halves() {
    let trace = merge_sort(&[4, 3, 2, 1]).unwrap();
    let first = trace.get(0).unwrap();
    assert_eq!(
        first.event,
        MergeEvent::Divide {
            left: 0,
            mid: 1,
            right: 3,
            depth: 0,
            lane: Lane::Root
        }
    );
    let lanes: Vec<Lane> = trace
        .iter()
        .filter(|s| s.action() == "divide")
        .map(|s| s.lane)
        .collect();
    assert_eq!(lanes, vec![Lane::Root, Lane::Left, Lane::Right]);
}

#[test]
fn merge_records_share_the_frame_of_their_merge() {
    let trace = merge_sort(&[2, 1]).unwrap();
    assert_eq!(
        trace.actions(),
        vec![
            "divide",
            "merge_start",
            "merge_compare",
            "merge_remaining",
            "merge_complete",
            "complete"
        ]
    );
    let compare = trace.get(2).unwrap();
    assert_eq!(compare.range, Some((0, 1)));
    assert_eq!(compare.array, vec![1, 1]);
    assert_eq!(trace.get(3).unwrap().array, vec![1, 2]);
}

#[test]
fn ties_keep_input_order() {
    let trace = merge_sort(&[1, 1]).unwrap();
    let compare = trace.get(2).unwrap();
    match compare.event {
        MergeEvent::MergeCompare {
            left_value,
            right_value,
            placing,
            value,
        } => {
            assert_eq!((left_value, right_value, placing, value), (1, 1, 0, 1));
        }
        ref other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn trivial_inputs_complete_immediately() {
    assert_eq!(merge_sort(&[]).unwrap().actions(), vec!["complete"]);
    assert_eq!(merge_sort(&[7]).unwrap().actions(), vec!["complete"]);
}
