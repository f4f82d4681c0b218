use super::*;

#[test]
fn linear_search_collects_every_match() {
    let trace = linear_search(&[5, 3, 5, 1, 5], 5).unwrap();
    assert_eq!(trace.len(), 6);
    assert_eq!(trace.count("check"), 5);
    let last = trace.last().unwrap();
    assert!(last.is_final);
    assert_eq!(last.event, LinearEvent::Complete);
    assert_eq!(last.matches, vec![0, 2, 4]);

    let trace = linear_search(&[5, 3, 5, 1, 5], 9).unwrap();
    assert!(trace.last().unwrap().matches.is_empty());
}

#[test]
fn linear_search_on_empty_array_is_a_single_terminal_record() {
    let trace = linear_search(&[], 1).unwrap();
    assert_eq!(trace.len(), 1);
    assert!(trace.last().unwrap().is_final);
    assert_eq!(trace.last().unwrap().checked, 0);
}

#[test]
fn linear_search_target_everywhere() {
    let trace = linear_search(&[7, 7, 7], 7).unwrap();
    assert_eq!(trace.len(), 4);
    assert_eq!(trace.last().unwrap().matches, vec![0, 1, 2]);
    assert!(trace.steps()[..3].iter().all(|s| !s.is_final));
}

#[test]
fn only_the_last_record_is_final() {
    let trace = linear_search(&[1, 2, 3], 2).unwrap();
    let finals = trace.iter().filter(|s| s.is_final).count();
    assert_eq!(finals, 1);
}

#[test]
fn linear_search_rejects_oversized_input() {
    let big = vec![0; Limits::MAX_SEARCH_LEN + 1];
    assert!(matches!(
        linear_search(&big, 0),
        Err(crate::foundation::error::TraceError::Validation(_))
    ));
}

#[test]
fn binary_search_finds_in_sorted_copy() {
    let input = vec![9, 1, 7, 3, 5];
    let trace = binary_search(&input, 7).unwrap();
    assert_eq!(input, vec![9, 1, 7, 3, 5]);
    let last = trace.last().unwrap();
    assert_eq!(last.sorted, vec![1, 3, 5, 7, 9]);
    assert_eq!(last.event, BinaryEvent::Found { index: 3, value: 7 });
    assert_eq!(last.action(), "found");
}

#[test]
fn binary_search_reports_not_found() {
    let trace = binary_search(&[1, 3, 5, 7, 9], 4).unwrap();
    let last = trace.last().unwrap();
    assert_eq!(last.action(), "not_found");
    assert_eq!(last.low, last.high);
    assert_eq!(trace.count("probe"), last.probes);
    assert!(last.probes <= 3);

    let trace = binary_search(&[], 4).unwrap();
    assert_eq!(trace.actions(), vec!["not_found"]);
}

#[test]
fn generator_jobs_are_deterministic() {
    let job = LinearSearch {
        array: vec![4, 2, 4],
        target: 4,
    };
    assert_eq!(job.generate().unwrap(), job.generate().unwrap());
    assert_eq!(job.name(), "linear_search");
}
