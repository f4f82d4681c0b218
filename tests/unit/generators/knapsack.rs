use super::*;

fn classic() -> Vec<Item> {
    vec![Item::new(4, 500), Item::new(3, 400), Item::new(2, 150)]
}

fn brute_force(items: &[Item], capacity: u32) -> u64 {
    (0u32..1 << items.len())
        .filter_map(|mask| {
            let chosen = items
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0);
            let (w, v) = chosen.fold((0u64, 0u64), |(w, v), (_, it)| {
                (w + u64::from(it.weight), v + u64::from(it.value))
            });
            (w <= u64::from(capacity)).then_some(v)
        })
        .max()
        .unwrap_or(0)
}

#[test]
fn complete_value_matches_brute_force() {
    let items = classic();
    let trace = knapsack(&items, 5).unwrap();
    let last = trace.last().unwrap();
    match &last.event {
        KnapsackEvent::Complete {
            items: selected,
            total_value,
            total_weight,
        } => {
            assert_eq!(*total_value, brute_force(&items, 5));
            assert_eq!(*total_value, 550);
            assert_eq!(selected, &vec![1, 2]);
            assert_eq!(*total_weight, 5);
        }
        other => panic!("expected complete, got {other:?}"),
    }
}

#[test]
fn every_cell_gets_a_check_and_a_decision() {
    let trace = knapsack(&classic(), 5).unwrap();
    let cells = 3 * 6;
    assert_eq!(trace.count("check"), cells);
    let decisions = trace.count("skip") + trace.count("include") + trace.count("exclude");
    assert_eq!(decisions, cells);
    assert_eq!(trace.count("backtrack"), 2);
    assert_eq!(trace.count("complete"), 1);
}

#[test]
fn table_snapshots_are_independent_copies() {
    let trace = knapsack(&classic(), 5).unwrap();
    let first_check = trace.get(0).unwrap();
    assert!(first_check.table.iter().flatten().all(|&v| v == 0));
    let last = trace.last().unwrap();
    assert_eq!(last.table[3][5], 550);
    assert_eq!(last.table.len(), 4);
    assert_eq!(last.table[0].len(), 6);
}

#[test]
fn decisions_embed_both_candidates() {
    let trace = knapsack(&classic(), 5).unwrap();
    // Row 1 (weight 4) at capacity 4: include 500 over exclude 0.
    let step = trace
        .iter()
        .find(|s| matches!(s.event, KnapsackEvent::Include { row: 1, capacity: 4, .. }))
        .unwrap();
    assert_eq!(
        step.event,
        KnapsackEvent::Include {
            item: 0,
            row: 1,
            capacity: 4,
            value: 500,
            include_value: 500,
            exclude_value: 0,
        }
    );
}

#[test]
fn ties_prefer_exclude() {
    let items = vec![Item::new(1, 10), Item::new(1, 10)];
    let trace = knapsack(&items, 1).unwrap();
    let tie = trace
        .iter()
        .find(|s| s.event.cell() == Some((2, 1)) && s.action() != "check")
        .unwrap();
    assert_eq!(tie.action(), "exclude");
    match &trace.last().unwrap().event {
        KnapsackEvent::Complete { items, .. } => assert_eq!(items, &vec![0]),
        other => panic!("{other:?}"),
    }
}

#[test]
fn empty_inputs_still_complete() {
    let trace = knapsack(&[], 3).unwrap();
    assert_eq!(trace.actions(), vec!["complete"]);
    let trace = knapsack(&[Item::new(9, 1)], 3).unwrap();
    assert_eq!(trace.count("skip"), 4);
    assert_eq!(trace.count("backtrack"), 0);
}

#[test]
fn oversized_capacity_is_malformed() {
    assert!(knapsack(&classic(), Limits::MAX_KNAPSACK_CAPACITY + 1).is_err());
    let many = vec![Item::new(1, 1); Limits::MAX_KNAPSACK_ITEMS + 1];
    assert!(knapsack(&many, 5).is_err());
}
