use super::*;
use crate::generators::knapsack::{Item, Knapsack};
use crate::generators::lcs::Lcs;
use crate::projection::first_divergence;
use crate::trace::TraceGenerator;

#[test]
fn knapsack_snapshots_match_replay() {
    let job = Knapsack {
        items: vec![
            Item::new(4, 500),
            Item::new(3, 400),
            Item::new(2, 150),
            Item::new(1, 80),
        ],
        capacity: 7,
    };
    let trace = job.generate().unwrap();
    assert_eq!(first_divergence(&job.projector(), &trace), None);
}

#[test]
fn knapsack_blank_is_a_zero_table() {
    let v = KnapsackProjector::new(2, 3).blank();
    assert_eq!(v.table, vec![vec![0; 4]; 3]);
    assert_eq!(v.residual, 3);
}

#[test]
fn lcs_snapshots_match_replay() {
    let job = Lcs {
        a: "ABCBDAB".into(),
        b: "BDCABA".into(),
    };
    let trace = job.generate().unwrap();
    assert_eq!(first_divergence(&job.projector(), &trace), None);
}
