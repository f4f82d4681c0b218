//! Trace generators, one module per algorithm family.
//!
//! Every generator validates its input first and fails with [`crate::TraceError::Validation`]
//! before producing any record. Past that point it always returns a complete, non-empty trace.

pub mod greedy;
pub mod knapsack;
pub mod lcs;
pub mod merge_sort;
pub mod mst;
pub mod pathfinding;
pub mod search;
pub mod sorting;
pub mod traversal;
pub mod union_find;
