//! Tests for the summary aggregator

use super::*;
use crate::plan::operator::OperatorNode;

fn node(name: &str, rows: u64, hits: u64) -> OperatorNode {
    OperatorNode::new(name, 0).with_rows(rows).with_db_hits(hits)
}

#[test]
fn test_empty_sequence() {
    let summary = summarize(&[]);
    assert_eq!(summary, PlanSummary::default());
}

#[test]
fn test_counts() {
    let mut updating = node("Create", 10, 0);
    updating.is_updating = true;
    let mut eager = node("EagerAggregation", 5, 0);
    eager.is_eager = true;
    let leaf = node("AllNodesScan", 100, 50).with_leaf(true);

    let summary = summarize(&[leaf, updating, eager]);
    assert_eq!(summary.total_operators, 3);
    assert_eq!(summary.leaf_operators, 1);
    assert_eq!(summary.updating_operators, 1);
    assert_eq!(summary.eager_operators, 1);
}

#[test]
fn test_total_rows_is_max_not_sum() {
    let summary = summarize(&[
        node("ProduceResults", 10, 0),
        node("Filter", 400, 0),
        node("AllNodesScan", 1_000, 0),
    ]);

    assert_eq!(summary.estimated_total_rows, 1_000);
}

#[test]
fn test_db_hits_is_sum_not_max() {
    let summary = summarize(&[
        node("ProduceResults", 0, 10),
        node("Filter", 0, 400),
        node("AllNodesScan", 0, 1_000),
    ]);

    assert_eq!(summary.estimated_db_hits, 1_410);
}

#[test]
fn test_asymmetry_contract() {
    // The same estimates feed both totals; only db hits accumulate
    let nodes = [node("Filter", 500, 500), node("AllNodesScan", 500, 500)];
    let summary = summarize(&nodes);

    assert_eq!(summary.estimated_total_rows, 500);
    assert_eq!(summary.estimated_db_hits, 1_000);
}

#[test]
fn test_db_hits_saturate() {
    let summary = summarize(&[node("A", 0, u64::MAX), node("B", 0, 10)]);
    assert_eq!(summary.estimated_db_hits, u64::MAX);
}
