//! Tests for report rendering

use super::*;
use crate::optimize::optimize_query;
use cylens_analyzer::analyze_query_plan;
use cylens_core::{FixedPlanSource, PlanTree};
use serde_json::json;

fn scan_analysis() -> QueryAnalysis {
    analyze_query_plan(
        "MATCH (n) RETURN n LIMIT 10",
        &PlanTree::from_value(json!({
            "operatorType": "ProduceResults",
            "children": [{
                "operatorType": "AllNodesScan",
                "estimated_rows": 5_000,
                "db_hits": 12_000
            }]
        })),
    )
    .unwrap()
}

#[test]
fn test_render_analysis_sections() {
    let rendered = render_analysis(&scan_analysis());

    assert!(rendered.contains("# Query Analysis"));
    assert!(rendered.contains("## Query Information"));
    assert!(rendered.contains("- **Query**: MATCH (n) RETURN n LIMIT 10"));
    assert!(rendered.contains("- **Type**: read query"));
    assert!(rendered.contains("## Execution Plan Summary"));
    assert!(rendered.contains("- **Total Operators**: 2"));
    assert!(rendered.contains("## Performance Indicators"));
    assert!(rendered.contains("- full_scan"));
    assert!(rendered.contains("- high_db_hits"));
    assert!(rendered.contains("## Query Metadata"));
    assert!(rendered.contains("- **Has LIMIT**: true"));
    assert!(rendered.contains("## Findings"));
    assert!(rendered.contains("[critical]"));
    assert!(rendered.contains("## Index Suggestions"));
    assert!(rendered.contains("CREATE INDEX"));
    assert!(rendered.contains("### Operator 2: AllNodesScan"));
}

#[test]
fn test_render_analysis_without_operators() {
    let analysis = analyze_query_plan("RETURN 1", &PlanTree::from_value(json!(null))).unwrap();
    let rendered = render_analysis(&analysis);

    assert!(rendered.contains("- **Total Operators**: 0"));
    assert!(rendered.contains("- none"));
    assert!(!rendered.contains("## Operator Details"));
}

#[test]
fn test_render_report_with_degraded_outcome() {
    let plan = PlanTree::from_value(json!({"operatorType": "AllNodesScan"}));
    let report = optimize_query("MATCH (n) RETURN n", &plan, &FixedPlanSource::new()).unwrap();

    let rendered = render_report(&report);
    assert!(rendered.contains("# Query Optimization Report"));
    assert!(rendered.contains("## Original Query"));
    assert!(rendered.contains("No safe rewrite available"));
    assert!(!rendered.contains("## Optimized Query"));
    // The original analysis is still included
    assert!(rendered.contains("# Query Analysis"));
}

#[test]
fn test_render_report_with_comparison() {
    let original_plan = PlanTree::from_value(json!({
        "operatorType": "ProduceResults",
        "identifiers": ["n"],
        "children": [{
            "operatorType": "Filter",
            "identifiers": ["n"],
            "args": {"Details": "n.name = $autostring_0", "LabelName": "Person"},
            "children": [{"operatorType": "AllNodesScan", "identifiers": ["n"], "estimated_rows": 1_000}]
        }]
    }));
    let optimized_plan = PlanTree::from_value(json!({
        "operatorType": "ProduceResults",
        "children": [{
            "operatorType": "NodeByLabelScan",
            "args": {"LabelName": "Person"},
            "estimated_rows": 50
        }]
    }));
    let rewritten = "MATCH (n:Person) WHERE n.name = 'Ada' RETURN n";
    let source = FixedPlanSource::new().with_plan(rewritten, optimized_plan);

    let report = optimize_query(
        "MATCH (n) WHERE n.name = 'Ada' RETURN n",
        &original_plan,
        &source,
    )
    .unwrap();

    let rendered = render_report(&report);
    assert!(rendered.contains("## Optimized Query"));
    assert!(rendered.contains(rewritten));
    assert!(rendered.contains("## Comparison"));
    assert!(rendered.contains("- **Removed Operators**:"));
    assert!(rendered.contains("Improvement:"));
}
