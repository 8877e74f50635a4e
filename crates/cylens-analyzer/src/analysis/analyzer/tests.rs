//! Tests for the analysis pipeline

use super::*;
use cylens_core::PlanTree;
use pretty_assertions::assert_eq;
use serde_json::json;

fn plan(value: serde_json::Value) -> PlanTree {
    PlanTree::from_value(value)
}

#[test]
fn test_boundary_scan_scenario() {
    // Single AllNodesScan at both boundaries: full_scan present,
    // high_row_count and high_db_hits absent (strict thresholds)
    let analysis = analyze_query_plan(
        "MATCH (n) RETURN n",
        &plan(json!({
            "operatorType": "AllNodesScan",
            "estimated_rows": 100_000,
            "db_hits": 100_000
        })),
    )
    .unwrap();

    assert_eq!(
        analysis.performance_indicators,
        vec![Indicator::HighDbHits, Indicator::FullScan]
    );
    assert!(!analysis.has_indicator(Indicator::HighRowCount));
    assert_eq!(analysis.summary.total_operators, 1);
    assert_eq!(analysis.summary.leaf_operators, 1);
}

#[test]
fn test_full_pipeline() {
    let analysis = analyze_query_plan(
        "MATCH (p:Person) WHERE p.age > 30 RETURN p ORDER BY p.name LIMIT 10",
        &plan(json!({
            "operatorType": "ProduceResults",
            "identifiers": ["p"],
            "children": [{
                "operatorType": "Top",
                "children": [{
                    "operatorType": "Filter",
                    "args": {"Details": "p.age > $autoint_0"},
                    "children": [{
                        "operatorType": "NodeByLabelScan",
                        "args": {"LabelName": "Person", "EstimatedRows": 500.0},
                        "db_hits": 501
                    }]
                }]
            }]
        })),
    )
    .unwrap();

    assert_eq!(analysis.query_type, QueryType::Read);
    assert_eq!(analysis.complexity, Complexity::Medium);
    assert_eq!(analysis.summary.total_operators, 4);
    assert_eq!(analysis.summary.leaf_operators, 1);
    assert_eq!(analysis.summary.estimated_total_rows, 500);
    assert_eq!(analysis.summary.estimated_db_hits, 501);
    assert!(analysis.query_metadata.has_where_clause);
    assert!(analysis.query_metadata.has_order_by);
    assert!(analysis.query_metadata.has_limit);
    assert!(analysis.performance_indicators.is_empty());
}

#[test]
fn test_write_query_with_updating_operator() {
    let analysis = analyze_query_plan(
        "CREATE (n:Person {name: 'Ada'})",
        &plan(json!({
            "operatorType": "ProduceResults",
            "children": [{
                "operatorType": "Create",
                "children": [{"operatorType": "Argument"}]
            }]
        })),
    )
    .unwrap();

    assert_eq!(analysis.query_type, QueryType::Write);
    assert_eq!(analysis.summary.updating_operators, 1);
    assert!(analysis.operators[1].is_updating);
}

#[test]
fn test_eager_operator_raises_complexity() {
    let analysis = analyze_query_plan(
        "MATCH (a), (b) RETURN a, b",
        &plan(json!({
            "operatorType": "CartesianProduct",
            "children": [
                {"operatorType": "AllNodesScan"},
                {"operatorType": "AllNodesScan"}
            ]
        })),
    )
    .unwrap();

    assert_eq!(analysis.summary.eager_operators, 1);
    assert_eq!(analysis.complexity, Complexity::Medium);
    assert!(analysis.has_indicator(Indicator::CartesianProduct));
    assert!(analysis.has_indicator(Indicator::FullScan));
}

#[test]
fn test_malformed_plan_is_a_typed_failure() {
    let err = analyze_query_plan("MATCH (n) RETURN n", &plan(json!([1, 2, 3]))).unwrap_err();
    assert!(matches!(
        err,
        cylens_core::MalformedPlanError::NotAnObject { .. }
    ));
}

#[test]
fn test_unknown_operator_analysis_never_fails() {
    let analysis = analyze_query_plan(
        "MATCH (n) RETURN n",
        &plan(json!({"operatorType": "OperatorFromTheFuture"})),
    )
    .unwrap();

    assert_eq!(analysis.summary.total_operators, 1);
    assert!(!analysis.operators[0].is_updating);
    assert!(!analysis.operators[0].is_eager);
}

#[test]
fn test_operator_type_counts() {
    let analysis = analyze_query_plan(
        "MATCH (n) RETURN n",
        &plan(json!({
            "operatorType": "ProduceResults",
            "children": [{
                "operatorType": "Filter",
                "children": [
                    {"operatorType": "AllNodesScan"},
                    {"operatorType": "AllNodesScan"}
                ]
            }]
        })),
    )
    .unwrap();

    let counts = analysis.operator_type_counts();
    assert_eq!(counts.get("ProduceResults"), Some(&1));
    assert_eq!(counts.get("Filter"), Some(&1));
    assert_eq!(counts.get("AllNodesScan"), Some(&2));
}

#[test]
fn test_serialized_contract_field_names() {
    let analysis = analyze_query_plan(
        "MATCH (n) RETURN n LIMIT 10",
        &plan(json!({"operatorType": "AllNodesScan", "estimated_rows": 7})),
    )
    .unwrap();

    let json = serde_json::to_value(&analysis).unwrap();
    let mut top_level: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
    top_level.sort_unstable();
    assert_eq!(
        top_level,
        vec![
            "complexity",
            "operators",
            "performance_indicators",
            "query",
            "query_metadata",
            "query_patterns",
            "query_type",
            "summary",
        ]
    );

    assert_eq!(json["query"], "MATCH (n) RETURN n LIMIT 10");
    assert_eq!(json["query_type"], "read");
    assert_eq!(json["complexity"], "low");
    assert_eq!(json["performance_indicators"], json!(["full_scan"]));
    assert_eq!(json["summary"]["total_operators"], 1);
    assert_eq!(json["summary"]["leaf_operators"], 1);
    assert_eq!(json["summary"]["updating_operators"], 0);
    assert_eq!(json["summary"]["eager_operators"], 0);
    assert_eq!(json["summary"]["estimated_total_rows"], 7);
    assert_eq!(json["summary"]["estimated_db_hits"], 0);
    assert_eq!(json["query_metadata"]["has_limit"], true);
    assert_eq!(json["query_metadata"]["has_where_clause"], false);
    assert_eq!(json["operators"][0]["clean_operator_name"], "AllNodesScan");
}

#[test]
fn test_analysis_roundtrips_through_serde() {
    let analysis = analyze_query_plan(
        "MATCH (n:Person) RETURN n",
        &plan(json!({
            "operatorType": "NodeByLabelScan",
            "args": {"LabelName": "Person"}
        })),
    )
    .unwrap();

    let serialized = serde_json::to_string(&analysis).unwrap();
    let roundtrip: QueryAnalysis = serde_json::from_str(&serialized).unwrap();
    assert_eq!(roundtrip, analysis);
}

#[test]
fn test_empty_plan_yields_empty_analysis() {
    let analysis = analyze_query_plan("RETURN 1", &plan(json!(null))).unwrap();
    assert_eq!(analysis.summary.total_operators, 0);
    assert!(analysis.operators.is_empty());
    assert!(analysis.performance_indicators.is_empty());
    assert_eq!(analysis.complexity, Complexity::Low);
}

#[test]
fn test_custom_thresholds_change_indicators() {
    let analyzer = PlanAnalyzer::new()
        .with_thresholds(IndicatorThresholds::new().with_high_row_count(10));

    let analysis = analyzer
        .analyze(
            "MATCH (n) RETURN n",
            &plan(json!({"operatorType": "Projection", "estimated_rows": 11})),
        )
        .unwrap();

    assert!(analysis.has_indicator(Indicator::HighRowCount));
}
