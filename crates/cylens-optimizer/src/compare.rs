//! Comparison Engine - Diffing two query analyses
//!
//! Compares the analysis of an original query with the analysis of its
//! rewritten form: which operator types appeared or disappeared, how the
//! cost totals moved, and what that means in one line.

use cylens_analyzer::QueryAnalysis;
use serde::{Deserialize, Serialize};

/// Diff between an original and an optimized analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// Operator types present in the original plan only, first-seen order
    pub removed_operators: Vec<String>,
    /// Operator types present in the optimized plan only, first-seen order
    pub added_operators: Vec<String>,
    /// Optimized minus original `estimated_total_rows`
    pub estimated_rows_delta: i128,
    /// Optimized minus original `estimated_db_hits`
    pub db_hits_delta: i128,
    /// Specific structural improvements detected
    pub improvements: Vec<String>,
    /// One-line verdict on the cost movement
    pub summary: String,
}

impl ComparisonResult {
    /// Returns true if neither cost total moved
    pub fn is_neutral(&self) -> bool {
        self.estimated_rows_delta == 0 && self.db_hits_delta == 0
    }
}

/// Operator types counted together as relationship-wide scans.
const RELATIONSHIP_SCANS: &[&str] = &[
    "DirectedAllRelationshipsScan",
    "UndirectedAllRelationshipsScan",
];

/// Compares two analyses of the same logical query.
pub fn compare(original: &QueryAnalysis, optimized: &QueryAnalysis) -> ComparisonResult {
    let original_counts = original.operator_type_counts();
    let optimized_counts = optimized.operator_type_counts();

    let removed_operators = original_counts
        .keys()
        .filter(|name| !optimized_counts.contains_key(name.as_str()))
        .cloned()
        .collect();
    let added_operators = optimized_counts
        .keys()
        .filter(|name| !original_counts.contains_key(name.as_str()))
        .cloned()
        .collect();

    let estimated_rows_delta = i128::from(optimized.summary.estimated_total_rows)
        - i128::from(original.summary.estimated_total_rows);
    let db_hits_delta = i128::from(optimized.summary.estimated_db_hits)
        - i128::from(original.summary.estimated_db_hits);

    let count = |counts: &indexmap::IndexMap<String, usize>, name: &str| -> usize {
        counts.get(name).copied().unwrap_or(0)
    };
    let index_usage = |counts: &indexmap::IndexMap<String, usize>| -> usize {
        counts
            .iter()
            .filter(|(name, _)| name.ends_with("IndexSeek") || name.ends_with("IndexScan"))
            .map(|(_, n)| n)
            .sum()
    };
    let relationship_scans = |counts: &indexmap::IndexMap<String, usize>| -> usize {
        RELATIONSHIP_SCANS
            .iter()
            .copied()
            .map(|name| count(counts, name))
            .sum()
    };

    let mut improvements = Vec::new();
    if count(&optimized_counts, "AllNodesScan") < count(&original_counts, "AllNodesScan") {
        improvements.push("Reduced full node scans".to_string());
    }
    if count(&optimized_counts, "CartesianProduct") < count(&original_counts, "CartesianProduct") {
        improvements.push("Eliminated cartesian products".to_string());
    }
    if relationship_scans(&optimized_counts) < relationship_scans(&original_counts) {
        improvements.push("Reduced relationship scans".to_string());
    }
    if count(&optimized_counts, "NodeByLabelScan") > count(&original_counts, "NodeByLabelScan") {
        improvements.push("Added label-based scans".to_string());
    }
    if index_usage(&optimized_counts) > index_usage(&original_counts) {
        improvements.push("Increased index usage".to_string());
    }
    if improvements.is_empty() {
        improvements.push("Query structure maintained with minor changes".to_string());
    }

    let summary = cost_summary(original, optimized, estimated_rows_delta, db_hits_delta);

    ComparisonResult {
        removed_operators,
        added_operators,
        estimated_rows_delta,
        db_hits_delta,
        improvements,
        summary,
    }
}

fn cost_summary(
    original: &QueryAnalysis,
    optimized: &QueryAnalysis,
    rows_delta: i128,
    hits_delta: i128,
) -> String {
    let movement = format!(
        "estimated rows {} -> {}, db hits {} -> {}",
        original.summary.estimated_total_rows,
        optimized.summary.estimated_total_rows,
        original.summary.estimated_db_hits,
        optimized.summary.estimated_db_hits,
    );

    if rows_delta == 0 && hits_delta == 0 {
        format!("No change in cost estimates ({movement})")
    } else if rows_delta <= 0 && hits_delta <= 0 {
        format!("Improvement: {movement}")
    } else if rows_delta >= 0 && hits_delta >= 0 {
        format!("Regression: {movement}")
    } else {
        format!("Mixed outcome: {movement}")
    }
}
