//! Report Rendering - Markdown views of analysis results
//!
//! Pure string building over finished analysis structures, for surfaces that
//! want a human-readable digest instead of the serialized structures. No I/O
//! happens here.

use crate::optimize::{OptimizationOutcome, OptimizationReport};
use cylens_analyzer::{QueryAnalysis, recommend};

/// Renders one analysis as a markdown document.
pub fn render_analysis(analysis: &QueryAnalysis) -> String {
    let mut out = String::new();

    out.push_str("# Query Analysis\n\n");
    out.push_str("## Query Information\n");
    out.push_str(&format!("- **Query**: {}\n", analysis.query));
    out.push_str(&format!("- **Type**: {} query\n", analysis.query_type.as_str()));
    out.push_str(&format!("- **Complexity**: {}\n", analysis.complexity.as_str()));
    if !analysis.query_patterns.is_empty() {
        out.push_str(&format!(
            "- **Patterns**: {}\n",
            analysis.query_patterns.join(", ")
        ));
    }

    out.push_str("\n## Execution Plan Summary\n");
    let summary = &analysis.summary;
    out.push_str(&format!("- **Total Operators**: {}\n", summary.total_operators));
    out.push_str(&format!("- **Leaf Operators**: {}\n", summary.leaf_operators));
    out.push_str(&format!(
        "- **Updating Operators**: {}\n",
        summary.updating_operators
    ));
    out.push_str(&format!("- **Eager Operators**: {}\n", summary.eager_operators));
    out.push_str(&format!(
        "- **Estimated Total Rows**: {}\n",
        summary.estimated_total_rows
    ));
    out.push_str(&format!(
        "- **Estimated DB Hits**: {}\n",
        summary.estimated_db_hits
    ));

    out.push_str("\n## Performance Indicators\n");
    if analysis.performance_indicators.is_empty() {
        out.push_str("- none\n");
    }
    for indicator in &analysis.performance_indicators {
        out.push_str(&format!("- {}\n", indicator.as_str()));
    }

    out.push_str("\n## Query Metadata\n");
    let metadata = &analysis.query_metadata;
    out.push_str(&format!("- **Has WHERE clause**: {}\n", metadata.has_where_clause));
    out.push_str(&format!("- **Has ORDER BY**: {}\n", metadata.has_order_by));
    out.push_str(&format!("- **Has LIMIT**: {}\n", metadata.has_limit));
    out.push_str(&format!("- **Has Aggregation**: {}\n", metadata.has_aggregation));
    out.push_str(&format!(
        "- **Has Relationships**: {}\n",
        metadata.has_relationships
    ));

    let recommendations = recommend(analysis);
    if !recommendations.findings.is_empty() {
        out.push_str("\n## Findings\n");
        for finding in &recommendations.findings {
            out.push_str(&format!(
                "- [{}] {}\n",
                finding.severity.as_str(),
                finding.message
            ));
        }
    }
    if !recommendations.index_suggestions.is_empty() {
        out.push_str("\n## Index Suggestions\n");
        for suggestion in &recommendations.index_suggestions {
            out.push_str(&format!("- `{}`\n", suggestion.statement));
        }
    }

    if !analysis.operators.is_empty() {
        out.push_str("\n## Operator Details\n");
        for (position, operator) in analysis.operators.iter().enumerate() {
            out.push_str(&format!(
                "\n### Operator {}: {}\n",
                position + 1,
                operator.operator_name
            ));
            out.push_str(&format!("- **Type**: {}\n", operator.clean_operator_name));
            out.push_str(&format!(
                "- **Estimated Rows**: {}\n",
                operator.estimated_rows
            ));
            out.push_str(&format!("- **DB Hits**: {}\n", operator.db_hits));
            out.push_str(&format!("- **Depth**: {}\n", operator.depth));
            out.push_str(&format!("- **Is Leaf**: {}\n", operator.is_leaf));
            out.push_str(&format!("- **Is Updating**: {}\n", operator.is_updating));
            out.push_str(&format!("- **Is Eager**: {}\n", operator.is_eager));
            let indicators = &operator
                .performance_characteristics
                .performance_indicators;
            if !indicators.is_empty() {
                let tags: Vec<&str> = indicators.iter().map(|i| i.as_str()).collect();
                out.push_str(&format!(
                    "- **Performance Indicators**: {}\n",
                    tags.join(", ")
                ));
            }
        }
    }

    out
}

/// Renders a full optimization report as a markdown document.
pub fn render_report(report: &OptimizationReport) -> String {
    let mut out = String::new();

    out.push_str("# Query Optimization Report\n\n");
    out.push_str("## Original Query\n");
    out.push_str(&format!("```cypher\n{}\n```\n", report.original.query));

    match &report.outcome {
        OptimizationOutcome::RewriteUnavailable { reason } => {
            out.push_str(&format!("\nNo safe rewrite available: {reason}.\n"));
        }
        OptimizationOutcome::Compared {
            rewritten_query,
            optimized: _,
            comparison,
        } => {
            out.push_str("\n## Optimized Query\n");
            out.push_str(&format!("```cypher\n{rewritten_query}\n```\n"));

            out.push_str("\n## Comparison\n");
            if !comparison.removed_operators.is_empty() {
                out.push_str(&format!(
                    "- **Removed Operators**: {}\n",
                    comparison.removed_operators.join(", ")
                ));
            }
            if !comparison.added_operators.is_empty() {
                out.push_str(&format!(
                    "- **Added Operators**: {}\n",
                    comparison.added_operators.join(", ")
                ));
            }
            out.push_str(&format!(
                "- **Estimated Rows Delta**: {}\n",
                comparison.estimated_rows_delta
            ));
            out.push_str(&format!(
                "- **DB Hits Delta**: {}\n",
                comparison.db_hits_delta
            ));
            for improvement in &comparison.improvements {
                out.push_str(&format!("- {improvement}\n"));
            }
            out.push_str(&format!("\n{}\n", comparison.summary));
        }
    }

    out.push_str("\n---\n\n");
    out.push_str(&render_analysis(&report.original));

    out
}

#[cfg(test)]
mod tests;
