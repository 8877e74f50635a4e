//! Recommendation Generator - Findings and index suggestions
//!
//! Turns a finished analysis into severity-tagged, human-readable findings
//! plus concrete index suggestions. Findings are emitted per operator, never
//! deduplicated across operators of the same type, ordered by severity tier
//! and stable by pre-order position within a tier.

use crate::analysis::analyzer::QueryAnalysis;
use crate::plan::operator::{Indicator, OperatorNode, Severity};
use crate::plan::taxonomy::{Taxonomy, taxonomy};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Argument keys whose string values carry a filter predicate.
const FILTER_ARGUMENT_KEYS: &[&str] = &["Details", "Expression", "filter", "predicate"];

/// Argument keys whose string values carry a node label.
const LABEL_ARGUMENT_KEYS: &[&str] = &["LabelName", "label"];

static PROPERTY_ACCESS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Za-z_][A-Za-z0-9_]*)\.([A-Za-z_][A-Za-z0-9_]*)").unwrap());

/// One severity-tagged observation about an operator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Severity of the triggering operator type
    pub severity: Severity,
    /// Human-readable description of the observation
    pub message: String,
    /// Clean name of the triggering operator
    pub operator: String,
    /// Depth of the triggering operator in the plan
    pub depth: usize,
}

/// A concrete index-creation suggestion derived from one operator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexSuggestion {
    /// Label to index, when one could be derived
    pub label: Option<String>,
    /// Property to index, when one could be derived
    pub property: Option<String>,
    /// Renderable index statement, with placeholders for missing pieces
    pub statement: String,
}

/// The full recommendation output for one analysis.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Recommendations {
    /// Severity-ordered findings, one per qualifying operator
    pub findings: Vec<Finding>,
    /// Index suggestions, one per qualifying operator
    pub index_suggestions: Vec<IndexSuggestion>,
}

impl Recommendations {
    /// Returns true if nothing was found
    pub fn is_empty(&self) -> bool {
        self.findings.is_empty() && self.index_suggestions.is_empty()
    }

    /// Returns true if any finding is critical
    pub fn has_critical(&self) -> bool {
        self.findings
            .iter()
            .any(|finding| finding.severity == Severity::Critical)
    }

    /// Returns the findings of one severity tier, in pre-order position
    pub fn findings_with_severity(&self, severity: Severity) -> Vec<&Finding> {
        self.findings
            .iter()
            .filter(|finding| finding.severity == severity)
            .collect()
    }
}

/// Generates recommendations using the process-wide taxonomy.
pub fn recommend(analysis: &QueryAnalysis) -> Recommendations {
    recommend_with(analysis, taxonomy())
}

/// Generates recommendations against an explicit taxonomy.
pub fn recommend_with(analysis: &QueryAnalysis, taxonomy: &Taxonomy) -> Recommendations {
    let mut findings: Vec<Finding> = analysis
        .operators
        .iter()
        .map(|node| Finding {
            severity: taxonomy.entry(&node.clean_operator_name).severity,
            message: finding_message(node),
            operator: node.clean_operator_name.clone(),
            depth: node.depth,
        })
        .collect();

    // Stable sort: pre-order position is preserved within each tier
    findings.sort_by_key(|finding| finding.severity.rank());

    let index_suggestions = analysis
        .operators
        .iter()
        .filter(|node| qualifies_for_index(node))
        .map(|node| index_suggestion(node))
        .collect();

    Recommendations {
        findings,
        index_suggestions,
    }
}

fn finding_message(node: &OperatorNode) -> String {
    let name = &node.clean_operator_name;

    let description = if node.has_indicator(Indicator::FullScan) {
        format!("{name} reads the entire store without narrowing")
    } else if node.has_indicator(Indicator::CartesianProduct) {
        format!("{name} pairs every row of one input with every row of another")
    } else if node.is_eager {
        format!("{name} materializes its whole input before producing output")
    } else if node.is_updating {
        format!("{name} mutates stored data")
    } else if node.has_indicator(Indicator::IndexUsage) {
        format!("{name} resolves rows through an index")
    } else {
        format!("{name} processes rows at depth {}", node.depth)
    };

    format!(
        "{description} (estimated {} rows, {} db hits)",
        node.estimated_rows, node.db_hits
    )
}

fn qualifies_for_index(node: &OperatorNode) -> bool {
    node.has_indicator(Indicator::HighRowCount)
        || node.has_indicator(Indicator::FullScan)
        || filter_argument(node).is_some()
}

fn filter_argument(node: &OperatorNode) -> Option<&str> {
    FILTER_ARGUMENT_KEYS
        .iter()
        .find_map(|key| node.argument_str(key))
}

fn label_argument(node: &OperatorNode) -> Option<&str> {
    LABEL_ARGUMENT_KEYS
        .iter()
        .find_map(|key| node.argument_str(key))
}

fn index_suggestion(node: &OperatorNode) -> IndexSuggestion {
    let label = label_argument(node).map(str::to_string);
    let property = filter_argument(node)
        .and_then(|predicate| PROPERTY_ACCESS.captures(predicate))
        .map(|captures| captures[2].to_string());

    let statement = match (label.as_deref(), property.as_deref()) {
        (Some(label), Some(property)) => {
            format!("CREATE INDEX FOR (n:{label}) ON (n.{property})")
        }
        (Some(label), None) => format!("CREATE INDEX FOR (n:{label}) ON (n.<property>)"),
        (None, Some(property)) => format!("CREATE INDEX FOR (n:<Label>) ON (n.{property})"),
        (None, None) => "CREATE INDEX FOR (n:<Label>) ON (n.<property>)".to_string(),
    };

    IndexSuggestion {
        label,
        property,
        statement,
    }
}
