//! Summary Aggregator - Totals over the operator sequence
//!
//! One forward pass over the classified operators. Row and db-hit totals are
//! deliberately asymmetric: row estimates shrink down-pipeline, so the plan's
//! dominant cost driver is the maximum, while db hits are additive work and
//! sum across the plan.

use crate::plan::operator::OperatorNode;
use serde::{Deserialize, Serialize};

/// Aggregate view of one plan's operator sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlanSummary {
    /// Number of operators in the plan
    pub total_operators: usize,
    /// Operators with zero children
    pub leaf_operators: usize,
    /// Operators that mutate stored data
    pub updating_operators: usize,
    /// Operators that materialize their input eagerly
    pub eager_operators: usize,
    /// Largest single-operator row estimate in the plan
    pub estimated_total_rows: u64,
    /// Sum of db hits across all operators
    pub estimated_db_hits: u64,
}

/// Reduces an operator sequence into its summary.
pub fn summarize(nodes: &[OperatorNode]) -> PlanSummary {
    let mut summary = PlanSummary {
        total_operators: nodes.len(),
        ..PlanSummary::default()
    };

    for node in nodes {
        if node.is_leaf {
            summary.leaf_operators += 1;
        }
        if node.is_updating {
            summary.updating_operators += 1;
        }
        if node.is_eager {
            summary.eager_operators += 1;
        }
        summary.estimated_total_rows = summary.estimated_total_rows.max(node.estimated_rows);
        summary.estimated_db_hits = summary.estimated_db_hits.saturating_add(node.db_hits);
    }

    summary
}

#[cfg(test)]
mod tests;
