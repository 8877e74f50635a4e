//! Performance Indicator Engine - Threshold rules per operator
//!
//! Applies a fixed rule set to each classified operator and records the
//! triggered indicators in the node's performance characteristics. Rules are
//! independent; one operator can carry several indicators.

use crate::plan::operator::{Indicator, OperatorNode, PerformanceCharacteristics};
use serde::{Deserialize, Serialize};

/// Operator names that read an entire store without narrowing.
const FULL_SCAN_OPERATORS: &[&str] = &[
    "AllNodesScan",
    "UndirectedAllRelationshipsScan",
    "DirectedAllRelationshipsScan",
];

/// Threshold configuration for the indicator rules.
///
/// The defaults are a compatibility contract: existing recommendations
/// depend on exactly these values, and the comparisons are strict, so the
/// boundary values themselves do not trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicatorThresholds {
    /// Rows above which an operator counts as high-row-count
    pub high_row_count: u64,
    /// Db hits above which an operator counts as high-db-hits
    pub high_db_hits: u64,
}

impl Default for IndicatorThresholds {
    fn default() -> Self {
        Self {
            high_row_count: 100_000,
            high_db_hits: 10_000,
        }
    }
}

impl IndicatorThresholds {
    /// Creates thresholds with the contract defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the high-row-count threshold
    pub fn with_high_row_count(mut self, threshold: u64) -> Self {
        self.high_row_count = threshold;
        self
    }

    /// Sets the high-db-hits threshold
    pub fn with_high_db_hits(mut self, threshold: u64) -> Self {
        self.high_db_hits = threshold;
        self
    }
}

/// Applies indicator rules to operators.
#[derive(Debug, Clone, Default)]
pub struct IndicatorEngine {
    thresholds: IndicatorThresholds,
}

impl IndicatorEngine {
    /// Creates an engine with the contract thresholds
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine with custom thresholds
    pub fn with_thresholds(thresholds: IndicatorThresholds) -> Self {
        Self { thresholds }
    }

    /// Returns the configured thresholds
    pub fn thresholds(&self) -> &IndicatorThresholds {
        &self.thresholds
    }

    /// Computes the indicators for one operator
    pub fn indicators_for(&self, node: &OperatorNode) -> Vec<Indicator> {
        let mut indicators = Vec::new();
        let name = node.clean_operator_name.as_str();

        if node.estimated_rows > self.thresholds.high_row_count {
            indicators.push(Indicator::HighRowCount);
        }
        if node.db_hits > self.thresholds.high_db_hits {
            indicators.push(Indicator::HighDbHits);
        }
        if FULL_SCAN_OPERATORS.contains(&name) {
            indicators.push(Indicator::FullScan);
        }
        if name == "CartesianProduct" {
            indicators.push(Indicator::CartesianProduct);
        }
        if name.ends_with("IndexSeek") || name.ends_with("IndexScan") {
            indicators.push(Indicator::IndexUsage);
        }
        if node.is_eager {
            indicators.push(Indicator::EagerOperation);
        }

        indicators
    }

    /// Annotates one operator with its performance characteristics
    pub fn annotate(&self, node: &mut OperatorNode) {
        node.performance_characteristics = PerformanceCharacteristics {
            operator_type: node.clean_operator_name.clone(),
            estimated_rows: node.estimated_rows,
            db_hits: node.db_hits,
            performance_indicators: self.indicators_for(node),
        };
    }

    /// Annotates a whole sequence and returns the global indicator set.
    ///
    /// The global set is the de-duplicated union across all operators in
    /// first-seen order.
    pub fn annotate_all(&self, nodes: &mut [OperatorNode]) -> Vec<Indicator> {
        let mut global = Vec::new();
        for node in nodes.iter_mut() {
            self.annotate(node);
            for indicator in &node.performance_characteristics.performance_indicators {
                if !global.contains(indicator) {
                    global.push(*indicator);
                }
            }
        }
        global
    }
}
