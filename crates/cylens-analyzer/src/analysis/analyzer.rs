//! Plan Analyzer - The analysis pipeline entry point
//!
//! Composes the pipeline stages left to right: flatten, classify, annotate
//! with indicators, aggregate, inspect the query text. Each stage is pure
//! given its inputs; the analyzer itself holds only read-only configuration
//! and is safe to share across concurrent requests.

use crate::analysis::indicators::{IndicatorEngine, IndicatorThresholds};
use crate::analysis::metadata::{self, Complexity, QueryMetadata, QueryType};
use crate::analysis::summary::{PlanSummary, summarize};
use crate::plan::flatten::flatten;
use crate::plan::operator::{Indicator, OperatorNode};
use crate::plan::taxonomy::{Taxonomy, classify, taxonomy};
use cylens_core::{MalformedPlanError, PlanTree};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The full analysis result for one query.
///
/// Constructed once per request and immutable afterwards. The serialized
/// field names and nesting are a compatibility contract for callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryAnalysis {
    /// The analyzed query text
    pub query: String,
    /// Read/write nature of the query
    pub query_type: QueryType,
    /// Coarse complexity grade
    pub complexity: Complexity,
    /// Detected pattern tags, fixed order, de-duplicated
    pub query_patterns: Vec<String>,
    /// Classified operators, pre-order
    pub operators: Vec<OperatorNode>,
    /// Aggregate counts and cost totals
    pub summary: PlanSummary,
    /// Union of all per-operator indicators, first-seen order
    pub performance_indicators: Vec<Indicator>,
    /// Structural flags about the query text
    pub query_metadata: QueryMetadata,
}

impl QueryAnalysis {
    /// Returns true if any operator triggered the given indicator
    pub fn has_indicator(&self, indicator: Indicator) -> bool {
        self.performance_indicators.contains(&indicator)
    }

    /// Counts operators by clean name, first-seen order
    pub fn operator_type_counts(&self) -> IndexMap<String, usize> {
        let mut counts: IndexMap<String, usize> = IndexMap::new();
        for node in &self.operators {
            *counts.entry(node.clean_operator_name.clone()).or_default() += 1;
        }
        counts
    }
}

/// Stateless analyzer over a read-only taxonomy and threshold set.
#[derive(Debug, Clone)]
pub struct PlanAnalyzer {
    taxonomy: &'static Taxonomy,
    engine: IndicatorEngine,
}

impl Default for PlanAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl PlanAnalyzer {
    /// Creates an analyzer with the built-in taxonomy and contract thresholds
    pub fn new() -> Self {
        Self {
            taxonomy: taxonomy(),
            engine: IndicatorEngine::new(),
        }
    }

    /// Replaces the indicator thresholds
    pub fn with_thresholds(mut self, thresholds: IndicatorThresholds) -> Self {
        self.engine = IndicatorEngine::with_thresholds(thresholds);
        self
    }

    /// Replaces the taxonomy table
    pub fn with_taxonomy(mut self, taxonomy: &'static Taxonomy) -> Self {
        self.taxonomy = taxonomy;
        self
    }

    /// Runs the full analysis pipeline over one query and its plan.
    #[tracing::instrument(skip(self, plan), fields(query_len = query.len()))]
    pub fn analyze(
        &self,
        query: &str,
        plan: &PlanTree,
    ) -> Result<QueryAnalysis, MalformedPlanError> {
        let mut operators: Vec<OperatorNode> = flatten(plan)?
            .into_iter()
            .map(|node| classify(node, self.taxonomy))
            .collect();

        let performance_indicators = self.engine.annotate_all(&mut operators);
        let summary = summarize(&operators);

        tracing::debug!(
            operators = summary.total_operators,
            indicators = performance_indicators.len(),
            "analysis complete"
        );

        Ok(QueryAnalysis {
            query: query.to_string(),
            query_type: metadata::classify_query_type(query),
            complexity: metadata::assess_complexity(&summary),
            query_patterns: metadata::identify_patterns(query),
            operators,
            summary,
            performance_indicators,
            query_metadata: metadata::extract_metadata(query),
        })
    }
}

/// Analyzes one query plan with the default analyzer.
pub fn analyze_query_plan(
    query: &str,
    plan: &PlanTree,
) -> Result<QueryAnalysis, MalformedPlanError> {
    PlanAnalyzer::new().analyze(query, plan)
}

#[cfg(test)]
mod tests;
