//! Optimization Entry Point - analyze, rewrite, re-plan, compare
//!
//! Runs the full before/after flow: analyze the original plan, attempt a safe
//! rewrite, obtain a plan for the rewritten query from the collaborator, and
//! diff the two analyses. Failure to produce the optimized side degrades the
//! outcome to "rewrite unavailable" - the original analysis is always
//! returned and the request as a whole does not fail.

use crate::compare::{ComparisonResult, compare};
use crate::rewrite::{RewriteOutcome, rewrite};
use cylens_analyzer::{QueryAnalysis, analyze_query_plan};
use cylens_core::{MalformedPlanError, PlanSource, PlanTree};
use serde::{Deserialize, Serialize};

/// Result of one optimization request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationReport {
    /// Analysis of the original query and plan
    pub original: QueryAnalysis,
    /// The optimized side, or the reason there is none
    pub outcome: OptimizationOutcome,
}

/// Either a completed before/after comparison or an explicit degradation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum OptimizationOutcome {
    Compared {
        rewritten_query: String,
        optimized: QueryAnalysis,
        comparison: ComparisonResult,
    },
    RewriteUnavailable {
        reason: String,
    },
}

impl OptimizationReport {
    /// Returns the comparison, if the optimized side was produced
    pub fn comparison(&self) -> Option<&ComparisonResult> {
        match &self.outcome {
            OptimizationOutcome::Compared { comparison, .. } => Some(comparison),
            OptimizationOutcome::RewriteUnavailable { .. } => None,
        }
    }

    /// Returns the rewritten query, if one was produced
    pub fn rewritten_query(&self) -> Option<&str> {
        match &self.outcome {
            OptimizationOutcome::Compared {
                rewritten_query, ..
            } => Some(rewritten_query),
            OptimizationOutcome::RewriteUnavailable { .. } => None,
        }
    }
}

/// Analyzes a query, attempts a rewrite, and compares both plans.
///
/// The original plan is handed in already fetched; only the rewritten query
/// goes back through the collaborator. A malformed original plan fails the
/// request; everything that goes wrong on the optimized side only degrades
/// the outcome.
#[tracing::instrument(skip(plan, source), fields(query_len = query.len()))]
pub fn optimize_query(
    query: &str,
    plan: &PlanTree,
    source: &dyn PlanSource,
) -> Result<OptimizationReport, MalformedPlanError> {
    let original = analyze_query_plan(query, plan)?;

    let outcome = match rewrite(query, &original.operators) {
        RewriteOutcome::NoSafeRewrite { reason } => {
            tracing::debug!(%reason, "no safe rewrite available");
            OptimizationOutcome::RewriteUnavailable { reason }
        }
        RewriteOutcome::Rewritten {
            query: rewritten_query,
            ..
        } => match source.plan(&rewritten_query, None) {
            Err(error) => {
                tracing::warn!(error = %error, "collaborator failed to plan rewritten query");
                OptimizationOutcome::RewriteUnavailable {
                    reason: format!("rewritten query could not be planned: {error}"),
                }
            }
            Ok(optimized_plan) => match analyze_query_plan(&rewritten_query, &optimized_plan) {
                Err(error) => {
                    tracing::warn!(error = %error, "rewritten query produced a malformed plan");
                    OptimizationOutcome::RewriteUnavailable {
                        reason: format!("rewritten query produced a malformed plan: {error}"),
                    }
                }
                Ok(optimized) => {
                    let comparison = compare(&original, &optimized);
                    OptimizationOutcome::Compared {
                        rewritten_query,
                        optimized,
                        comparison,
                    }
                }
            },
        },
    };

    Ok(OptimizationReport { original, outcome })
}
