//! Query Analysis Module
//!
//! The stages that turn a flattened, classified operator sequence into the
//! full `QueryAnalysis` result:
//! - `indicators` - per-operator threshold rules and the global indicator set
//! - `summary` - aggregate counts and cost totals
//! - `metadata` - structural inspection of the query text
//! - `recommend` - severity-tagged findings and index suggestions
//! - `analyzer` - the pipeline entry point

pub mod analyzer;
pub mod indicators;
pub mod metadata;
pub mod recommend;
pub mod summary;

pub use analyzer::{PlanAnalyzer, QueryAnalysis, analyze_query_plan};
pub use indicators::{IndicatorEngine, IndicatorThresholds};
pub use metadata::{Complexity, QueryMetadata, QueryType};
pub use recommend::{Finding, IndexSuggestion, Recommendations, recommend};
pub use summary::{PlanSummary, summarize};
