//! Query Metadata Extractor - Structural inspection of the query text
//!
//! Pattern-based keyword detection over the raw query string, independent of
//! the plan tree. This is deliberately not a parser: matches inside string
//! literals are accepted false positives, traded for zero parsing
//! dependencies and total-function behavior on arbitrary input.

use crate::analysis::summary::PlanSummary;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static MATCH_CLAUSE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\bMATCH\b").unwrap());
static MATCH_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\bMATCH\s*\(").unwrap());
static RETURN_CLAUSE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\bRETURN\b").unwrap());
static WHERE_CLAUSE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\bWHERE\b").unwrap());
static ORDER_BY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\bORDER\s+BY\b").unwrap());
static LIMIT_CLAUSE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\bLIMIT\b").unwrap());
static UNION_CLAUSE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\bUNION\b").unwrap());
static WITH_CLAUSE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\bWITH\b").unwrap());
static AGGREGATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(count|sum|avg|min|max|collect)\s*\(").unwrap());
static RELATIONSHIP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<?-\s*\[[^\]]*\]\s*->?|<-->|-->|<--").unwrap());
static WRITE_CLAUSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(CREATE|MERGE|SET|DELETE|REMOVE)\b").unwrap());

/// Structural flags about the query text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QueryMetadata {
    pub has_where_clause: bool,
    pub has_order_by: bool,
    pub has_limit: bool,
    pub has_aggregation: bool,
    pub has_relationships: bool,
}

/// Read/write nature of a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryType {
    Read,
    Write,
    Mixed,
}

impl QueryType {
    /// Returns the query type as a display string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Read => "read",
            Self::Write => "write",
            Self::Mixed => "mixed",
        }
    }
}

/// Coarse complexity grade of a query plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Complexity {
    Low,
    Medium,
    High,
}

impl Complexity {
    /// Returns the complexity as a display string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Extracts the structural metadata flags from a query string.
pub fn extract_metadata(query: &str) -> QueryMetadata {
    QueryMetadata {
        has_where_clause: WHERE_CLAUSE.is_match(query),
        has_order_by: ORDER_BY.is_match(query),
        has_limit: LIMIT_CLAUSE.is_match(query),
        has_aggregation: AGGREGATION.is_match(query),
        has_relationships: RELATIONSHIP.is_match(query),
    }
}

/// Classifies a query as read, write, or mixed.
///
/// A write clause combined with a reading `MATCH ... RETURN` shape is mixed;
/// a write clause alone is a write; everything else reads.
pub fn classify_query_type(query: &str) -> QueryType {
    let writes = WRITE_CLAUSE.is_match(query);
    let reads = MATCH_CLAUSE.is_match(query) && RETURN_CLAUSE.is_match(query);

    match (writes, reads) {
        (true, true) => QueryType::Mixed,
        (true, false) => QueryType::Write,
        (false, _) => QueryType::Read,
    }
}

/// Grades plan complexity from operator count and eager/updating presence.
pub fn assess_complexity(summary: &PlanSummary) -> Complexity {
    let mut score = summary.total_operators;
    if summary.eager_operators > 0 {
        score += 2;
    }
    if summary.updating_operators > 0 {
        score += 2;
    }

    match score {
        0..=3 => Complexity::Low,
        4..=8 => Complexity::Medium,
        _ => Complexity::High,
    }
}

/// Identifies the pattern tags present in the query text.
///
/// Tags are emitted in a fixed order and never duplicated.
pub fn identify_patterns(query: &str) -> Vec<String> {
    let mut patterns = Vec::new();

    if MATCH_PATTERN.is_match(query) {
        patterns.push("node matching");
    }
    if RELATIONSHIP.is_match(query) {
        patterns.push("relationship traversal");
    }
    if WHERE_CLAUSE.is_match(query) {
        patterns.push("property filtering");
    }
    if ORDER_BY.is_match(query) {
        patterns.push("result sorting");
    }
    if LIMIT_CLAUSE.is_match(query) {
        patterns.push("result limiting");
    }
    if AGGREGATION.is_match(query) {
        patterns.push("aggregation");
    }
    if UNION_CLAUSE.is_match(query) {
        patterns.push("query union");
    }
    if WITH_CLAUSE.is_match(query) {
        patterns.push("query chaining");
    }

    patterns.into_iter().map(str::to_string).collect()
}

#[cfg(test)]
mod tests;
