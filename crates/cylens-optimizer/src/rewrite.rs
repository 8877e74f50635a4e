//! Query Rewriter - Deterministic, safety-gated textual rewrites
//!
//! The rewriter models exactly one transformation: injecting an inferable
//! label into the single unlabeled node pattern of a query. Every
//! precondition must hold or the rewriter reports that no safe rewrite is
//! available; it never guesses. Constructs the rewriter does not model
//! (subqueries, unions, multiple unlabeled patterns) disable rewriting
//! outright.

use cylens_analyzer::OperatorNode;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Argument keys whose string values carry a node label.
const LABEL_ARGUMENT_KEYS: &[&str] = &["LabelName", "label"];

static UNLABELED_NODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|[^\w)\]])\(\s*([A-Za-z_][A-Za-z0-9_]*)\s*\)").unwrap());
static ANONYMOUS_NODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\(\s*\)").unwrap());
static SUBQUERY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\bCALL\s*\{").unwrap());
static UNION_CLAUSE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\bUNION\b").unwrap());

/// The rewrite rule that produced a rewritten query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RewriteRule {
    /// An inferable label was injected into an unlabeled node pattern
    LabelInjection,
}

/// Outcome of a rewrite attempt.
///
/// A failed attempt is a first-class outcome with a stated reason; the
/// rewriter never fabricates a query it cannot justify.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RewriteOutcome {
    Rewritten { query: String, rule: RewriteRule },
    NoSafeRewrite { reason: String },
}

impl RewriteOutcome {
    /// Returns the rewritten query text, if one was produced
    pub fn query(&self) -> Option<&str> {
        match self {
            Self::Rewritten { query, .. } => Some(query),
            Self::NoSafeRewrite { .. } => None,
        }
    }

    fn unsafe_because(reason: impl Into<String>) -> Self {
        Self::NoSafeRewrite {
            reason: reason.into(),
        }
    }
}

/// Attempts to rewrite a query given its flattened operator sequence.
///
/// The operator sequence supplies the label evidence: an operator that binds
/// the unlabeled variable and carries a label argument names the label to
/// inject.
pub fn rewrite(query: &str, operators: &[OperatorNode]) -> RewriteOutcome {
    if SUBQUERY.is_match(query) {
        return RewriteOutcome::unsafe_because("query contains a subquery");
    }
    if UNION_CLAUSE.is_match(query) {
        return RewriteOutcome::unsafe_because("query contains a union");
    }

    let mut variables: Vec<&str> = Vec::new();
    for captures in UNLABELED_NODE.captures_iter(query) {
        let variable = captures.get(1).map_or("", |m| m.as_str());
        if !variables.contains(&variable) {
            variables.push(variable);
        }
    }
    let anonymous = ANONYMOUS_NODE.find_iter(query).count();

    match (variables.len(), anonymous) {
        (0, 0) => return RewriteOutcome::unsafe_because("no unlabeled node pattern to label"),
        (0, _) => {
            return RewriteOutcome::unsafe_because(
                "anonymous node pattern has no filterable properties",
            );
        }
        (1, 0) => {}
        _ => {
            return RewriteOutcome::unsafe_because(
                "multiple unlabeled node patterns with ambiguous property ownership",
            );
        }
    }
    let variable = variables[0];

    let property_filter = Regex::new(&format!(r"\b{variable}\.[A-Za-z_][A-Za-z0-9_]*"))
        .expect("variable is a plain identifier");
    if !property_filter.is_match(query) {
        return RewriteOutcome::unsafe_because(format!(
            "no filtered property on unlabeled node `{variable}`"
        ));
    }

    let mut labels: Vec<&str> = Vec::new();
    for node in operators {
        if !node.identifiers.iter().any(|id| id == variable) {
            continue;
        }
        if let Some(label) = LABEL_ARGUMENT_KEYS
            .iter()
            .find_map(|key| node.argument_str(key))
            && !labels.contains(&label)
        {
            labels.push(label);
        }
    }

    let label = match labels.as_slice() {
        [] => {
            return RewriteOutcome::unsafe_because(format!(
                "no label inferable for node `{variable}`"
            ));
        }
        [label] => *label,
        _ => {
            return RewriteOutcome::unsafe_because(format!(
                "ambiguous labels inferred for node `{variable}`"
            ));
        }
    };

    let pattern = Regex::new(&format!(r"\(\s*{variable}\s*\)"))
        .expect("variable is a plain identifier");
    let rewritten = pattern
        .replace_all(query, format!("({variable}:{label})"))
        .into_owned();

    tracing::debug!(
        variable,
        label,
        "injected label into unlabeled node pattern"
    );

    RewriteOutcome::Rewritten {
        query: rewritten,
        rule: RewriteRule::LabelInjection,
    }
}
