//! Plan Tree Flattener - Pre-order operator extraction
//!
//! Walks the raw plan tree and produces the ordered operator sequence with
//! depth information. Traversal uses an explicit work stack, so plan depth is
//! bounded by memory rather than by the host call stack. Node identity is
//! tracked in a visited set and revisiting a node fails the request instead
//! of looping forever.
//!
//! Recognized node keys, in lookup order:
//!
//! - name: `operatorType`, then `operator`
//! - rows: `estimated_rows`, then `args.EstimatedRows`
//! - hits: `db_hits`, then `args.DbHits`
//! - metadata: `args`, `identifiers`
//! - structure: `children` (absent, `null`, or an array)

use crate::plan::operator::OperatorNode;
use cylens_core::{MalformedPlanError, PlanTree};
use indexmap::IndexMap;
use serde_json::{Map, Value};
use std::collections::HashSet;

/// Fallback label for nodes that carry no operator name at all.
const UNKNOWN_OPERATOR: &str = "Unknown";

/// Flattens a plan tree into its pre-order operator sequence.
///
/// Every tree node becomes exactly one `OperatorNode`; parents precede their
/// children and siblings keep source order. The root has depth 0. An empty
/// tree (JSON `null` or `{}`) flattens to an empty sequence.
pub fn flatten(tree: &PlanTree) -> Result<Vec<OperatorNode>, MalformedPlanError> {
    if tree.is_empty() {
        return Ok(Vec::new());
    }

    let mut operators = Vec::new();
    let mut stack: Vec<(&Value, usize)> = vec![(tree.root(), 0)];
    let mut visited: HashSet<*const Value> = HashSet::new();

    while let Some((value, depth)) = stack.pop() {
        if !visited.insert(value as *const Value) {
            return Err(MalformedPlanError::CyclicReference);
        }

        let object = value
            .as_object()
            .ok_or(MalformedPlanError::NotAnObject { depth })?;

        let children = match object.get("children") {
            None | Some(Value::Null) => &[][..],
            Some(Value::Array(children)) => children.as_slice(),
            Some(_) => return Err(MalformedPlanError::InvalidChildren { depth }),
        };

        operators.push(node_from_object(object, depth, children.is_empty()));

        // Reverse push keeps sibling source order in the pre-order output
        for child in children.iter().rev() {
            stack.push((child, depth + 1));
        }
    }

    Ok(operators)
}

fn node_from_object(object: &Map<String, Value>, depth: usize, is_leaf: bool) -> OperatorNode {
    let name = object
        .get("operatorType")
        .or_else(|| object.get("operator"))
        .and_then(Value::as_str)
        .unwrap_or(UNKNOWN_OPERATOR);

    let arguments: IndexMap<String, Value> = object
        .get("args")
        .and_then(Value::as_object)
        .map(|args| {
            args.iter()
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect()
        })
        .unwrap_or_default();

    let estimated_rows = numeric_field(object.get("estimated_rows"))
        .or_else(|| numeric_field(arguments.get("EstimatedRows")))
        .unwrap_or(0);

    let db_hits = numeric_field(object.get("db_hits"))
        .or_else(|| numeric_field(arguments.get("DbHits")))
        .unwrap_or(0);

    let mut identifiers: Vec<String> = Vec::new();
    if let Some(values) = object.get("identifiers").and_then(Value::as_array) {
        for value in values {
            if let Some(identifier) = value.as_str()
                && !identifiers.iter().any(|known| known == identifier)
            {
                identifiers.push(identifier.to_string());
            }
        }
    }

    OperatorNode::new(name, depth)
        .with_rows(estimated_rows)
        .with_db_hits(db_hits)
        .with_arguments(arguments)
        .with_identifiers(identifiers)
        .with_leaf(is_leaf)
}

/// Reads a non-negative numeric estimate; negatives clamp to 0.
///
/// Plan sources emit row estimates both as integers and as floats
/// (`18.0`), so both JSON number forms are accepted.
fn numeric_field(value: Option<&Value>) -> Option<u64> {
    let value = value?;
    if let Some(unsigned) = value.as_u64() {
        return Some(unsigned);
    }
    value.as_f64().map(|float| {
        if float.is_sign_negative() || float.is_nan() {
            0
        } else {
            float as u64
        }
    })
}
