//! Raw Plan Tree - The collaborator-supplied execution plan
//!
//! A `PlanTree` wraps the plan exactly as a plan source hands it over: a
//! nested JSON structure of operator objects, each with an optional
//! `children` array. The analyzer interprets the node fields; this type only
//! carries the data and guards the JSON boundary.
//!
//! Recognized node keys (interpretation happens in `cylens-analyzer`):
//!
//! - `operatorType` (fallback `operator`) - raw operator label
//! - `estimated_rows` (fallback `args.EstimatedRows`) - row estimate
//! - `db_hits` (fallback `args.DbHits`) - storage access estimate
//! - `args` - operator-specific metadata map
//! - `identifiers` - variable names bound or consumed
//! - `children` - ordered child operators

use crate::error::MalformedPlanError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An execution-plan tree as supplied by a plan source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlanTree(Value);

impl PlanTree {
    /// Wraps an already-parsed JSON value
    pub fn from_value(value: Value) -> Self {
        Self(value)
    }

    /// Parses a plan tree from a JSON string
    pub fn from_json(json: &str) -> Result<Self, MalformedPlanError> {
        let value: Value = serde_json::from_str(json)?;
        Ok(Self(value))
    }

    /// Returns the root node of the tree
    pub fn root(&self) -> &Value {
        &self.0
    }

    /// Consumes the tree and returns the underlying value
    pub fn into_value(self) -> Value {
        self.0
    }

    /// Returns true if the tree carries no plan at all (JSON `null` or an
    /// empty object)
    pub fn is_empty(&self) -> bool {
        match &self.0 {
            Value::Null => true,
            Value::Object(map) => map.is_empty(),
            _ => false,
        }
    }
}

impl From<Value> for PlanTree {
    fn from(value: Value) -> Self {
        Self(value)
    }
}
