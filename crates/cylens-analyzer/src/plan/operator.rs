//! Operator Node - One physical operator of an execution plan
//!
//! An `OperatorNode` is the flattened, classified view of a single plan
//! operator. The raw label, cost estimates, and metadata come from the plan
//! tree; the boolean flags and performance characteristics are derived and
//! never read from input.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Classification category of an operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperatorCategory {
    /// Data-access starting point of a plan branch
    Leaf,
    /// Mutates stored data as a side effect
    Updating,
    /// Fully materializes its input before producing output
    Eager,
    /// No special execution profile
    Neutral,
}

impl OperatorCategory {
    /// Returns the category as a display string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Leaf => "leaf",
            Self::Updating => "updating",
            Self::Eager => "eager",
            Self::Neutral => "neutral",
        }
    }
}

/// Severity associated with an operator type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    /// Returns the severity as a display string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    /// Sort rank, critical first
    pub fn rank(&self) -> u8 {
        match self {
            Self::Critical => 0,
            Self::High => 1,
            Self::Medium => 2,
            Self::Low => 3,
        }
    }
}

/// A named performance indicator attached to an operator or an analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Indicator {
    HighRowCount,
    HighDbHits,
    FullScan,
    CartesianProduct,
    IndexUsage,
    EagerOperation,
}

impl Indicator {
    /// Returns the indicator tag as a display string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HighRowCount => "high_row_count",
            Self::HighDbHits => "high_db_hits",
            Self::FullScan => "full_scan",
            Self::CartesianProduct => "cartesian_product",
            Self::IndexUsage => "index_usage",
            Self::EagerOperation => "eager_operation",
        }
    }
}

/// Derived performance view of a single operator.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PerformanceCharacteristics {
    /// Clean operator name the characteristics were computed for
    pub operator_type: String,
    /// Estimated rows produced by the operator
    pub estimated_rows: u64,
    /// Estimated storage-engine accesses
    pub db_hits: u64,
    /// Indicators triggered by this operator
    pub performance_indicators: Vec<Indicator>,
}

/// One physical operator of an execution plan, in pre-order position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperatorNode {
    /// Raw label as emitted by the plan source
    pub operator_name: String,
    /// Label with the planner-target decoration stripped; taxonomy key
    pub clean_operator_name: String,
    /// Estimated rows produced; absent in the input means 0
    pub estimated_rows: u64,
    /// Estimated storage-engine accesses; absent in the input means 0
    pub db_hits: u64,
    /// Position in the plan tree, root 0, children parent + 1
    pub depth: usize,
    /// Operator-specific metadata, opaque except for rewriter keys
    pub arguments: IndexMap<String, Value>,
    /// Variable names the operator binds or consumes
    pub identifiers: Vec<String>,
    /// True iff the tree node had zero children
    pub is_leaf: bool,
    /// True iff the taxonomy classifies the operator as updating
    pub is_updating: bool,
    /// True iff the operator materializes its input eagerly
    pub is_eager: bool,
    /// Derived performance view, computed by the indicator engine
    pub performance_characteristics: PerformanceCharacteristics,
}

impl OperatorNode {
    /// Creates a new node with the given raw label and depth
    pub fn new(operator_name: impl Into<String>, depth: usize) -> Self {
        let operator_name = operator_name.into();
        let clean_operator_name = clean_name(&operator_name);
        Self {
            operator_name,
            clean_operator_name,
            estimated_rows: 0,
            db_hits: 0,
            depth,
            arguments: IndexMap::new(),
            identifiers: Vec::new(),
            is_leaf: false,
            is_updating: false,
            is_eager: false,
            performance_characteristics: PerformanceCharacteristics::default(),
        }
    }

    /// Sets the estimated rows
    pub fn with_rows(mut self, rows: u64) -> Self {
        self.estimated_rows = rows;
        self
    }

    /// Sets the estimated db hits
    pub fn with_db_hits(mut self, db_hits: u64) -> Self {
        self.db_hits = db_hits;
        self
    }

    /// Sets the operator arguments
    pub fn with_arguments(mut self, arguments: IndexMap<String, Value>) -> Self {
        self.arguments = arguments;
        self
    }

    /// Adds a single argument
    pub fn with_argument(mut self, key: impl Into<String>, value: Value) -> Self {
        self.arguments.insert(key.into(), value);
        self
    }

    /// Sets the identifiers bound or consumed by the operator
    pub fn with_identifiers(mut self, identifiers: Vec<String>) -> Self {
        self.identifiers = identifiers;
        self
    }

    /// Marks the node as a structural leaf (zero children in the tree)
    pub fn with_leaf(mut self, is_leaf: bool) -> Self {
        self.is_leaf = is_leaf;
        self
    }

    /// Returns the string value of an argument, if present
    pub fn argument_str(&self, key: &str) -> Option<&str> {
        self.arguments.get(key).and_then(Value::as_str)
    }

    /// Returns true if the operator carries the given indicator
    pub fn has_indicator(&self, indicator: Indicator) -> bool {
        self.performance_characteristics
            .performance_indicators
            .contains(&indicator)
    }
}

/// Strips the planner-target decoration from a raw operator label.
///
/// Plan sources may emit labels like `NodeByLabelScan@neo4j`; everything from
/// the first `@` on is decoration. Parenthesized qualifiers such as
/// `Expand(All)` are kept: qualified variants are distinct taxonomy keys
/// because directionality changes the cost profile.
pub fn clean_name(raw: &str) -> String {
    match raw.split_once('@') {
        Some((name, _)) => name.to_string(),
        None => raw.to_string(),
    }
}
