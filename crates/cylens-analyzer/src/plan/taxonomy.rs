//! Operator Taxonomy - Static classification table
//!
//! Maps clean operator names to a category and a severity. The table is
//! built once per process and is read-only afterwards; classification calls
//! borrow it and never mutate it, so concurrent analysis requests share it
//! freely.
//!
//! String-to-variant lookup is isolated here: no other module branches on
//! raw operator names for classification purposes. Unknown names resolve to
//! `(neutral, medium)` and are reported as a warning, never as an error.

use crate::plan::operator::{OperatorCategory, OperatorNode, Severity};
use std::collections::HashMap;
use std::sync::LazyLock;

/// Classification of a single operator type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxonomyEntry {
    pub category: OperatorCategory,
    pub severity: Severity,
}

impl Default for TaxonomyEntry {
    fn default() -> Self {
        Self {
            category: OperatorCategory::Neutral,
            severity: Severity::Medium,
        }
    }
}

/// Immutable operator classification table.
#[derive(Debug, Clone)]
pub struct Taxonomy {
    entries: HashMap<&'static str, TaxonomyEntry>,
}

use OperatorCategory::{Eager, Leaf, Neutral, Updating};
use Severity::{Critical, High, Low, Medium};

/// Known operator inventory.
///
/// Qualified variants (`Expand(All)`, `VarLengthExpand(All)`) are distinct
/// keys from their base names: directionality changes the cost profile.
const BUILTIN: &[(&str, OperatorCategory, Severity)] = &[
    // Leaf operators: data-access starting points
    ("AllNodesScan", Leaf, Critical),
    ("Argument", Leaf, Low),
    ("ArgumentTracker", Leaf, Low),
    ("AssertingMultiNodeIndexSeek", Leaf, Low),
    ("AssertingMultiRelationshipIndexSeek", Leaf, Low),
    ("AssertingSingleNodeIndexSeek", Leaf, Low),
    ("AssertingSingleRelationshipIndexSeek", Leaf, Low),
    ("DirectedAllRelationshipsScan", Leaf, Critical),
    ("DirectedRelationshipByElementIdSeek", Leaf, Low),
    ("DirectedRelationshipByIdSeek", Leaf, Low),
    ("DirectedRelationshipIndexContainsScan", Leaf, Medium),
    ("DirectedRelationshipIndexEndsWithScan", Leaf, Medium),
    ("DirectedRelationshipIndexScan", Leaf, Medium),
    ("DirectedRelationshipIndexSeek", Leaf, Low),
    ("DirectedRelationshipIndexSeekByRange", Leaf, Low),
    ("DirectedRelationshipTypeScan", Leaf, Medium),
    ("DirectedUnionRelationshipTypesScan", Leaf, Medium),
    ("NodeByElementIdSeek", Leaf, Low),
    ("NodeByIdSeek", Leaf, Low),
    ("NodeByLabelScan", Leaf, Medium),
    ("NodeIndexContainsScan", Leaf, Medium),
    ("NodeIndexEndsWithScan", Leaf, Medium),
    ("NodeIndexScan", Leaf, Medium),
    ("NodeIndexSeek", Leaf, Low),
    ("NodeIndexSeekByRange", Leaf, Low),
    ("NodeUniqueIndexSeek", Leaf, Low),
    ("NodeUniqueIndexSeekByRange", Leaf, Low),
    ("UndirectedAllRelationshipsScan", Leaf, Critical),
    ("UndirectedRelationshipByElementIdSeek", Leaf, Low),
    ("UndirectedRelationshipByIdSeek", Leaf, Low),
    ("UndirectedRelationshipIndexContainsScan", Leaf, Medium),
    ("UndirectedRelationshipIndexEndsWithScan", Leaf, Medium),
    ("UndirectedRelationshipIndexScan", Leaf, Medium),
    ("UndirectedRelationshipIndexSeek", Leaf, Low),
    ("UndirectedRelationshipIndexSeekByRange", Leaf, Low),
    ("UndirectedRelationshipTypeScan", Leaf, Medium),
    ("UndirectedUnionRelationshipTypesScan", Leaf, Medium),
    ("UnionNodeByLabelsScan", Leaf, Medium),
    // Updating operators: mutate stored data
    ("Create", Updating, Medium),
    ("Delete", Updating, Medium),
    ("MergeCreateNode", Updating, Medium),
    ("MergeCreateRelationship", Updating, Medium),
    ("RemoveLabels", Updating, Medium),
    ("SetLabels", Updating, Medium),
    ("SetNodeProperties", Updating, Medium),
    ("SetNodeProperty", Updating, Medium),
    ("SetProperties", Updating, Medium),
    ("SetProperty", Updating, Medium),
    ("SetRelationshipProperties", Updating, Medium),
    ("SetRelationshipProperty", Updating, Medium),
    // Eager operators: block pipelining
    ("CartesianProduct", Eager, Critical),
    ("EagerAggregation", Eager, High),
    ("EagerLimit", Eager, High),
    ("EagerSort", Eager, High),
    ("EagerUnion", Eager, High),
    ("ValueHashJoin", Eager, High),
    // Common neutral operators
    ("Aggregation", Neutral, Medium),
    ("AntiSemiApply", Neutral, Medium),
    ("Apply", Neutral, Medium),
    ("CacheProperties", Neutral, Low),
    ("Distinct", Neutral, Low),
    ("Expand(All)", Neutral, Medium),
    ("Expand(Into)", Neutral, Low),
    ("Filter", Neutral, Low),
    ("Limit", Neutral, Low),
    ("NodeHashJoin", Neutral, Medium),
    ("NodeLeftOuterHashJoin", Neutral, Medium),
    ("NodeRightOuterHashJoin", Neutral, Medium),
    ("Optional", Neutral, Low),
    ("OptionalExpand(All)", Neutral, Medium),
    ("OptionalExpand(Into)", Neutral, Low),
    ("OrderedAggregation", Neutral, Low),
    ("OrderedDistinct", Neutral, Low),
    ("PartialSort", Neutral, Low),
    ("PartialTop", Neutral, Low),
    ("ProcedureCall", Neutral, Medium),
    ("ProduceResults", Neutral, Low),
    ("Projection", Neutral, Low),
    ("SemiApply", Neutral, Medium),
    ("Skip", Neutral, Low),
    ("Sort", Neutral, Medium),
    ("Top", Neutral, Low),
    ("Unwind", Neutral, Low),
    ("VarLengthExpand(All)", Neutral, High),
    ("VarLengthExpand(Into)", Neutral, Medium),
];

static OPERATOR_TAXONOMY: LazyLock<Taxonomy> = LazyLock::new(Taxonomy::builtin);

/// Returns the process-wide operator taxonomy.
pub fn taxonomy() -> &'static Taxonomy {
    &OPERATOR_TAXONOMY
}

impl Taxonomy {
    /// Builds the built-in operator table
    pub fn builtin() -> Self {
        let entries = BUILTIN
            .iter()
            .map(|(name, category, severity)| {
                (
                    *name,
                    TaxonomyEntry {
                        category: *category,
                        severity: *severity,
                    },
                )
            })
            .collect();
        Self { entries }
    }

    /// Looks up an operator by clean name; `None` for unknown names
    pub fn lookup(&self, clean_name: &str) -> Option<TaxonomyEntry> {
        self.entries.get(clean_name).copied()
    }

    /// Looks up an operator, falling back to the default entry
    pub fn entry(&self, clean_name: &str) -> TaxonomyEntry {
        self.lookup(clean_name).unwrap_or_default()
    }

    /// Number of known operator types
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Attaches classification flags to an operator node.
///
/// Pure with respect to `clean_operator_name`: classifying an already
/// classified node yields identical flags. The structural `is_leaf` flag set
/// by the flattener is left untouched; when the taxonomy calls an operator a
/// leaf but the tree gave it children, the disagreement is only observed.
pub fn classify(mut node: OperatorNode, taxonomy: &Taxonomy) -> OperatorNode {
    let entry = match taxonomy.lookup(&node.clean_operator_name) {
        Some(entry) => entry,
        None => {
            tracing::warn!(
                operator = %node.clean_operator_name,
                "unknown operator, using default classification"
            );
            TaxonomyEntry::default()
        }
    };

    node.is_updating = entry.category == OperatorCategory::Updating;
    node.is_eager =
        entry.category == OperatorCategory::Eager || node.clean_operator_name.contains("Eager");

    if entry.category == OperatorCategory::Leaf && !node.is_leaf {
        tracing::debug!(
            operator = %node.clean_operator_name,
            depth = node.depth,
            "taxonomy leaf operator has children in this plan"
        );
    }

    node
}
