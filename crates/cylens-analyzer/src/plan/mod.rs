//! Operator Model Module
//!
//! The operator-level view of an execution plan:
//! - `OperatorNode` - one physical operator with depth, estimates, and flags
//! - `Taxonomy` - the static operator classification table
//! - `flatten` - pre-order flattening of a raw plan tree
//!
//! # Example
//!
//! ```
//! use cylens_analyzer::plan::{flatten, classify, taxonomy, OperatorCategory};
//! use cylens_core::PlanTree;
//! use serde_json::json;
//!
//! let tree = PlanTree::from_value(json!({
//!     "operatorType": "ProduceResults",
//!     "children": [{"operatorType": "AllNodesScan", "estimated_rows": 500}]
//! }));
//!
//! let nodes = flatten(&tree).unwrap();
//! assert_eq!(nodes.len(), 2);
//! assert_eq!(nodes[1].depth, 1);
//!
//! let scan = classify(nodes[1].clone(), taxonomy());
//! assert_eq!(taxonomy().entry(&scan.clean_operator_name).category, OperatorCategory::Leaf);
//! ```

pub mod flatten;
pub mod operator;
pub mod taxonomy;

pub use flatten::flatten;
pub use operator::{
    Indicator, OperatorCategory, OperatorNode, PerformanceCharacteristics, Severity,
};
pub use taxonomy::{Taxonomy, TaxonomyEntry, classify, taxonomy};
