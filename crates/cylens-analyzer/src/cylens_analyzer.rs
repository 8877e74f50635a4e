//! Cylens Analyzer - Cypher plan analysis and classification
//!
//! This crate provides functionality for:
//! - Flattening a nested execution-plan tree into an ordered operator sequence
//! - Classifying operators against the static operator taxonomy
//! - Deriving performance indicators, aggregate statistics, and query metadata
//! - Generating severity-tagged findings and index suggestions

pub mod analysis;
pub mod plan;

pub use analysis::*;
pub use plan::*;
