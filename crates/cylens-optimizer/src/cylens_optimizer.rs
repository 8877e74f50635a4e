//! Cylens Optimizer - Query rewriting and before/after comparison
//!
//! This crate provides functionality for:
//! - Deterministic, safety-gated textual query rewrites
//! - Diffing the analyses of an original and a rewritten query
//! - The end-to-end `optimize_query` entry point
//! - Markdown rendering of analysis and optimization reports

pub mod compare;
pub mod optimize;
pub mod report;
pub mod rewrite;

pub use compare::*;
pub use optimize::*;
pub use report::*;
pub use rewrite::*;
