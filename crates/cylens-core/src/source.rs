//! Plan Source - Collaborator interface for obtaining plans
//!
//! The engine itself never talks to a database. Anything that can turn a
//! query string into an execution plan (a driver, a fixture, a recording)
//! implements `PlanSource`. The interface is deliberately narrow and
//! synchronous; the collaborator is responsible for bounding its own latency
//! and for any retry policy.

use crate::error::PlanUnavailableError;
use crate::plan::PlanTree;
use std::collections::HashMap;

/// A collaborator that can produce an execution plan for a query.
pub trait PlanSource {
    /// Returns the plan for `query`, optionally against a named database.
    fn plan(
        &self,
        query: &str,
        database: Option<&str>,
    ) -> Result<PlanTree, PlanUnavailableError>;
}

/// An in-memory `PlanSource` keyed by query text.
///
/// Used by tests and by embedders that captured plans ahead of time.
#[derive(Debug, Clone, Default)]
pub struct FixedPlanSource {
    plans: HashMap<String, PlanTree>,
}

impl FixedPlanSource {
    /// Creates an empty source
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a plan for a query
    pub fn with_plan(mut self, query: impl Into<String>, plan: PlanTree) -> Self {
        self.plans.insert(query.into(), plan);
        self
    }

    /// Records a plan for a query on an existing source
    pub fn insert(&mut self, query: impl Into<String>, plan: PlanTree) {
        self.plans.insert(query.into(), plan);
    }

    /// Returns the number of recorded plans
    pub fn len(&self) -> usize {
        self.plans.len()
    }

    /// Returns true if no plans are recorded
    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }
}

impl PlanSource for FixedPlanSource {
    fn plan(
        &self,
        query: &str,
        _database: Option<&str>,
    ) -> Result<PlanTree, PlanUnavailableError> {
        self.plans.get(query).cloned().ok_or_else(|| {
            PlanUnavailableError::new(format!("no plan recorded for query: {query}"))
        })
    }
}
