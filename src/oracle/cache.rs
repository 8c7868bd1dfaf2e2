//! Per-invocation memoization of oracle answers.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::Result;
use crate::project::ProjectName;

use super::{CompatReport, Oracle};

/// Wraps an oracle so each project is queried at most once per run.
///
/// Different seeds frequently share transitive dependencies; the first
/// lookup answers for all of them. Failures are not cached, and the cache
/// lives only as long as the wrapper.
pub struct CachedOracle<O> {
    inner: O,
    answered: RefCell<HashMap<ProjectName, CompatReport>>,
}

impl<O: Oracle> CachedOracle<O> {
    /// Wrap an oracle with an empty cache.
    pub fn new(inner: O) -> Self {
        Self {
            inner,
            answered: RefCell::new(HashMap::new()),
        }
    }

    /// Number of distinct projects answered so far.
    pub fn answered(&self) -> usize {
        self.answered.borrow().len()
    }
}

impl<O: Oracle> Oracle for CachedOracle<O> {
    fn query(&self, project: &ProjectName) -> Result<CompatReport> {
        if let Some(report) = self.answered.borrow().get(project) {
            return Ok(report.clone());
        }
        let report = self.inner.query(project)?;
        self.answered
            .borrow_mut()
            .insert(project.clone(), report.clone());
        Ok(report)
    }
}
