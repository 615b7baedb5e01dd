//! Test utilities for assertforge-core
//!
//! Provides probe constraints used across the crate's test modules.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::constraint::Constraint;
use crate::error::EvaluationFault;
use crate::result::ConstraintResult;
use crate::status::ConstraintStatus;
use crate::value::ActualValue;

/// A constraint with a fixed verdict that counts how often it is evaluated.
#[derive(Debug, Clone)]
pub struct ProbeConstraint {
    name: &'static str,
    status: ConstraintStatus,
    calls: Arc<AtomicUsize>,
}

impl ProbeConstraint {
    pub fn new(name: &'static str, status: ConstraintStatus) -> Self {
        Self {
            name,
            status,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn succeeding(name: &'static str) -> Self {
        Self::new(name, ConstraintStatus::Success)
    }

    pub fn failing(name: &'static str) -> Self {
        Self::new(name, ConstraintStatus::Failure)
    }

    pub fn erroring(name: &'static str) -> Self {
        Self::new(name, ConstraintStatus::Error)
    }

    /// Shared handle to the evaluation counter; stays valid after the probe
    /// is moved into a combinator.
    pub fn counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

impl Constraint for ProbeConstraint {
    fn display_name(&self) -> &str {
        self.name
    }

    fn description(&self) -> String {
        format!("probe {}", self.name)
    }

    fn evaluate<'a>(&'a self, actual: &'a ActualValue) -> ConstraintResult<'a> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.status {
            ConstraintStatus::Error => ConstraintResult::error(
                self,
                actual,
                EvaluationFault::Custom("probe fault".to_string()),
            ),
            status => ConstraintResult::with_status(self, actual, status),
        }
    }
}

/// Reads a probe counter.
pub fn calls(counter: &Arc<AtomicUsize>) -> usize {
    counter.load(Ordering::SeqCst)
}
