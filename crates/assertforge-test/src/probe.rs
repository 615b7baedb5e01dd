//! Probe constraints for observing evaluation order.
//!
//! Combinators promise to skip operands once the outcome is decided. These
//! probes make that observable: each one shares its call counter through an
//! `Arc`, so a test can keep a handle after moving the probe into a tree.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use assertforge_core::{ActualValue, Constraint, ConstraintResult, ConstraintStatus, EvaluationFault};

/// Shared evaluation counter.
#[derive(Debug, Clone, Default)]
pub struct CallCounter(Arc<AtomicUsize>);

impl CallCounter {
    /// Returns how many evaluations were recorded.
    pub fn get(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }

    fn record(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

/// A constraint with a fixed verdict that counts its evaluations.
///
/// # Examples
///
/// ```
/// use assertforge_core::{ActualValue, Constraint, ConstraintExt};
/// use assertforge_test::ProbeConstraint;
///
/// let left = ProbeConstraint::failing("left");
/// let right = ProbeConstraint::succeeding("right");
/// let right_calls = right.counter();
///
/// let both = left.and(right);
/// assert!(!both.evaluate(&ActualValue::Null).is_success());
/// assert_eq!(right_calls.get(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct ProbeConstraint {
    name: &'static str,
    status: ConstraintStatus,
    calls: CallCounter,
}

impl ProbeConstraint {
    /// Creates a probe that always reports `status`.
    ///
    /// An `Error` probe carries a `Custom("probe fault")` fault.
    pub fn new(name: &'static str, status: ConstraintStatus) -> Self {
        Self {
            name,
            status,
            calls: CallCounter::default(),
        }
    }

    /// Creates a probe that always succeeds.
    pub fn succeeding(name: &'static str) -> Self {
        Self::new(name, ConstraintStatus::Success)
    }

    /// Creates a probe that always fails.
    pub fn failing(name: &'static str) -> Self {
        Self::new(name, ConstraintStatus::Failure)
    }

    /// Creates a probe that always reports an evaluation fault.
    pub fn erroring(name: &'static str) -> Self {
        Self::new(name, ConstraintStatus::Error)
    }

    /// Returns a handle to this probe's counter.
    pub fn counter(&self) -> CallCounter {
        self.calls.clone()
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
        self.calls.record();
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

/// Wraps a real constraint and counts its evaluations.
///
/// Results are the wrapped constraint's own, so rendering is unchanged.
#[derive(Debug)]
pub struct CountingConstraint {
    inner: Box<dyn Constraint>,
    calls: CallCounter,
}

impl CountingConstraint {
    /// Wraps `inner`.
    pub fn wrap<C: Constraint + 'static>(inner: C) -> Self {
        Self {
            inner: Box::new(inner),
            calls: CallCounter::default(),
        }
    }

    /// Returns a handle to this constraint's counter.
    pub fn counter(&self) -> CallCounter {
        self.calls.clone()
    }
}

impl Constraint for CountingConstraint {
    fn display_name(&self) -> &str {
        self.inner.display_name()
    }

    fn description(&self) -> String {
        self.inner.description()
    }

    fn evaluate<'a>(&'a self, actual: &'a ActualValue) -> ConstraintResult<'a> {
        self.calls.record();
        self.inner.evaluate(actual)
    }
}
